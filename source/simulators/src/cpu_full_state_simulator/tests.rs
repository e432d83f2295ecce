// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{
    NoiselessSimulator, NoisySimulator,
    noise::{Fault, PauliFault, decode_pauli},
};
use crate::{
    MeasurementResult, Simulator,
    noise_config::{ChannelNoise, CumulativeNoiseConfig, GateClass, NoiseConfig, Relaxation},
};
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;

fn measure_all<S: Simulator>(mut sim: S, num_qubits: usize) -> Vec<MeasurementResult> {
    for q in 0..num_qubits {
        sim.mz(q, q);
    }
    sim.take_measurements()
}

fn noisy(config: NoiseConfig) -> Arc<CumulativeNoiseConfig> {
    Arc::new(CumulativeNoiseConfig::try_from(config).expect("config should be valid"))
}

#[test]
fn x_gate_flips_qubit() {
    let mut sim = NoiselessSimulator::new(1, 1, 0, ());
    sim.x(0);
    assert_eq!(measure_all(sim, 1), vec![MeasurementResult::One]);
}

#[test]
fn unmeasured_results_default_to_zero() {
    let mut sim = NoiselessSimulator::new(1, 3, 0, ());
    sim.x(0);
    sim.mz(0, 1);
    assert_eq!(
        sim.measurements(),
        &[
            MeasurementResult::Zero,
            MeasurementResult::One,
            MeasurementResult::Zero
        ]
    );
}

#[test]
fn y_basis_rotation_reads_plus_i_as_zero() {
    for seed in 0..16 {
        let mut sim = NoiselessSimulator::new(1, 1, seed, ());
        sim.h(0);
        sim.s(0);
        sim.s_adj(0);
        sim.h(0);
        assert_eq!(measure_all(sim, 1), vec![MeasurementResult::Zero]);
    }
}

#[test]
fn t_squared_eq_s() {
    let mut with_t = NoiselessSimulator::new(1, 0, 0, ());
    with_t.h(0);
    with_t.t(0);
    with_t.t(0);
    let mut with_s = NoiselessSimulator::new(1, 0, 0, ());
    with_s.h(0);
    with_s.s(0);
    for (a, b) in with_t.amplitudes().iter().zip(with_s.amplitudes()) {
        assert!((a - b).norm() < 1e-12);
    }

    with_t.t_adj(0);
    with_t.t_adj(0);
    with_s.s_adj(0);
    for (a, b) in with_t.amplitudes().iter().zip(with_s.amplitudes()) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn cx_on_one_control_flips_target() {
    let mut sim = NoiselessSimulator::new(2, 2, 0, ());
    sim.x(0);
    sim.cx(0, 1);
    assert_eq!(
        measure_all(sim, 2),
        vec![MeasurementResult::One, MeasurementResult::One]
    );
}

#[test]
fn swap_exchanges_qubits() {
    let mut sim = NoiselessSimulator::new(3, 3, 0, ());
    sim.x(0);
    sim.swap(0, 2);
    assert_eq!(
        measure_all(sim, 3),
        vec![
            MeasurementResult::Zero,
            MeasurementResult::Zero,
            MeasurementResult::One
        ]
    );
}

#[test]
fn cz_adds_phase_on_one_one() {
    let mut sim = NoiselessSimulator::new(2, 0, 0, ());
    sim.x(0);
    sim.x(1);
    sim.cz(0, 1);
    assert!((sim.amplitudes()[3].re + 1.0).abs() < 1e-12);
}

#[test]
fn singlet_preparation_is_anticorrelated() {
    for seed in 0..32 {
        let mut sim = NoiselessSimulator::new(2, 2, seed, ());
        sim.x(1);
        sim.h(0);
        sim.cx(0, 1);
        sim.z(1);
        let results = measure_all(sim, 2);
        assert_ne!(results[0], results[1]);
    }
}

#[test]
fn noiseless_config_matches_noiseless_simulator() {
    let noise = noisy(NoiseConfig::noiseless());
    for seed in 0..16 {
        let mut sim = NoisySimulator::new(2, 2, seed, noise.clone());
        sim.x(0);
        sim.cx(0, 1);
        assert_eq!(
            measure_all(sim, 2),
            vec![MeasurementResult::One, MeasurementResult::One]
        );
    }
}

#[test]
fn full_readout_depolarization_randomizes_outcomes() {
    let noise = noisy(NoiseConfig {
        p_meas: 1.0,
        ..NoiseConfig::default()
    });
    let ones = (0..2000)
        .filter(|seed| {
            let mut sim = NoisySimulator::new(1, 1, *seed, noise.clone());
            sim.mz(0, 0);
            sim.measurements()[0] == MeasurementResult::One
        })
        .count();
    // X and Y faults flip the outcome: probability 1/2.
    assert!((900..1100).contains(&ones), "ones = {ones}");
}

#[test]
fn gates_outside_the_noisy_classes_stay_ideal() {
    let noise = noisy(NoiseConfig {
        p1: 1.0,
        single_qubit_gates: vec![GateClass::H],
        ..NoiseConfig::default()
    });
    for seed in 0..64 {
        let mut sim = NoisySimulator::new(1, 1, seed, noise.clone());
        sim.x(0);
        assert_eq!(measure_all(sim, 1), vec![MeasurementResult::One]);
    }
}

#[test]
fn strong_relaxation_decays_excited_state() {
    let noise = noisy(NoiseConfig {
        t1: 1.0,
        t2: 1.0,
        gate_time_1q: 50.0,
        single_qubit_gates: vec![GateClass::X],
        ..NoiseConfig::default()
    });
    for seed in 0..64 {
        let mut sim = NoisySimulator::new(1, 1, seed, noise.clone());
        sim.x(0);
        assert_eq!(measure_all(sim, 1), vec![MeasurementResult::Zero]);
    }
}

#[test]
fn decode_pauli_uses_most_significant_digit_for_first_operand() {
    use PauliFault::{I, X, Y, Z};
    assert_eq!(decode_pauli(0b01, 1), vec![X]);
    assert_eq!(decode_pauli(0b11, 1), vec![Z]);
    assert_eq!(decode_pauli(0b00_10, 2), vec![I, Y]);
    assert_eq!(decode_pauli(0b01_00, 2), vec![X, I]);
    assert_eq!(decode_pauli(0b11_01, 2), vec![Z, X]);
}

#[test]
fn pauli_fault_frequencies_follow_probability() {
    let channel = ChannelNoise::depolarizing(1, 0.3, Relaxation::NONE);
    let mut rng = StdRng::seed_from_u64(42);
    let mut counts = [0usize; 4];
    for _ in 0..40_000 {
        match channel.gen_pauli_fault(&mut rng) {
            Fault::None => counts[0] += 1,
            Fault::Pauli(paulis) => match paulis[0] {
                PauliFault::I => panic!("identity should never be sampled"),
                PauliFault::X => counts[1] += 1,
                PauliFault::Y => counts[2] += 1,
                PauliFault::Z => counts[3] += 1,
            },
        }
    }
    // Each Pauli with probability 0.075, no fault with probability 0.775.
    for count in &counts[1..] {
        assert!((2600..3400).contains(count), "counts = {counts:?}");
    }
    assert!((30_000..32_000).contains(&counts[0]), "counts = {counts:?}");
}

#[test]
fn noiseless_channel_never_faults() {
    let channel = ChannelNoise::depolarizing(2, 0.0, Relaxation::NONE);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        assert_eq!(channel.gen_pauli_fault(&mut rng), Fault::None);
    }
}
