// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub mod noise;

#[cfg(test)]
mod tests;

use crate::{
    MeasurementResult, QubitID, Simulator,
    noise_config::{CumulativeNoiseConfig, GateClass, Relaxation},
    state_vector::StateVector,
};
use core::f64;
use nalgebra::{Matrix2, Matrix4};
use noise::{Fault, PauliFault, amplitude_damping, phase_damping};
use num_complex::Complex64;
use rand::{SeedableRng as _, rngs::StdRng};
use std::sync::{Arc, LazyLock};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

static X: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| Matrix2::new(ZERO, ONE, ONE, ZERO));

static Y: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| Matrix2::new(ZERO, -I, I, ZERO));

static Z: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| Matrix2::new(ONE, ZERO, ZERO, -ONE));

static H: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    let f = Complex64::new(0.5_f64.sqrt(), 0.0);
    Matrix2::new(f, f, f, -f)
});

static S: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| Matrix2::new(ONE, ZERO, ZERO, I));

static S_ADJ: LazyLock<Matrix2<Complex64>> =
    LazyLock::new(|| Matrix2::new(ONE, ZERO, ZERO, -I));

static T: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    Matrix2::new(ONE, ZERO, ZERO, (I * f64::consts::FRAC_PI_4).exp())
});

static T_ADJ: LazyLock<Matrix2<Complex64>> = LazyLock::new(|| {
    Matrix2::new(ONE, ZERO, ZERO, (-I * f64::consts::FRAC_PI_4).exp())
});

static CX: LazyLock<Matrix4<Complex64>> = LazyLock::new(|| {
    Matrix4::new(
        ONE, ZERO, ZERO, ZERO, //
        ZERO, ZERO, ZERO, ONE, //
        ZERO, ZERO, ONE, ZERO, //
        ZERO, ONE, ZERO, ZERO,
    )
});

static CZ: LazyLock<Matrix4<Complex64>> = LazyLock::new(|| {
    Matrix4::new(
        ONE, ZERO, ZERO, ZERO, //
        ZERO, ONE, ZERO, ZERO, //
        ZERO, ZERO, ONE, ZERO, //
        ZERO, ZERO, ZERO, -ONE,
    )
});

static SWAP: LazyLock<Matrix4<Complex64>> = LazyLock::new(|| {
    Matrix4::new(
        ONE, ZERO, ZERO, ZERO, //
        ZERO, ZERO, ONE, ZERO, //
        ZERO, ONE, ZERO, ZERO, //
        ZERO, ZERO, ZERO, ONE,
    )
});

/// A noiseless state-vector simulator.
pub struct NoiselessSimulator {
    /// The current state of the simulation.
    state: StateVector,
    /// Random number generator used to sample measurement outcomes.
    rng: StdRng,
    /// Measurement results.
    measurements: Vec<MeasurementResult>,
}

impl NoiselessSimulator {
    /// The amplitudes of the current state. Qubit `q` is bit `q` of the index.
    #[must_use]
    pub fn amplitudes(&self) -> &[Complex64] {
        self.state.amplitudes()
    }
}

impl Simulator for NoiselessSimulator {
    type Noise = ();

    fn new(num_qubits: usize, num_results: usize, seed: u32, _noise: Self::Noise) -> Self {
        Self {
            state: StateVector::new(num_qubits),
            rng: StdRng::seed_from_u64(u64::from(seed)),
            measurements: vec![MeasurementResult::Zero; num_results],
        }
    }

    fn x(&mut self, target: QubitID) {
        self.state.apply_1q(&X, target);
    }

    fn y(&mut self, target: QubitID) {
        self.state.apply_1q(&Y, target);
    }

    fn z(&mut self, target: QubitID) {
        self.state.apply_1q(&Z, target);
    }

    fn h(&mut self, target: QubitID) {
        self.state.apply_1q(&H, target);
    }

    fn s(&mut self, target: QubitID) {
        self.state.apply_1q(&S, target);
    }

    fn s_adj(&mut self, target: QubitID) {
        self.state.apply_1q(&S_ADJ, target);
    }

    fn t(&mut self, target: QubitID) {
        self.state.apply_1q(&T, target);
    }

    fn t_adj(&mut self, target: QubitID) {
        self.state.apply_1q(&T_ADJ, target);
    }

    fn cx(&mut self, control: QubitID, target: QubitID) {
        self.state.apply_2q(&CX, control, target);
    }

    fn cz(&mut self, control: QubitID, target: QubitID) {
        self.state.apply_2q(&CZ, control, target);
    }

    fn swap(&mut self, q1: QubitID, q2: QubitID) {
        self.state.apply_2q(&SWAP, q1, q2);
    }

    fn mz(&mut self, target: QubitID, result_id: QubitID) {
        self.measurements[result_id] = if self.state.measure(target, &mut self.rng) {
            MeasurementResult::One
        } else {
            MeasurementResult::Zero
        };
    }

    fn measurements(&self) -> &[MeasurementResult] {
        &self.measurements
    }

    fn take_measurements(&mut self) -> Vec<MeasurementResult> {
        std::mem::take(&mut self.measurements)
    }
}

/// A noisy state-vector simulator.
///
/// Each shot follows one quantum trajectory: Pauli faults and relaxation
/// branches are sampled after every noisy gate, and readout faults are
/// sampled before every measurement.
pub struct NoisySimulator {
    /// The noise configuration for the simulation.
    noise_config: Arc<CumulativeNoiseConfig>,
    /// Random number generator used to sample faults and outcomes.
    rng: StdRng,
    /// The current state of the simulation.
    state: StateVector,
    /// Measurement results.
    measurements: Vec<MeasurementResult>,
}

impl NoisySimulator {
    fn apply_1q_gate(&mut self, gate: GateClass, op: &Matrix2<Complex64>, target: QubitID) {
        self.state.apply_1q(op, target);
        self.apply_gate_noise(gate, &[target]);
    }

    fn apply_2q_gate(
        &mut self,
        gate: GateClass,
        op: &Matrix4<Complex64>,
        q1: QubitID,
        q2: QubitID,
    ) {
        self.state.apply_2q(op, q1, q2);
        self.apply_gate_noise(gate, &[q1, q2]);
    }

    fn apply_gate_noise(&mut self, gate: GateClass, targets: &[QubitID]) {
        let noise_config = Arc::clone(&self.noise_config);
        let Some(noise) = noise_config.gate(gate) else {
            return;
        };
        let fault = noise.gen_pauli_fault(&mut self.rng);
        self.apply_fault(&fault, targets);
        if !noise.relaxation.is_none() {
            for target in targets {
                self.apply_relaxation(noise.relaxation, *target);
            }
        }
    }

    fn apply_fault(&mut self, fault: &Fault, targets: &[QubitID]) {
        match fault {
            Fault::None => (),
            Fault::Pauli(pauli_string) => {
                for (pauli, target) in pauli_string.iter().zip(targets) {
                    match pauli {
                        PauliFault::I => (),
                        PauliFault::X => self.state.apply_1q(&X, *target),
                        PauliFault::Y => self.state.apply_1q(&Y, *target),
                        PauliFault::Z => self.state.apply_1q(&Z, *target),
                    }
                }
            }
        }
    }

    fn apply_relaxation(&mut self, relaxation: Relaxation, target: QubitID) {
        if relaxation.amplitude_damping > 0.0 {
            let kraus = amplitude_damping(relaxation.amplitude_damping);
            self.state.apply_kraus(&kraus, target, &mut self.rng);
        }
        if relaxation.dephasing > 0.0 {
            let kraus = phase_damping(relaxation.dephasing);
            self.state.apply_kraus(&kraus, target, &mut self.rng);
        }
    }
}

impl Simulator for NoisySimulator {
    type Noise = Arc<CumulativeNoiseConfig>;

    fn new(num_qubits: usize, num_results: usize, seed: u32, noise_config: Self::Noise) -> Self {
        Self {
            noise_config,
            rng: StdRng::seed_from_u64(u64::from(seed)),
            state: StateVector::new(num_qubits),
            measurements: vec![MeasurementResult::Zero; num_results],
        }
    }

    fn x(&mut self, target: QubitID) {
        self.apply_1q_gate(GateClass::X, &X, target);
    }

    fn y(&mut self, target: QubitID) {
        self.apply_1q_gate(GateClass::Y, &Y, target);
    }

    fn z(&mut self, target: QubitID) {
        self.apply_1q_gate(GateClass::Z, &Z, target);
    }

    fn h(&mut self, target: QubitID) {
        self.apply_1q_gate(GateClass::H, &H, target);
    }

    fn s(&mut self, target: QubitID) {
        self.apply_1q_gate(GateClass::S, &S, target);
    }

    fn s_adj(&mut self, target: QubitID) {
        self.apply_1q_gate(GateClass::SAdj, &S_ADJ, target);
    }

    fn t(&mut self, target: QubitID) {
        self.apply_1q_gate(GateClass::T, &T, target);
    }

    fn t_adj(&mut self, target: QubitID) {
        self.apply_1q_gate(GateClass::TAdj, &T_ADJ, target);
    }

    fn cx(&mut self, control: QubitID, target: QubitID) {
        self.apply_2q_gate(GateClass::CX, &CX, control, target);
    }

    fn cz(&mut self, control: QubitID, target: QubitID) {
        self.apply_2q_gate(GateClass::CZ, &CZ, control, target);
    }

    fn swap(&mut self, q1: QubitID, q2: QubitID) {
        self.apply_2q_gate(GateClass::Swap, &SWAP, q1, q2);
    }

    fn mz(&mut self, target: QubitID, result_id: QubitID) {
        let fault = self
            .noise_config
            .measurement()
            .gen_pauli_fault(&mut self.rng);
        self.apply_fault(&fault, &[target]);
        self.measurements[result_id] = if self.state.measure(target, &mut self.rng) {
            MeasurementResult::One
        } else {
            MeasurementResult::Zero
        };
    }

    fn measurements(&self) -> &[MeasurementResult] {
        &self.measurements
    }

    fn take_measurements(&mut self) -> Vec<MeasurementResult> {
        std::mem::take(&mut self.measurements)
    }
}
