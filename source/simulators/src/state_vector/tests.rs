// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::StateVector;
use nalgebra::{Matrix2, Matrix4};
use num_complex::Complex64;
use rand::{SeedableRng, rngs::StdRng};

fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

fn hadamard() -> Matrix2<Complex64> {
    let f = c(0.5_f64.sqrt());
    Matrix2::new(f, f, f, -f)
}

fn not() -> Matrix2<Complex64> {
    Matrix2::new(c(0.0), c(1.0), c(1.0), c(0.0))
}

fn cx() -> Matrix4<Complex64> {
    let (o, l) = (c(0.0), c(1.0));
    Matrix4::new(
        l, o, o, o, //
        o, o, o, l, //
        o, o, l, o, //
        o, l, o, o,
    )
}

#[test]
fn starts_in_all_zero_state() {
    let state = StateVector::new(2);
    assert_eq!(state.amplitudes().len(), 4);
    assert_eq!(state.amplitudes()[0], c(1.0));
    assert!(state.amplitudes()[1..].iter().all(|a| a.norm() == 0.0));
}

#[test]
fn single_qubit_gate_targets_its_bit() {
    let mut state = StateVector::new(3);
    state.apply_1q(&not(), 2);
    assert_eq!(state.amplitudes()[0b100], c(1.0));
    assert!((state.probability_one(2) - 1.0).abs() < 1e-12);
    assert!(state.probability_one(0).abs() < 1e-12);
}

#[test]
fn first_operand_is_the_control_of_cx() {
    let mut state = StateVector::new(2);
    state.apply_1q(&not(), 1);
    state.apply_2q(&cx(), 1, 0);
    assert_eq!(state.amplitudes()[0b11], c(1.0));

    let mut state = StateVector::new(2);
    state.apply_1q(&not(), 1);
    state.apply_2q(&cx(), 0, 1);
    assert_eq!(state.amplitudes()[0b10], c(1.0));
}

#[test]
fn bell_pair_has_correlated_measurements() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..64 {
        let mut state = StateVector::new(2);
        state.apply_1q(&hadamard(), 0);
        state.apply_2q(&cx(), 0, 1);
        assert!((state.probability_one(0) - 0.5).abs() < 1e-12);
        let first = state.measure(0, &mut rng);
        let second = state.measure(1, &mut rng);
        assert_eq!(first, second);
    }
}

#[test]
fn collapse_renormalizes() {
    let mut state = StateVector::new(1);
    state.apply_1q(&hadamard(), 0);
    state.collapse(0, true);
    assert!((state.amplitudes()[1].norm() - 1.0).abs() < 1e-12);
    assert!(state.amplitudes()[0].norm() < 1e-12);
}

#[test]
fn kraus_branch_with_zero_weight_is_never_chosen() {
    // Amplitude damping with gamma = 1 on |0>: the decay branch has zero weight.
    let k0 = Matrix2::new(c(1.0), c(0.0), c(0.0), c(0.0));
    let k1 = Matrix2::new(c(0.0), c(1.0), c(0.0), c(0.0));
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..32 {
        let mut state = StateVector::new(1);
        assert_eq!(state.apply_kraus(&[k0, k1], 0, &mut rng), 0);
        assert_eq!(state.amplitudes()[0], c(1.0));
    }
}

#[test]
fn full_damping_resets_excited_state() {
    let k0 = Matrix2::new(c(1.0), c(0.0), c(0.0), c(0.0));
    let k1 = Matrix2::new(c(0.0), c(1.0), c(0.0), c(0.0));
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = StateVector::new(1);
    state.apply_1q(&not(), 0);
    assert_eq!(state.apply_kraus(&[k0, k1], 0, &mut rng), 1);
    assert!((state.amplitudes()[0].norm() - 1.0).abs() < 1e-12);
}
