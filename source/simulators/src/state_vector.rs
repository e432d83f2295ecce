// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use crate::QubitID;
use nalgebra::{Matrix2, Matrix4};
use num_complex::Complex64;
use rand::Rng;

/// A dense state vector over `n` qubits.
///
/// Qubit `q` corresponds to bit `q` of the amplitude index. Two-qubit
/// operations act on the local index `b(q0) + 2 * b(q1)`, so the first
/// operand is the least significant bit of the 4x4 matrix basis.
#[derive(Clone, Debug)]
pub(crate) struct StateVector {
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Creates the all-zero computational basis state.
    ///
    /// Callers check the width against [`crate::circuit::MAX_QUBITS`].
    pub fn new(num_qubits: usize) -> Self {
        debug_assert!(
            num_qubits <= crate::circuit::MAX_QUBITS,
            "{num_qubits} qubits exceed the simulator limit"
        );
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self { amplitudes }
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn apply_1q(&mut self, op: &Matrix2<Complex64>, target: QubitID) {
        let mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a0 = self.amplitudes[i];
                let a1 = self.amplitudes[j];
                self.amplitudes[i] = op[(0, 0)] * a0 + op[(0, 1)] * a1;
                self.amplitudes[j] = op[(1, 0)] * a0 + op[(1, 1)] * a1;
            }
        }
    }

    pub fn apply_2q(&mut self, op: &Matrix4<Complex64>, q0: QubitID, q1: QubitID) {
        debug_assert_ne!(q0, q1, "two-qubit operands should be distinct");
        let m0 = 1 << q0;
        let m1 = 1 << q1;
        for base in 0..self.amplitudes.len() {
            if base & (m0 | m1) != 0 {
                continue;
            }
            let indices = [base, base | m0, base | m1, base | m0 | m1];
            let input = indices.map(|i| self.amplitudes[i]);
            for (row, &i) in indices.iter().enumerate() {
                self.amplitudes[i] = (0..4).map(|col| op[(row, col)] * input[col]).sum();
            }
        }
    }

    /// The probability of measuring `target` in the one state.
    pub fn probability_one(&self, target: QubitID) -> f64 {
        let mask = 1 << target;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, a)| a.norm_sqr())
            .sum()
    }

    /// Projects `target` onto `outcome` and renormalizes.
    pub fn collapse(&mut self, target: QubitID, outcome: bool) {
        let mask = 1 << target;
        for (i, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if (i & mask != 0) != outcome {
                *amplitude = Complex64::new(0.0, 0.0);
            }
        }
        self.normalize();
    }

    /// Samples a Z-basis measurement of `target`, collapsing the state.
    pub fn measure(&mut self, target: QubitID, rng: &mut impl Rng) -> bool {
        let p1 = self.probability_one(target);
        let sample: f64 = rng.gen_range(0.0..1.0);
        let outcome = sample < p1;
        self.collapse(target, outcome);
        outcome
    }

    /// Applies one branch of the channel `{ K_i }` on `target`, chosen with
    /// probability `||K_i ψ||²`, and returns the index of that branch.
    pub fn apply_kraus(
        &mut self,
        kraus: &[Matrix2<Complex64>],
        target: QubitID,
        rng: &mut impl Rng,
    ) -> usize {
        let branches: Vec<(Self, f64)> = kraus
            .iter()
            .map(|k| {
                let mut branch = self.clone();
                branch.apply_1q(k, target);
                let weight = branch.norm_sqr();
                (branch, weight)
            })
            .collect();

        let sample: f64 = rng.gen_range(0.0..1.0);
        let mut cumulative = 0.0;
        let mut chosen = None;
        for (index, (_, weight)) in branches.iter().enumerate() {
            cumulative += weight;
            if *weight > 0.0 && sample < cumulative {
                chosen = Some(index);
                break;
            }
        }
        // Rounding can leave the sample just above the accumulated weight.
        let chosen = chosen.unwrap_or_else(|| {
            branches
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.1.total_cmp(&b.1))
                .map_or(0, |(index, _)| index)
        });

        let (branch, _) = branches
            .into_iter()
            .nth(chosen)
            .expect("chosen branch should exist");
        *self = branch;
        self.normalize();
        chosen
    }

    fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    fn normalize(&mut self) {
        let norm = self.norm_sqr().sqrt();
        if norm > 0.0 {
            for amplitude in &mut self.amplitudes {
                *amplitude /= norm;
            }
        }
    }
}
