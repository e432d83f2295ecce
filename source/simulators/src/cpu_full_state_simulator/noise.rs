// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::noise_config::ChannelNoise;
use nalgebra::Matrix2;
use num_complex::Complex64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauliFault {
    I,
    X,
    Y,
    Z,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Fault {
    /// No fault occurred.
    #[default]
    None,
    /// A Pauli fault, one entry per operand.
    Pauli(Vec<PauliFault>),
}

/// Decodes the `index`-th Pauli string over `qubits` qubits. Each operand
/// takes one base-4 digit, most significant first, with digits mapping
/// to `I, X, Y, Z`.
#[must_use]
pub fn decode_pauli(index: u64, qubits: u32) -> Vec<PauliFault> {
    const MAP: [PauliFault; 4] = [PauliFault::I, PauliFault::X, PauliFault::Y, PauliFault::Z];
    (0..qubits)
        .rev()
        .map(|digit| {
            let value = (index >> (2 * digit)) & 0b11;
            MAP[usize::try_from(value).expect("a base-4 digit should fit in usize")]
        })
        .collect()
}

impl ChannelNoise {
    /// Samples a float in the range [0, 1] and picks one of the
    /// non-identity Pauli strings, each with probability
    /// [`ChannelNoise::pauli_probability`].
    #[must_use]
    pub fn gen_pauli_fault(&self, rng: &mut impl rand::Rng) -> Fault {
        if self.pauli_probability == 0.0 {
            return Fault::None;
        }
        let sample: f64 = rng.gen_range(0.0..1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (sample / self.pauli_probability).floor() as u64 + 1;
        if index < 4u64.pow(self.qubits) {
            Fault::Pauli(decode_pauli(index, self.qubits))
        } else {
            Fault::None
        }
    }
}

/// Kraus operators of amplitude damping with decay probability `gamma`.
#[must_use]
pub fn amplitude_damping(gamma: f64) -> [Matrix2<Complex64>; 2] {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    [
        Matrix2::new(one, zero, zero, Complex64::new((1.0 - gamma).sqrt(), 0.0)),
        Matrix2::new(zero, Complex64::new(gamma.sqrt(), 0.0), zero, zero),
    ]
}

/// Kraus operators of pure dephasing with strength `lambda`.
#[must_use]
pub fn phase_damping(lambda: f64) -> [Matrix2<Complex64>; 2] {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    [
        Matrix2::new(one, zero, zero, Complex64::new((1.0 - lambda).sqrt(), 0.0)),
        Matrix2::new(zero, zero, zero, Complex64::new(lambda.sqrt(), 0.0)),
    ]
}
