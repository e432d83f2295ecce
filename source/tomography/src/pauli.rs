// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use nalgebra::{Matrix2, Matrix4};
use num_complex::Complex64;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// A single-qubit Pauli operator, used both as a measurement basis and as
/// an element of the operator basis the density matrix is expanded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PauliLabel {
    I,
    X,
    Y,
    Z,
}

impl PauliLabel {
    pub const ALL: [Self; 4] = [Self::I, Self::X, Self::Y, Self::Z];

    /// The labels that require a measurement: the identity expectation is
    /// always 1.
    pub const MEASURED: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Position of this label in [`PauliLabel::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::I
    }

    #[must_use]
    pub fn matrix(self) -> Matrix2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        match self {
            Self::I => Matrix2::new(one, zero, zero, one),
            Self::X => Matrix2::new(zero, one, one, zero),
            Self::Y => Matrix2::new(zero, -i, i, zero),
            Self::Z => Matrix2::new(one, zero, zero, -one),
        }
    }
}

impl Display for PauliLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, Diagnostic, Error, PartialEq, Eq)]
#[error("`{0}` is not a Pauli label, expected one of I, X, Y, Z")]
#[diagnostic(code("Qst.Tomography.PauliLabel"))]
pub struct ParsePauliLabelError(String);

impl FromStr for PauliLabel {
    type Err = ParsePauliLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" | "i" => Ok(Self::I),
            "X" | "x" => Ok(Self::X),
            "Y" | "y" => Ok(Self::Y),
            "Z" | "z" => Ok(Self::Z),
            _ => Err(ParsePauliLabelError(s.to_string())),
        }
    }
}

/// The Kronecker product `a ⊗ b`; `a` acts on the more significant index.
#[must_use]
pub fn kron(a: &Matrix2<Complex64>, b: &Matrix2<Complex64>) -> Matrix4<Complex64> {
    Matrix4::from_fn(|row, col| a[(row / 2, col / 2)] * b[(row % 2, col % 2)])
}

/// The two-qubit Pauli operator `a ⊗ b`.
#[must_use]
pub fn pauli_product(a: PauliLabel, b: PauliLabel) -> Matrix4<Complex64> {
    kron(&a.matrix(), &b.matrix())
}
