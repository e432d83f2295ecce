// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::pauli::{PauliLabel, pauli_product};
use nalgebra::{Matrix2, Matrix4};
use num_complex::Complex64;

/// ⟨X⟩, ⟨Y⟩ and ⟨Z⟩ of a single qubit, with ⟨I⟩ pinned to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleQubitExpectations {
    values: [f64; 4],
}

impl Default for SingleQubitExpectations {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl SingleQubitExpectations {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            values: [1.0, x, y, z],
        }
    }

    #[must_use]
    pub fn get(&self, label: PauliLabel) -> f64 {
        self.values[label.index()]
    }

    /// Sets the expectation of a measured label.
    ///
    /// # Panics
    ///
    /// Panics if `label` is the identity.
    pub fn set(&mut self, label: PauliLabel, value: f64) {
        assert!(
            !label.is_identity(),
            "the identity expectation is fixed at 1"
        );
        self.values[label.index()] = value;
    }

    /// All four expectations in [`PauliLabel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PauliLabel, f64)> + '_ {
        PauliLabel::ALL
            .into_iter()
            .map(|label| (label, self.get(label)))
    }

    /// ρ = ½ (I + ⟨X⟩X + ⟨Y⟩Y + ⟨Z⟩Z).
    #[must_use]
    pub fn density_matrix(&self) -> Matrix2<Complex64> {
        self.iter()
            .fold(Matrix2::zeros(), |rho, (label, value)| {
                rho + label.matrix() * Complex64::new(value, 0.0)
            })
            * Complex64::new(0.5, 0.0)
    }

    /// The exact expectations Re Tr(ρP) of a known density matrix.
    #[must_use]
    pub fn from_density_matrix(rho: &Matrix2<Complex64>) -> Self {
        let [x, y, z] = PauliLabel::MEASURED.map(|label| (rho * label.matrix()).trace().re);
        Self::new(x, y, z)
    }
}

/// The sixteen correlators ⟨P_a ⊗ P_b⟩ of a qubit pair, with ⟨I ⊗ I⟩
/// pinned to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoQubitExpectations {
    values: [[f64; 4]; 4],
}

impl Default for TwoQubitExpectations {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoQubitExpectations {
    /// The maximally mixed state: every correlator but ⟨I ⊗ I⟩ is zero.
    #[must_use]
    pub fn new() -> Self {
        let mut values = [[0.0; 4]; 4];
        values[0][0] = 1.0;
        Self { values }
    }

    /// Builds every correlator from `f`. The value for `(I, I)` is ignored.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(PauliLabel, PauliLabel) -> f64) -> Self {
        let mut expectations = Self::new();
        for (a, b) in settings() {
            expectations.set(a, b, f(a, b));
        }
        expectations
    }

    #[must_use]
    pub fn get(&self, a: PauliLabel, b: PauliLabel) -> f64 {
        self.values[a.index()][b.index()]
    }

    /// Sets the correlator of a measured setting.
    ///
    /// # Panics
    ///
    /// Panics if both labels are the identity.
    pub fn set(&mut self, a: PauliLabel, b: PauliLabel, value: f64) {
        assert!(
            !(a.is_identity() && b.is_identity()),
            "the identity expectation is fixed at 1"
        );
        self.values[a.index()][b.index()] = value;
    }

    /// All sixteen correlators, the first label varying slowest.
    pub fn iter(&self) -> impl Iterator<Item = (PauliLabel, PauliLabel, f64)> + '_ {
        PauliLabel::ALL.into_iter().flat_map(move |a| {
            PauliLabel::ALL
                .into_iter()
                .map(move |b| (a, b, self.get(a, b)))
        })
    }

    /// ρ = ¼ Σ ⟨P_a ⊗ P_b⟩ P_a ⊗ P_b.
    #[must_use]
    pub fn density_matrix(&self) -> Matrix4<Complex64> {
        self.iter()
            .fold(Matrix4::zeros(), |rho, (a, b, value)| {
                rho + pauli_product(a, b) * Complex64::new(value, 0.0)
            })
            * Complex64::new(0.25, 0.0)
    }

    #[must_use]
    pub fn from_density_matrix(rho: &Matrix4<Complex64>) -> Self {
        Self::from_fn(|a, b| (rho * pauli_product(a, b)).trace().re)
    }
}

/// The fifteen measured two-qubit settings, skipping `(I, I)`.
pub(crate) fn settings() -> impl Iterator<Item = (PauliLabel, PauliLabel)> {
    PauliLabel::ALL
        .into_iter()
        .flat_map(|a| PauliLabel::ALL.into_iter().map(move |b| (a, b)))
        .filter(|(a, b)| !(a.is_identity() && b.is_identity()))
}
