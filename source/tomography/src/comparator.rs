// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Distances between reconstructed density matrices and ideal states.
//!
//! Fidelity is the root fidelity `Tr √(√σ ρ √σ)`, which for a pure
//! reference `|ψ⟩` reduces to `√⟨ψ|ρ|ψ⟩`. Reconstructed matrices are only
//! approximately positive, so both metrics clamp their result to `[0, 1]`.


use nalgebra::{DMatrix, DVector, Matrix4, SymmetricEigen, Vector4};
use num_complex::Complex64;

/// The singlet (|01⟩ − |10⟩)/√2, the first qubit being the more
/// significant index.
#[must_use]
pub fn singlet_state() -> Vector4<Complex64> {
    let amplitude = Complex64::new(0.5_f64.sqrt(), 0.0);
    let zero = Complex64::new(0.0, 0.0);
    Vector4::new(zero, amplitude, -amplitude, zero)
}

#[must_use]
pub fn singlet_density_matrix() -> Matrix4<Complex64> {
    let psi = singlet_state();
    psi * psi.adjoint()
}

/// Fidelity of `rho` with the singlet.
#[must_use]
pub fn fidelity(rho: &Matrix4<Complex64>) -> f64 {
    IdealStateComparator::singlet().fidelity(&to_dynamic(rho))
}

/// Trace distance of `rho` from the singlet.
#[must_use]
pub fn trace_distance(rho: &Matrix4<Complex64>) -> f64 {
    IdealStateComparator::singlet().trace_distance(&to_dynamic(rho))
}

/// Root fidelity between two density matrices of equal dimension.
///
/// # Panics
///
/// Panics if the matrices are not square with the same dimension.
#[must_use]
pub fn state_fidelity(rho: &DMatrix<Complex64>, sigma: &DMatrix<Complex64>) -> f64 {
    assert_same_shape(rho, sigma);
    let sqrt_sigma = psd_sqrt(sigma);
    let product = &sqrt_sigma * rho * &sqrt_sigma;
    let value: f64 = hermitian_eigenvalues(&product)
        .iter()
        .map(|lambda| lambda.max(0.0).sqrt())
        .sum();
    value.clamp(0.0, 1.0)
}

/// Half the trace norm of `rho - sigma`.
///
/// # Panics
///
/// Panics if the matrices are not square with the same dimension.
#[must_use]
pub fn state_trace_distance(rho: &DMatrix<Complex64>, sigma: &DMatrix<Complex64>) -> f64 {
    assert_same_shape(rho, sigma);
    let value: f64 = hermitian_eigenvalues(&(rho - sigma))
        .iter()
        .map(|lambda| lambda.abs())
        .sum();
    (0.5 * value).clamp(0.0, 1.0)
}

/// Tr(ρ²).
#[must_use]
pub fn purity(rho: &DMatrix<Complex64>) -> f64 {
    (rho * rho).trace().re
}

/// Compares density matrices against a fixed pure reference state.
#[derive(Clone, Debug, PartialEq)]
pub struct IdealStateComparator {
    state: DVector<Complex64>,
    density_matrix: DMatrix<Complex64>,
}

impl IdealStateComparator {
    #[must_use]
    pub fn singlet() -> Self {
        Self::from_state_vector(DVector::from_column_slice(singlet_state().as_slice()))
    }

    /// Normalizes `state` and uses it as the reference.
    ///
    /// # Panics
    ///
    /// Panics if `state` is the zero vector.
    #[must_use]
    pub fn from_state_vector(state: DVector<Complex64>) -> Self {
        let norm = state.norm();
        assert!(norm > 0.0, "reference state should not be the zero vector");
        let state = state.unscale(norm);
        let density_matrix = &state * state.adjoint();
        Self {
            state,
            density_matrix,
        }
    }

    #[must_use]
    pub fn state(&self) -> &DVector<Complex64> {
        &self.state
    }

    #[must_use]
    pub fn density_matrix(&self) -> &DMatrix<Complex64> {
        &self.density_matrix
    }

    /// √⟨ψ|ρ|ψ⟩.
    ///
    /// # Panics
    ///
    /// Panics if `rho` does not match the dimension of the reference.
    #[must_use]
    pub fn fidelity(&self, rho: &DMatrix<Complex64>) -> f64 {
        assert_same_shape(rho, &self.density_matrix);
        let overlap = (self.state.adjoint() * rho * &self.state)[(0, 0)].re;
        overlap.clamp(0.0, 1.0).sqrt()
    }

    /// # Panics
    ///
    /// Panics if `rho` does not match the dimension of the reference.
    #[must_use]
    pub fn trace_distance(&self, rho: &DMatrix<Complex64>) -> f64 {
        state_trace_distance(rho, &self.density_matrix)
    }
}

/// Copies a fixed-size 4×4 matrix into a dynamically sized one.
#[must_use]
pub fn to_dynamic(rho: &Matrix4<Complex64>) -> DMatrix<Complex64> {
    DMatrix::from_column_slice(4, 4, rho.as_slice())
}

fn assert_same_shape(rho: &DMatrix<Complex64>, sigma: &DMatrix<Complex64>) {
    assert!(
        rho.is_square() && rho.shape() == sigma.shape(),
        "density matrices should be square with equal dimensions, found {}x{} and {}x{}",
        rho.nrows(),
        rho.ncols(),
        sigma.nrows(),
        sigma.ncols()
    );
}

/// Eigenvalues of the Hermitian part of `m`.
fn hermitian_eigenvalues(m: &DMatrix<Complex64>) -> DVector<f64> {
    let hermitian = (m + m.adjoint()).unscale(2.0);
    SymmetricEigen::new(hermitian).eigenvalues
}

/// The positive semidefinite square root of the Hermitian part of `m`.
/// Negative eigenvalues are clipped to zero.
fn psd_sqrt(m: &DMatrix<Complex64>) -> DMatrix<Complex64> {
    let hermitian = (m + m.adjoint()).unscale(2.0);
    let eigen = SymmetricEigen::new(hermitian);
    let roots = eigen
        .eigenvalues
        .map(|lambda| Complex64::new(lambda.max(0.0).sqrt(), 0.0));
    &eigen.eigenvectors * DMatrix::from_diagonal(&roots) * eigen.eigenvectors.adjoint()
}
