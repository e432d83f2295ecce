// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Noise-free reference states computed directly from simulated amplitudes.


use crate::{Error, basis::validate_targets};
use nalgebra::{DMatrix, Matrix2, Matrix4};
use num_complex::Complex64;
use qst_simulators::{
    QubitID, Simulator, circuit::Circuit, cpu_full_state_simulator::NoiselessSimulator,
    oracle::apply_operations,
};

/// Seed for the measurements a preparation may contain.
const SEED: u32 = 0;

/// The reduced density matrix of `targets` after `prepare`, obtained by
/// tracing out every other qubit. The first target is the most significant
/// index of the result.
///
/// Measurements inside `prepare` collapse the state with a fixed seed.
pub fn reduced_density_matrix(
    prepare: &Circuit,
    targets: &[QubitID],
) -> Result<DMatrix<Complex64>, Error> {
    prepare.validate().map_err(Error::InvalidPreparation)?;
    validate_targets(prepare, targets.iter().copied())?;

    let mut sim =
        NoiselessSimulator::new(prepare.num_qubits(), prepare.num_results(), SEED, ());
    apply_operations(prepare.operations(), &mut sim);
    let amplitudes = sim.amplitudes();

    let k = targets.len();
    let dim = 1 << k;
    // Amplitude index bits selected by each local index.
    let spread: Vec<usize> = (0..dim)
        .map(|local| {
            targets
                .iter()
                .enumerate()
                .filter(|(position, _)| (local >> (k - 1 - position)) & 1 == 1)
                .map(|(_, target)| 1 << target)
                .sum()
        })
        .collect();
    let mask = spread[dim - 1];

    let mut rho = DMatrix::zeros(dim, dim);
    for base in (0..amplitudes.len()).filter(|base| base & mask == 0) {
        for (row, row_bits) in spread.iter().enumerate() {
            let a = amplitudes[base | row_bits];
            for (col, col_bits) in spread.iter().enumerate() {
                rho[(row, col)] += a * amplitudes[base | col_bits].conj();
            }
        }
    }
    Ok(rho)
}

/// The exact state of a single qubit after `prepare`.
pub fn single_qubit_density_matrix(
    prepare: &Circuit,
    target: QubitID,
) -> Result<Matrix2<Complex64>, Error> {
    let rho = reduced_density_matrix(prepare, &[target])?;
    Ok(Matrix2::from_fn(|row, col| rho[(row, col)]))
}

/// The exact state of a qubit pair after `prepare`, `target_a` being the
/// more significant factor.
pub fn two_qubit_density_matrix(
    prepare: &Circuit,
    target_a: QubitID,
    target_b: QubitID,
) -> Result<Matrix4<Complex64>, Error> {
    let rho = reduced_density_matrix(prepare, &[target_a, target_b])?;
    Ok(Matrix4::from_fn(|row, col| rho[(row, col)]))
}
