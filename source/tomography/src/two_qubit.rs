// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    Error, Tomography,
    basis::validate_targets,
    expectation::{TwoQubitExpectations, settings},
    outcome::JointCounts,
};
use log::info;
use nalgebra::Matrix4;
use num_complex::Complex64;
use qst_simulators::{MeasurementOracle, QubitID, circuit::Circuit};

/// The reconstructed state of a qubit pair. Target A is the more significant
/// factor of the density matrix basis.
#[derive(Clone, Debug, PartialEq)]
pub struct TwoQubitEstimate {
    pub density_matrix: Matrix4<Complex64>,
    pub expectations: TwoQubitExpectations,
}

impl<O: MeasurementOracle> Tomography<O> {
    /// Estimates the joint state of `target_a` and `target_b` after
    /// `prepare` from `shots` shots in each of the fifteen non-trivial
    /// settings. Settings with an identity label marginalize over that
    /// target.
    pub fn estimate_state_2q(
        &self,
        prepare: &Circuit,
        target_a: QubitID,
        target_b: QubitID,
        shots: u32,
    ) -> Result<TwoQubitEstimate, Error> {
        prepare.validate().map_err(Error::InvalidPreparation)?;
        validate_targets(prepare, [target_a, target_b])?;

        let mut expectations = TwoQubitExpectations::new();
        for (a, b) in settings() {
            let setting = [(a, target_a), (b, target_b)];
            let counts = self.sample(prepare, &setting, shots)?;
            let bins = JointCounts::from_counts(&counts);
            self.check_total(&setting, bins.total())?;
            expectations.set(a, b, bins.expectation(a, b));
        }

        let density_matrix = expectations.density_matrix();
        info!(
            "reconstructed qubits ({target_a}, {target_b}) from {} settings of {shots} shots",
            settings().count()
        );
        Ok(TwoQubitEstimate {
            density_matrix,
            expectations,
        })
    }
}
