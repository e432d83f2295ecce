// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    Error, Tomography, basis::validate_targets, expectation::SingleQubitExpectations,
    outcome::BinaryCounts, pauli::PauliLabel,
};
use log::info;
use nalgebra::Matrix2;
use num_complex::Complex64;
use qst_simulators::{MeasurementOracle, QubitID, circuit::Circuit};

/// The reconstructed state of one qubit.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleQubitEstimate {
    pub density_matrix: Matrix2<Complex64>,
    pub expectations: SingleQubitExpectations,
}

impl<O: MeasurementOracle> Tomography<O> {
    /// Estimates the state of `target` after `prepare` from `shots` shots in
    /// each of the X, Y and Z bases.
    pub fn estimate_state(
        &self,
        prepare: &Circuit,
        target: QubitID,
        shots: u32,
    ) -> Result<SingleQubitEstimate, Error> {
        prepare.validate().map_err(Error::InvalidPreparation)?;
        validate_targets(prepare, [target])?;

        let mut expectations = SingleQubitExpectations::default();
        for label in PauliLabel::MEASURED {
            let setting = [(label, target)];
            let counts = self.sample(prepare, &setting, shots)?;
            let bins = BinaryCounts::from_counts(&counts);
            self.check_total(&setting, bins.total())?;
            expectations.set(label, bins.expectation());
        }

        let density_matrix = expectations.density_matrix();
        info!(
            "reconstructed qubit {target}: <X> = {:.4}, <Y> = {:.4}, <Z> = {:.4}",
            expectations.get(PauliLabel::X),
            expectations.get(PauliLabel::Y),
            expectations.get(PauliLabel::Z)
        );
        Ok(SingleQubitEstimate {
            density_matrix,
            expectations,
        })
    }
}
