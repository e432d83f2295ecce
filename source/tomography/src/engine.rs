// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, basis::measurement_circuit, pauli::PauliLabel};
use log::{debug, trace, warn};
use qst_simulators::{Counts, MeasurementOracle, QubitID, circuit::Circuit};

/// What to do with a setting whose tomography bits received no shots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroCountPolicy {
    /// Divide by a floor of one shot, so the expectation becomes 0.
    #[default]
    Floor,
    /// Fail with [`Error::DegenerateSample`].
    Reject,
}

/// A tomography engine driving a [`MeasurementOracle`].
///
/// Settings are measured one after another; no partial density matrix is
/// returned if any of them fails.
#[derive(Clone, Debug)]
pub struct Tomography<O> {
    oracle: O,
    zero_counts: ZeroCountPolicy,
}

impl<O: MeasurementOracle> Tomography<O> {
    #[must_use]
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            zero_counts: ZeroCountPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_zero_count_policy(mut self, policy: ZeroCountPolicy) -> Self {
        self.zero_counts = policy;
        self
    }

    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    #[must_use]
    pub fn zero_count_policy(&self) -> ZeroCountPolicy {
        self.zero_counts
    }

    /// Runs one measurement setting and returns its raw outcome counts.
    pub(crate) fn sample(
        &self,
        prepare: &Circuit,
        setting: &[(PauliLabel, QubitID)],
        shots: u32,
    ) -> Result<Counts, Error> {
        let name = setting_name(setting);
        let circuit = measurement_circuit(prepare, setting)?;
        debug!("measuring setting {name} with {shots} shots");
        let counts = self
            .oracle
            .run(&circuit, shots)
            .map_err(|source| Error::OracleExecution {
                setting: name.clone(),
                source,
            })?;
        trace!("setting {name}: {counts:?}");
        Ok(counts)
    }

    /// Applies the zero-count policy to a setting that collected `total`
    /// shots in its tomography bins.
    pub(crate) fn check_total(
        &self,
        setting: &[(PauliLabel, QubitID)],
        total: u64,
    ) -> Result<(), Error> {
        if total > 0 {
            return Ok(());
        }
        let name = setting_name(setting);
        match self.zero_counts {
            ZeroCountPolicy::Floor => {
                warn!("setting {name} collected no counts, its expectation falls back to 0");
                Ok(())
            }
            ZeroCountPolicy::Reject => Err(Error::DegenerateSample { setting: name }),
        }
    }
}

/// Renders a setting as its labels in target order, e.g. `XZ`.
pub(crate) fn setting_name(setting: &[(PauliLabel, QubitID)]) -> String {
    setting.iter().map(|(label, _)| label.to_string()).collect()
}
