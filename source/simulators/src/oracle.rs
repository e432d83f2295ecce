// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{
    MeasurementResult, Simulator,
    circuit::{Circuit, CircuitError, Operation},
    cpu_full_state_simulator::{NoiselessSimulator, NoisySimulator},
    noise_config::{CumulativeNoiseConfig, NoiseConfig, NoiseConfigError},
};
use log::debug;
use miette::Diagnostic;
use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use rayon::prelude::*;
use std::{
    collections::BTreeMap,
    marker::PhantomData,
    sync::{Arc, Mutex},
};
use thiserror::Error;

/// Outcome bit-strings and the number of shots that produced them.
///
/// Each key holds one character per result id in allocation order: result 0
/// is the leftmost character and the most recently allocated bit is the
/// rightmost one.
pub type Counts = BTreeMap<String, u32>;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq, Eq)]
pub enum OracleError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidCircuit(#[from] CircuitError),

    #[error("measurement backend unavailable: {0}")]
    #[diagnostic(code("Qst.Oracle.Unavailable"))]
    Unavailable(String),
}

/// Executes circuits and reports sampled outcome distributions.
pub trait MeasurementOracle {
    fn run(&self, circuit: &Circuit, shots: u32) -> Result<Counts, OracleError>;
}

impl<O> MeasurementOracle for &O
where
    O: MeasurementOracle + ?Sized,
{
    fn run(&self, circuit: &Circuit, shots: u32) -> Result<Counts, OracleError> {
        (**self).run(circuit, shots)
    }
}

/// A measurement oracle backed by one of the full-state simulators.
///
/// Every call to [`MeasurementOracle::run`] draws one seed per shot from the
/// oracle's generator, so a seeded oracle replays the same sequence of
/// distributions.
pub struct FullStateOracle<S: Simulator> {
    noise: S::Noise,
    rng: Mutex<StdRng>,
    _simulator: PhantomData<fn() -> S>,
}

pub type IdealOracle = FullStateOracle<NoiselessSimulator>;
pub type NoisyOracle = FullStateOracle<NoisySimulator>;

impl<S: Simulator> FullStateOracle<S> {
    #[must_use]
    pub fn with_noise(noise: S::Noise, seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };
        Self {
            noise,
            rng: Mutex::new(rng),
            _simulator: PhantomData,
        }
    }

    #[must_use]
    pub fn noise(&self) -> &S::Noise {
        &self.noise
    }
}

impl FullStateOracle<NoiselessSimulator> {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_noise((), seed)
    }
}

impl FullStateOracle<NoisySimulator> {
    pub fn new(config: NoiseConfig, seed: Option<u64>) -> Result<Self, NoiseConfigError> {
        let noise = CumulativeNoiseConfig::try_from(config)?;
        Ok(Self::with_noise(Arc::new(noise), seed))
    }
}

impl<S: Simulator> MeasurementOracle for FullStateOracle<S> {
    fn run(&self, circuit: &Circuit, shots: u32) -> Result<Counts, OracleError> {
        circuit.validate()?;

        // Create the seed for each individual shot.
        let seeds = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|e| OracleError::Unavailable(e.to_string()))?;
            (0..shots).map(|_| rng.r#gen()).collect::<Vec<u32>>()
        };

        let num_qubits = circuit.num_qubits();
        let num_results = circuit.num_results();
        let counts = seeds
            .par_iter()
            .fold(Counts::new, |mut counts, shot_seed| {
                let simulator = S::new(num_qubits, num_results, *shot_seed, self.noise.clone());
                let outcome = run_shot(circuit.operations(), simulator)
                    .into_iter()
                    .map(MeasurementResult::as_char)
                    .collect::<String>();
                *counts.entry(outcome).or_default() += 1;
                counts
            })
            .reduce(Counts::new, merge_counts);

        debug!(
            "ran {shots} shots over {num_qubits} qubits and {num_results} results: {} distinct outcomes",
            counts.len()
        );
        Ok(counts)
    }
}

fn merge_counts(mut into: Counts, from: Counts) -> Counts {
    for (outcome, count) in from {
        *into.entry(outcome).or_default() += count;
    }
    into
}

/// Replays `operations` on `sim` and returns its measurement record.
pub fn run_shot<S: Simulator>(operations: &[Operation], mut sim: S) -> Vec<MeasurementResult> {
    apply_operations(operations, &mut sim);
    sim.take_measurements()
}

/// Applies `operations` to `sim` in order.
pub fn apply_operations<S: Simulator>(operations: &[Operation], sim: &mut S) {
    for operation in operations {
        match *operation {
            Operation::I { .. } => (),
            Operation::X { target } => sim.x(target),
            Operation::Y { target } => sim.y(target),
            Operation::Z { target } => sim.z(target),
            Operation::H { target } => sim.h(target),
            Operation::S { target } => sim.s(target),
            Operation::SAdj { target } => sim.s_adj(target),
            Operation::T { target } => sim.t(target),
            Operation::TAdj { target } => sim.t_adj(target),
            Operation::CX { control, target } => sim.cx(control, target),
            Operation::CZ { control, target } => sim.cz(control, target),
            Operation::Swap { q1, q2 } => sim.swap(q1, q2),
            Operation::MZ { target, result_id } => sim.mz(target, result_id),
        }
    }
}
