// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Circuit descriptions, full-state simulators and the measurement oracles
//! that sample them.

pub mod circuit;
pub mod cpu_full_state_simulator;
pub mod noise_config;
pub mod oracle;
mod state_vector;

pub use oracle::{
    Counts, FullStateOracle, IdealOracle, MeasurementOracle, NoisyOracle, OracleError,
};

/// A qubit ID.
pub type QubitID = usize;

/// The result of a measurement in the Z-basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasurementResult {
    Zero,
    One,
}

impl MeasurementResult {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }
}

/// The gate set understood by the full-state simulators.
///
/// `result_id` arguments index into the classical results of the
/// circuit being simulated, in allocation order.
pub trait Simulator {
    type Noise: Clone + Send + Sync;

    fn new(num_qubits: usize, num_results: usize, seed: u32, noise: Self::Noise) -> Self;
    fn x(&mut self, target: QubitID);
    fn y(&mut self, target: QubitID);
    fn z(&mut self, target: QubitID);
    fn h(&mut self, target: QubitID);
    fn s(&mut self, target: QubitID);
    fn s_adj(&mut self, target: QubitID);
    fn t(&mut self, target: QubitID);
    fn t_adj(&mut self, target: QubitID);
    fn cx(&mut self, control: QubitID, target: QubitID);
    fn cz(&mut self, control: QubitID, target: QubitID);
    fn swap(&mut self, q1: QubitID, q2: QubitID);
    fn mz(&mut self, target: QubitID, result_id: QubitID);
    fn measurements(&self) -> &[MeasurementResult];
    fn take_measurements(&mut self) -> Vec<MeasurementResult>;
}
