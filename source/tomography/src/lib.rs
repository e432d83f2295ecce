// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Linear-inversion state tomography of one and two qubits.
//!
//! A [`Tomography`] engine rotates the prepared state into each Pauli
//! measurement setting, samples it through a [`MeasurementOracle`],
//! turns outcome counts into Pauli expectation values and expands those
//! into a density matrix. The [`comparator`] module scores the result
//! against an ideal pure state.
//!
//! [`MeasurementOracle`]: qst_simulators::MeasurementOracle

pub mod basis;
pub mod comparator;
mod engine;
mod error;
pub mod exact;
pub mod expectation;
pub mod outcome;
pub mod pauli;
pub mod preparation;
mod single_qubit;
mod two_qubit;

pub use engine::{Tomography, ZeroCountPolicy};
pub use error::Error;
pub use expectation::{SingleQubitExpectations, TwoQubitExpectations};
pub use pauli::PauliLabel;
pub use single_qubit::SingleQubitEstimate;
pub use two_qubit::TwoQubitEstimate;
