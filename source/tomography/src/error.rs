// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use miette::Diagnostic;
use qst_simulators::{OracleError, QubitID, circuit::CircuitError};
use thiserror::Error;

#[derive(Clone, Debug, Diagnostic, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid tomography target {target}: {reason}")]
    #[diagnostic(code("Qst.Tomography.InvalidTarget"))]
    InvalidTarget { target: QubitID, reason: String },

    #[error("no shots of setting {setting} landed in the tomography bins")]
    #[diagnostic(
        code("Qst.Tomography.DegenerateSample"),
        help("increase the shot count or use the floor zero-count policy")
    )]
    DegenerateSample { setting: String },

    #[error("measurement oracle failed on setting {setting}")]
    #[diagnostic(code("Qst.Tomography.OracleExecution"))]
    OracleExecution {
        setting: String,
        #[source]
        source: OracleError,
    },

    #[error("invalid state preparation")]
    #[diagnostic(code("Qst.Tomography.InvalidPreparation"))]
    InvalidPreparation(#[source] CircuitError),
}
