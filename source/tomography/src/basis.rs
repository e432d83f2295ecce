// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::{Error, pauli::PauliLabel};
use qst_simulators::{
    QubitID,
    circuit::{self, Circuit, Operation},
};

/// Name of the classical register the measurement circuits append.
pub const TOMOGRAPHY_REGISTER: &str = "c_tom";

/// The gates that map the eigenbasis of `label` onto the computational
/// basis of `target`.
#[must_use]
pub fn rotation(label: PauliLabel, target: QubitID) -> Vec<Operation> {
    match label {
        PauliLabel::I | PauliLabel::Z => Vec::new(),
        PauliLabel::X => vec![circuit::h(target)],
        PauliLabel::Y => vec![circuit::s_adj(target), circuit::h(target)],
    }
}

/// Copies `prepare`, rotates each target of `setting` into its basis and
/// measures target `i` into bit `i` of a fresh [`TOMOGRAPHY_REGISTER`]
/// appended after the preparation's registers.
///
/// Fails with [`Error::InvalidTarget`] if a target is outside the
/// preparation or listed twice.
pub fn measurement_circuit(
    prepare: &Circuit,
    setting: &[(PauliLabel, QubitID)],
) -> Result<Circuit, Error> {
    validate_targets(prepare, setting.iter().map(|(_, target)| *target))?;

    let mut circuit = prepare.clone();
    for (label, target) in setting {
        circuit.extend(rotation(*label, *target));
    }
    let register = circuit.add_register(TOMOGRAPHY_REGISTER, setting.len());
    for (index, (_, target)) in setting.iter().enumerate() {
        circuit.push(circuit::mz(*target, register.bit(index)));
    }
    Ok(circuit)
}

pub(crate) fn validate_targets(
    prepare: &Circuit,
    targets: impl IntoIterator<Item = QubitID>,
) -> Result<(), Error> {
    let mut seen = Vec::new();
    for target in targets {
        if target >= prepare.num_qubits() {
            return Err(Error::InvalidTarget {
                target,
                reason: format!(
                    "the preparation only has {} qubits",
                    prepare.num_qubits()
                ),
            });
        }
        if seen.contains(&target) {
            return Err(Error::InvalidTarget {
                target,
                reason: "the qubit is targeted more than once".to_string(),
            });
        }
        seen.push(target);
    }
    Ok(())
}
