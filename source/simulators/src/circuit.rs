// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::QubitID;
use miette::Diagnostic;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The widest circuit the full-state simulators accept.
pub const MAX_QUBITS: usize = 30;

/// A single instruction of a [`Circuit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    I { target: QubitID },
    X { target: QubitID },
    Y { target: QubitID },
    Z { target: QubitID },
    H { target: QubitID },
    S { target: QubitID },
    SAdj { target: QubitID },
    T { target: QubitID },
    TAdj { target: QubitID },
    CX { control: QubitID, target: QubitID },
    CZ { control: QubitID, target: QubitID },
    Swap { q1: QubitID, q2: QubitID },
    MZ { target: QubitID, result_id: QubitID },
}

#[must_use]
pub fn id(target: QubitID) -> Operation {
    Operation::I { target }
}

#[must_use]
pub fn x(target: QubitID) -> Operation {
    Operation::X { target }
}

#[must_use]
pub fn y(target: QubitID) -> Operation {
    Operation::Y { target }
}

#[must_use]
pub fn z(target: QubitID) -> Operation {
    Operation::Z { target }
}

#[must_use]
pub fn h(target: QubitID) -> Operation {
    Operation::H { target }
}

#[must_use]
pub fn s(target: QubitID) -> Operation {
    Operation::S { target }
}

#[must_use]
pub fn s_adj(target: QubitID) -> Operation {
    Operation::SAdj { target }
}

#[must_use]
pub fn t(target: QubitID) -> Operation {
    Operation::T { target }
}

#[must_use]
pub fn t_adj(target: QubitID) -> Operation {
    Operation::TAdj { target }
}

#[must_use]
pub fn cx(control: QubitID, target: QubitID) -> Operation {
    Operation::CX { control, target }
}

#[must_use]
pub fn cz(control: QubitID, target: QubitID) -> Operation {
    Operation::CZ { control, target }
}

#[must_use]
pub fn swap(q1: QubitID, q2: QubitID) -> Operation {
    Operation::Swap { q1, q2 }
}

#[must_use]
pub fn mz(target: QubitID, result_id: QubitID) -> Operation {
    Operation::MZ { target, result_id }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Operation::I { target } => write!(f, "i {target}"),
            Operation::X { target } => write!(f, "x {target}"),
            Operation::Y { target } => write!(f, "y {target}"),
            Operation::Z { target } => write!(f, "z {target}"),
            Operation::H { target } => write!(f, "h {target}"),
            Operation::S { target } => write!(f, "s {target}"),
            Operation::SAdj { target } => write!(f, "s_adj {target}"),
            Operation::T { target } => write!(f, "t {target}"),
            Operation::TAdj { target } => write!(f, "t_adj {target}"),
            Operation::CX { control, target } => write!(f, "cx {control} {target}"),
            Operation::CZ { control, target } => write!(f, "cz {control} {target}"),
            Operation::Swap { q1, q2 } => write!(f, "swap {q1} {q2}"),
            Operation::MZ { target, result_id } => write!(f, "mz {target} -> {result_id}"),
        }
    }
}

#[derive(Clone, Debug, Diagnostic, Error, PartialEq, Eq)]
pub enum CircuitError {
    #[error("qubit {qubit} is out of range for a circuit with {num_qubits} qubits")]
    #[diagnostic(code("Qst.Circuit.QubitOutOfRange"))]
    QubitOutOfRange { qubit: QubitID, num_qubits: usize },

    #[error("result {result_id} is out of range for a circuit with {num_results} results")]
    #[diagnostic(code("Qst.Circuit.ResultOutOfRange"))]
    ResultOutOfRange {
        result_id: QubitID,
        num_results: usize,
    },

    #[error("a circuit with {num_qubits} qubits exceeds the simulator limit of {max} qubits")]
    #[diagnostic(code("Qst.Circuit.TooManyQubits"))]
    TooManyQubits { num_qubits: usize, max: usize },

    #[error("two-qubit operation `{0}` acts twice on the same qubit")]
    #[diagnostic(code("Qst.Circuit.RepeatedOperand"))]
    RepeatedOperand(Operation),
}

/// A contiguous block of classical results owned by a [`Circuit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassicalRegister {
    name: String,
    offset: usize,
    size: usize,
}

impl ClassicalRegister {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The result id backing the `index`-th bit of this register.
    #[must_use]
    pub fn bit(&self, index: usize) -> QubitID {
        assert!(
            index < self.size,
            "bit {index} is out of range for register `{}` of size {}",
            self.name,
            self.size
        );
        self.offset + index
    }
}

/// A state preparation followed by any number of measurements.
///
/// Results are numbered in the order their registers were allocated,
/// which is also the order in which the oracles render them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Circuit {
    num_qubits: usize,
    registers: Vec<ClassicalRegister>,
    operations: Vec<Operation>,
}

impl Circuit {
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            registers: Vec::new(),
            operations: Vec::new(),
        }
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[must_use]
    pub fn num_results(&self) -> usize {
        self.registers.iter().map(ClassicalRegister::len).sum()
    }

    #[must_use]
    pub fn registers(&self) -> &[ClassicalRegister] {
        &self.registers
    }

    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Appends a register of `size` bits after every existing register.
    pub fn add_register(&mut self, name: impl Into<String>, size: usize) -> ClassicalRegister {
        let register = ClassicalRegister {
            name: name.into(),
            offset: self.num_results(),
            size,
        };
        self.registers.push(register.clone());
        register
    }

    pub fn push(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    pub fn extend(&mut self, operations: impl IntoIterator<Item = Operation>) -> &mut Self {
        self.operations.extend(operations);
        self
    }

    /// Checks that the circuit fits the simulators and that every operation
    /// addresses existing qubits and results.
    pub fn validate(&self) -> Result<(), CircuitError> {
        if self.num_qubits > MAX_QUBITS {
            return Err(CircuitError::TooManyQubits {
                num_qubits: self.num_qubits,
                max: MAX_QUBITS,
            });
        }
        let num_results = self.num_results();
        let check_qubit = |qubit: QubitID| {
            if qubit < self.num_qubits {
                Ok(())
            } else {
                Err(CircuitError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                })
            }
        };

        for operation in &self.operations {
            match *operation {
                Operation::I { target }
                | Operation::X { target }
                | Operation::Y { target }
                | Operation::Z { target }
                | Operation::H { target }
                | Operation::S { target }
                | Operation::SAdj { target }
                | Operation::T { target }
                | Operation::TAdj { target } => check_qubit(target)?,
                Operation::CX {
                    control: q1,
                    target: q2,
                }
                | Operation::CZ {
                    control: q1,
                    target: q2,
                }
                | Operation::Swap { q1, q2 } => {
                    check_qubit(q1)?;
                    check_qubit(q2)?;
                    if q1 == q2 {
                        return Err(CircuitError::RepeatedOperand(*operation));
                    }
                }
                Operation::MZ { target, result_id } => {
                    check_qubit(target)?;
                    if result_id >= num_results {
                        return Err(CircuitError::ResultOutOfRange {
                            result_id,
                            num_results,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Display for Circuit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "qubits: {}", self.num_qubits)?;
        write!(f, "\nresults:")?;
        for register in &self.registers {
            write!(f, " {}[{}]", register.name, register.size)?;
        }
        for operation in &self.operations {
            write!(f, "\n{operation}")?;
        }
        Ok(())
    }
}
