// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use qst_simulators::{
    QubitID,
    circuit::{self, Circuit},
};

/// A singlet pair shared between Alice and Bob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingletPreparation {
    pub circuit: Circuit,
    /// Alice's half of the pair.
    pub alice: QubitID,
    /// Bob's half of the pair, after it has been swapped along the extra
    /// qubits.
    pub bob: QubitID,
}

/// Prepares (|01⟩ − |10⟩)/√2 up to a global phase on Alice (qubit 0) and
/// Bob (qubit 1), then moves Bob's half through `extra` additional qubits
/// with a chain of swaps. The circuit owns a two-bit register `c` that the
/// preparation leaves unused.
#[must_use]
pub fn singlet(extra: usize) -> SingletPreparation {
    let alice = 0;
    let mut bob = 1;
    let mut circuit = Circuit::new(2 + extra);
    circuit.add_register("c", 2);
    circuit
        .push(circuit::x(bob))
        .push(circuit::h(alice))
        .push(circuit::cx(alice, bob))
        .push(circuit::z(bob));
    for next in 2..2 + extra {
        circuit.push(circuit::swap(bob, next));
        bob = next;
    }
    SingletPreparation {
        circuit,
        alice,
        bob,
    }
}
