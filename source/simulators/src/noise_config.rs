// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use miette::Diagnostic;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

/// The gate classes a noise channel can be attached to.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GateClass {
    X,
    Y,
    Z,
    H,
    S,
    #[serde(alias = "sdg")]
    SAdj,
    T,
    #[serde(alias = "tdg")]
    TAdj,
    #[serde(rename = "cx", alias = "cnot")]
    CX,
    #[serde(rename = "cz")]
    CZ,
    Swap,
}

impl GateClass {
    /// The number of qubits a gate of this class acts on.
    #[must_use]
    pub fn qubits(self) -> u32 {
        match self {
            Self::CX | Self::CZ | Self::Swap => 2,
            _ => 1,
        }
    }
}

/// Noise description for the noisy full-state simulator.
///
/// This is the format in which the user config files are
/// written. Every gate in `single_qubit_gates` is followed by a
/// depolarizing channel of strength `p1` composed with thermal
/// relaxation lasting `gate_time_1q`. Gates in `two_qubit_gates`
/// use `p2` and `gate_time_2q`, with relaxation applied to each
/// operand. Every measurement is preceded by a single-qubit
/// depolarizing channel of strength `p_meas`.
///
/// `t1`, `t2` and the gate times share a unit; the reference
/// device uses nanoseconds.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    pub p1: f64,
    pub p2: f64,
    pub t1: f64,
    pub t2: f64,
    pub gate_time_1q: f64,
    pub gate_time_2q: f64,
    pub p_meas: f64,
    pub single_qubit_gates: Vec<GateClass>,
    pub two_qubit_gates: Vec<GateClass>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            p1: 0.0,
            p2: 0.0,
            t1: f64::INFINITY,
            t2: f64::INFINITY,
            gate_time_1q: 0.0,
            gate_time_2q: 0.0,
            p_meas: 0.0,
            single_qubit_gates: vec![
                GateClass::H,
                GateClass::X,
                GateClass::Y,
                GateClass::Z,
                GateClass::SAdj,
            ],
            two_qubit_gates: vec![GateClass::CX, GateClass::Swap],
        }
    }
}

impl NoiseConfig {
    #[must_use]
    pub fn noiseless() -> Self {
        Self::default()
    }

    /// A small superconducting-style device: 1% single-qubit and 2% two-qubit
    /// depolarization, T1 = 50us, T2 = 70us, 50ns and 200ns gates, and 2% readout
    /// depolarization.
    #[must_use]
    pub fn reference_device() -> Self {
        Self {
            p1: 0.01,
            p2: 0.02,
            t1: 50e3,
            t2: 70e3,
            gate_time_1q: 50.0,
            gate_time_2q: 200.0,
            p_meas: 0.02,
            ..Self::default()
        }
    }

    /// Parses and validates a JSON noise description.
    pub fn from_json(json: &str) -> Result<Self, NoiseConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| NoiseConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn is_noiseless(&self) -> bool {
        self.p1 == 0.0
            && self.p2 == 0.0
            && self.p_meas == 0.0
            && Relaxation::new(self.t1, self.t2, self.gate_time_1q).is_none()
            && Relaxation::new(self.t1, self.t2, self.gate_time_2q).is_none()
    }

    pub fn validate(&self) -> Result<(), NoiseConfigError> {
        for (name, value) in [("p1", self.p1), ("p2", self.p2), ("p_meas", self.p_meas)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(NoiseConfigError::InvalidProbability { name, value });
            }
        }
        for (name, value) in [("t1", self.t1), ("t2", self.t2)] {
            if value.is_nan() || value <= 0.0 {
                return Err(NoiseConfigError::InvalidDuration { name, value });
            }
        }
        for (name, value) in [
            ("gate_time_1q", self.gate_time_1q),
            ("gate_time_2q", self.gate_time_2q),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(NoiseConfigError::InvalidDuration { name, value });
            }
        }
        if self.t2 > 2.0 * self.t1 {
            return Err(NoiseConfigError::UnphysicalT2 {
                t1: self.t1,
                t2: self.t2,
            });
        }
        for (gates, expected) in [(&self.single_qubit_gates, 1), (&self.two_qubit_gates, 2)] {
            if let Some(gate) = gates.iter().find(|gate| gate.qubits() != expected) {
                return Err(NoiseConfigError::GateArity {
                    gate: *gate,
                    expected,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum NoiseConfigError {
    #[error("failed to parse noise configuration: {0}")]
    #[diagnostic(code("Qst.Noise.Parse"))]
    Parse(String),

    #[error("`{name}` should be a probability between 0.0 and 1.0, found {value}")]
    #[diagnostic(code("Qst.Noise.InvalidProbability"))]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("`{name}` should be a non-negative duration, found {value}")]
    #[diagnostic(code("Qst.Noise.InvalidDuration"))]
    InvalidDuration { name: &'static str, value: f64 },

    #[error("t2 = {t2} exceeds the physical limit 2 * t1 = {}", .t1 * 2.0)]
    #[diagnostic(code("Qst.Noise.UnphysicalT2"))]
    UnphysicalT2 { t1: f64, t2: f64 },

    #[error("gate class {gate:?} is listed among the {expected}-qubit gates")]
    #[diagnostic(code("Qst.Noise.GateArity"))]
    GateArity { gate: GateClass, expected: u32 },
}

/// Zero-temperature thermal relaxation over a fixed duration, split into
/// amplitude damping followed by pure dephasing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relaxation {
    /// Probability of decaying from the one state to the zero state.
    pub amplitude_damping: f64,
    /// Extra phase-damping strength needed to reach the T2 coherence decay.
    pub dephasing: f64,
}

impl Relaxation {
    pub const NONE: Self = Self {
        amplitude_damping: 0.0,
        dephasing: 0.0,
    };

    /// Requires `t2 <= 2 * t1`. Infinite times disable the matching process.
    #[must_use]
    pub fn new(t1: f64, t2: f64, duration: f64) -> Self {
        if duration == 0.0 {
            return Self::NONE;
        }
        let amplitude_damping = 1.0 - (-duration / t1).exp();
        // Amplitude damping alone shrinks coherences by exp(-t / 2T1).
        let dephasing = 1.0 - (duration / t1 - 2.0 * duration / t2).exp();
        Self {
            amplitude_damping,
            dephasing: dephasing.max(0.0),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.amplitude_damping == 0.0 && self.dephasing == 0.0
    }
}

/// The noise following a single operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelNoise {
    /// The number of qubits the channel acts on.
    pub qubits: u32,
    /// The probability of each of the `4^qubits - 1` non-identity
    /// Pauli strings.
    pub pauli_probability: f64,
    /// Relaxation applied to every operand after the Pauli fault.
    pub relaxation: Relaxation,
}

impl ChannelNoise {
    /// A depolarizing channel of strength `p`: with probability `p` the
    /// operands are replaced by the maximally mixed state.
    #[must_use]
    pub fn depolarizing(qubits: u32, p: f64, relaxation: Relaxation) -> Self {
        Self {
            qubits,
            pauli_probability: p / f64::from(4u32.pow(qubits)),
            relaxation,
        }
    }

    #[must_use]
    pub fn is_noiseless(&self) -> bool {
        self.pauli_probability == 0.0 && self.relaxation.is_none()
    }
}

/// Describes the noise configuration for each operation.
///
/// This is the internal format used by the simulator.
#[derive(Clone, Debug)]
pub struct CumulativeNoiseConfig {
    gates: FxHashMap<GateClass, ChannelNoise>,
    measurement: ChannelNoise,
}

impl CumulativeNoiseConfig {
    /// The channel following gates of class `gate`, if that class is noisy.
    #[must_use]
    pub fn gate(&self, gate: GateClass) -> Option<&ChannelNoise> {
        self.gates.get(&gate)
    }

    /// The channel preceding every measurement.
    #[must_use]
    pub fn measurement(&self) -> &ChannelNoise {
        &self.measurement
    }
}

impl TryFrom<NoiseConfig> for CumulativeNoiseConfig {
    type Error = NoiseConfigError;

    fn try_from(value: NoiseConfig) -> Result<Self, Self::Error> {
        value.validate()?;

        let one_qubit = ChannelNoise::depolarizing(
            1,
            value.p1,
            Relaxation::new(value.t1, value.t2, value.gate_time_1q),
        );
        let two_qubit = ChannelNoise::depolarizing(
            2,
            value.p2,
            Relaxation::new(value.t1, value.t2, value.gate_time_2q),
        );

        let mut gates = FxHashMap::default();
        for (classes, channel) in [
            (&value.single_qubit_gates, &one_qubit),
            (&value.two_qubit_gates, &two_qubit),
        ] {
            if channel.is_noiseless() {
                continue;
            }
            for gate in classes {
                gates.insert(*gate, channel.clone());
            }
        }

        Ok(Self {
            gates,
            measurement: ChannelNoise::depolarizing(1, value.p_meas, Relaxation::NONE),
        })
    }
}
