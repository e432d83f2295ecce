// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Reading tomography bits out of oracle outcome strings.
//!
//! The oracle renders one character per result id in allocation order, so
//! the tomography register, which is allocated last, occupies the rightmost
//! `width` characters. Bit `index` of that register sits `width - 1 - index`
//! characters from the end. For a two-qubit setting this puts target A's bit
//! (index 0) left of target B's bit (index 1): A is the more significant
//! digit of the `p_ab` occupation counts.

#[cfg(test)]
mod tests;

use crate::pauli::PauliLabel;
use qst_simulators::Counts;

/// The value of bit `index` of the trailing `width`-bit register in
/// `outcome`, or `None` if the string is too short or the character is not
/// a binary digit.
#[must_use]
pub fn tomography_bit(outcome: &str, width: usize, index: usize) -> Option<bool> {
    let bytes = outcome.as_bytes();
    if index >= width || bytes.len() < width {
        return None;
    }
    match bytes[bytes.len() - width + index] {
        b'0' => Some(false),
        b'1' => Some(true),
        _ => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: i64, total: u64) -> f64 {
    numerator as f64 / total.max(1) as f64
}

/// Counts of the two outcomes of a single tomography bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryCounts {
    pub zero: u32,
    pub one: u32,
}

impl BinaryCounts {
    /// Bins `counts` on the last character of each outcome. Outcomes that do
    /// not end in a binary digit are skipped.
    #[must_use]
    pub fn from_counts(counts: &Counts) -> Self {
        let mut bins = Self::default();
        for (outcome, count) in counts {
            match tomography_bit(outcome, 1, 0) {
                Some(false) => bins.zero += count,
                Some(true) => bins.one += count,
                None => (),
            }
        }
        bins
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.zero) + u64::from(self.one)
    }

    /// (n₀ − n₁) / max(n₀ + n₁, 1).
    #[must_use]
    pub fn expectation(&self) -> f64 {
        ratio(i64::from(self.zero) - i64::from(self.one), self.total())
    }
}

/// Joint occupation counts of a two-bit tomography register. The first
/// digit of each field is target A, the second target B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JointCounts {
    pub p00: u32,
    pub p01: u32,
    pub p10: u32,
    pub p11: u32,
}

impl JointCounts {
    /// Bins `counts` on the last two characters of each outcome. Outcomes
    /// that do not end in two binary digits are skipped.
    #[must_use]
    pub fn from_counts(counts: &Counts) -> Self {
        let mut bins = Self::default();
        for (outcome, count) in counts {
            let a = tomography_bit(outcome, 2, 0);
            let b = tomography_bit(outcome, 2, 1);
            match (a, b) {
                (Some(false), Some(false)) => bins.p00 += count,
                (Some(false), Some(true)) => bins.p01 += count,
                (Some(true), Some(false)) => bins.p10 += count,
                (Some(true), Some(true)) => bins.p11 += count,
                _ => (),
            }
        }
        bins
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        [self.p00, self.p01, self.p10, self.p11]
            .into_iter()
            .map(u64::from)
            .sum()
    }

    /// The expectation of `a ⊗ b` from these counts.
    ///
    /// An identity label marginalizes over that target; two measured labels
    /// give the joint parity. `(I, I)` is 1 by normalization.
    #[must_use]
    pub fn expectation(&self, a: PauliLabel, b: PauliLabel) -> f64 {
        let [p00, p01, p10, p11] = [self.p00, self.p01, self.p10, self.p11].map(i64::from);
        let numerator = match (a.is_identity(), b.is_identity()) {
            (true, true) => return 1.0,
            (true, false) => p00 + p10 - p01 - p11,
            (false, true) => p00 + p01 - p10 - p11,
            (false, false) => p00 - p01 - p10 + p11,
        };
        ratio(numerator, self.total())
    }

    /// The counts of target A alone.
    #[must_use]
    pub fn marginal_a(&self) -> BinaryCounts {
        BinaryCounts {
            zero: self.p00 + self.p01,
            one: self.p10 + self.p11,
        }
    }

    /// The counts of target B alone.
    #[must_use]
    pub fn marginal_b(&self) -> BinaryCounts {
        BinaryCounts {
            zero: self.p00 + self.p10,
            one: self.p01 + self.p11,
        }
    }
}
