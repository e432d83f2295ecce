// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{BinaryCounts, JointCounts, tomography_bit};
use crate::pauli::PauliLabel;
use qst_simulators::Counts;

fn counts(entries: &[(&str, u32)]) -> Counts {
    entries
        .iter()
        .map(|(outcome, count)| ((*outcome).to_string(), *count))
        .collect()
}

#[test]
fn tomography_bits_are_read_from_the_right() {
    // Two preparation bits followed by a two-bit tomography register.
    assert_eq!(tomography_bit("0001", 2, 0), Some(false));
    assert_eq!(tomography_bit("0001", 2, 1), Some(true));
    assert_eq!(tomography_bit("1110", 2, 0), Some(true));
    assert_eq!(tomography_bit("1110", 2, 1), Some(false));
    assert_eq!(tomography_bit("01", 1, 0), Some(true));
}

#[test]
fn tomography_bit_rejects_short_or_malformed_outcomes() {
    assert_eq!(tomography_bit("1", 2, 0), None);
    assert_eq!(tomography_bit("", 1, 0), None);
    assert_eq!(tomography_bit("01", 2, 2), None);
    assert_eq!(tomography_bit("0L", 2, 1), None);
}

#[test]
fn binary_counts_ignore_leading_registers() {
    let bins = BinaryCounts::from_counts(&counts(&[("00", 3), ("10", 4), ("01", 5), ("x", 9)]));
    assert_eq!(bins, BinaryCounts { zero: 7, one: 5 });
    assert_eq!(bins.total(), 12);
    assert!((bins.expectation() - 2.0 / 12.0).abs() < 1e-12);
}

#[test]
fn empty_binary_counts_have_zero_expectation() {
    let bins = BinaryCounts::from_counts(&Counts::new());
    assert_eq!(bins.total(), 0);
    assert!(bins.expectation().abs() < f64::EPSILON);
}

#[test]
fn joint_counts_assign_a_to_the_more_significant_digit() {
    let bins = JointCounts::from_counts(&counts(&[("c001", 1), ("1101", 2), ("10", 3), ("11", 4)]));
    assert_eq!(
        bins,
        JointCounts {
            p00: 0,
            p01: 3,
            p10: 3,
            p11: 4,
        }
    );
}

#[test]
fn all_zero_outcomes_give_plus_one_everywhere() {
    let bins = JointCounts {
        p00: 1000,
        ..JointCounts::default()
    };
    for a in PauliLabel::ALL {
        for b in PauliLabel::ALL {
            assert!((bins.expectation(a, b) - 1.0).abs() < 1e-12, "{a}{b}");
        }
    }
}

#[test]
fn partial_identity_signs_follow_the_measured_target() {
    // A always reads 0, B always reads 1.
    let bins = JointCounts {
        p01: 100,
        ..JointCounts::default()
    };
    assert!((bins.expectation(PauliLabel::Z, PauliLabel::I) - 1.0).abs() < 1e-12);
    assert!((bins.expectation(PauliLabel::I, PauliLabel::Z) + 1.0).abs() < 1e-12);
    assert!((bins.expectation(PauliLabel::Z, PauliLabel::Z) + 1.0).abs() < 1e-12);
}

#[test]
fn marginal_formulas_agree_with_summed_joint_distribution() {
    let bins = JointCounts {
        p00: 17,
        p01: 5,
        p10: 31,
        p11: 47,
    };
    let b_only = bins.expectation(PauliLabel::I, PauliLabel::X);
    let a_only = bins.expectation(PauliLabel::Y, PauliLabel::I);
    assert!((b_only - bins.marginal_b().expectation()).abs() < 1e-12);
    assert!((a_only - bins.marginal_a().expectation()).abs() < 1e-12);
    assert_eq!(bins.marginal_a().total(), bins.total());
    assert_eq!(bins.marginal_b().total(), bins.total());
}

#[test]
fn empty_joint_counts_floor_the_denominator() {
    let bins = JointCounts::default();
    assert!(bins.expectation(PauliLabel::X, PauliLabel::X).abs() < f64::EPSILON);
    assert!(bins.expectation(PauliLabel::I, PauliLabel::Z).abs() < f64::EPSILON);
    assert!((bins.expectation(PauliLabel::I, PauliLabel::I) - 1.0).abs() < f64::EPSILON);
}
