// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::{PauliLabel, kron, pauli_product};
use expect_test::expect;
use nalgebra::Matrix2;
use num_complex::Complex64;

#[test]
fn labels_square_to_identity() {
    let identity = PauliLabel::I.matrix();
    for label in PauliLabel::ALL {
        let m = label.matrix();
        assert_eq!(m * m, identity, "{label}");
    }
}

#[test]
fn non_identity_labels_are_traceless() {
    for label in PauliLabel::MEASURED {
        assert_eq!(label.matrix().trace(), Complex64::new(0.0, 0.0), "{label}");
    }
}

#[test]
fn xy_is_iz() {
    let i = Complex64::new(0.0, 1.0);
    assert_eq!(
        PauliLabel::X.matrix() * PauliLabel::Y.matrix(),
        PauliLabel::Z.matrix() * i
    );
}

#[test]
fn index_follows_all_order() {
    for (index, label) in PauliLabel::ALL.into_iter().enumerate() {
        assert_eq!(label.index(), index);
    }
    assert!(PauliLabel::I.is_identity());
    assert!(!PauliLabel::Z.is_identity());
}

#[test]
fn display_and_parse_round_trip() {
    let rendered = PauliLabel::ALL.map(|label| label.to_string()).join("");
    expect!["IXYZ"].assert_eq(&rendered);
    for label in PauliLabel::ALL {
        assert_eq!(label.to_string().parse::<PauliLabel>(), Ok(label));
    }
    assert_eq!("y".parse::<PauliLabel>(), Ok(PauliLabel::Y));
}

#[test]
fn parse_rejects_unknown_label() {
    let err = "W".parse::<PauliLabel>().expect_err("W is not a Pauli label");
    expect!["`W` is not a Pauli label, expected one of I, X, Y, Z"].assert_eq(&err.to_string());
}

#[test]
fn kron_puts_first_factor_on_high_index() {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    // |1><1| ⊗ I occupies the lower-right block.
    let projector = Matrix2::new(zero, zero, zero, one);
    let m = kron(&projector, &PauliLabel::I.matrix());
    assert_eq!(m[(2, 2)], one);
    assert_eq!(m[(3, 3)], one);
    assert_eq!(m[(0, 0)], zero);
    assert_eq!(m[(1, 1)], zero);
}

#[test]
fn zz_product_is_diagonal_parity() {
    let m = pauli_product(PauliLabel::Z, PauliLabel::Z);
    let diagonal: Vec<f64> = (0..4).map(|k| m[(k, k)].re).collect();
    assert_eq!(diagonal, vec![1.0, -1.0, -1.0, 1.0]);
}
