use qecsim_core::{bsp, pauli_to_bsf, paulis_to_bsf, BsfMatrix, QecError};
use proptest::prelude::*;

fn five_qubit_stabilizers() -> BsfMatrix {
    paulis_to_bsf(&["XZZXI", "IXZZX", "XIXZZ", "ZXIXZ"]).unwrap()
}

#[test]
fn single_qubit_products() {
    let x = pauli_to_bsf("XI").unwrap();
    let z = pauli_to_bsf("ZI").unwrap();
    let y = pauli_to_bsf("YI").unwrap();
    let z2 = pauli_to_bsf("IZ").unwrap();
    assert!(bsp(&x, &z).unwrap());
    assert!(bsp(&x, &y).unwrap());
    assert!(!bsp(&x, &x).unwrap());
    assert!(!bsp(&x, &z2).unwrap());
}

#[test]
fn matrix_against_vector_yields_one_flag_per_row() {
    let error = pauli_to_bsf("IZXYI").unwrap();
    let syndrome = bsp(&five_qubit_stabilizers(), &error).unwrap();
    assert_eq!(syndrome, vec![false, true, true, false]);
    assert_eq!(bsp(&error, &five_qubit_stabilizers()).unwrap(), syndrome);
}

#[test]
fn matrix_against_matrix_is_row_aligned() {
    let a = paulis_to_bsf(&["XI", "IX", "ZZ"]).unwrap();
    let b = paulis_to_bsf(&["ZI", "IX", "XI"]).unwrap();
    assert_eq!(bsp(&a, &b).unwrap(), vec![true, false, true]);
}

#[test]
fn mismatched_row_counts_are_dimension_errors() {
    let a = paulis_to_bsf(&["XI", "IX"]).unwrap();
    let b = paulis_to_bsf(&["ZI"]).unwrap();
    let err = bsp(&a, &b).expect_err("row counts differ");
    match err {
        QecError::Dimension(info) => {
            assert_eq!(info.code, "row-count-mismatch");
            assert!(info.hint.is_some());
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn mismatched_widths_are_dimension_errors() {
    let a = pauli_to_bsf("XI").unwrap();
    let b = pauli_to_bsf("XII").unwrap();
    assert!(matches!(bsp(&a, &b), Err(QecError::Dimension(_))));
    assert!(matches!(
        bsp(&five_qubit_stabilizers(), &a),
        Err(QecError::Dimension(_))
    ));
    assert!(matches!(
        bsp(&BsfMatrix::empty(3), &a),
        Err(QecError::Dimension(_))
    ));
}

#[test]
fn commutation_table_covers_all_pairs() {
    let logicals = paulis_to_bsf(&["XXX", "IIZ"]).unwrap();
    let table = logicals.commutation_table(&logicals).unwrap();
    assert_eq!(table, vec![vec![false, true], vec![true, false]]);

    let stabilizers = paulis_to_bsf(&["ZZI", "IZZ"]).unwrap();
    let table = stabilizers.commutation_table(&logicals).unwrap();
    assert_eq!(table, vec![vec![false, false], vec![false, false]]);
}

#[test]
fn vstack_preserves_row_order() {
    let xs = paulis_to_bsf(&["XXX"]).unwrap();
    let zs = paulis_to_bsf(&["IIZ"]).unwrap();
    assert_eq!(xs.vstack(&zs).unwrap().to_paulis(), vec!["XXX", "IIZ"]);
    let stacked = xs.vstack(&BsfMatrix::empty(2)).unwrap();
    assert_eq!(stacked.num_qubits(), 3);
    assert_eq!(stacked.num_rows(), 1);
    assert!(xs.vstack(&paulis_to_bsf(&["XX"]).unwrap()).is_err());
}

proptest! {
    #[test]
    fn product_is_symmetric(a in "[IXYZ]{6}", b in "[IXYZ]{6}") {
        let a = pauli_to_bsf(&a).unwrap();
        let b = pauli_to_bsf(&b).unwrap();
        prop_assert_eq!(bsp(&a, &b).unwrap(), bsp(&b, &a).unwrap());
    }

    #[test]
    fn row_aligned_product_is_symmetric(rows in prop::collection::vec(("[IXYZ]{4}", "[IXYZ]{4}"), 1..6)) {
        let (left, right): (Vec<String>, Vec<String>) = rows.into_iter().unzip();
        let a = paulis_to_bsf(&left).unwrap();
        let b = paulis_to_bsf(&right).unwrap();
        prop_assert_eq!(bsp(&a, &b).unwrap(), bsp(&b, &a).unwrap());
    }

    #[test]
    fn operators_commute_with_themselves(pauli in "[IXYZ]{1,10}") {
        let vector = pauli_to_bsf(&pauli).unwrap();
        prop_assert!(!bsp(&vector, &vector).unwrap());
    }
}
