use qecsim_code::{canonical_code_hash, five_qubit_code, steane_code};
use qecsim_core::{bsp, pauli_to_bsf, validate, Nkd, StabilizerCode};

#[test]
fn five_qubit_code_is_well_formed() {
    let code = five_qubit_code().unwrap();
    validate(&code).expect("5-qubit code validates");
    assert_eq!(code.nkd(), Nkd::new(5, 1, Some(3)));
    assert_eq!(code.label(), "5-qubit");
}

#[test]
fn steane_code_is_well_formed() {
    let code = steane_code().unwrap();
    validate(&code).expect("Steane code validates");
    assert_eq!(code.nkd(), Nkd::new(7, 1, Some(3)));
    assert_eq!(code.label(), "Steane");
    assert_eq!(code.stabilizers().weights(), vec![4; 6]);
}

#[test]
fn five_qubit_syndrome_example() {
    let code = five_qubit_code().unwrap();
    let error = pauli_to_bsf("IZXYI").unwrap();
    assert_eq!(
        bsp(code.stabilizers(), &error).unwrap(),
        vec![false, true, true, false]
    );
}

#[test]
fn every_single_qubit_error_has_a_distinct_five_qubit_syndrome() {
    let code = five_qubit_code().unwrap();
    let mut seen = std::collections::BTreeSet::new();
    for qubit in 0..5 {
        for label in ['X', 'Y', 'Z'] {
            let mut pauli = vec!['I'; 5];
            pauli[qubit] = label;
            let error = pauli_to_bsf(&pauli.iter().collect::<String>()).unwrap();
            let syndrome = bsp(code.stabilizers(), &error).unwrap();
            assert!(syndrome.iter().any(|&s| s));
            assert!(seen.insert(syndrome));
        }
    }
}

#[test]
fn catalog_hashes_are_distinct_and_stable() {
    let five = five_qubit_code().unwrap();
    let steane = steane_code().unwrap();
    assert_eq!(canonical_code_hash(&five), canonical_code_hash(&five_qubit_code().unwrap()));
    assert_ne!(canonical_code_hash(&five), canonical_code_hash(&steane));
    assert_eq!(canonical_code_hash(&steane).len(), 64);
}
