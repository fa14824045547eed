use qecsim_core::{BsfMatrix, StabilizerCode};
use sha2::{Digest, Sha256};

fn update_matrix(hasher: &mut Sha256, matrix: &BsfMatrix) {
    hasher.update((matrix.num_rows() as u64).to_le_bytes());
    for row in matrix {
        let packed: Vec<u8> = row
            .bits()
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (idx, &bit)| acc | (u8::from(bit) << idx))
            })
            .collect();
        hasher.update(&packed);
    }
}

/// Computes the canonical structural hash of a stabilizer code.
///
/// The hash covers the qubit count and every stabilizer and logical row in
/// order; labels and descriptors do not contribute.
pub fn canonical_code_hash<C: StabilizerCode + ?Sized>(code: &C) -> String {
    let mut hasher = Sha256::new();
    hasher.update((code.num_qubits() as u64).to_le_bytes());
    update_matrix(&mut hasher, code.stabilizers());
    update_matrix(&mut hasher, code.logical_xs());
    update_matrix(&mut hasher, code.logical_zs());

    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}
