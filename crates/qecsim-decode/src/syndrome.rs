use qecsim_core::{bsp, BsfVector, DecodeResult, QecError, StabilizerCode};

/// Stabilizers of `code` that anticommute with `error`, in stabilizer row order.
pub fn syndrome(code: &dyn StabilizerCode, error: &BsfVector) -> Result<Vec<bool>, QecError> {
    bsp(code.stabilizers(), error)
}

/// Classification of one recovery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryOutcome {
    /// Recovery composed with the error.
    pub residual: BsfVector,
    /// Whether the residual commutes with every stabilizer.
    pub returns_to_codespace: bool,
    /// Residual against each logical operator, X rows then Z rows.
    pub logical_commutations: Vec<bool>,
    /// Whether the encoded state survived. A decoder-asserted outcome takes precedence.
    pub success: bool,
}

/// Composes the decoder's recovery with `error` and classifies the result.
///
/// The residual must commute with every stabilizer to return to the code
/// space, and with every logical to leave the encoded state untouched.
pub fn resolve(
    code: &dyn StabilizerCode,
    error: &BsfVector,
    result: &DecodeResult,
) -> Result<RecoveryOutcome, QecError> {
    let residual = result.recovery.compose(error)?;
    let returns_to_codespace = !bsp(code.stabilizers(), &residual)?.contains(&true);
    if !returns_to_codespace {
        tracing::warn!(
            code = %code.label(),
            residual = %residual,
            "recovery does not return to the code space"
        );
    }
    let logical_commutations = bsp(&code.logicals()?, &residual)?;
    let success = result
        .success
        .unwrap_or(returns_to_codespace && !logical_commutations.contains(&true));
    Ok(RecoveryOutcome {
        residual,
        returns_to_codespace,
        logical_commutations,
        success,
    })
}
