use qecsim_core::{check_probability, DecodeContext, Decoder, ErrorModel, QecError, StabilizerCode};
use rand::RngCore;

use crate::syndrome::{resolve, syndrome, RecoveryOutcome};

/// Runs one trial: samples an error, measures its syndrome, decodes and resolves.
///
/// The decoder receives the error model, the probability and the sampled
/// error as hints.
pub fn run_once(
    code: &dyn StabilizerCode,
    error_model: &dyn ErrorModel,
    decoder: &dyn Decoder,
    probability: f64,
    rng: &mut dyn RngCore,
) -> Result<RecoveryOutcome, QecError> {
    check_probability(probability)?;
    let error = error_model.generate(code, probability, rng)?;
    let syndrome = syndrome(code, &error)?;
    let ctx = DecodeContext::new()
        .with_error_model(error_model)
        .with_error_probability(probability)
        .with_error(&error);
    let result = decoder.decode(code, &syndrome, &ctx)?;
    let outcome = resolve(code, &error, &result)?;
    tracing::debug!(
        code = %code.label(),
        error_model = %error_model.label(),
        decoder = %decoder.label(),
        error = %error,
        recovery = %result.recovery,
        success = outcome.success,
        "trial resolved"
    );
    Ok(outcome)
}
