#![deny(missing_docs)]
#![doc = "Decoders and the syndrome/recovery glue between error models and decoders."]

/// Decoder configuration structures.
pub mod config;
/// Exhaustive minimum-weight reference decoder.
pub mod naive;
/// Syndrome computation and recovery resolution.
pub mod syndrome;
/// Single simulation trial: sample, measure, decode, resolve.
pub mod trial;

pub use config::NaiveDecoderConfig;
pub use naive::{CandidateErrors, NaiveDecoder};
pub use syndrome::{resolve, syndrome, RecoveryOutcome};
pub use trial::run_once;
