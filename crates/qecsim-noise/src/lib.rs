#![deny(missing_docs)]
#![doc = "Error models sampling independent, identically distributed single-qubit Pauli noise."]

/// Biased depolarizing noise.
pub mod biased;
/// Bit-flip, phase-flip, bit-phase-flip and depolarizing noise.
pub mod iid;

pub use biased::BiasedDepolarizingErrorModel;
pub use iid::{
    sample_iid, BitFlipErrorModel, BitPhaseFlipErrorModel, DepolarizingErrorModel,
    PhaseFlipErrorModel,
};
