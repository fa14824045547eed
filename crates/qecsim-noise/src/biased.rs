use qecsim_core::{
    check_probability, BsfVector, ErrorInfo, ErrorModel, Pauli, PauliDistribution, QecError,
    StabilizerCode,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::iid::generate_iid;

/// Depolarizing noise biased towards one Pauli axis.
///
/// With bias `η`, the axis label occurs with probability `η / (η + 1) · p`
/// and each other non-identity label with `1 / (2 (η + 1)) · p`. A bias of
/// `0.5` is standard depolarizing noise; large biases approach pure
/// single-axis noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasedDepolarizingErrorModel {
    bias: f64,
    axis: Pauli,
}

impl BiasedDepolarizingErrorModel {
    /// Creates the model; `bias` must be finite and positive, `axis` one of X, Y, Z.
    pub fn new(bias: f64, axis: Pauli) -> Result<Self, QecError> {
        let model = Self { bias, axis };
        model.check()?;
        Ok(model)
    }

    /// Returns the bias `η`.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Returns the favoured axis.
    pub fn axis(&self) -> Pauli {
        self.axis
    }

    fn check(&self) -> Result<(), QecError> {
        if !(self.bias.is_finite() && self.bias > 0.0) {
            let info = ErrorInfo::new("bias-out-of-range", "bias must be finite and positive")
                .with_context("bias", self.bias.to_string());
            return Err(QecError::Config(info));
        }
        if self.axis == Pauli::I {
            let info = ErrorInfo::new("invalid-bias-axis", "bias axis must be X, Y or Z")
                .with_context("axis", self.axis.to_string());
            return Err(QecError::Config(info));
        }
        Ok(())
    }
}

impl ErrorModel for BiasedDepolarizingErrorModel {
    fn label(&self) -> String {
        format!("Biased-depolarizing (bias={}, axis={})", self.bias, self.axis)
    }

    fn probability_distribution(&self, probability: f64) -> Result<PauliDistribution, QecError> {
        self.check()?;
        check_probability(probability)?;
        let high = self.bias / (self.bias + 1.0) * probability;
        let low = 1.0 / (2.0 * (self.bias + 1.0)) * probability;
        let (x, y, z) = match self.axis {
            Pauli::X => (high, low, low),
            Pauli::Y => (low, high, low),
            _ => (low, low, high),
        };
        PauliDistribution::new(1.0 - probability, x, y, z)
    }

    fn generate(
        &self,
        code: &dyn StabilizerCode,
        probability: f64,
        rng: &mut dyn RngCore,
    ) -> Result<BsfVector, QecError> {
        generate_iid(self, code, probability, rng)
    }
}
