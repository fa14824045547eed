use qecsim_core::{ErrorInfo, QecError};
use serde::{Deserialize, Serialize};

/// Largest qubit ceiling accepted by [`NaiveDecoderConfig::check`].
pub const MAX_SUPPORTED_QUBITS: usize = 20;

/// Settings for [`crate::NaiveDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaiveDecoderConfig {
    /// Largest code (in physical qubits) the decoder will search; the search
    /// space grows as `4^n`.
    #[serde(default = "default_max_qubits")]
    pub max_qubits: usize,
}

fn default_max_qubits() -> usize {
    10
}

impl Default for NaiveDecoderConfig {
    fn default() -> Self {
        Self {
            max_qubits: default_max_qubits(),
        }
    }
}

impl NaiveDecoderConfig {
    /// Rejects a ceiling of zero or above [`MAX_SUPPORTED_QUBITS`].
    pub fn check(&self) -> Result<(), QecError> {
        if self.max_qubits == 0 || self.max_qubits > MAX_SUPPORTED_QUBITS {
            let info = ErrorInfo::new("max-qubits-out-of-range", "qubit ceiling is out of range")
                .with_context("max_qubits", self.max_qubits.to_string())
                .with_context("supported", format!("1..={MAX_SUPPORTED_QUBITS}"));
            return Err(QecError::Config(info));
        }
        Ok(())
    }
}
