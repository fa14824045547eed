use qecsim_core::{ErrorInfo, Nkd, QecError, StabilizerCode};
use serde::{Deserialize, Serialize};

use crate::basic::{BasicCode, BasicCodeOptions};

#[derive(Debug, Serialize, Deserialize)]
struct SerializableBasicCode {
    label: String,
    nkd: Nkd,
    stabilizers: Vec<String>,
    logical_xs: Vec<String>,
    logical_zs: Vec<String>,
}

impl SerializableBasicCode {
    fn from_code(code: &BasicCode) -> Self {
        Self {
            label: code.label(),
            nkd: code.nkd(),
            stabilizers: code.pauli_stabilizers(),
            logical_xs: code.pauli_logical_xs(),
            logical_zs: code.pauli_logical_zs(),
        }
    }

    fn into_code(self) -> Result<BasicCode, QecError> {
        BasicCode::with_options(
            &self.stabilizers,
            &self.logical_xs,
            &self.logical_zs,
            BasicCodeOptions::default()
                .with_nkd(self.nkd)
                .with_label(self.label),
        )
    }
}

/// Serializes a basic code to a JSON string.
pub fn to_json(code: &BasicCode) -> Result<String, QecError> {
    serde_json::to_string_pretty(&SerializableBasicCode::from_code(code))
        .map_err(|err| QecError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a basic code from a JSON string.
pub fn from_json(data: &str) -> Result<BasicCode, QecError> {
    let payload: SerializableBasicCode = serde_json::from_str(data)
        .map_err(|err| QecError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    payload.into_code()
}

/// Serializes a basic code into a binary blob.
pub fn to_bytes(code: &BasicCode) -> Result<Vec<u8>, QecError> {
    bincode::serialize(&SerializableBasicCode::from_code(code))
        .map_err(|err| QecError::Serde(ErrorInfo::new("bincode-serialize", err.to_string())))
}

/// Rehydrates a basic code from a binary blob.
pub fn from_bytes(bytes: &[u8]) -> Result<BasicCode, QecError> {
    let payload: SerializableBasicCode = bincode::deserialize(bytes)
        .map_err(|err| QecError::Serde(ErrorInfo::new("bincode-deserialize", err.to_string())))?;
    payload.into_code()
}
