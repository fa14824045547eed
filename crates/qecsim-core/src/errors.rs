//! Error families returned by every qecsim operation.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic carried by every [`QecError`].
///
/// `code` is a kebab-case identifier callers may match on; `context` holds
/// the offending indices and sizes as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable identifier such as `"width-mismatch"`.
    pub code: String,
    /// Diagnostic for humans.
    pub message: String,
    /// Offending row indices, widths and similar details.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested remedy, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Starts a diagnostic with no context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records one context entry, replacing an earlier value for `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a remedy.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Error type shared by all qecsim crates; the variant names the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum QecError {
    /// Malformed Pauli strings, inconsistent lengths or odd symplectic widths.
    #[error("format error: {0}")]
    Format(ErrorInfo),
    /// Mismatched vector/matrix widths, row counts or syndrome lengths.
    #[error("dimension error: {0}")]
    Dimension(ErrorInfo),
    /// Stabilizer/logical commutation relations do not hold.
    #[error("validation error: {0}")]
    Validation(ErrorInfo),
    /// Out-of-range probabilities or construction parameters.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Problem size exceeds a stated capability bound.
    #[error("capacity error: {0}")]
    Capacity(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " | context: [{}]", pairs.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, " | hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl QecError {
    /// Diagnostic payload, whatever the family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            QecError::Format(info)
            | QecError::Dimension(info)
            | QecError::Validation(info)
            | QecError::Config(info)
            | QecError::Capacity(info)
            | QecError::Serde(info) => info,
        }
    }

    /// Returns the stable error code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
