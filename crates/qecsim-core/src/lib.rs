#![deny(missing_docs)]
#![doc = "Symplectic algebra plus the code, error-model and decoder contracts shared by the qecsim crates."]

use std::collections::BTreeMap;
use std::fmt;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Pauli strings, binary symplectic vectors/matrices and the symplectic product.
pub mod bsf;
pub mod errors;
pub mod rng;
/// Commutation checks for stabilizer codes.
pub mod validate;

pub use bsf::{
    bsf_to_pauli, bsf_to_paulis, bsp, pauli_to_bsf, paulis_to_bsf, BsfMatrix, BsfVector, Pauli,
    SymplecticProduct,
};
pub use errors::{ErrorInfo, QecError};
pub use rng::{derive_substream_seed, RngHandle};
pub use validate::{
    check_code, validate, ValidationCondition, ValidationFailure, ValidationReport,
};

/// Code descriptor `[n, k, d]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nkd {
    /// Number of physical qubits.
    pub n: usize,
    /// Number of logical qubits.
    pub k: usize,
    /// Code distance, `None` when unknown.
    #[serde(default)]
    pub d: Option<usize>,
}

impl Nkd {
    /// Creates a descriptor.
    pub const fn new(n: usize, k: usize, d: Option<usize>) -> Self {
        Self { n, k, d }
    }
}

impl fmt::Display for Nkd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.d {
            Some(d) => write!(f, "[{},{},{}]", self.n, self.k, d),
            None => write!(f, "[{},{},?]", self.n, self.k),
        }
    }
}

/// Contract implemented by every stabilizer code.
///
/// Matrices are fixed at construction and read concurrently by trials, so
/// implementations hand out shared references. Construction never validates;
/// call [`validate`] explicitly.
pub trait StabilizerCode: Send + Sync {
    /// Stabilizer generators, one per row. The set may be overcomplete.
    fn stabilizers(&self) -> &BsfMatrix;

    /// Logical X operators, row `i` paired with row `i` of [`Self::logical_zs`].
    fn logical_xs(&self) -> &BsfMatrix;

    /// Logical Z operators, row `i` paired with row `i` of [`Self::logical_xs`].
    fn logical_zs(&self) -> &BsfMatrix;

    /// Logical X operators stacked above logical Z operators.
    fn logicals(&self) -> Result<BsfMatrix, QecError> {
        self.logical_xs().vstack(self.logical_zs())
    }

    /// Returns the `[n, k, d]` descriptor.
    fn nkd(&self) -> Nkd;

    /// Returns a label suitable for plots and for grouping results.
    fn label(&self) -> String;

    /// Number of physical qubits the operators act on.
    fn num_qubits(&self) -> usize {
        self.stabilizers().num_qubits()
    }
}

/// Single-qubit Pauli probabilities `(pI, pX, pY, pZ)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauliDistribution {
    /// Probability of no error.
    pub i: f64,
    /// Probability of an X error.
    pub x: f64,
    /// Probability of a Y error.
    pub y: f64,
    /// Probability of a Z error.
    pub z: f64,
}

const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

impl PauliDistribution {
    /// Builds a distribution whose entries lie in `[0, 1]` and sum to one.
    pub fn new(i: f64, x: f64, y: f64, z: f64) -> Result<Self, QecError> {
        let distribution = Self { i, x, y, z };
        let entries = distribution.as_array();
        if entries.iter().any(|p| !(0.0..=1.0).contains(p)) {
            let info = ErrorInfo::new(
                "distribution-out-of-range",
                "Pauli probabilities must lie in [0, 1]",
            )
            .with_context("distribution", format!("{entries:?}"));
            return Err(QecError::Config(info));
        }
        let total: f64 = entries.iter().sum();
        if (total - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            let info = ErrorInfo::new("distribution-not-normalized", "Pauli probabilities must sum to 1")
                .with_context("sum", total.to_string());
            return Err(QecError::Config(info));
        }
        Ok(distribution)
    }

    /// Entries in `I, X, Y, Z` order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.i, self.x, self.y, self.z]
    }

    /// Draws one label.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Pauli {
        const LABELS: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];
        let entries = self.as_array();
        let draw: f64 = rng.gen();
        let mut cumulative = 0.0;
        for (label, p) in LABELS.iter().zip(entries) {
            cumulative += p;
            if draw < cumulative {
                return *label;
            }
        }
        // rounding left the cumulative sum just below one
        LABELS
            .iter()
            .zip(entries)
            .rev()
            .find(|(_, p)| *p > 0.0)
            .map_or(Pauli::I, |(label, _)| *label)
    }
}

/// Rejects probabilities outside `[0, 1]`, including NaN.
pub fn check_probability(probability: f64) -> Result<(), QecError> {
    if !(0.0..=1.0).contains(&probability) {
        let info = ErrorInfo::new("probability-out-of-range", "error probability must lie in [0, 1]")
            .with_context("probability", probability.to_string());
        return Err(QecError::Config(info));
    }
    Ok(())
}

/// Contract implemented by stochastic error models.
pub trait ErrorModel: Send + Sync {
    /// Returns a label suitable for plots and for grouping results.
    fn label(&self) -> String;

    /// Single-qubit distribution at error probability `probability`.
    ///
    /// Only models with independent, identically distributed noise define one.
    fn probability_distribution(&self, probability: f64) -> Result<PauliDistribution, QecError> {
        let info = ErrorInfo::new(
            "distribution-unsupported",
            "error model does not define a single-qubit distribution",
        )
        .with_context("model", self.label())
        .with_context("probability", probability.to_string());
        Err(QecError::Config(info))
    }

    /// Samples a physical error on the qubits of `code`.
    fn generate(
        &self,
        code: &dyn StabilizerCode,
        probability: f64,
        rng: &mut dyn RngCore,
    ) -> Result<BsfVector, QecError>;
}

/// Optional hints handed to a decoder alongside the syndrome.
#[derive(Default)]
pub struct DecodeContext<'a> {
    /// Error model the error was sampled from.
    pub error_model: Option<&'a dyn ErrorModel>,
    /// Error probability the error was sampled at.
    pub error_probability: Option<f64>,
    /// The sampled error itself.
    pub error: Option<&'a BsfVector>,
    /// Free-form named hints.
    pub hints: BTreeMap<String, String>,
}

impl<'a> DecodeContext<'a> {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the error model.
    pub fn with_error_model(mut self, model: &'a dyn ErrorModel) -> Self {
        self.error_model = Some(model);
        self
    }

    /// Attaches the error probability.
    pub fn with_error_probability(mut self, probability: f64) -> Self {
        self.error_probability = Some(probability);
        self
    }

    /// Attaches the sampled error.
    pub fn with_error(mut self, error: &'a BsfVector) -> Self {
        self.error = Some(error);
        self
    }

    /// Adds a named hint.
    pub fn with_hint(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.hints.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for DecodeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeContext")
            .field("error_model", &self.error_model.map(|model| model.label()))
            .field("error_probability", &self.error_probability)
            .field("error", &self.error)
            .field("hints", &self.hints)
            .finish()
    }
}

/// Output of a decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeResult {
    /// Proposed recovery operator.
    pub recovery: BsfVector,
    /// Decoder-asserted outcome. `Some(false)` flags that no consistent
    /// recovery was found; `None` leaves the verdict to the caller.
    #[serde(default)]
    pub success: Option<bool>,
    /// Decoder specific values reported alongside the recovery.
    #[serde(default)]
    pub custom_values: BTreeMap<String, String>,
}

impl DecodeResult {
    /// Wraps a recovery operator without asserting an outcome.
    pub fn from_recovery(recovery: BsfVector) -> Self {
        Self {
            recovery,
            success: None,
            custom_values: BTreeMap::new(),
        }
    }

    /// Reports that no consistent recovery exists; the recovery is the identity.
    pub fn failure(num_qubits: usize) -> Self {
        Self {
            recovery: BsfVector::identity(num_qubits),
            success: Some(false),
            custom_values: BTreeMap::new(),
        }
    }

    /// Returns whether the decoder flagged a failure.
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// Records a decoder specific value.
    pub fn with_custom_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_values.insert(key.into(), value.into());
        self
    }
}

/// Contract implemented by decoders.
pub trait Decoder: Send + Sync {
    /// Returns a label suitable for plots and for grouping results.
    fn label(&self) -> String;

    /// Infers a recovery operator from `syndrome`.
    ///
    /// `syndrome` has one entry per stabilizer row of `code`.
    fn decode(
        &self,
        code: &dyn StabilizerCode,
        syndrome: &[bool],
        ctx: &DecodeContext<'_>,
    ) -> Result<DecodeResult, QecError>;
}

/// Rejects a syndrome whose length differs from the stabilizer row count.
pub fn check_syndrome_length(
    code: &dyn StabilizerCode,
    syndrome: &[bool],
) -> Result<(), QecError> {
    let expected = code.stabilizers().num_rows();
    if syndrome.len() != expected {
        let info = ErrorInfo::new(
            "syndrome-length-mismatch",
            "syndrome length does not match number of stabilizers",
        )
        .with_context("num_stabilizers", expected.to_string())
        .with_context("syndrome_len", syndrome.len().to_string())
        .with_context("code", code.label());
        return Err(QecError::Dimension(info));
    }
    Ok(())
}
