use std::fmt;

use qecsim_core::{pauli_to_bsf, BsfMatrix, ErrorInfo, Nkd, QecError, StabilizerCode};
use serde::{Deserialize, Serialize};

/// Which operator list a Pauli string was supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperatorKind {
    /// Stabilizer generator.
    Stabilizer,
    /// Logical X operator.
    LogicalX,
    /// Logical Z operator.
    LogicalZ,
}

/// Optional overrides applied when building a [`BasicCode`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCodeOptions {
    /// Descriptor; defaults to `(n, k, None)` evaluated from the operators.
    #[serde(default)]
    pub nkd: Option<Nkd>,
    /// Label; defaults to `"Basic [n,k,d]"` with an unknown distance shown as `?`.
    #[serde(default)]
    pub label: Option<String>,
}

impl BasicCodeOptions {
    /// Sets the descriptor.
    pub fn with_nkd(mut self, nkd: Nkd) -> Self {
        self.nkd = Some(nkd);
        self
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Stabilizer code defined by its stabilizers and logical operators.
///
/// Paulis are strings of capital `I`, `X`, `Y`, `Z` with one character per
/// physical qubit. Logical X and Z operators are given in matching order, one
/// of each per logical qubit. Construction checks shapes only; commutation
/// relations are checked by [`qecsim_core::validate`].
#[derive(Clone)]
pub struct BasicCode {
    stabilizers: BsfMatrix,
    logical_xs: BsfMatrix,
    logical_zs: BsfMatrix,
    nkd: Nkd,
    label: String,
}

impl fmt::Debug for BasicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCode")
            .field("label", &self.label)
            .field("nkd", &self.nkd)
            .field("stabilizers", &self.stabilizers.to_paulis())
            .field("logical_xs", &self.logical_xs.to_paulis())
            .field("logical_zs", &self.logical_zs.to_paulis())
            .finish()
    }
}

impl BasicCode {
    /// Builds a code with the default descriptor and label.
    pub fn new<S: AsRef<str>>(
        stabilizers: &[S],
        logical_xs: &[S],
        logical_zs: &[S],
    ) -> Result<Self, QecError> {
        Self::with_options(
            stabilizers,
            logical_xs,
            logical_zs,
            BasicCodeOptions::default(),
        )
    }

    /// Builds a code, applying any overrides in `options`.
    pub fn with_options<S: AsRef<str>>(
        stabilizers: &[S],
        logical_xs: &[S],
        logical_zs: &[S],
        options: BasicCodeOptions,
    ) -> Result<Self, QecError> {
        if logical_xs.len() != logical_zs.len() {
            let info = ErrorInfo::new(
                "logical-count-mismatch",
                "logical X and Z operators must come in pairs",
            )
            .with_context("logical_xs", logical_xs.len().to_string())
            .with_context("logical_zs", logical_zs.len().to_string());
            return Err(QecError::Format(info));
        }

        let num_qubits = stabilizers
            .iter()
            .chain(logical_xs)
            .chain(logical_zs)
            .next()
            .map_or(0, |pauli| pauli.as_ref().chars().count());

        let stabilizers = parse_block(OperatorKind::Stabilizer, num_qubits, stabilizers)?;
        let logical_xs = parse_block(OperatorKind::LogicalX, num_qubits, logical_xs)?;
        let logical_zs = parse_block(OperatorKind::LogicalZ, num_qubits, logical_zs)?;

        let nkd = options
            .nkd
            .unwrap_or_else(|| Nkd::new(num_qubits, logical_xs.num_rows(), None));
        let label = options.label.unwrap_or_else(|| format!("Basic {nkd}"));

        Ok(Self {
            stabilizers,
            logical_xs,
            logical_zs,
            nkd,
            label,
        })
    }

    /// Stabilizers as Pauli strings.
    pub fn pauli_stabilizers(&self) -> Vec<String> {
        self.stabilizers.to_paulis()
    }

    /// Logical X operators as Pauli strings.
    pub fn pauli_logical_xs(&self) -> Vec<String> {
        self.logical_xs.to_paulis()
    }

    /// Logical Z operators as Pauli strings.
    pub fn pauli_logical_zs(&self) -> Vec<String> {
        self.logical_zs.to_paulis()
    }
}

fn parse_block<S: AsRef<str>>(
    kind: OperatorKind,
    num_qubits: usize,
    paulis: &[S],
) -> Result<BsfMatrix, QecError> {
    let mut rows = Vec::with_capacity(paulis.len());
    for (idx, pauli) in paulis.iter().enumerate() {
        let row = pauli_to_bsf(pauli.as_ref())?;
        if row.num_qubits() != num_qubits {
            let info = ErrorInfo::new(
                "inconsistent-pauli-length",
                "all stabilizers and logicals must act on the same qubits",
            )
            .with_context("operator_kind", format!("{kind:?}"))
            .with_context("operator_index", idx.to_string())
            .with_context("expected", num_qubits.to_string())
            .with_context("found", row.num_qubits().to_string());
            return Err(QecError::Format(info));
        }
        rows.push(row);
    }
    BsfMatrix::from_rows(num_qubits, rows)
}

impl StabilizerCode for BasicCode {
    fn stabilizers(&self) -> &BsfMatrix {
        &self.stabilizers
    }

    fn logical_xs(&self) -> &BsfMatrix {
        &self.logical_xs
    }

    fn logical_zs(&self) -> &BsfMatrix {
        &self.logical_zs
    }

    fn nkd(&self) -> Nkd {
        self.nkd
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}
