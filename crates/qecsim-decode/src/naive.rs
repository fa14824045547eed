use qecsim_core::{
    bsp, check_syndrome_length, BsfVector, DecodeContext, DecodeResult, Decoder, ErrorInfo, Pauli,
    QecError, StabilizerCode,
};

use crate::config::NaiveDecoderConfig;

/// Every Pauli error on `num_qubits` qubits in ascending weight order.
///
/// Each item lists the non-identity `(qubit, label)` terms of one error,
/// sorted by qubit. Within a weight, supports are visited as lexicographic
/// combinations of qubit indices and, for each support, labels run over
/// `X < Y < Z` like an odometer whose last qubit turns fastest. For two
/// qubits the order is `II, XI, YI, ZI, IX, IY, IZ, XX, XY, XZ, YX, ...`.
///
/// The order is support-major, not lexicographic over `(qubit, label)`
/// pairs: every label assignment on support `{0, 1}` precedes any on
/// `{0, 2}`, so `XYI` is visited before `XIX`.
#[derive(Debug, Clone)]
pub struct CandidateErrors {
    num_qubits: usize,
    support: Vec<usize>,
    labels: Vec<usize>,
    exhausted: bool,
}

impl CandidateErrors {
    /// Starts the enumeration at the identity.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            support: Vec::new(),
            labels: Vec::new(),
            exhausted: false,
        }
    }

    fn current(&self) -> Vec<(usize, Pauli)> {
        self.support
            .iter()
            .zip(&self.labels)
            .map(|(&qubit, &label)| (qubit, Pauli::NON_IDENTITY[label]))
            .collect()
    }

    fn advance(&mut self) {
        for idx in (0..self.labels.len()).rev() {
            if self.labels[idx] + 1 < Pauli::NON_IDENTITY.len() {
                self.labels[idx] += 1;
                self.labels[idx + 1..].fill(0);
                return;
            }
        }
        if next_combination(&mut self.support, self.num_qubits) {
            self.labels.fill(0);
            return;
        }
        let weight = self.support.len() + 1;
        if weight > self.num_qubits {
            self.exhausted = true;
            return;
        }
        self.support = (0..weight).collect();
        self.labels = vec![0; weight];
    }
}

impl Iterator for CandidateErrors {
    type Item = Vec<(usize, Pauli)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let candidate = self.current();
        self.advance();
        Some(candidate)
    }
}

fn next_combination(support: &mut [usize], num_qubits: usize) -> bool {
    let k = support.len();
    for idx in (0..k).rev() {
        if support[idx] < num_qubits - k + idx {
            support[idx] += 1;
            for next in idx + 1..k {
                support[next] = support[next - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Reference decoder returning the first lowest-weight error consistent with the syndrome.
///
/// Candidates come from [`CandidateErrors`], so ties within a weight are
/// broken by that fixed order. The search is exponential in the number of
/// qubits and refuses codes larger than [`NaiveDecoderConfig::max_qubits`].
#[derive(Debug, Clone, Default)]
pub struct NaiveDecoder {
    config: NaiveDecoderConfig,
}

impl NaiveDecoder {
    /// Creates a decoder after checking `config`.
    pub fn new(config: NaiveDecoderConfig) -> Result<Self, QecError> {
        config.check()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &NaiveDecoderConfig {
        &self.config
    }
}

impl Decoder for NaiveDecoder {
    fn label(&self) -> String {
        "Naive".to_string()
    }

    fn decode(
        &self,
        code: &dyn StabilizerCode,
        syndrome: &[bool],
        _ctx: &DecodeContext<'_>,
    ) -> Result<DecodeResult, QecError> {
        check_syndrome_length(code, syndrome)?;
        let num_qubits = code.num_qubits();
        if num_qubits > self.config.max_qubits {
            let info = ErrorInfo::new(
                "too-many-qubits",
                "code is too large for exhaustive decoding",
            )
            .with_context("code", code.label())
            .with_context("num_qubits", num_qubits.to_string())
            .with_context("max_qubits", self.config.max_qubits.to_string())
            .with_hint("raise NaiveDecoderConfig::max_qubits or use a scalable decoder");
            return Err(QecError::Capacity(info));
        }

        let stabilizers = code.stabilizers();
        let mut examined = 0usize;
        for terms in CandidateErrors::new(num_qubits) {
            examined += 1;
            let candidate = BsfVector::from_sparse(num_qubits, &terms)?;
            if bsp(stabilizers, &candidate)? == syndrome {
                tracing::debug!(
                    code = %code.label(),
                    weight = terms.len(),
                    examined,
                    "naive decoder matched syndrome"
                );
                return Ok(DecodeResult::from_recovery(candidate)
                    .with_custom_value("candidates_examined", examined.to_string()));
            }
        }

        tracing::warn!(
            code = %code.label(),
            examined,
            "no error is consistent with the syndrome"
        );
        Ok(DecodeResult::failure(num_qubits)
            .with_custom_value("candidates_examined", examined.to_string()))
    }
}
