use qecsim_core::{
    check_probability, BsfVector, ErrorModel, PauliDistribution, QecError, StabilizerCode,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Samples one label per qubit from `distribution`.
pub fn sample_iid(
    distribution: &PauliDistribution,
    num_qubits: usize,
    rng: &mut dyn RngCore,
) -> Result<BsfVector, QecError> {
    let mut x = vec![false; num_qubits];
    let mut z = vec![false; num_qubits];
    for q in 0..num_qubits {
        (x[q], z[q]) = distribution.sample(rng).bits();
    }
    BsfVector::from_xz(&x, &z)
}

pub(crate) fn generate_iid(
    model: &dyn ErrorModel,
    code: &dyn StabilizerCode,
    probability: f64,
    rng: &mut dyn RngCore,
) -> Result<BsfVector, QecError> {
    let distribution = model.probability_distribution(probability)?;
    let error = sample_iid(&distribution, code.num_qubits(), rng)?;
    tracing::trace!(
        model = %model.label(),
        code = %code.label(),
        probability,
        weight = error.weight(),
        "sampled error"
    );
    Ok(error)
}

/// X errors with probability `p` on each qubit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitFlipErrorModel;

impl ErrorModel for BitFlipErrorModel {
    fn label(&self) -> String {
        "Bit-flip".to_string()
    }

    fn probability_distribution(&self, probability: f64) -> Result<PauliDistribution, QecError> {
        check_probability(probability)?;
        PauliDistribution::new(1.0 - probability, probability, 0.0, 0.0)
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

/// Z errors with probability `p` on each qubit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseFlipErrorModel;

impl ErrorModel for PhaseFlipErrorModel {
    fn label(&self) -> String {
        "Phase-flip".to_string()
    }

    fn probability_distribution(&self, probability: f64) -> Result<PauliDistribution, QecError> {
        check_probability(probability)?;
        PauliDistribution::new(1.0 - probability, 0.0, 0.0, probability)
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

/// Y errors with probability `p` on each qubit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitPhaseFlipErrorModel;

impl ErrorModel for BitPhaseFlipErrorModel {
    fn label(&self) -> String {
        "Bit-phase-flip".to_string()
    }

    fn probability_distribution(&self, probability: f64) -> Result<PauliDistribution, QecError> {
        check_probability(probability)?;
        PauliDistribution::new(1.0 - probability, 0.0, probability, 0.0)
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

/// X, Y or Z errors with probability `p / 3` each on every qubit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepolarizingErrorModel;

impl ErrorModel for DepolarizingErrorModel {
    fn label(&self) -> String {
        "Depolarizing".to_string()
    }

    fn probability_distribution(&self, probability: f64) -> Result<PauliDistribution, QecError> {
        check_probability(probability)?;
        let p = probability / 3.0;
        PauliDistribution::new(1.0 - probability, p, p, p)
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
