use qecsim_core::{
    check_syndrome_length, paulis_to_bsf, BsfMatrix, BsfVector, DecodeContext, DecodeResult,
    Decoder, ErrorModel, Nkd, PauliDistribution, QecError, RngHandle, StabilizerCode,
};
use rand::RngCore;

struct DummyCode {
    stabilizers: BsfMatrix,
    logical_xs: BsfMatrix,
    logical_zs: BsfMatrix,
}

impl Default for DummyCode {
    fn default() -> Self {
        Self {
            stabilizers: paulis_to_bsf(&["ZZ"]).unwrap(),
            logical_xs: paulis_to_bsf(&["XX"]).unwrap(),
            logical_zs: paulis_to_bsf(&["ZI"]).unwrap(),
        }
    }
}

impl StabilizerCode for DummyCode {
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
        Nkd::new(2, 1, Some(1))
    }

    fn label(&self) -> String {
        format!("Dummy {}", self.nkd())
    }
}

struct StructuredNoise;

impl ErrorModel for StructuredNoise {
    fn label(&self) -> String {
        "structured".into()
    }

    fn generate(
        &self,
        code: &dyn StabilizerCode,
        _probability: f64,
        _rng: &mut dyn RngCore,
    ) -> Result<BsfVector, QecError> {
        Ok(BsfVector::identity(code.num_qubits()))
    }
}

struct IdentityDecoder;

impl Decoder for IdentityDecoder {
    fn label(&self) -> String {
        "identity".into()
    }

    fn decode(
        &self,
        code: &dyn StabilizerCode,
        syndrome: &[bool],
        ctx: &DecodeContext<'_>,
    ) -> Result<DecodeResult, QecError> {
        check_syndrome_length(code, syndrome)?;
        let mut result = DecodeResult::from_recovery(BsfVector::identity(code.num_qubits()));
        if let Some(p) = ctx.error_probability {
            result = result.with_custom_value("p", p.to_string());
        }
        Ok(result)
    }
}

#[test]
fn contracts_are_object_safe() {
    let code: Box<dyn StabilizerCode> = Box::new(DummyCode::default());
    let model: Box<dyn ErrorModel> = Box::new(StructuredNoise);
    let decoder: Box<dyn Decoder> = Box::new(IdentityDecoder);

    assert_eq!(code.label(), "Dummy [2,1,1]");
    assert_eq!(code.logicals().unwrap().num_rows(), 2);

    let mut rng = RngHandle::from_seed(3);
    let error = model.generate(code.as_ref(), 0.1, &mut rng).unwrap();
    assert!(error.is_identity());
    assert!(matches!(
        model.probability_distribution(0.1),
        Err(QecError::Config(_))
    ));

    let ctx = DecodeContext::new()
        .with_error_model(model.as_ref())
        .with_error_probability(0.1)
        .with_error(&error)
        .with_hint("round", "1");
    let result = decoder.decode(code.as_ref(), &[false], &ctx).unwrap();
    assert_eq!(result.success, None);
    assert_eq!(result.custom_values["p"], "0.1");
    assert!(format!("{ctx:?}").contains("structured"));

    let err = decoder
        .decode(code.as_ref(), &[false, true], &DecodeContext::new())
        .unwrap_err();
    assert_eq!(err.code(), "syndrome-length-mismatch");
}

#[test]
fn failure_results_carry_identity_recovery() {
    let result = DecodeResult::failure(4);
    assert!(result.is_failure());
    assert!(result.recovery.is_identity());
    assert_eq!(result.recovery.num_qubits(), 4);
}

#[test]
fn distributions_must_be_normalized() {
    assert!(PauliDistribution::new(0.7, 0.1, 0.1, 0.1).is_ok());
    let err = PauliDistribution::new(0.5, 0.1, 0.1, 0.1).unwrap_err();
    assert_eq!(err.code(), "distribution-not-normalized");
    let err = PauliDistribution::new(1.2, -0.2, 0.0, 0.0).unwrap_err();
    assert_eq!(err.code(), "distribution-out-of-range");
}

#[test]
fn degenerate_distributions_only_emit_supported_labels() {
    let distribution = PauliDistribution::new(0.0, 1.0, 0.0, 0.0).unwrap();
    let mut rng = RngHandle::from_seed(11);
    for _ in 0..200 {
        assert_eq!(distribution.sample(&mut rng), qecsim_core::Pauli::X);
    }
}

#[test]
fn probabilities_are_range_checked() {
    assert!(qecsim_core::check_probability(0.0).is_ok());
    assert!(qecsim_core::check_probability(1.0).is_ok());
    assert!(qecsim_core::check_probability(1.5).is_err());
    assert!(qecsim_core::check_probability(f64::NAN).is_err());
}
