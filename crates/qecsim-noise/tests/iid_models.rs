use qecsim_code::{five_qubit_code, steane_code};
use qecsim_core::{ErrorModel, Pauli, PauliDistribution, QecError, RngHandle, StabilizerCode};
use qecsim_noise::{
    sample_iid, BiasedDepolarizingErrorModel, BitFlipErrorModel, BitPhaseFlipErrorModel,
    DepolarizingErrorModel, PhaseFlipErrorModel,
};
use proptest::prelude::*;

fn assert_close(actual: PauliDistribution, expected: [f64; 4]) {
    for (a, e) in actual.as_array().iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
    }
}

#[test]
fn distributions_match_their_channels() {
    let p = 0.3;
    assert_close(BitFlipErrorModel.probability_distribution(p).unwrap(), [0.7, 0.3, 0.0, 0.0]);
    assert_close(PhaseFlipErrorModel.probability_distribution(p).unwrap(), [0.7, 0.0, 0.0, 0.3]);
    assert_close(BitPhaseFlipErrorModel.probability_distribution(p).unwrap(), [0.7, 0.0, 0.3, 0.0]);
    assert_close(DepolarizingErrorModel.probability_distribution(p).unwrap(), [0.7, 0.1, 0.1, 0.1]);
}

#[test]
fn biased_distribution_favours_its_axis() {
    let model = BiasedDepolarizingErrorModel::new(10.0, Pauli::Z).unwrap();
    let distribution = model.probability_distribution(0.11).unwrap();
    assert_close(distribution, [0.89, 0.005, 0.005, 0.1]);

    let model = BiasedDepolarizingErrorModel::new(0.5, Pauli::Y).unwrap();
    let distribution = model.probability_distribution(0.3).unwrap();
    assert_close(distribution, [0.7, 0.1, 0.1, 0.1]);
    assert_eq!(model.label(), "Biased-depolarizing (bias=0.5, axis=Y)");
}

#[test]
fn biased_parameters_are_checked() {
    let err = BiasedDepolarizingErrorModel::new(0.0, Pauli::X).unwrap_err();
    assert_eq!(err.code(), "bias-out-of-range");
    let err = BiasedDepolarizingErrorModel::new(f64::INFINITY, Pauli::X).unwrap_err();
    assert!(matches!(err, QecError::Config(_)));
    let err = BiasedDepolarizingErrorModel::new(3.0, Pauli::I).unwrap_err();
    assert_eq!(err.code(), "invalid-bias-axis");
}

#[test]
fn out_of_range_probability_is_a_config_error() {
    let code = five_qubit_code().unwrap();
    let mut rng = RngHandle::from_seed(5);
    for p in [-0.1, 1.1, f64::NAN] {
        let err = DepolarizingErrorModel
            .generate(&code, p, &mut rng)
            .expect_err("probability out of range");
        match err {
            QecError::Config(info) => assert_eq!(info.code, "probability-out-of-range"),
            other => panic!("unexpected error variant: {:?}", other),
        }
    }
}

#[test]
fn extreme_probabilities_are_deterministic() {
    let code = steane_code().unwrap();
    let mut rng = RngHandle::from_seed(9);
    let none = DepolarizingErrorModel.generate(&code, 0.0, &mut rng).unwrap();
    assert!(none.is_identity());
    assert_eq!(none.num_qubits(), 7);

    let all = BitFlipErrorModel.generate(&code, 1.0, &mut rng).unwrap();
    assert_eq!(all.to_pauli(), "XXXXXXX");
    let all = PhaseFlipErrorModel.generate(&code, 1.0, &mut rng).unwrap();
    assert_eq!(all.to_pauli(), "ZZZZZZZ");
    let all = BitPhaseFlipErrorModel.generate(&code, 1.0, &mut rng).unwrap();
    assert_eq!(all.to_pauli(), "YYYYYYY");
}

#[test]
fn empirical_rate_tracks_probability() {
    let distribution = DepolarizingErrorModel.probability_distribution(0.2).unwrap();
    let mut rng = RngHandle::from_seed(2024);
    let error = sample_iid(&distribution, 20_000, &mut rng).unwrap();
    let rate = error.weight() as f64 / 20_000.0;
    assert!((rate - 0.2).abs() < 0.02, "rate {rate}");
}

#[test]
fn models_are_usable_as_trait_objects() {
    let models: Vec<Box<dyn ErrorModel>> = vec![
        Box::new(BitFlipErrorModel),
        Box::new(PhaseFlipErrorModel),
        Box::new(BitPhaseFlipErrorModel),
        Box::new(DepolarizingErrorModel),
        Box::new(BiasedDepolarizingErrorModel::new(3.0, Pauli::X).unwrap()),
    ];
    let labels: Vec<String> = models.iter().map(|m| m.label()).collect();
    assert_eq!(labels[..4], ["Bit-flip", "Phase-flip", "Bit-phase-flip", "Depolarizing"]);
}

#[test]
fn biased_model_loads_from_json() {
    let model: BiasedDepolarizingErrorModel =
        serde_json::from_str(r#"{"bias": 10.0, "axis": "Z"}"#).unwrap();
    assert_eq!(model.axis(), Pauli::Z);
    assert_eq!(model.bias(), 10.0);

    let model: BiasedDepolarizingErrorModel =
        serde_json::from_str(r#"{"bias": -1.0, "axis": "Z"}"#).unwrap();
    assert!(model.probability_distribution(0.1).is_err());
}

proptest! {
    #[test]
    fn sampling_is_reproducible_per_seed(seed in any::<u64>(), p in 0.0f64..=1.0) {
        let code = five_qubit_code().unwrap();
        let mut rng_a = RngHandle::from_seed(seed);
        let mut rng_b = RngHandle::from_seed(seed);
        let a = DepolarizingErrorModel.generate(&code, p, &mut rng_a).unwrap();
        let b = DepolarizingErrorModel.generate(&code, p, &mut rng_b).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.num_qubits(), code.num_qubits());
    }

    #[test]
    fn single_axis_models_only_emit_their_label(seed in any::<u64>(), p in 0.0f64..=1.0) {
        let code = five_qubit_code().unwrap();
        let mut rng = RngHandle::from_seed(seed);
        let error = BitFlipErrorModel.generate(&code, p, &mut rng).unwrap();
        prop_assert!(error.z_part().iter().all(|&bit| !bit));
        let error = PhaseFlipErrorModel.generate(&code, p, &mut rng).unwrap();
        prop_assert!(error.x_part().iter().all(|&bit| !bit));
    }
}
