use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use zf_app::{
    GasInputs, PseudoCriticalMethod, ZModel, ZOutput, ZRequest, ZfError, calc, calc_report, calc_z,
    parse_request,
};

fn sour_sutton() -> ZRequest {
    ZRequest::new(GasInputs::new().sg(0.7).t(75.0).p(2010.0).h2s(0.07).co2(0.1))
        .with_method(PseudoCriticalMethod::Sutton)
}

#[test]
fn sutton_dak_reference_scenario() {
    let report = calc_report(&sour_sutton().with_model(ZModel::Dak)).unwrap();
    assert_abs_diff_eq!(report.z, 0.7730, epsilon = 1e-3);
    assert_abs_diff_eq!(report.pr, 3.1995, epsilon = 1e-3);
    assert_abs_diff_eq!(report.tr, 1.5006, epsilon = 1e-3);
}

#[test]
fn every_model_gives_a_plausible_z_for_the_reference_gas() {
    let expected = [
        (ZModel::Dak, 0.77307),
        (ZModel::HallYarborough, 0.77138),
        (ZModel::Londono, 0.77547),
        (ZModel::Kareem, 0.76674),
    ];
    for (model, z) in expected {
        let got = calc_z(&sour_sutton().with_model(model)).unwrap();
        assert_abs_diff_eq!(got, z, epsilon = 1e-4);
    }
}

#[test]
fn piper_is_the_default_method() {
    let request = ZRequest::new(GasInputs::new().sg(0.7).t(75.0).p(2010.0).h2s(0.07).co2(0.1));
    let report = calc_report(&request).unwrap();
    assert_abs_diff_eq!(report.properties.get(zf_pseudocritical::Arg::Tpc).unwrap(), 373.615, epsilon = 1e-2);
    assert_abs_diff_eq!(report.properties.get(zf_pseudocritical::Arg::Ppc).unwrap(), 747.947, epsilon = 1e-2);
    assert_abs_diff_eq!(report.z, 0.74184, epsilon = 1e-4);
}

#[test]
fn explicit_model_is_deterministic_and_iteration_free() {
    let request = ZRequest::new(GasInputs::new().sg(0.7).t(75.0).p(2010.0)).with_model(ZModel::Kareem);
    let first = calc_report(&request).unwrap();
    let second = calc_report(&request).unwrap();
    assert_eq!(first.z.to_bits(), second.z.to_bits());
    assert_eq!(first.solution.iterations, 0);
    assert_eq!(first.solution.guess_used, None);
    assert_eq!(first.z, zf_eos::kareem(first.pr, first.tr));
}

#[test]
fn reduced_properties_only() {
    let z = calc_z(&ZRequest::reduced(1.5, 1.5)).unwrap();
    assert_abs_diff_eq!(z, 0.8593, epsilon = 1e-3);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let request = sour_sutton();
    let a = calc_z(&request).unwrap();
    let b = calc_z(&request).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn ppc_override_with_sg_conflicts() {
    let request = ZRequest::new(GasInputs::new().sg(0.7).t(75.0).p(2010.0).ppc(700.0));
    let err = calc_z(&request).unwrap_err();
    assert_eq!(
        err,
        ZfError::ConflictingArguments {
            operation: "calc_z",
            computed: "Ppc",
            supplied: "sg",
        }
    );
    assert_eq!(
        err.to_string(),
        "calc_z() has conflicting keyword arguments \"Ppc\" and \"sg\""
    );
}

#[test]
fn ignore_conflict_prefers_the_override() {
    let request = ZRequest::new(GasInputs::new().sg(0.7).t(75.0).p(2010.0).ppc(700.0))
        .ignore_conflict(true)
        .return_all_properties(true);
    let output = calc(&request).unwrap();
    let ZOutput::Properties(map) = output else {
        panic!("expected properties");
    };
    assert_eq!(map["Ppc"], 700.0);
    assert_abs_diff_eq!(map["Pr"], 2010.0 / 700.0, epsilon = 1e-12);
}

#[test]
fn nitrogen_with_sutton_is_unsupported() {
    let request = ZRequest::new(GasInputs::new().sg(0.7).t(75.0).p(2010.0).n2(0.05))
        .with_method(PseudoCriticalMethod::Sutton);
    assert!(matches!(
        calc_z(&request),
        Err(ZfError::UnsupportedArgument { argument: "N2", .. })
    ));
}

#[test]
fn explicit_model_with_guess_is_unsupported() {
    let request = sour_sutton().with_model(ZModel::Kareem).with_guess(0.9);
    assert!(matches!(
        calc_z(&request),
        Err(ZfError::UnsupportedArgument { argument: "guess", .. })
    ));
}

#[test]
fn missing_pressure_is_reported() {
    let request = ZRequest::new(GasInputs::new().sg(0.7).t(75.0));
    let err = calc_z(&request).unwrap_err();
    assert!(matches!(err, ZfError::MissingArgument { argument: "P", .. }));
}

#[test]
fn unknown_model_name() {
    let err = zf_eos::get_z_model("redlich_kwong").unwrap_err();
    assert!(matches!(err, ZfError::UnknownModel { .. }));
    let msg = err.to_string();
    assert!(msg.contains("[\"DAK\", \"hall_yarborough\", \"londono\", \"kareem\"]"), "{msg}");
}

#[test]
fn yaml_request_round_trip() {
    let yaml = r#"
gas: { sg: 0.7, T: 75, P: 2010, H2S: 0.07, CO2: 0.1 }
method: sutton
model: DAK
"#;
    let request = parse_request(yaml).unwrap();
    assert_eq!(request, sour_sutton());
    assert_abs_diff_eq!(calc_z(&request).unwrap(), 0.7730, epsilon = 1e-3);
}

#[test]
fn exhausted_ladder_is_a_convergence_failure() {
    let request = ZRequest::reduced(1.5, 1.5).with_newton(zf_app::NewtonConfig {
        max_iterations: 1,
        ..Default::default()
    });
    match calc_z(&request) {
        Err(ZfError::ConvergenceFailure { model, attempts, .. }) => {
            assert_eq!(model, "DAK");
            assert!(attempts.len() >= 10);
        }
        other => panic!("expected convergence failure, got {other:?}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn both_methods_agree_for_sweet_gas_within_correlation_spread(
        sg in 0.6f64..0.9,
        t in 60.0f64..250.0,
        p in 200.0f64..4000.0,
    ) {
        let gas = GasInputs::new().sg(sg).t(t).p(p);
        let sutton = calc_z(&ZRequest::new(gas).with_method(PseudoCriticalMethod::Sutton)).unwrap();
        let piper = calc_z(&ZRequest::new(gas).with_method(PseudoCriticalMethod::Piper)).unwrap();
        prop_assert!(sutton > 0.3 && sutton < 1.3);
        prop_assert!((sutton - piper).abs() < 0.05, "sutton {sutton} piper {piper}");
    }

    #[test]
    fn calc_z_is_idempotent(pr in 0.2f64..12.0, tr in 1.2f64..3.0, model_index in 0usize..4) {
        let request = ZRequest::reduced(pr, tr).with_model(ZModel::ALL[model_index]);
        let first = calc_z(&request).unwrap();
        let second = calc_z(&request).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}
