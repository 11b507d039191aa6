use approx::assert_relative_eq;
use proptest::prelude::*;
use zf_pseudocritical::{
    Arg, ConflictPolicy, GasInputs, Piper, PseudoCritical, PseudoCriticalMethod, Sutton,
};

const REJECT: ConflictPolicy = ConflictPolicy::Reject;

#[test]
fn both_methods_agree_on_reduced_temperature_definition() {
    let inputs = GasInputs::new().sg(0.65).t(120.0).p(1500.0);
    for method in PseudoCriticalMethod::ALL {
        let engine = method.engine(Default::default());
        let reduced = engine.reduced_properties(&inputs, REJECT).unwrap();
        let tpc = reduced
            .props
            .get(Arg::TpcCorrected)
            .or(reduced.props.get(Arg::Tpc))
            .unwrap();
        assert_relative_eq!(reduced.tr * tpc, 120.0 + 459.67, max_relative = 1e-12);
        assert_eq!(reduced.props.keys().last(), Some(Arg::Pr));
    }
}

#[test]
fn reduced_pressure_override_short_circuits_pressure_chain() {
    let inputs = GasInputs::new().sg(0.7).t(75.0).pr(2.0);
    let err = Sutton.reduced_properties(&inputs, REJECT).unwrap_err();
    assert!(err.to_string().contains("\"Pr\" and \"sg\""), "{err}");

    let reduced = Sutton
        .reduced_properties(&inputs, ConflictPolicy::PreferOverrides)
        .unwrap();
    assert_eq!(reduced.pr, 2.0);
    assert!(!reduced.props.contains(Arg::Ppc));
}

#[test]
fn calls_are_independent() {
    let sutton = Sutton;
    let first = sutton
        .calc_tr(&GasInputs::new().sg(0.7).t(75.0).h2s(0.07), REJECT)
        .unwrap();
    let _ = sutton.calc_tr(&GasInputs::new().sg(0.9).t(200.0), REJECT).unwrap();
    let again = sutton
        .calc_tr(&GasInputs::new().sg(0.7).t(75.0).h2s(0.07), REJECT)
        .unwrap();
    assert_eq!(first, again);
}

#[test]
fn gauge_pressure_adds_one_atmosphere() {
    let absolute = GasInputs::new().sg(0.7).t(75.0).p(1000.0);
    let gauge = absolute.pressure_basis(zf_core::PressureBasis::Gauge);
    let pa = Piper::new().calc_pr(&absolute, REJECT).unwrap().value;
    let pg = Piper::new().calc_pr(&gauge, REJECT).unwrap().value;
    assert_relative_eq!(pg / pa, 1014.7 / 1000.0, max_relative = 1e-12);
}

proptest! {
    #[test]
    fn sutton_sweet_gas_follows_polynomial(sg in 0.55f64..1.5) {
        let d = Sutton.calc_tpc_corrected(&GasInputs::new().sg(sg), REJECT).unwrap();
        let expected = 169.2 + 349.5 * sg - 74.0 * sg * sg;
        prop_assert!((d.value - expected).abs() < 1e-9);

        let d = Sutton.calc_ppc_corrected(&GasInputs::new().sg(sg), REJECT).unwrap();
        let expected = 756.8 - 131.07 * sg - 3.6 * sg * sg;
        prop_assert!((d.value - expected).abs() < 1e-9);
    }

    #[test]
    fn piper_tpc_is_k_squared_over_j(sg in 0.55f64..1.5, h2s in 0.0f64..0.3, co2 in 0.0f64..0.3, n2 in 0.0f64..0.2) {
        let inputs = GasInputs::new().sg(sg).h2s(h2s).co2(co2).n2(n2);
        let piper = Piper::new();
        let tpc = piper.calc_tpc(&inputs, REJECT).unwrap();
        let j = tpc.props.get(Arg::J).unwrap();
        let k = tpc.props.get(Arg::K).unwrap();
        prop_assert!(j > 0.0 && k > 0.0);
        prop_assert!((tpc.value - k * k / j).abs() < 1e-9);

        let ppc = piper.calc_ppc(&inputs, REJECT).unwrap();
        prop_assert!((ppc.value - tpc.value / j).abs() < 1e-9);
    }

    #[test]
    fn acid_gas_lowers_corrected_temperature(sg in 0.55f64..1.2, h2s in 0.01f64..0.3, co2 in 0.0f64..0.3) {
        let sweet = Sutton.calc_tpc(&GasInputs::new().sg(sg), REJECT).unwrap().value;
        let sour = Sutton
            .calc_tpc_corrected(&GasInputs::new().sg(sg).h2s(h2s).co2(co2), REJECT)
            .unwrap()
            .value;
        prop_assert!(sour < sweet);
    }

    #[test]
    fn derived_critical_values_fed_back_as_overrides_reproduce_reduced_values(
        sg in 0.55f64..1.3,
        h2s in 0.0f64..0.2,
        co2 in 0.0f64..0.2,
        t in 40.0f64..300.0,
        p in 100.0f64..6000.0,
    ) {
        let inputs = GasInputs::new().sg(sg).h2s(h2s).co2(co2).t(t).p(p);
        let piper = Piper::new();
        let derived = piper.reduced_properties(&inputs, REJECT).unwrap();
        let tpc = derived.props.get(Arg::Tpc).unwrap();
        let ppc = derived.props.get(Arg::Ppc).unwrap();

        let fed_back = piper
            .reduced_properties(&inputs.tpc(tpc).ppc(ppc), ConflictPolicy::PreferOverrides)
            .unwrap();
        prop_assert_eq!(fed_back.tr, derived.tr);
        prop_assert_eq!(fed_back.pr, derived.pr);
    }
}

