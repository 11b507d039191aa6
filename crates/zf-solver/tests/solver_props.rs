use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use zf_eos::{ZCorrelation, ZModel};
use zf_solver::{NewtonConfig, ZSolveOptions, solve_z};

fn residual(model: ZModel) -> fn(f64, f64, f64) -> f64 {
    match model.correlation() {
        ZCorrelation::Implicit(f) => f,
        ZCorrelation::Explicit(_) => unreachable!("implicit models only"),
    }
}

#[test]
fn reference_point_for_each_implicit_model() {
    let (pr, tr) = (3.199_545_099_023_496_6, 1.500_566_101_994_939_7);
    let expected = [
        (ZModel::Dak, 0.773_073_297_966_609),
        (ZModel::HallYarborough, 0.771_379_728_710_295),
        (ZModel::Londono, 0.775_465_406_186_269),
    ];
    for (model, z) in expected {
        let solution = solve_z(pr, tr, model, &ZSolveOptions::default()).unwrap();
        assert_abs_diff_eq!(solution.z, z, epsilon = 1e-7);
    }
}

#[test]
fn high_pressure_uses_high_guess() {
    let options = ZSolveOptions {
        smart_guess: false,
        ..ZSolveOptions::default()
    };
    let solution = solve_z(20.0, 2.0, ZModel::Dak, &options).unwrap();
    assert_eq!(solution.guess_used, Some(2.0));
    assert_abs_diff_eq!(solution.z, 1.645_733_597_090_084, epsilon = 1e-7);
}

#[test]
fn tighter_tolerance_still_converges() {
    let options = ZSolveOptions {
        newton: NewtonConfig {
            abs_tol: 1e-12,
            ..NewtonConfig::default()
        },
        ..ZSolveOptions::default()
    };
    let solution = solve_z(1.5, 1.5, ZModel::Londono, &options).unwrap();
    assert_abs_diff_eq!(solution.z, 0.859_086_317_584_703, epsilon = 1e-10);
}

proptest! {
    #[test]
    fn implicit_roots_satisfy_their_residual(
        tr in 1.1f64..3.0,
        pr in 0.2f64..15.0,
        model in prop::sample::select(vec![ZModel::Dak, ZModel::HallYarborough, ZModel::Londono]),
    ) {
        let solution = solve_z(pr, tr, model, &ZSolveOptions::default()).unwrap();
        prop_assert!(solution.z > 0.2 && solution.z < 2.0, "z = {}", solution.z);
        prop_assert!(residual(model)(solution.z, pr, tr).abs() <= 1e-6);
    }

    #[test]
    fn smart_guess_does_not_change_the_root(tr in 1.2f64..3.0, pr in 0.2f64..15.0) {
        let smart = solve_z(pr, tr, ZModel::Dak, &ZSolveOptions::default()).unwrap();
        let plain = solve_z(pr, tr, ZModel::Dak, &ZSolveOptions { smart_guess: false, ..ZSolveOptions::default() }).unwrap();
        prop_assert!((smart.z - plain.z).abs() < 1e-6);
    }
}
