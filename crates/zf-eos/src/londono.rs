//! Londono, F.E., Archer, R.A. and Blasingame, T.A., "Simplified
//! Correlations for Hydrocarbon Gas Viscosity and Gas Density", SPE 75721.
//!
//! Same functional form as Dranchuk–Abou-Kassem, refitted coefficients.

use crate::dak::{DensityFormCoefficients, density_form_residual};

const LONDONO_COEFFICIENTS: DensityFormCoefficients = [
    0.3024696,
    -1.046964,
    -0.1078916,
    -0.7694186,
    0.1965439,
    0.6527819,
    -1.118884,
    0.3951957,
    0.09313593,
    0.8483081,
    0.7880011,
];

/// Londono residual `f(z, Pr, Tr)`.
pub fn londono(z: f64, pr: f64, tr: f64) -> f64 {
    density_form_residual(&LONDONO_COEFFICIENTS, z, pr, tr)
}
