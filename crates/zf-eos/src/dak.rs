//! Dranchuk, P.M. and Abou-Kassem, J.H., "Calculation of z-Factors for
//! Natural Gases Using Equations of State", JCPT (1975).

/// Eleven-coefficient reduced-density form shared by DAK and Londono.
pub(crate) type DensityFormCoefficients = [f64; 11];

pub(crate) const DAK_COEFFICIENTS: DensityFormCoefficients = [
    0.3265, -1.0700, -0.5339, 0.01569, -0.05165, 0.5475, -0.7361, 0.1844, 0.1056, 0.6134, 0.7210,
];

/// Residual of the reduced-density equation of state for coefficients `a`.
///
/// `rho_r = 0.27 Pr / (z Tr)` is the pseudo-reduced density; the residual is
/// zero at the z-factor.
pub(crate) fn density_form_residual(a: &DensityFormCoefficients, z: f64, pr: f64, tr: f64) -> f64 {
    let [a1, a2, a3, a4, a5, a6, a7, a8, a9, a10, a11] = *a;
    let rho_r = 0.27 * pr / (z * tr);
    let rho_r2 = rho_r * rho_r;

    let c1 = a1 + a2 / tr + a3 / tr.powi(3) + a4 / tr.powi(4) + a5 / tr.powi(5);
    let c2 = a6 + a7 / tr + a8 / tr.powi(2);
    let c3 = a9 * (a7 / tr + a8 / tr.powi(2));
    let c4 = a10 * (1.0 + a11 * rho_r2) * (rho_r2 / tr.powi(3)) * (-a11 * rho_r2).exp();

    1.0 + c1 * rho_r + c2 * rho_r2 - c3 * rho_r.powi(5) + c4 - z
}

/// Dranchuk–Abou-Kassem residual `f(z, Pr, Tr)`.
pub fn dak(z: f64, pr: f64, tr: f64) -> f64 {
    density_form_residual(&DAK_COEFFICIENTS, z, pr, tr)
}
