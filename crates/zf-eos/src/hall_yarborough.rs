//! Hall, K.R. and Yarborough, L., "A new equation of state for Z-factor
//! calculations", Oil and Gas Journal (1973).

/// Hall–Yarborough residual `f(z, Pr, Tr)`.
///
/// Written in terms of the reduced density `y = A1 Pr / z`; the residual is
/// non-finite for `z <= 0`.
pub fn hall_yarborough(z: f64, pr: f64, tr: f64) -> f64 {
    let t = 1.0 / tr;

    let a1 = 0.06125 * t * (-1.2 * (1.0 - t).powi(2)).exp();
    let a2 = 14.76 * t - 9.76 * t.powi(2) + 4.58 * t.powi(3);
    let a3 = 90.7 * t - 242.2 * t.powi(2) + 42.4 * t.powi(3);
    let a4 = 2.18 + 2.82 * t;

    let y = a1 * pr / z;

    -a1 * pr + (y + y.powi(2) + y.powi(3) - y.powi(4)) / (1.0 - y).powi(3) - a2 * y.powi(2)
        + a3 * y.powf(a4)
}
