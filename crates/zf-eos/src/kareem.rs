//! Kareem, L.A., Iwalewa, T.M. and Al-Marhoun, M., "New explicit
//! correlation for the compressibility factor of natural gas: linearized
//! z-factor isotherms", J Petrol Explor Prod Technol (2016).
//!
//! The worked example in the paper (Pr = 3.0153, Tr = 1.6155) lists
//! E = 6.56232, F = -17.08860, G = 3.80545. Evaluating the published
//! coefficients gives E = 6.52959, F = -16.61537, G = 3.77819; the
//! coefficients are authoritative here and the example values are not
//! reproduced.

const A: [f64; 19] = [
    0.317842, 0.382216, -7.768354, 14.290531, 0.000002, -0.004693, 0.096254, 0.166720, 0.966910,
    0.063069, -1.966847, 21.0581, -27.0246, 16.23, 207.783, -488.161, 176.29, 1.88453, 3.05921,
];

/// Intermediate groups of the correlation at one (Pr, Tr).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct KareemTerms {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
}

pub(crate) fn kareem_terms(pr: f64, tr: f64) -> KareemTerms {
    let [
        a1,
        a2,
        a3,
        a4,
        a5,
        a6,
        a7,
        a8,
        a9,
        a10,
        a11,
        a12,
        a13,
        a14,
        a15,
        a16,
        a17,
        a18,
        a19,
    ] = A;
    let t = 1.0 / tr;

    KareemTerms {
        a: a1 * t * (a2 * (1.0 - t).powi(2)).exp() * pr,
        b: a3 * t + a4 * t.powi(2) + a5 * t.powi(6) * pr.powi(6),
        c: a9 + a8 * t * pr + a7 * t.powi(2) * pr.powi(2) + a6 * t.powi(3) * pr.powi(3),
        d: a10 * t * (a11 * (1.0 - t).powi(2)).exp(),
        e: a12 * t + a13 * t.powi(2) + a14 * t.powi(3),
        f: a15 * t + a16 * t.powi(2) + a17 * t.powi(3),
        g: a18 + a19 * t,
    }
}

/// Kareem explicit z-factor. No iteration, no initial guess.
pub fn kareem(pr: f64, tr: f64) -> f64 {
    let KareemTerms { a, b, c, d, e, f, g } = kareem_terms(pr, tr);

    let y = d * pr / ((1.0 + a * a) / c - (a * a * b) / c.powi(3));

    d * pr * (1.0 + y + y.powi(2) - y.powi(3))
        / ((d * pr + e * y.powi(2) - f * y.powf(g)) * (1.0 - y).powi(3))
}
