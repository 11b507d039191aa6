use crate::ZfError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// Absolute and relative closeness used when comparing derived values.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol.abs`, or within `tol.rel` of the
/// larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ZfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ZfError::NonFinite { what, value: v })
    }
}

/// Ensure a mole fraction is finite and inside [0, 1].
pub fn ensure_fraction(v: Real, what: &'static str) -> Result<Real, ZfError> {
    let v = ensure_finite(v, what)?;
    if !(0.0..=1.0).contains(&v) {
        return Err(ZfError::InvalidArg {
            what,
            reason: format!("mole fraction must lie in [0, 1], got {v}"),
        });
    }
    Ok(v)
}

/// Ensure a value is finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, ZfError> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(ZfError::InvalidArg {
            what,
            reason: format!("must be positive, got {v}"),
        });
    }
    Ok(v)
}
