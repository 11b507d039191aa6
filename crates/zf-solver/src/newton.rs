//! Derivative-free Newton (secant) iteration for scalar residuals.

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewtonConfig {
    /// Maximum iterations per initial guess
    pub max_iterations: usize,
    /// Absolute tolerance on the step
    pub abs_tol: f64,
    /// Relative tolerance on the step
    pub rel_tol: f64,
    /// Largest residual accepted at a converged root
    pub residual_tol: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1.48e-8,
            rel_tol: 0.0,
            residual_tol: 1e-6,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    pub root: f64,
    pub iterations: usize,
    /// Residual at `root`
    pub residual: f64,
}

/// Finds a root of `f` starting from `x0`.
///
/// The derivative is replaced by the secant through the two most recent
/// points; the second starting point is `x0` nudged by 1e-4. Convergence is
/// declared when a step moves less than `abs_tol + rel_tol * |x|` and the
/// residual there is within `residual_tol`. A tiny step on a nearly flat
/// stretch of the residual is not a root.
pub fn newton_solve<F>(x0: f64, f: F, config: &NewtonConfig) -> SolverResult<NewtonResult>
where
    F: Fn(f64) -> f64,
{
    let eval = |x: f64| -> SolverResult<f64> {
        let y = f(x);
        if y.is_finite() { Ok(y) } else { Err(SolverError::NonFinite { x }) }
    };

    let eps = 1e-4;
    let mut p0 = x0;
    let mut p1 = if x0 >= 0.0 { x0 * (1.0 + eps) + eps } else { x0 * (1.0 + eps) - eps };
    let mut q0 = eval(p0)?;
    let mut q1 = eval(p1)?;
    if q1.abs() < q0.abs() {
        std::mem::swap(&mut p0, &mut p1);
        std::mem::swap(&mut q0, &mut q1);
    }

    for iter in 0..config.max_iterations {
        if q1 == q0 {
            return Err(SolverError::FlatResidual { x0: p0, x1: p1, value: q1 });
        }
        let p = if q1.abs() > q0.abs() {
            (-q0 / q1 * p1 + p0) / (1.0 - q0 / q1)
        } else {
            (-q1 / q0 * p0 + p1) / (1.0 - q1 / q0)
        };
        if !p.is_finite() {
            return Err(SolverError::NonFinite { x: p });
        }
        if (p - p1).abs() <= config.abs_tol + config.rel_tol * p1.abs() {
            let residual = eval(p)?;
            if residual.abs() > config.residual_tol {
                return Err(SolverError::ResidualTooLarge { root: p, residual });
            }
            return Ok(NewtonResult {
                root: p,
                iterations: iter + 1,
                residual,
            });
        }
        p0 = p1;
        q0 = q1;
        p1 = p;
        q1 = eval(p1)?;
    }

    Err(SolverError::MaxIterations {
        iterations: config.max_iterations,
        last: p1,
    })
}
