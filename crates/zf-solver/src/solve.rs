//! Z-factor solve: explicit evaluation or guess-ladder Newton iteration.

use serde::Serialize;
use tracing::{debug, warn};
use zf_core::{FailedAttempt, ZfError, ZfResult, ensure_finite, ensure_positive};
use zf_eos::{ZCorrelation, ZModel};

use crate::error::SolverError;
use crate::guess::{GuessPolicy, guess_ladder};
use crate::newton::{NewtonConfig, NewtonResult, newton_solve};

/// The explicit model used to seed implicit solves.
const SEED_MODEL: ZModel = ZModel::Kareem;

/// Options for implicit models. Ignored for explicit ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZSolveOptions {
    /// Primary initial guess; `policy` picks one when absent.
    pub guess: Option<f64>,
    pub newton: NewtonConfig,
    /// Seed the ladder with the explicit model when (Pr, Tr) is inside its
    /// fitted range.
    pub smart_guess: bool,
    pub policy: GuessPolicy,
}

impl Default for ZSolveOptions {
    fn default() -> Self {
        Self {
            guess: None,
            newton: NewtonConfig::default(),
            smart_guess: true,
            policy: GuessPolicy::default(),
        }
    }
}

/// A solved z-factor and how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZSolution {
    pub z: f64,
    pub model: ZModel,
    /// Initial guess that converged; `None` for explicit models.
    pub guess_used: Option<f64>,
    pub iterations: usize,
    /// Guesses abandoned before `guess_used` succeeded.
    pub attempts: Vec<FailedAttempt>,
}

/// Solves for Z at (`pr`, `tr`) with `model`.
///
/// At `pr == 0` every correlation reduces to the ideal gas and Z is exactly
/// one.
pub fn solve_z(pr: f64, tr: f64, model: ZModel, options: &ZSolveOptions) -> ZfResult<ZSolution> {
    ensure_finite(pr, "Pr")?;
    ensure_finite(tr, "Tr")?;
    if pr < 0.0 {
        return Err(ZfError::InvalidArg {
            what: "Pr",
            reason: format!("must be non-negative, got {pr}"),
        });
    }
    ensure_positive(tr, "Tr")?;

    if pr == 0.0 {
        return Ok(ZSolution {
            z: 1.0,
            model,
            guess_used: None,
            iterations: 0,
            attempts: Vec::new(),
        });
    }

    let residual = match model.correlation() {
        ZCorrelation::Explicit(f) => {
            let z = ensure_finite(f(pr, tr), "z")?;
            debug!(model = model.name(), pr, tr, z, "evaluated explicit z-factor");
            return Ok(ZSolution {
                z,
                model,
                guess_used: None,
                iterations: 0,
                attempts: Vec::new(),
            });
        }
        ZCorrelation::Implicit(f) => f,
    };

    let primary = match options.guess {
        Some(g) => ensure_finite(g, "guess")?,
        None => options.policy.primary_guess(pr),
    };
    let smart = if options.smart_guess { smart_seed(pr, tr) } else { None };
    let guesses = guess_ladder(primary, smart);

    let mut attempts = Vec::new();
    for guess in guesses {
        let outcome = newton_solve(guess, |z| residual(z, pr, tr), &options.newton)
            .and_then(physical_root);
        match outcome {
            Ok(result) => {
                debug!(
                    model = model.name(),
                    pr,
                    tr,
                    z = result.root,
                    guess,
                    iterations = result.iterations,
                    failed_guesses = attempts.len(),
                    "solved z-factor"
                );
                return Ok(ZSolution {
                    z: result.root,
                    model,
                    guess_used: Some(guess),
                    iterations: result.iterations,
                    attempts,
                });
            }
            Err(err) => {
                debug!(model = model.name(), guess, %err, "initial guess failed");
                attempts.push(FailedAttempt {
                    guess,
                    reason: err.to_string(),
                });
            }
        }
    }

    warn!(
        model = model.name(),
        pr,
        tr,
        guesses = attempts.len(),
        "z-factor did not converge from any initial guess"
    );
    Err(ZfError::ConvergenceFailure {
        model: model.name(),
        pr,
        tr,
        attempts,
    })
}

fn physical_root(result: NewtonResult) -> Result<NewtonResult, SolverError> {
    if result.root > 0.0 {
        Ok(result)
    } else {
        Err(SolverError::NonPhysical { root: result.root })
    }
}

fn smart_seed(pr: f64, tr: f64) -> Option<f64> {
    if !SEED_MODEL.valid_range().contains(pr, tr) {
        return None;
    }
    let ZCorrelation::Explicit(f) = SEED_MODEL.correlation() else {
        return None;
    };
    let z = f(pr, tr);
    if z.is_finite() && z > 0.0 {
        Some(z)
    } else {
        warn!(pr, tr, z, "discarding unusable smart guess");
        None
    }
}
