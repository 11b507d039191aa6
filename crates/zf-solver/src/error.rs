//! Error types for a single root-find attempt.

use thiserror::Error;

/// Why one Newton attempt was abandoned. These are collected per guess and
/// only surface to callers inside `ZfError::ConvergenceFailure`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("residual is not finite at z={x}")]
    NonFinite { x: f64 },

    #[error("flat residual ({value}) between z={x0} and z={x1}")]
    FlatResidual { x0: f64, x1: f64, value: f64 },

    #[error("no convergence after {iterations} iterations (last z={last})")]
    MaxIterations { iterations: usize, last: f64 },

    #[error("step converged at z={root} but residual is {residual}")]
    ResidualTooLarge { root: f64, residual: f64 },

    #[error("non-physical root z={root}")]
    NonPhysical { root: f64 },
}

pub type SolverResult<T> = Result<T, SolverError>;
