use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub type ZfResult<T> = Result<T, ZfError>;

/// One rejected initial guess, kept so a convergence failure can report
/// every candidate that was tried and why it was abandoned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedAttempt {
    pub guess: f64,
    pub reason: String,
}

impl fmt::Display for FailedAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guess {}: {}", self.guess, self.reason)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZfError {
    #[error(
        "{operation}() is missing a required argument '{argument}' ({description}); accepted inputs: {alternatives}"
    )]
    MissingArgument {
        operation: &'static str,
        argument: &'static str,
        description: &'static str,
        alternatives: &'static str,
    },

    #[error("{operation}() has conflicting keyword arguments \"{computed}\" and \"{supplied}\"")]
    ConflictingArguments {
        operation: &'static str,
        computed: &'static str,
        supplied: &'static str,
    },

    #[error("Unsupported argument '{argument}': {context}")]
    UnsupportedArgument {
        argument: &'static str,
        context: String,
    },

    #[error("Unknown {kind} \"{name}\"; choose from {valid}")]
    UnknownModel {
        kind: &'static str,
        name: String,
        valid: String,
    },

    #[error(
        "Convergence failed for model {model} at Pr={pr}, Tr={tr} after {} initial guesses",
        .attempts.len()
    )]
    ConvergenceFailure {
        model: &'static str,
        pr: f64,
        tr: f64,
        attempts: Vec<FailedAttempt>,
    },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument {what}: {reason}")]
    InvalidArg { what: &'static str, reason: String },
}
