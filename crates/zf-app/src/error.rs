//! Error types for the zf-app service layer.

use std::path::PathBuf;

use zf_core::ZfError;

/// Errors from request files and calculations, unified for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read request file: {}", .path.display())]
    RequestFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid request: {0}")]
    Parse(String),

    #[error(transparent)]
    Calculation(#[from] ZfError),

    #[error("Failed to serialize output: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for zf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_errors_keep_their_message() {
        let err: AppError = ZfError::UnknownModel {
            kind: "z-factor model",
            name: "foo".into(),
            valid: "[\"DAK\"]".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Unknown z-factor model \"foo\"; choose from [\"DAK\"]"
        );
    }
}
