//! Assessment errors. Only precondition violations surface here; numeric
//! trouble is reported as an `Anomaly` alongside a posterior instead.

use super::error_code::{self, BurnoutErrorCode};
use super::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("Malformed answer set: expected {expected} answers, got {actual}")]
    MalformedAnswerSet { expected: usize, actual: usize },

    #[error("Malformed answer set: answer {index} is blank")]
    MissingAnswer { index: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BurnoutErrorCode for AssessmentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedAnswerSet { .. } | Self::MissingAnswer { .. } => {
                error_code::MALFORMED_ANSWER_SET
            }
            Self::Config(e) => e.error_code(),
        }
    }
}
