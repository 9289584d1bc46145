//! Questionnaire completeness errors, raised by the input-side check that
//! runs before an assessment.

use super::error_code::{self, BurnoutErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("Expected {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Question {index} is unanswered")]
    Unanswered { index: usize },

    #[error("Answer {token:?} is not an option for question {index}")]
    InvalidOption { index: usize, token: String },
}

impl BurnoutErrorCode for QuestionnaireError {
    fn error_code(&self) -> &'static str {
        error_code::INCOMPLETE_QUESTIONNAIRE
    }
}
