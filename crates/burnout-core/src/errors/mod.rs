//! Error handling for the burnout engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod assessment_error;
pub mod config_error;
pub mod error_code;
pub mod questionnaire_error;

pub use assessment_error::AssessmentError;
pub use config_error::ConfigError;
pub use error_code::BurnoutErrorCode;
pub use questionnaire_error::QuestionnaireError;
