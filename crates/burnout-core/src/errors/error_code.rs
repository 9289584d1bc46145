//! BurnoutErrorCode trait for structured error codes at the API boundary.

/// Every error enum implements this to expose a stable code string that a
/// front end can match on without parsing messages.
pub trait BurnoutErrorCode {
    /// Returns the error code string (e.g., "MALFORMED_ANSWER_SET").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MALFORMED_ANSWER_SET: &str = "MALFORMED_ANSWER_SET";
pub const INCOMPLETE_QUESTIONNAIRE: &str = "INCOMPLETE_QUESTIONNAIRE";
