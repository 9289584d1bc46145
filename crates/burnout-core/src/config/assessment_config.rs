//! Assessment shape configuration.

use serde::{Deserialize, Serialize};

use crate::constants::REFERENCE_QUESTION_COUNT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Number of answers every answer set must carry. Default: 20.
    pub expected_answers: Option<usize>,
}

impl AssessmentConfig {
    /// Returns the effective answer count, defaulting to the reference instrument's 20.
    pub fn effective_expected_answers(&self) -> usize {
        self.expected_answers.unwrap_or(REFERENCE_QUESTION_COUNT)
    }
}
