//! Ordered answer tokens for a single assessment.

use serde::{Deserialize, Serialize};

/// One answer token per question, in questionnaire order.
///
/// Tokens are opaque lookup keys; the input layer produces them and the
/// likelihood model interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    tokens: Vec<String>,
}

impl AnswerSet {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Index of the first blank (empty or whitespace-only) token.
    pub fn first_blank(&self) -> Option<usize> {
        self.tokens.iter().position(|t| t.trim().is_empty())
    }

    /// Return a copy with the answer at `index` replaced.
    /// Out-of-range indices leave the set unchanged.
    pub fn with_answer(&self, index: usize, token: impl Into<String>) -> Self {
        let mut tokens = self.tokens.clone();
        if let Some(slot) = tokens.get_mut(index) {
            *slot = token.into();
        }
        Self { tokens }
    }

    pub fn into_inner(self) -> Vec<String> {
        self.tokens
    }
}

impl<S: Into<String>> FromIterator<S> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}
