//! Likelihood table overrides.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Hypothesis;

/// Per-hypothesis token likelihoods layered over the reference table.
///
/// ```toml
/// [likelihoods]
/// replace_reference = false
///
/// [likelihoods.strong]
/// "Always" = 0.95
///
/// [likelihoods.weak]
/// "Always" = 0.05
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LikelihoodConfig {
    /// Drop the reference table and use only the entries below. Default: false.
    pub replace_reference: Option<bool>,
    /// Token likelihoods under the Strong hypothesis.
    #[serde(default)]
    pub strong: HashMap<String, f64>,
    /// Token likelihoods under the Weak hypothesis.
    #[serde(default)]
    pub weak: HashMap<String, f64>,
}

impl LikelihoodConfig {
    /// Returns whether the reference table is replaced, defaulting to false.
    pub fn effective_replace_reference(&self) -> bool {
        self.replace_reference.unwrap_or(false)
    }

    /// Entries configured for one hypothesis.
    pub fn entries(&self, hypothesis: Hypothesis) -> &HashMap<String, f64> {
        match hypothesis {
            Hypothesis::Strong => &self.strong,
            Hypothesis::Weak => &self.weak,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.strong.is_empty() && self.weak.is_empty()
    }
}
