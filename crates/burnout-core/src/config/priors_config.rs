//! Prior probability configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PRIOR_STRONG;

/// Prior for the Strong hypothesis. The Weak prior is always its complement,
/// so the pair sums to 1 by construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PriorsConfig {
    /// Prior probability of strong burnout, in (0, 1). Default: 0.3.
    pub strong: Option<f64>,
}

impl PriorsConfig {
    /// Returns the effective Strong prior, defaulting to 0.3.
    pub fn effective_strong(&self) -> f64 {
        self.strong.unwrap_or(DEFAULT_PRIOR_STRONG)
    }

    /// Returns the effective Weak prior (complement of Strong).
    pub fn effective_weak(&self) -> f64 {
        1.0 - self.effective_strong()
    }
}
