//! Core types for two-hypothesis Bayesian inference.

use serde::{Deserialize, Serialize};

use burnout_core::config::PriorsConfig;
use burnout_core::constants::{DEFAULT_PRIOR_STRONG, DEFAULT_PRIOR_WEAK};
use burnout_core::errors::ConfigError;
use burnout_core::types::{Anomaly, Hypothesis};

/// Prior probabilities of the two hypotheses. Always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Priors {
    strong: f64,
    weak: f64,
}

impl Priors {
    /// Build from the Strong prior, which must lie strictly inside (0, 1).
    pub fn new(strong: f64) -> Result<Self, ConfigError> {
        if !(strong > 0.0 && strong < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "priors.strong".to_string(),
                message: format!("must be strictly between 0.0 and 1.0, got {strong}"),
            });
        }
        Ok(Self {
            strong,
            weak: 1.0 - strong,
        })
    }

    pub fn from_config(config: &PriorsConfig) -> Result<Self, ConfigError> {
        Self::new(config.effective_strong())
    }

    pub fn get(&self, hypothesis: Hypothesis) -> f64 {
        match hypothesis {
            Hypothesis::Strong => self.strong,
            Hypothesis::Weak => self.weak,
        }
    }

    /// Exchange the Strong and Weak priors.
    pub fn swapped(&self) -> Self {
        Self {
            strong: self.weak,
            weak: self.strong,
        }
    }
}

impl Default for Priors {
    fn default() -> Self {
        Self {
            strong: DEFAULT_PRIOR_STRONG,
            weak: DEFAULT_PRIOR_WEAK,
        }
    }
}

/// Joint likelihood of an answer set under one hypothesis, kept in
/// log-space so long answer sets do not underflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointLikelihood {
    pub hypothesis: Hypothesis,
    /// Sum of the natural logs of the per-answer likelihoods.
    pub log_value: f64,
    /// Number of answers folded in.
    pub answers: usize,
    /// Set when a lookup was unusable and the neutral value 1 was substituted.
    pub anomaly: Option<Anomaly>,
}

impl JointLikelihood {
    /// The neutral joint likelihood (1, log 0).
    pub fn neutral(hypothesis: Hypothesis, answers: usize, anomaly: Option<Anomaly>) -> Self {
        Self {
            hypothesis,
            log_value: 0.0,
            answers,
            anomaly,
        }
    }

    /// The joint likelihood as a plain product. May be 0 for long answer sets.
    pub fn value(&self) -> f64 {
        self.log_value.exp()
    }

    /// True when the plain product is zero or subnormal in `f64`.
    pub fn underflows(&self) -> bool {
        let v = self.value();
        v == 0.0 || v.is_subnormal()
    }
}
