//! Posterior probabilities and the non-fatal anomalies reported with them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Hypothesis;
use crate::constants::PROBABILITY_TOLERANCE;

/// Posterior probability of each hypothesis after observing an answer set.
///
/// Always normalized: `strong + weak == 1` within [`PROBABILITY_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    pub strong: f64,
    pub weak: f64,
}

impl Posterior {
    /// Build from the Strong probability; Weak is its complement.
    /// Non-finite input yields the neutral pair.
    pub fn from_strong(p_strong: f64) -> Self {
        if !p_strong.is_finite() {
            return Self::neutral();
        }
        let strong = p_strong.clamp(0.0, 1.0);
        Self {
            strong,
            weak: 1.0 - strong,
        }
    }

    /// The "insufficient evidence" result (0.5, 0.5).
    pub fn neutral() -> Self {
        Self {
            strong: 0.5,
            weak: 0.5,
        }
    }

    pub fn get(&self, hypothesis: Hypothesis) -> f64 {
        match hypothesis {
            Hypothesis::Strong => self.strong,
            Hypothesis::Weak => self.weak,
        }
    }

    /// Hypothesis with the larger posterior. Ties go to Weak, matching the
    /// strictly-greater recommendation rule.
    pub fn dominant(&self) -> Hypothesis {
        if self.strong > self.weak {
            Hypothesis::Strong
        } else {
            Hypothesis::Weak
        }
    }

    /// Swap the two components.
    pub fn mirrored(&self) -> Self {
        Self {
            strong: self.weak,
            weak: self.strong,
        }
    }

    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.strong)
            && (0.0..=1.0).contains(&self.weak)
            && (self.strong + self.weak - 1.0).abs() <= PROBABILITY_TOLERANCE
    }
}

impl fmt::Display for Posterior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "strong={:.2} weak={:.2}", self.strong, self.weak)
    }
}

/// A non-fatal condition encountered while computing a posterior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// A lookup produced a value that is not a positive finite number.
    /// The joint likelihood for `hypothesis` was replaced by 1.
    UnusableLikelihood {
        hypothesis: Hypothesis,
        index: usize,
        token: String,
    },
    /// The joint likelihood underflows `f64`; the posterior was still
    /// computed from log-space values.
    Underflow { hypothesis: Hypothesis },
    /// Bayes' rule had a zero denominator; the neutral posterior was used.
    InsufficientEvidence,
}

impl Anomaly {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnusableLikelihood { .. } => "unusable_likelihood",
            Self::Underflow { .. } => "underflow",
            Self::InsufficientEvidence => "insufficient_evidence",
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnusableLikelihood {
                hypothesis,
                index,
                token,
            } => write!(
                f,
                "unusable {hypothesis} likelihood for answer {index} ({token:?})"
            ),
            Self::Underflow { hypothesis } => write!(f, "{hypothesis} joint likelihood underflows"),
            Self::InsufficientEvidence => f.write_str("insufficient evidence"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_strong_complements() {
        let p = Posterior::from_strong(0.25);
        assert_eq!(p.weak, 0.75);
        assert!(p.is_normalized());
    }

    #[test]
    fn test_from_strong_clamps_and_guards() {
        assert_eq!(Posterior::from_strong(1.5).strong, 1.0);
        assert_eq!(Posterior::from_strong(-0.1).strong, 0.0);
        assert_eq!(Posterior::from_strong(f64::NAN), Posterior::neutral());
    }

    #[test]
    fn test_dominant_tie_goes_to_weak() {
        assert_eq!(Posterior::neutral().dominant(), Hypothesis::Weak);
        assert_eq!(Posterior::from_strong(0.51).dominant(), Hypothesis::Strong);
    }

    #[test]
    fn test_anomaly_display() {
        let anomaly = Anomaly::UnusableLikelihood {
            hypothesis: Hypothesis::Weak,
            index: 3,
            token: "Often".into(),
        };
        assert_eq!(anomaly.to_string(), "unusable weak likelihood for answer 3 (\"Often\")");
        assert_eq!(anomaly.name(), "unusable_likelihood");
    }
}
