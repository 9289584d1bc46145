//! Recommendation and chart colors derived from a posterior. Rendering is
//! left to the front end.

use serde::Serialize;
use std::fmt;

use burnout_core::constants::RECOMMENDATION_THRESHOLD;
use burnout_core::types::{Hypothesis, Posterior};

/// What the respondent is advised to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Strong burnout posterior above the threshold.
    SeekProfessionalHelp,
    /// Otherwise: rest, diet, sleep.
    SelfCare,
}

impl Recommendation {
    pub fn from_posterior(posterior: &Posterior) -> Self {
        if posterior.strong > RECOMMENDATION_THRESHOLD {
            Self::SeekProfessionalHelp
        } else {
            Self::SelfCare
        }
    }

    /// The hypothesis whose probability the headline reports.
    pub fn headline_hypothesis(&self) -> Hypothesis {
        match self {
            Self::SeekProfessionalHelp => Hypothesis::Strong,
            Self::SelfCare => Hypothesis::Weak,
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::SeekProfessionalHelp => "It is recommended to seek professional help.",
            Self::SelfCare => {
                "Consider taking a break, improving your diet, and getting more sleep."
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SeekProfessionalHelp => "seek_professional_help",
            Self::SelfCare => "self_care",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bar colors for the Strong and Weak bars, as hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartPalette {
    pub strong: &'static str,
    pub weak: &'static str,
}

const RED: &str = "#FF6F61";
const YELLOW: &str = "#FFD700";
const GREEN: &str = "#98FB98";

impl ChartPalette {
    pub fn from_posterior(posterior: &Posterior) -> Self {
        if posterior.strong > RECOMMENDATION_THRESHOLD {
            Self {
                strong: RED,
                weak: YELLOW,
            }
        } else if posterior.weak > RECOMMENDATION_THRESHOLD {
            Self {
                strong: YELLOW,
                weak: GREEN,
            }
        } else {
            Self {
                strong: GREEN,
                weak: YELLOW,
            }
        }
    }
}

/// Everything a front end needs to present an assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub recommendation: Recommendation,
    /// Probability of the headline hypothesis.
    pub probability: f64,
    pub message: String,
    pub palette: ChartPalette,
    pub posterior: Posterior,
}

impl Report {
    pub fn from_posterior(posterior: &Posterior) -> Self {
        let recommendation = Recommendation::from_posterior(posterior);
        let hypothesis = recommendation.headline_hypothesis();
        let probability = posterior.get(hypothesis);
        let message = format!(
            "Probability of {hypothesis} burnout: {probability:.2}. {}",
            recommendation.advice()
        );
        Self {
            recommendation,
            probability,
            message,
            palette: ChartPalette::from_posterior(posterior),
            posterior: *posterior,
        }
    }
}
