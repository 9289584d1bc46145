//! Result of a single assessment.

use serde::{Deserialize, Serialize};

use burnout_core::types::{Anomaly, Posterior};

use super::report::Report;
use crate::inference::JointLikelihood;

/// Posterior plus the intermediate joint likelihoods and every non-fatal
/// anomaly met along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub posterior: Posterior,
    pub strong: JointLikelihood,
    pub weak: JointLikelihood,
    pub anomalies: Vec<Anomaly>,
}

impl Assessment {
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }

    /// True when the neutral posterior was used for lack of evidence.
    pub fn insufficient_evidence(&self) -> bool {
        self.anomalies
            .iter()
            .any(|a| matches!(a, Anomaly::InsufficientEvidence))
    }

    pub fn report(&self) -> Report {
        Report::from_posterior(&self.posterior)
    }
}
