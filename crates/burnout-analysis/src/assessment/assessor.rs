//! The assessment entry point.

use burnout_core::config::BurnoutConfig;
use burnout_core::constants::REFERENCE_QUESTION_COUNT;
use burnout_core::errors::{AssessmentError, ConfigError};
use burnout_core::types::{AnswerSet, Anomaly, Hypothesis};

use super::types::Assessment;
use crate::inference::{BayesianCombiner, Priors};
use crate::likelihood::{LikelihoodModel, LikelihoodTable};

/// Turns complete answer sets into posteriors.
///
/// Holds only immutable configuration, so one instance can serve any
/// number of concurrent assessments.
#[derive(Debug)]
pub struct Assessor {
    combiner: BayesianCombiner,
    expected_answers: usize,
}

impl Assessor {
    /// Substitute priors and likelihood model; expects the reference
    /// instrument's 20 answers.
    pub fn configure(priors: Priors, model: impl LikelihoodModel + 'static) -> Self {
        Self {
            combiner: BayesianCombiner::new(priors, Box::new(model)),
            expected_answers: REFERENCE_QUESTION_COUNT,
        }
    }

    /// Build from resolved configuration.
    pub fn from_config(config: &BurnoutConfig) -> Result<Self, ConfigError> {
        let priors = Priors::from_config(&config.priors)?;
        let table = LikelihoodTable::from_config(&config.likelihoods)?;
        Ok(Self::configure(priors, table)
            .with_expected_answers(config.assessment.effective_expected_answers()))
    }

    /// Change the required answer count.
    pub fn with_expected_answers(mut self, expected_answers: usize) -> Self {
        self.expected_answers = expected_answers;
        self
    }

    pub fn expected_answers(&self) -> usize {
        self.expected_answers
    }

    pub fn combiner(&self) -> &BayesianCombiner {
        &self.combiner
    }

    /// Assess one answer set.
    ///
    /// Fails only when the set has the wrong length or a blank answer.
    /// Numeric trouble never fails the call; it is returned in
    /// [`Assessment::anomalies`].
    pub fn assess(&self, answers: &AnswerSet) -> Result<Assessment, AssessmentError> {
        if answers.len() != self.expected_answers {
            return Err(AssessmentError::MalformedAnswerSet {
                expected: self.expected_answers,
                actual: answers.len(),
            });
        }
        if let Some(index) = answers.first_blank() {
            return Err(AssessmentError::MissingAnswer { index });
        }

        let strong = self.combiner.joint_likelihood(answers, Hypothesis::Strong);
        let weak = self.combiner.joint_likelihood(answers, Hypothesis::Weak);

        let mut anomalies = Vec::new();
        for joint in [&strong, &weak] {
            if let Some(anomaly) = &joint.anomaly {
                anomalies.push(anomaly.clone());
            }
            if joint.underflows() {
                tracing::debug!(
                    hypothesis = %joint.hypothesis,
                    log_value = joint.log_value,
                    "joint likelihood underflows f64, using log-space posterior"
                );
                anomalies.push(Anomaly::Underflow {
                    hypothesis: joint.hypothesis,
                });
            }
        }

        let (posterior, anomaly) = self
            .combiner
            .posteriors_from_log(strong.log_value, weak.log_value);
        anomalies.extend(anomaly);

        tracing::debug!(
            answers = answers.len(),
            p_strong = posterior.strong,
            p_weak = posterior.weak,
            anomalies = anomalies.len(),
            "assessment complete"
        );

        Ok(Assessment {
            posterior,
            strong,
            weak,
            anomalies,
        })
    }
}

impl Default for Assessor {
    fn default() -> Self {
        Self::configure(Priors::default(), LikelihoodTable::reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(token: &str, n: usize) -> AnswerSet {
        std::iter::repeat(token).take(n).collect()
    }

    #[test]
    fn test_wrong_length_rejected() {
        let assessor = Assessor::default();
        let err = assessor.assess(&repeat("Always", 19)).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::MalformedAnswerSet {
                expected: 20,
                actual: 19
            }
        ));
        assert!(assessor.assess(&repeat("Always", 21)).is_err());
        assert!(assessor.assess(&AnswerSet::default()).is_err());
    }

    #[test]
    fn test_blank_answer_rejected() {
        let assessor = Assessor::default();
        let answers = repeat("Never", 20).with_answer(7, "");
        let err = assessor.assess(&answers).unwrap_err();
        assert!(matches!(err, AssessmentError::MissingAnswer { index: 7 }));
    }

    #[test]
    fn test_custom_answer_count() {
        let assessor = Assessor::default().with_expected_answers(3);
        let assessment = assessor.assess(&repeat("Yes", 3)).unwrap();
        let expected = (0.9f64.powi(3) * 0.3) / (0.9f64.powi(3) * 0.3 + 0.1f64.powi(3) * 0.7);
        assert!((assessment.posterior.strong - expected).abs() < 1e-9);
        assert!(!assessment.has_anomalies());
    }

    #[test]
    fn test_from_config() {
        let config = BurnoutConfig::from_toml(
            r#"
[priors]
strong = 0.5

[assessment]
expected_answers = 1
"#,
        )
        .unwrap();
        let assessor = Assessor::from_config(&config).unwrap();
        assert_eq!(assessor.expected_answers(), 1);

        let assessment = assessor.assess(&repeat("Often", 1)).unwrap();
        // Even priors: posterior is the normalized likelihood pair.
        assert!((assessment.posterior.strong - 0.7 / 0.9).abs() < 1e-9);
    }
}
