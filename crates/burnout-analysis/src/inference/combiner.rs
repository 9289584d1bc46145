//! Naive-Bayes combiner: answers are treated as conditionally independent
//! given the hypothesis, so the joint likelihood is the product of the
//! per-answer likelihoods. The product is accumulated as a sum of logs.

use burnout_core::types::{AnswerSet, Anomaly, Hypothesis, Posterior};

use super::types::{JointLikelihood, Priors};
use crate::likelihood::{LikelihoodModel, LikelihoodTable};

/// Combines a likelihood model with priors to turn answers into posteriors.
pub struct BayesianCombiner {
    priors: Priors,
    model: Box<dyn LikelihoodModel>,
}

impl BayesianCombiner {
    pub fn new(priors: Priors, model: Box<dyn LikelihoodModel>) -> Self {
        Self { priors, model }
    }

    /// Default priors (0.3 / 0.7) with the reference likelihood table.
    pub fn with_defaults() -> Self {
        Self::new(Priors::default(), Box::new(LikelihoodTable::reference()))
    }

    pub fn priors(&self) -> Priors {
        self.priors
    }

    pub fn model(&self) -> &dyn LikelihoodModel {
        self.model.as_ref()
    }

    /// Joint likelihood of `answers` under `hypothesis`.
    ///
    /// If any lookup is not a positive finite number the whole joint is
    /// replaced by the neutral value 1 and the first offending answer is
    /// recorded as an anomaly.
    pub fn joint_likelihood(
        &self,
        answers: &AnswerSet,
        hypothesis: Hypothesis,
    ) -> JointLikelihood {
        let mut log_value = 0.0;
        for (index, token) in answers.iter().enumerate() {
            let likelihood = self.model.lookup(hypothesis, token);
            if !(likelihood.is_finite() && likelihood > 0.0) {
                tracing::warn!(
                    hypothesis = %hypothesis,
                    index,
                    token,
                    likelihood,
                    "unusable likelihood, substituting neutral joint likelihood"
                );
                return JointLikelihood::neutral(
                    hypothesis,
                    answers.len(),
                    Some(Anomaly::UnusableLikelihood {
                        hypothesis,
                        index,
                        token: token.to_string(),
                    }),
                );
            }
            log_value += likelihood.ln();
        }

        JointLikelihood {
            hypothesis,
            log_value,
            answers: answers.len(),
            anomaly: None,
        }
    }

    /// Bayes' rule on plain joint likelihoods.
    ///
    /// A zero denominator yields the neutral posterior (0.5, 0.5) together
    /// with [`Anomaly::InsufficientEvidence`].
    pub fn posteriors(
        &self,
        likelihood_strong: f64,
        likelihood_weak: f64,
    ) -> (Posterior, Option<Anomaly>) {
        let strong = likelihood_strong * self.priors.get(Hypothesis::Strong);
        let weak = likelihood_weak * self.priors.get(Hypothesis::Weak);
        let denominator = strong + weak;

        if denominator == 0.0 || !denominator.is_finite() {
            tracing::warn!(
                likelihood_strong,
                likelihood_weak,
                "zero denominator in Bayes' rule, returning neutral posterior"
            );
            return (Posterior::neutral(), Some(Anomaly::InsufficientEvidence));
        }

        (Posterior::from_strong(strong / denominator), None)
    }

    /// Bayes' rule on log joint likelihoods.
    ///
    /// Computed as a logistic of the log-odds, so joints far below the `f64`
    /// range still produce the right posterior. If neither term is finite
    /// there is no evidence to normalize and the neutral posterior is used.
    pub fn posteriors_from_log(
        &self,
        log_strong: f64,
        log_weak: f64,
    ) -> (Posterior, Option<Anomaly>) {
        let strong = log_strong + self.priors.get(Hypothesis::Strong).ln();
        let weak = log_weak + self.priors.get(Hypothesis::Weak).ln();

        let log_odds_weak = weak - strong;
        if log_odds_weak.is_nan() {
            tracing::warn!(log_strong, log_weak, "no finite evidence, returning neutral posterior");
            return (Posterior::neutral(), Some(Anomaly::InsufficientEvidence));
        }

        (Posterior::from_strong(1.0 / (1.0 + log_odds_weak.exp())), None)
    }
}

impl Default for BayesianCombiner {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for BayesianCombiner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesianCombiner")
            .field("priors", &self.priors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenModel;

    impl LikelihoodModel for BrokenModel {
        fn lookup(&self, hypothesis: Hypothesis, token: &str) -> f64 {
            match (hypothesis, token) {
                (Hypothesis::Strong, "broken") => f64::NAN,
                (Hypothesis::Weak, "zero") => 0.0,
                _ => 0.5,
            }
        }
    }

    fn answers(tokens: &[&str]) -> AnswerSet {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_joint_matches_product() {
        let combiner = BayesianCombiner::with_defaults();
        let set = answers(&["Always", "Poor", "Yes"]);
        let joint = combiner.joint_likelihood(&set, Hypothesis::Strong);
        assert!((joint.value() - 0.9 * 0.8 * 0.9).abs() < 1e-12);
        assert_eq!(joint.answers, 3);
        assert!(joint.anomaly.is_none());
    }

    #[test]
    fn test_joint_of_empty_set_is_one() {
        let combiner = BayesianCombiner::with_defaults();
        let joint = combiner.joint_likelihood(&AnswerSet::default(), Hypothesis::Weak);
        assert_eq!(joint.value(), 1.0);
    }

    #[test]
    fn test_unusable_lookup_substitutes_neutral() {
        let combiner = BayesianCombiner::new(Priors::default(), Box::new(BrokenModel));
        let set = answers(&["fine", "broken", "broken"]);

        let strong = combiner.joint_likelihood(&set, Hypothesis::Strong);
        assert_eq!(strong.log_value, 0.0);
        assert_eq!(
            strong.anomaly,
            Some(Anomaly::UnusableLikelihood {
                hypothesis: Hypothesis::Strong,
                index: 1,
                token: "broken".into(),
            })
        );

        let weak = combiner.joint_likelihood(&set, Hypothesis::Weak);
        assert!(weak.anomaly.is_none());
        assert!((weak.value() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_zero_lookup_is_unusable() {
        let combiner = BayesianCombiner::new(Priors::default(), Box::new(BrokenModel));
        let joint = combiner.joint_likelihood(&answers(&["zero"]), Hypothesis::Weak);
        assert_eq!(joint.value(), 1.0);
        assert!(matches!(joint.anomaly, Some(Anomaly::UnusableLikelihood { index: 0, .. })));
    }

    #[test]
    fn test_posteriors_bayes_rule() {
        let combiner = BayesianCombiner::with_defaults();
        let (posterior, anomaly) = combiner.posteriors(0.9, 0.1);
        let expected = (0.9 * 0.3) / (0.9 * 0.3 + 0.1 * 0.7);
        assert!((posterior.strong - expected).abs() < 1e-12);
        assert!((posterior.strong + posterior.weak - 1.0).abs() < 1e-12);
        assert!(anomaly.is_none());
    }

    #[test]
    fn test_posteriors_zero_denominator_is_neutral() {
        let combiner = BayesianCombiner::with_defaults();
        let (posterior, anomaly) = combiner.posteriors(0.0, 0.0);
        assert_eq!(posterior, Posterior::neutral());
        assert_eq!(anomaly, Some(Anomaly::InsufficientEvidence));
    }

    #[test]
    fn test_posteriors_equal_likelihoods_return_priors() {
        let combiner = BayesianCombiner::with_defaults();
        let (posterior, _) = combiner.posteriors(0.25, 0.25);
        assert!((posterior.strong - 0.3).abs() < 1e-12);
        assert!((posterior.weak - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_log_posteriors_agree_with_plain() {
        let combiner = BayesianCombiner::with_defaults();
        for (ls, lw) in [(0.9, 0.1), (0.02, 0.3), (1e-6, 2e-6), (0.5, 0.5)] {
            let (plain, _) = combiner.posteriors(ls, lw);
            let (log, _) = combiner.posteriors_from_log(f64::ln(ls), f64::ln(lw));
            assert!((plain.strong - log.strong).abs() < 1e-9, "{ls} {lw}");
        }
    }

    #[test]
    fn test_log_posteriors_survive_underflow() {
        let combiner = BayesianCombiner::with_defaults();
        // Both plain products are 0.0 in f64.
        let (plain, plain_anomaly) = combiner.posteriors((-900.0f64).exp(), (-910.0f64).exp());
        assert_eq!(plain_anomaly, Some(Anomaly::InsufficientEvidence));
        assert_eq!(plain, Posterior::neutral());

        let (log, anomaly) = combiner.posteriors_from_log(-900.0, -910.0);
        assert!(anomaly.is_none());
        assert!(log.strong > 0.99);
        assert!(log.is_normalized());
    }

    #[test]
    fn test_log_posteriors_no_finite_evidence() {
        let combiner = BayesianCombiner::with_defaults();
        let (posterior, anomaly) =
            combiner.posteriors_from_log(f64::NEG_INFINITY, f64::NEG_INFINITY);
        assert_eq!(posterior, Posterior::neutral());
        assert_eq!(anomaly, Some(Anomaly::InsufficientEvidence));
    }

    #[test]
    fn test_log_posteriors_one_sided_evidence() {
        let combiner = BayesianCombiner::with_defaults();
        let (posterior, anomaly) = combiner.posteriors_from_log(-10.0, f64::NEG_INFINITY);
        assert!(anomaly.is_none());
        assert_eq!(posterior.strong, 1.0);
        assert_eq!(posterior.weak, 0.0);
    }
}
