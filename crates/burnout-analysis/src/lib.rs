//! burnout-analysis: naive-Bayes burnout inference.
//!
//! Answer tokens are mapped to per-hypothesis likelihoods
//! ([`likelihood`]), combined in log-space and normalized against the
//! priors ([`inference`]), and exposed through the [`assessment::Assessor`]
//! facade. [`questionnaire`] describes the reference instrument for input
//! collectors.

pub mod assessment;
pub mod inference;
pub mod likelihood;
pub mod questionnaire;

pub use assessment::{Assessment, Assessor, Recommendation, Report};
pub use inference::{BayesianCombiner, JointLikelihood, Priors};
pub use likelihood::{LikelihoodModel, LikelihoodTable};
