//! Bayesian combiner: log-space joint likelihoods and Bayes' rule over two
//! hypotheses.

pub mod combiner;
pub mod types;

pub use combiner::BayesianCombiner;
pub use types::{JointLikelihood, Priors};
