//! Likelihood model: (hypothesis, answer token) → likelihood in (0, 1).

pub mod reference;
pub mod table;

pub use table::LikelihoodTable;

use burnout_core::types::Hypothesis;

/// Source of per-answer likelihoods.
///
/// Implementations must be pure: the same inputs always give the same value.
/// Unknown tokens should yield [`burnout_core::constants::NEUTRAL_LIKELIHOOD`].
pub trait LikelihoodModel: Send + Sync {
    /// Likelihood of observing `token` if `hypothesis` is true.
    fn lookup(&self, hypothesis: Hypothesis, token: &str) -> f64;
}
