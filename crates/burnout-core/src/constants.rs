//! Shared constants for the burnout assessment engine.

/// Default prior probability of strong burnout.
pub const DEFAULT_PRIOR_STRONG: f64 = 0.3;

/// Default prior probability of weak burnout.
pub const DEFAULT_PRIOR_WEAK: f64 = 0.7;

/// Likelihood returned for a token the table does not recognize.
pub const NEUTRAL_LIKELIHOOD: f64 = 0.5;

/// Number of questions in the reference instrument.
pub const REFERENCE_QUESTION_COUNT: usize = 20;

/// Tolerance for "sums to one" checks on priors and posteriors.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Strong-burnout posterior above which professional help is recommended.
pub const RECOMMENDATION_THRESHOLD: f64 = 0.5;

/// Label the input layer shows for an unanswered question.
pub const PLACEHOLDER_TOKEN: &str = "Select an option";

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "burnout.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "BURNOUT_LOG";
