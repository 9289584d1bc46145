//! Configuration system for the burnout engine.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod assessment_config;
pub mod burnout_config;
pub mod likelihood_config;
pub mod priors_config;

pub use assessment_config::AssessmentConfig;
pub use burnout_config::{BurnoutConfig, ConfigOverrides};
pub use likelihood_config::LikelihoodConfig;
pub use priors_config::PriorsConfig;
