//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AssessmentConfig, LikelihoodConfig, PriorsConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::types::Hypothesis;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`BURNOUT_*`)
/// 3. Project config (`burnout.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BurnoutConfig {
    pub priors: PriorsConfig,
    pub likelihoods: LikelihoodConfig,
    pub assessment: AssessmentConfig,
}

/// Override values supplied by the embedding front end.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub prior_strong: Option<f64>,
    pub expected_answers: Option<usize>,
}

impl BurnoutConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority above defaults): project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1: programmatic overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &BurnoutConfig) -> Result<(), ConfigError> {
        if let Some(prior) = config.priors.strong {
            if !(prior > 0.0 && prior < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "priors.strong".to_string(),
                    message: format!("must be strictly between 0.0 and 1.0, got {prior}"),
                });
            }
        }
        if config.assessment.expected_answers == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "assessment.expected_answers".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for hypothesis in Hypothesis::ALL {
            for (token, &value) in config.likelihoods.entries(hypothesis) {
                if !(value > 0.0 && value < 1.0) {
                    return Err(ConfigError::InvalidValue {
                        field: format!("likelihoods.{hypothesis}.{token:?}"),
                        message: format!("must be strictly between 0.0 and 1.0, got {value}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BurnoutConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BurnoutConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Scalars override only when `other` has a
    /// `Some` value; likelihood entries are added key by key.
    fn merge(base: &mut BurnoutConfig, other: &BurnoutConfig) {
        if other.priors.strong.is_some() {
            base.priors.strong = other.priors.strong;
        }

        if other.likelihoods.replace_reference.is_some() {
            base.likelihoods.replace_reference = other.likelihoods.replace_reference;
        }
        for (token, value) in &other.likelihoods.strong {
            base.likelihoods.strong.insert(token.clone(), *value);
        }
        for (token, value) in &other.likelihoods.weak {
            base.likelihoods.weak.insert(token.clone(), *value);
        }

        if other.assessment.expected_answers.is_some() {
            base.assessment.expected_answers = other.assessment.expected_answers;
        }
    }

    /// Apply `BURNOUT_*` environment variables. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut BurnoutConfig) {
        if let Ok(val) = std::env::var("BURNOUT_PRIOR_STRONG") {
            match val.parse::<f64>() {
                Ok(v) => config.priors.strong = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring unparseable BURNOUT_PRIOR_STRONG"),
            }
        }
        if let Ok(val) = std::env::var("BURNOUT_EXPECTED_ANSWERS") {
            match val.parse::<usize>() {
                Ok(v) => config.assessment.expected_answers = Some(v),
                Err(_) => {
                    tracing::warn!(value = %val, "ignoring unparseable BURNOUT_EXPECTED_ANSWERS")
                }
            }
        }
    }

    fn apply_overrides(config: &mut BurnoutConfig, overrides: &ConfigOverrides) {
        if let Some(prior) = overrides.prior_strong {
            config.priors.strong = Some(prior);
        }
        if let Some(expected) = overrides.expected_answers {
            config.assessment.expected_answers = Some(expected);
        }
    }
}
