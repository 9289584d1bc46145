//! Tests for the configuration system.

use std::sync::Mutex;

use burnout_core::config::burnout_config::{BurnoutConfig, ConfigOverrides};
use burnout_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all BURNOUT_ env vars to prevent cross-test contamination.
fn clear_burnout_env_vars() {
    for key in ["BURNOUT_PRIOR_STRONG", "BURNOUT_EXPECTED_ANSWERS"] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_burnout_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("burnout.toml"),
        r#"
[priors]
strong = 0.4

[assessment]
expected_answers = 12
"#,
    )
    .unwrap();

    std::env::set_var("BURNOUT_PRIOR_STRONG", "0.2");

    let overrides = ConfigOverrides {
        expected_answers: Some(8),
        ..Default::default()
    };

    let config = BurnoutConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Env beats project file
    assert_eq!(config.priors.strong, Some(0.2));
    // Overrides beat project file
    assert_eq!(config.assessment.expected_answers, Some(8));

    clear_burnout_env_vars();
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_burnout_env_vars();

    let dir = tempdir();
    let config = BurnoutConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.priors.strong, None);
    assert!((config.priors.effective_strong() - 0.3).abs() < 1e-12);
    assert_eq!(config.assessment.effective_expected_answers(), 20);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_burnout_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("burnout.toml"), "[priors\nstrong = ").unwrap();

    let err = BurnoutConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unparseable_env_var_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_burnout_env_vars();

    let dir = tempdir();
    std::env::set_var("BURNOUT_EXPECTED_ANSWERS", "twenty");
    let config = BurnoutConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.assessment.expected_answers, None);

    clear_burnout_env_vars();
}

#[test]
fn test_prior_out_of_range_rejected() {
    for bad in ["0.0", "1.0", "1.5", "-0.2", "nan"] {
        let result = BurnoutConfig::from_toml(&format!("[priors]\nstrong = {bad}\n"));
        assert!(
            matches!(result, Err(ConfigError::ValidationFailed { .. })),
            "prior {bad} should be rejected"
        );
    }
}

#[test]
fn test_zero_expected_answers_rejected() {
    let result = BurnoutConfig::from_toml("[assessment]\nexpected_answers = 0\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_likelihood_out_of_range_rejected() {
    let result = BurnoutConfig::from_toml("[likelihoods.weak]\nNever = 1.0\n");
    match result {
        Err(ConfigError::InvalidValue { field, .. }) => {
            assert!(field.starts_with("likelihoods.weak"));
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_likelihood_tables_parse() {
    let config = BurnoutConfig::from_toml(
        r#"
[likelihoods]
replace_reference = true

[likelihoods.strong]
"Very Good" = 0.15

[likelihoods.weak]
"Very Good" = 0.85
"#,
    )
    .unwrap();
    assert!(config.likelihoods.effective_replace_reference());
    assert_eq!(config.likelihoods.strong.get("Very Good"), Some(&0.15));
    assert_eq!(config.likelihoods.weak.get("Very Good"), Some(&0.85));
}

#[test]
fn test_unknown_keys_ignored() {
    let config = BurnoutConfig::from_toml("[display]\ntheme = \"dark\"\n").unwrap();
    assert_eq!(config.priors.strong, None);
}
