//! Static likelihood table backed by `FxHashMap`.

use rustc_hash::FxHashMap;

use burnout_core::config::LikelihoodConfig;
use burnout_core::constants::NEUTRAL_LIKELIHOOD;
use burnout_core::errors::ConfigError;
use burnout_core::types::Hypothesis;

use super::reference::REFERENCE_LIKELIHOODS;
use super::LikelihoodModel;

/// Read-only mapping from (hypothesis, token) to a likelihood in (0, 1).
///
/// Built once and never mutated afterwards; share it freely across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LikelihoodTable {
    strong: FxHashMap<String, f64>,
    weak: FxHashMap<String, f64>,
}

impl LikelihoodTable {
    /// An empty table. Every lookup yields the neutral default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The hand-authored table of the reference instrument.
    pub fn reference() -> Self {
        let mut table = Self::default();
        for &(token, strong, weak) in REFERENCE_LIKELIHOODS {
            table.strong.insert(token.to_string(), strong);
            table.weak.insert(token.to_string(), weak);
        }
        table
    }

    /// Build a table from `(hypothesis, token, likelihood)` entries.
    ///
    /// Later entries for the same key win. Values outside (0, 1) are rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Hypothesis, S, f64)>,
        S: Into<String>,
    {
        let mut table = Self::default();
        for (hypothesis, token, value) in entries {
            table.insert(hypothesis, token.into(), value)?;
        }
        Ok(table)
    }

    /// Resolve a table from configuration: the reference table (unless
    /// `replace_reference` is set) with the configured entries on top.
    pub fn from_config(config: &LikelihoodConfig) -> Result<Self, ConfigError> {
        let base = if config.effective_replace_reference() {
            Self::empty()
        } else {
            Self::reference()
        };
        base.with_overrides(config)
    }

    /// Return a copy with the configured entries layered on top.
    pub fn with_overrides(&self, config: &LikelihoodConfig) -> Result<Self, ConfigError> {
        let mut table = self.clone();
        for hypothesis in Hypothesis::ALL {
            for (token, &value) in config.entries(hypothesis) {
                table.insert(hypothesis, token.clone(), value)?;
            }
        }
        Ok(table)
    }

    /// Swap the Strong and Weak columns.
    pub fn mirrored(&self) -> Self {
        Self {
            strong: self.weak.clone(),
            weak: self.strong.clone(),
        }
    }

    /// Likelihood of `token` under `hypothesis`, or 0.5 if the pair is unknown.
    pub fn lookup(&self, hypothesis: Hypothesis, token: &str) -> f64 {
        self.column(hypothesis)
            .get(token)
            .copied()
            .unwrap_or(NEUTRAL_LIKELIHOOD)
    }

    pub fn contains(&self, hypothesis: Hypothesis, token: &str) -> bool {
        self.column(hypothesis).contains_key(token)
    }

    /// Number of distinct tokens known to either hypothesis.
    pub fn len(&self) -> usize {
        self.strong.len()
            + self
                .weak
                .keys()
                .filter(|token| !self.strong.contains_key(*token))
                .count()
    }

    pub fn is_empty(&self) -> bool {
        self.strong.is_empty() && self.weak.is_empty()
    }

    fn column(&self, hypothesis: Hypothesis) -> &FxHashMap<String, f64> {
        match hypothesis {
            Hypothesis::Strong => &self.strong,
            Hypothesis::Weak => &self.weak,
        }
    }

    fn insert(
        &mut self,
        hypothesis: Hypothesis,
        token: String,
        value: f64,
    ) -> Result<(), ConfigError> {
        if !(value > 0.0 && value < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: format!("likelihoods.{hypothesis}.{token:?}"),
                message: format!("must be strictly between 0.0 and 1.0, got {value}"),
            });
        }
        let column = match hypothesis {
            Hypothesis::Strong => &mut self.strong,
            Hypothesis::Weak => &mut self.weak,
        };
        column.insert(token, value);
        Ok(())
    }
}

impl LikelihoodModel for LikelihoodTable {
    fn lookup(&self, hypothesis: Hypothesis, token: &str) -> f64 {
        LikelihoodTable::lookup(self, hypothesis, token)
    }
}
