//! The two burnout hypotheses being distinguished.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A burnout class. The set is closed: exactly two hypotheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hypothesis {
    Strong,
    Weak,
}

impl Hypothesis {
    /// Both hypotheses, Strong first.
    pub const ALL: [Hypothesis; 2] = [Hypothesis::Strong, Hypothesis::Weak];

    /// Lowercase name, used as config key and log field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Weak => "weak",
        }
    }

    /// The competing hypothesis.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Strong => Self::Weak,
            Self::Weak => Self::Strong,
        }
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
