//! Core types shared by the inference engine and its collaborators.

pub mod answers;
pub mod hypothesis;
pub mod posterior;

pub use answers::AnswerSet;
pub use hypothesis::Hypothesis;
pub use posterior::{Anomaly, Posterior};
