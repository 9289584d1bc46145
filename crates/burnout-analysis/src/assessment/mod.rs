//! Assessment facade: validates an answer set, runs the combiner, and
//! returns the posterior with any anomalies.

pub mod assessor;
pub mod report;
pub mod types;

pub use assessor::Assessor;
pub use report::{ChartPalette, Recommendation, Report};
pub use types::Assessment;
