//! burnout-core: shared types, errors, configuration, tracing, and constants
//! for the burnout assessment engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
