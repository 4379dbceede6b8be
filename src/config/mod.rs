//! Configuration for the detection engine and analyzers.
//!
//! This module provides:
//! - Named constants for every heuristic threshold and keyword table
//! - Typed configuration structs with defaults
//! - Logging option types for the CLI
//!
//! The configuration is an explicit value constructed once and passed by
//! reference into the detector, the rule library, and the profilers. There
//! is no global configuration state.

mod constants;
mod types;

pub use constants::*;
pub use types::{AnalyzerConfig, Config, DetectorConfig, LogFormat, LogLevel, SeverityWeights};
