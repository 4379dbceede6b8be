//! Configuration types and CLI options.
//!
//! This module defines the typed configuration passed into the detection
//! engine and analyzers, plus the logging enums used by the CLI.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    ALT_TEXT_MISSING_RATIO, DEFAULT_TRACKING_DOMAINS, EXCESSIVE_COOKIE_THRESHOLD,
    PRIVACY_BURIED_HTML_LEN, SEVERITY_WEIGHT_HIGH, SEVERITY_WEIGHT_LOW, SEVERITY_WEIGHT_MEDIUM,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Points contributed by a finding at each severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeverityWeights {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        SeverityWeights {
            high: SEVERITY_WEIGHT_HIGH,
            medium: SEVERITY_WEIGHT_MEDIUM,
            low: SEVERITY_WEIGHT_LOW,
        }
    }
}

/// Configuration for the dark-pattern detection engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Severity-to-points mapping for the aggregate score.
    pub severity_weights: SeverityWeights,

    /// HTML length above which a "privacy" mention counts as buried.
    pub privacy_buried_html_len: usize,

    /// Missing-alt-text ratio above which (strictly) the accessibility rule
    /// fires.
    pub alt_text_missing_ratio: f64,

    /// Non-essential cookie count above which (strictly) the
    /// excessive-cookie rule fires.
    pub excessive_cookie_threshold: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            severity_weights: SeverityWeights::default(),
            privacy_buried_html_len: PRIVACY_BURIED_HTML_LEN,
            alt_text_missing_ratio: ALT_TEXT_MISSING_RATIO,
            excessive_cookie_threshold: EXCESSIVE_COOKIE_THRESHOLD,
        }
    }
}

/// Configuration for the content and tracking analyzers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Known tracking domains, matched by substring against cookie domains
    /// and script URLs.
    pub tracking_domains: Vec<String>,

    /// Attach the cookie access analysis and tracking profile.
    pub enable_cookie_analysis: bool,

    /// Attach the image analysis to the content report.
    pub enable_image_analysis: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            tracking_domains: DEFAULT_TRACKING_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            enable_cookie_analysis: true,
            enable_image_analysis: true,
        }
    }
}

impl AnalyzerConfig {
    /// True when `domain` substring-matches any configured tracking domain.
    pub fn is_known_tracker(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        self.tracking_domains
            .iter()
            .any(|tracker| domain.contains(tracker.as_str()))
    }
}

/// Library configuration (no CLI dependencies).
///
/// Constructed once by the caller and passed by reference into the engine,
/// rules, and profilers.
///
/// # Examples
///
/// ```
/// use trapscan::Config;
///
/// let mut config = Config::default();
/// config.analyzer.enable_image_analysis = false;
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub detector: DetectorConfig,
    pub analyzer: AnalyzerConfig,
}
