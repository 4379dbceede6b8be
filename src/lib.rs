//! trapscan library: dark pattern and tracking analysis for crawled pages
//!
//! This library takes pages captured by a crawler (HTML, cookies, forms,
//! popups, scripts, images) and runs them through a rule-based dark
//! pattern detector, a cookie and tracking profiler, and content
//! analyzers, producing a scored report per page.
//!
//! # Example
//!
//! ```
//! use trapscan::{analyze_page, Config, PageData};
//!
//! let page = PageData::new("https://example.com");
//! let config = Config::default();
//!
//! let analyzed = analyze_page(page, &config);
//! let detection = analyzed.dark_patterns.expect("detection always runs");
//! println!(
//!     "{}: {} finding(s), grade {}",
//!     analyzed.page.url,
//!     detection.findings.len(),
//!     detection.score.grade
//! );
//! ```

pub mod analyzer;
pub mod app;
pub mod config;
pub mod detector;
pub mod error;
pub mod page;
pub mod tracking;

// Re-export public API
pub use config::{AnalyzerConfig, Config, DetectorConfig, LogFormat, LogLevel};
pub use detector::{DarkPatternDetector, DetectionResult, Finding, Grade, Pattern, Severity};
pub use error::InputError;
pub use page::{AnalyzedPage, Cookie, PageData, ScanInfo, ScanResult};
pub use tracking::{CookieAccessReport, PrivacyAssessment, RiskLevel, RiskTier, TrackerInfo};

use chrono::Utc;
use log::info;

/// Runs the full analysis pipeline over a single page.
///
/// Dark pattern detection and content analysis always run. Cookie and
/// tracking analysis can be switched off via
/// [`AnalyzerConfig::enable_cookie_analysis`]; the content analyzer's
/// privacy score then works from a report computed on the fly.
pub fn analyze_page(page: PageData, config: &Config) -> AnalyzedPage {
    let detector = DarkPatternDetector::new(config.clone());
    analyze_page_with(page, config, &detector)
}

fn analyze_page_with(page: PageData, config: &Config, detector: &DarkPatternDetector) -> AnalyzedPage {
    let detection = detector.detect(&page);

    let cookie_access = config
        .analyzer
        .enable_cookie_analysis
        .then(|| tracking::analyze_cookie_access(&page, &config.analyzer));

    let tracking_access = config
        .analyzer
        .enable_cookie_analysis
        .then(|| tracking::profile(&page.cookies, &page.js_scripts, &config.analyzer));

    let privacy_assessment = tracking_access.as_ref().map(|report| {
        let third_party = page.cookies.iter().filter(|c| c.is_third_party).count();
        let session = page.cookies.iter().filter(|c| c.is_session()).count();
        tracking::assess_privacy_impact(report, third_party, session)
    });

    let content = match &cookie_access {
        Some(report) => analyzer::analyze_with_report(&page, &config.analyzer, report),
        None => analyzer::analyze(&page, &config.analyzer),
    };

    let mut analyzed = AnalyzedPage::new(page);
    analyzed.category = Some(content.category.clone());
    analyzed.cookie_access = cookie_access;
    analyzed.tracking_access = tracking_access;
    analyzed.privacy_assessment = privacy_assessment;
    analyzed.content = Some(content);
    analyzed.dark_patterns = Some(detection);
    analyzed
}

/// Analyzes a batch of pages and wraps the results in a scan report.
pub fn analyze_pages(pages: Vec<PageData>, config: &Config) -> ScanResult {
    let detector = DarkPatternDetector::new(config.clone());
    let total = pages.len();

    let analyzed: Vec<AnalyzedPage> = pages
        .into_iter()
        .map(|page| analyze_page_with(page, config, &detector))
        .collect();

    let total_findings: usize = analyzed
        .iter()
        .filter_map(|p| p.dark_patterns.as_ref())
        .map(|d| d.findings.len())
        .sum();
    info!(
        "Analyzed {} page(s), {} finding(s) total",
        total, total_findings
    );

    ScanResult {
        scan_info: ScanInfo {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            pages_analyzed: total,
            timestamp: Utc::now(),
        },
        pages: analyzed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_page_attaches_every_stage() {
        let page = PageData::new("https://example.com");
        let analyzed = analyze_page(page, &Config::default());
        assert!(analyzed.category.is_some());
        assert!(analyzed.cookie_access.is_some());
        assert!(analyzed.tracking_access.is_some());
        assert!(analyzed.privacy_assessment.is_some());
        assert!(analyzed.content.is_some());
        assert!(analyzed.dark_patterns.is_some());
    }

    #[test]
    fn test_cookie_analysis_can_be_disabled() {
        let mut config = Config::default();
        config.analyzer.enable_cookie_analysis = false;
        let analyzed = analyze_page(PageData::new("https://example.com"), &config);
        assert!(analyzed.cookie_access.is_none());
        assert!(analyzed.tracking_access.is_none());
        assert!(analyzed.privacy_assessment.is_none());
        // Detection and content analysis still run.
        assert!(analyzed.dark_patterns.is_some());
        assert!(analyzed.content.is_some());
    }

    #[test]
    fn test_analyze_pages_counts_pages() {
        let pages = vec![
            PageData::new("https://a.example.com"),
            PageData::new("https://b.example.com"),
        ];
        let result = analyze_pages(pages, &Config::default());
        assert_eq!(result.scan_info.pages_analyzed, 2);
        assert_eq!(result.pages.len(), 2);
        assert_eq!(result.scan_info.tool, "trapscan");
    }
}
