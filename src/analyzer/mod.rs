//! Content analysis: categorization, image classification, quality
//! scoring, and a page-level privacy score.
//!
//! Each sub-analysis is a standalone function over [`PageData`];
//! [`analyze`] runs them together and bundles the results.

pub mod category;
pub mod images;
pub mod privacy;
pub mod quality;

use serde::Serialize;

pub use category::{categorize, CategoryDetails};
pub use images::{ImageAnalysis, ImageStats};
pub use privacy::PrivacyScore;
pub use quality::ContentQuality;

use crate::config::AnalyzerConfig;
use crate::page::PageData;
use crate::tracking::{self, CookieAccessReport};

/// Combined content analysis for one page.
#[derive(Debug, Clone, Serialize)]
pub struct ContentAnalysis {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<ImageAnalysis>,
    pub content_quality: ContentQuality,
    pub privacy_score: PrivacyScore,
}

/// Runs every content analyzer over a page.
///
/// Image analysis respects `config.enable_image_analysis`; the quality
/// score still needs image statistics, so those are computed either way.
pub fn analyze(page: &PageData, config: &AnalyzerConfig) -> ContentAnalysis {
    let image_analysis = images::analyze(page);
    let content_quality = quality::assess(page, &image_analysis);
    let cookie_access = tracking::analyze_cookie_access(page, config);
    ContentAnalysis {
        category: category::categorize(page),
        content_quality,
        privacy_score: privacy::score(&cookie_access),
        image_analysis: config.enable_image_analysis.then_some(image_analysis),
    }
}

/// Content analysis that reuses an existing cookie access report instead
/// of recomputing it.
pub fn analyze_with_report(
    page: &PageData,
    config: &AnalyzerConfig,
    cookie_access: &CookieAccessReport,
) -> ContentAnalysis {
    let image_analysis = images::analyze(page);
    let content_quality = quality::assess(page, &image_analysis);
    ContentAnalysis {
        category: category::categorize(page),
        content_quality,
        privacy_score: privacy::score(cookie_access),
        image_analysis: config.enable_image_analysis.then_some(image_analysis),
    }
}
