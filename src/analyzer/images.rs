//! Image content and accessibility analysis.
//!
//! Classifies page images from their alt text and source URLs, counts
//! alt-text coverage, and flags accessibility gaps when a large share of
//! images carry no alt text.

use serde::Serialize;

use crate::config::ADULT_IMAGE_RATIO;
use crate::page::{Image, PageData};

const ECOMMERCE_TERMS: &[&str] = &["product", "item", "buy", "price", "cart", "shop"];
const ADULT_TERMS: &[&str] = &["nude", "sex", "adult", "erotic", "porn"];
const SOCIAL_TERMS: &[&str] = &["profile", "avatar", "post", "like", "share"];
const STREAMING_TERMS: &[&str] = &["movie", "series", "episode", "watch", "stream"];

/// Alt-text and hosting counts over a page's images.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageStats {
    pub total: usize,
    pub with_alt: usize,
    pub without_alt: usize,
    pub external: usize,
}

/// Content classification of a page's images.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageAnalysis {
    pub image_stats: ImageStats,
    pub content_indicators: Vec<String>,
    pub accessibility_issues: Vec<String>,
    pub primary_content_type: String,
}

/// Analyzes a page's images for content indicators and accessibility.
pub fn analyze(page: &PageData) -> ImageAnalysis {
    let images = &page.images;
    let origin = page_origin(&page.url);

    let with_alt = images.iter().filter(|img| !img.alt.is_empty()).count();
    let without_alt = images.len() - with_alt;
    let external = images
        .iter()
        .filter(|img| !img.src.starts_with(&origin))
        .count();

    let mut content_indicators = Vec::new();
    for img in images {
        let alt = img.alt.to_lowercase();
        let src = img.src.to_lowercase();
        let mentions = |terms: &[&str]| terms.iter().any(|t| alt.contains(t) || src.contains(t));

        if mentions(ECOMMERCE_TERMS) {
            content_indicators.push("ecommerce".to_string());
        }
        if mentions(ADULT_TERMS) {
            content_indicators.push("adult".to_string());
        }
        if mentions(SOCIAL_TERMS) {
            content_indicators.push("social".to_string());
        }
        if mentions(STREAMING_TERMS) {
            content_indicators.push("streaming".to_string());
        }
    }

    let mut accessibility_issues = Vec::new();
    if without_alt > 0 {
        let missing_percentage = without_alt as f64 / images.len() as f64 * 100.0;
        if missing_percentage > 50.0 {
            accessibility_issues
                .push("Many images missing alt text - poor accessibility".to_string());
        } else if missing_percentage > 20.0 {
            accessibility_issues.push("Some images missing alt text".to_string());
        }
    }

    let primary_content_type = primary_type(&content_indicators, images);

    ImageAnalysis {
        image_stats: ImageStats {
            total: images.len(),
            with_alt,
            without_alt,
            external,
        },
        content_indicators,
        accessibility_issues,
        primary_content_type,
    }
}

/// Scheme plus host of the page URL, used to tell external images apart.
fn page_origin(url: &str) -> String {
    let scheme_end = url.find("//").map(|i| i + 2).unwrap_or(0);
    match url[scheme_end..].find('/') {
        Some(path_start) => url[..scheme_end + path_start].to_string(),
        None => url.to_string(),
    }
}

/// Most frequent indicator, first seen winning ties. Adult content wins
/// outright when adult images pass the ratio threshold.
fn primary_type(indicators: &[String], images: &[Image]) -> String {
    if indicators.is_empty() {
        return "general".to_string();
    }

    if indicators.iter().any(|ind| ind == "adult") {
        let adult_images = images
            .iter()
            .filter(|img| {
                let text = format!("{}{}", img.alt, img.src).to_lowercase();
                ADULT_TERMS.iter().any(|t| text.contains(t))
            })
            .count();
        if adult_images as f64 > images.len() as f64 * ADULT_IMAGE_RATIO {
            return "adult".to_string();
        }
    }

    let mut best: Option<(&String, usize)> = None;
    for indicator in indicators {
        let count = indicators.iter().filter(|i| *i == indicator).count();
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((indicator, count)),
        }
    }
    best.map(|(ind, _)| ind.clone())
        .unwrap_or_else(|| "general".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(src: &str, alt: &str) -> Image {
        Image {
            src: src.to_string(),
            alt: alt.to_string(),
            width: None,
            height: None,
        }
    }

    #[test]
    fn test_page_origin() {
        assert_eq!(page_origin("https://example.com/a/b"), "https://example.com");
        assert_eq!(page_origin("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_stats_and_external_count() {
        let page = PageData {
            images: vec![
                img("https://example.com/logo.png", "logo"),
                img("https://cdn.other.com/banner.png", ""),
            ],
            ..PageData::new("https://example.com/home")
        };
        let analysis = analyze(&page);
        assert_eq!(analysis.image_stats.total, 2);
        assert_eq!(analysis.image_stats.with_alt, 1);
        assert_eq!(analysis.image_stats.without_alt, 1);
        assert_eq!(analysis.image_stats.external, 1);
    }

    #[test]
    fn test_ecommerce_indicators() {
        let page = PageData {
            images: vec![
                img("/product-1.jpg", "red shoes"),
                img("/img2.jpg", "add to cart button"),
            ],
            ..PageData::new("https://shop.example.com")
        };
        let analysis = analyze(&page);
        assert_eq!(analysis.primary_content_type, "ecommerce");
        assert_eq!(
            analysis
                .content_indicators
                .iter()
                .filter(|i| *i == "ecommerce")
                .count(),
            2
        );
    }

    #[test]
    fn test_adult_ratio_threshold() {
        // 1 adult image out of 4 is 25%, below the 30% threshold.
        let page = PageData {
            images: vec![
                img("/adult-banner.jpg", ""),
                img("/a.jpg", "product one"),
                img("/b.jpg", "product two"),
                img("/c.jpg", "product three"),
            ],
            ..PageData::new("https://example.com")
        };
        assert_eq!(analyze(&page).primary_content_type, "ecommerce");

        // 2 of 4 is 50%, over the threshold.
        let page = PageData {
            images: vec![
                img("/adult-banner.jpg", ""),
                img("/d.jpg", "erotic art"),
                img("/a.jpg", "product one"),
                img("/b.jpg", "product two"),
            ],
            ..PageData::new("https://example.com")
        };
        assert_eq!(analyze(&page).primary_content_type, "adult");
    }

    #[test]
    fn test_missing_alt_thresholds() {
        let mostly_missing = PageData {
            images: vec![img("/a.jpg", ""), img("/b.jpg", ""), img("/c.jpg", "ok")],
            ..PageData::new("https://example.com")
        };
        let analysis = analyze(&mostly_missing);
        assert_eq!(
            analysis.accessibility_issues,
            vec!["Many images missing alt text - poor accessibility"]
        );

        let some_missing = PageData {
            images: vec![
                img("/a.jpg", ""),
                img("/b.jpg", "x"),
                img("/c.jpg", "y"),
                img("/d.jpg", "z"),
            ],
            ..PageData::new("https://example.com")
        };
        let analysis = analyze(&some_missing);
        assert_eq!(analysis.accessibility_issues, vec!["Some images missing alt text"]);
    }

    #[test]
    fn test_no_images_is_general() {
        let page = PageData::new("https://example.com");
        let analysis = analyze(&page);
        assert_eq!(analysis.primary_content_type, "general");
        assert!(analysis.accessibility_issues.is_empty());
    }
}
