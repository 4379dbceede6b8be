//! Website categorization.
//!
//! Scores a fixed set of category keyword tables against the page URL,
//! title, HTML, and meta tags with weighted hits. URL matches weigh most,
//! with hard boosts for flagship retailer domains and TLD-pinned
//! categories. Anything under the minimum score falls back to "General".

use serde::Serialize;

use crate::config::{
    CATEGORY_CONTENT_WEIGHT, CATEGORY_MAJOR_RETAILER_BOOST, CATEGORY_META_WEIGHT,
    CATEGORY_MIN_SCORE, CATEGORY_TITLE_WEIGHT, CATEGORY_TLD_BOOST, CATEGORY_URL_WEIGHT,
};
use crate::page::PageData;

/// One category's keyword tables.
struct CategoryPattern {
    name: &'static str,
    url_keywords: &'static [&'static str],
    content_keywords: &'static [&'static str],
    meta_keywords: &'static [&'static str],
}

static CATEGORY_PATTERNS: &[CategoryPattern] = &[
    CategoryPattern {
        name: "e-commerce",
        url_keywords: &[
            "shop", "store", "buy", "cart", "checkout", "product", "amazon", "ebay", "walmart",
            "target", "bestbuy", "shopping", "commerce",
        ],
        content_keywords: &[
            "price", "buy now", "add to cart", "checkout", "shipping", "product", "inventory",
            "sale", "purchase", "order",
        ],
        meta_keywords: &["ecommerce", "shopping", "retail", "commerce", "store"],
    },
    CategoryPattern {
        name: "news",
        url_keywords: &[
            "news", "cnn", "bbc", "nytimes", "washingtonpost", "foxnews", "reuters", "apnews",
        ],
        content_keywords: &[
            "breaking news", "headline", "article", "journalism", "reporter", "editorial",
        ],
        meta_keywords: &["news", "journalism", "media", "press"],
    },
    CategoryPattern {
        name: "social-media",
        url_keywords: &[
            "facebook", "twitter", "instagram", "linkedin", "tiktok", "snapchat", "reddit",
            "youtube",
        ],
        content_keywords: &["follow", "like", "share", "post", "timeline", "feed", "social"],
        meta_keywords: &["social", "networking", "community"],
    },
    CategoryPattern {
        name: "streaming",
        url_keywords: &[
            "netflix", "hulu", "disney", "amazonprime", "hbomax", "youtube", "twitch", "vimeo",
        ],
        content_keywords: &[
            "stream", "video", "watch", "episode", "season", "series", "movie", "entertainment",
        ],
        meta_keywords: &["streaming", "video", "entertainment", "media"],
    },
    CategoryPattern {
        name: "adult",
        url_keywords: &["porn", "adult", "xxx", "sex", "nsfw", "onlyfans"],
        content_keywords: &["adult content", "mature", "nsfw", "erotic", "sexual"],
        meta_keywords: &["adult", "mature", "nsfw"],
    },
    CategoryPattern {
        name: "search-engine",
        url_keywords: &["google", "bing", "yahoo", "duckduckgo", "search"],
        content_keywords: &["search", "query", "results", "web search", "find"],
        meta_keywords: &["search", "engine", "web search"],
    },
    CategoryPattern {
        name: "educational",
        url_keywords: &[
            "edu", "university", "college", "school", "course", "learn", "education",
        ],
        content_keywords: &[
            "course", "lesson", "education", "learning", "academic", "student",
        ],
        meta_keywords: &["education", "learning", "academic"],
    },
    CategoryPattern {
        name: "government",
        url_keywords: &["gov", "government", "state", "federal", "ministry", "department"],
        content_keywords: &[
            "government", "public service", "official", "policy", "regulation",
        ],
        meta_keywords: &["government", "public", "official"],
    },
    CategoryPattern {
        name: "financial",
        url_keywords: &[
            "bank", "finance", "investment", "trading", "wallet", "crypto", "bitcoin",
        ],
        content_keywords: &[
            "banking", "finance", "investment", "trading", "account", "transaction",
        ],
        meta_keywords: &["finance", "banking", "investment"],
    },
    CategoryPattern {
        name: "healthcare",
        url_keywords: &["hospital", "clinic", "medical", "health", "pharmacy", "doctor"],
        content_keywords: &["health", "medical", "treatment", "patient", "care", "wellness"],
        meta_keywords: &["health", "medical", "healthcare"],
    },
];

/// Categorization with its winning score, for callers that want the margin.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetails {
    pub category: String,
    pub score: u32,
    pub confidence: &'static str,
}

/// Categorizes a page, returning the normalized label ("E Commerce",
/// "News", ... or "General").
pub fn categorize(page: &PageData) -> String {
    details(page).category
}

/// Categorizes a page and reports the winning score and confidence.
pub fn details(page: &PageData) -> CategoryDetails {
    let url = page.url.to_lowercase();
    let title = page.title.to_lowercase();
    let html = page.html_lower();

    let mut meta_description = String::new();
    let mut meta_keywords: Vec<String> = Vec::new();
    for meta in &page.meta_tags {
        let name = meta.name.as_deref().unwrap_or("");
        let property = meta.property.as_deref().unwrap_or("");
        if name == "description" || property == "og:description" {
            if let Some(content) = &meta.content {
                meta_description = content.to_lowercase();
            }
        } else if name == "keywords" {
            if let Some(content) = &meta.content {
                meta_keywords.extend(content.split(',').map(|kw| kw.trim().to_lowercase()));
            }
        }
    }

    let mut best: Option<(&'static str, u32)> = None;
    for pattern in CATEGORY_PATTERNS {
        let mut score = 0u32;

        for keyword in pattern.url_keywords {
            if url.contains(keyword) {
                score += CATEGORY_URL_WEIGHT;
            }
        }

        // Flagship retailers categorize as e-commerce even when the page
        // content says otherwise.
        if pattern.name == "e-commerce"
            && ["amazon", "ebay", "walmart"].iter().any(|d| url.contains(d))
        {
            score += CATEGORY_MAJOR_RETAILER_BOOST;
        }

        for keyword in pattern.content_keywords {
            if title.contains(keyword) {
                score += CATEGORY_TITLE_WEIGHT;
            }
        }

        for keyword in pattern.content_keywords {
            if html.contains(keyword) {
                score += CATEGORY_CONTENT_WEIGHT;
            }
        }

        for keyword in pattern.meta_keywords {
            if meta_keywords.iter().any(|kw| kw == keyword) || meta_description.contains(keyword) {
                score += CATEGORY_META_WEIGHT;
            }
        }

        if pattern.name == "educational" && (url.contains(".edu") || url.contains("university")) {
            score += CATEGORY_TLD_BOOST;
        }
        if pattern.name == "government" && (url.contains(".gov") || url.contains("government")) {
            score += CATEGORY_TLD_BOOST;
        }

        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((pattern.name, score)),
        }
    }

    match best {
        Some((name, score)) if score >= CATEGORY_MIN_SCORE => CategoryDetails {
            category: normalize_label(name),
            score,
            confidence: "high",
        },
        Some((_, score)) => CategoryDetails {
            category: "General".to_string(),
            score,
            confidence: "low",
        },
        None => CategoryDetails {
            category: "General".to_string(),
            score: 0,
            confidence: "low",
        },
    }
}

/// "e-commerce" -> "E Commerce", "news" -> "News".
fn normalize_label(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amazon_categorizes_as_e_commerce() {
        let page = PageData {
            html: "<div>add to cart - best price today</div>".to_string(),
            title: "Amazon.com: online shopping".to_string(),
            ..PageData::new("https://www.amazon.com/dp/B000123")
        };
        let result = details(&page);
        assert_eq!(result.category, "E Commerce");
        assert_eq!(result.confidence, "high");
        // The retailer boost alone outweighs any other category's possible
        // score for this page.
        assert!(result.score > 10);
    }

    #[test]
    fn test_news_site() {
        let page = PageData {
            title: "Breaking news: headline of the day".to_string(),
            html: "article journalism editorial".to_string(),
            ..PageData::new("https://www.bbc.com/news/world")
        };
        assert_eq!(categorize(&page), "News");
    }

    #[test]
    fn test_edu_tld_boost() {
        let page = PageData {
            html: "course catalog".to_string(),
            ..PageData::new("https://cs.stanford.edu/courses")
        };
        assert_eq!(categorize(&page), "Educational");
    }

    #[test]
    fn test_meta_keywords_contribute() {
        let page = PageData {
            meta_tags: vec![crate::page::MetaTag {
                name: Some("keywords".to_string()),
                property: None,
                content: Some("finance, banking, loans".to_string()),
            }],
            ..PageData::new("https://example.com")
        };
        assert_eq!(categorize(&page), "Financial");
    }

    #[test]
    fn test_unmatched_page_is_general() {
        let page = PageData {
            html: "hello world".to_string(),
            ..PageData::new("https://example.org")
        };
        let result = details(&page);
        assert_eq!(result.category, "General");
        assert_eq!(result.confidence, "low");
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("e-commerce"), "E Commerce");
        assert_eq!(normalize_label("social-media"), "Social Media");
        assert_eq!(normalize_label("news"), "News");
    }
}
