//! Cookie access analysis.
//!
//! Summarizes what data access the page's cookies and scripts grant: broad
//! collection purposes, named tracking systems, third-party domains, and
//! headline privacy concerns. Consumed by the page-level privacy score and
//! by the cookie detection rules.

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::page::PageData;

/// Counts over the page's cookie jar.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CookieStats {
    pub total: usize,
    pub first_party: usize,
    pub third_party: usize,
    pub session_cookies: usize,
    pub persistent_cookies: usize,
}

/// What the page's cookies and scripts reveal about data access.
///
/// All lists are deduplicated in first-seen order so repeated analysis of
/// the same page yields identical output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CookieAccessReport {
    /// Broad collection purposes inferred from cookie names.
    pub data_collection: Vec<String>,
    /// Named tracking systems recognized from script URLs.
    pub tracking_capabilities: Vec<String>,
    /// Distinct third-party cookie domains.
    pub third_party_access: Vec<String>,
    /// Headline privacy concerns derived from the aggregate counts.
    pub privacy_concerns: Vec<String>,
    pub cookie_stats: CookieStats,
}

/// Thresholds for the headline concerns.
const MANY_COOKIES: usize = 10;
const MANY_THIRD_PARTY_DOMAINS: usize = 5;
const MANY_SESSION_COOKIES: usize = 5;

/// Analyzes the page's cookies and scripts into a `CookieAccessReport`.
pub fn analyze(page: &PageData, config: &AnalyzerConfig) -> CookieAccessReport {
    let cookies = &page.cookies;

    let mut report = CookieAccessReport {
        cookie_stats: CookieStats {
            total: cookies.len(),
            first_party: cookies.iter().filter(|c| !c.is_third_party).count(),
            third_party: cookies.iter().filter(|c| c.is_third_party).count(),
            session_cookies: cookies.iter().filter(|c| c.is_session()).count(),
            persistent_cookies: cookies.iter().filter(|c| !c.is_session()).count(),
        },
        ..Default::default()
    };

    // Collection purposes, first matching rule per cookie.
    for cookie in cookies {
        let name = cookie.name.to_lowercase();
        let purpose = if ["analytics", "ga", "_gid", "_ga"]
            .iter()
            .any(|t| name.contains(t))
        {
            "User behavior analytics"
        } else if ["fb", "facebook"].iter().any(|t| name.contains(t)) {
            "Social media tracking"
        } else if ["ads", "doubleclick"].iter().any(|t| name.contains(t)) {
            "Advertising targeting"
        } else if ["session", "auth", "login"].iter().any(|t| name.contains(t)) {
            "Session management"
        } else if ["pref", "setting"].iter().any(|t| name.contains(t)) {
            "User preferences"
        } else {
            continue;
        };
        push_unique(&mut report.data_collection, purpose.to_string());
    }

    // Named tracking systems from script URLs.
    for script in &page.js_scripts {
        let script_lower = script.to_lowercase();
        for tracker in &config.tracking_domains {
            if script_lower.contains(tracker.as_str()) {
                push_unique(&mut report.tracking_capabilities, capability_label(tracker));
            }
        }
    }

    // Distinct third-party domains.
    for cookie in cookies {
        if cookie.is_third_party && !cookie.domain.is_empty() {
            push_unique(&mut report.third_party_access, cookie.domain.clone());
        }
    }

    // Headline concerns.
    if cookies.len() > MANY_COOKIES {
        report
            .privacy_concerns
            .push("High number of cookies - extensive data collection".to_string());
    }
    if report.third_party_access.len() > MANY_THIRD_PARTY_DOMAINS {
        report
            .privacy_concerns
            .push("Multiple third-party domains - cross-site tracking".to_string());
    }
    if report
        .data_collection
        .iter()
        .any(|p| p == "Advertising targeting")
    {
        report
            .privacy_concerns
            .push("Advertising cookies - interest-based targeting".to_string());
    }
    if report.cookie_stats.session_cookies > MANY_SESSION_COOKIES {
        report
            .privacy_concerns
            .push("Many session cookies - continuous tracking".to_string());
    }

    report
}

/// Human-readable label for a recognized tracking system.
pub(crate) fn capability_label(tracker: &str) -> String {
    if tracker.contains("google") {
        "Google Analytics - User behavior tracking".to_string()
    } else if tracker.contains("facebook") {
        "Facebook Pixel - Social tracking and retargeting".to_string()
    } else if tracker.contains("hotjar") {
        "Hotjar - Heatmaps and session recordings".to_string()
    } else if tracker.contains("mixpanel") {
        "Mixpanel - Event tracking and user analytics".to_string()
    } else {
        format!("{} - Advanced tracking capabilities", tracker)
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Cookie;

    fn cookie(name: &str, domain: &str, third_party: bool) -> Cookie {
        Cookie {
            name: name.to_string(),
            domain: domain.to_string(),
            is_third_party: third_party,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_page_empty_report() {
        let page = PageData::new("https://example.com");
        let report = analyze(&page, &AnalyzerConfig::default());
        assert_eq!(report.cookie_stats.total, 0);
        assert!(report.data_collection.is_empty());
        assert!(report.tracking_capabilities.is_empty());
        assert!(report.third_party_access.is_empty());
        assert!(report.privacy_concerns.is_empty());
    }

    #[test]
    fn test_cookie_stats_partition() {
        let page = PageData {
            cookies: vec![
                cookie("sessionid", "example.com", false),
                Cookie {
                    expires: Some(1_900_000_000.0),
                    ..cookie("pref", "example.com", false)
                },
                cookie("_ga", ".google-analytics.com", true),
            ],
            ..PageData::new("https://example.com")
        };
        let report = analyze(&page, &AnalyzerConfig::default());
        assert_eq!(report.cookie_stats.total, 3);
        assert_eq!(report.cookie_stats.first_party, 2);
        assert_eq!(report.cookie_stats.third_party, 1);
        assert_eq!(report.cookie_stats.session_cookies, 2);
        assert_eq!(report.cookie_stats.persistent_cookies, 1);
    }

    #[test]
    fn test_data_collection_purposes_first_match_wins() {
        let page = PageData {
            cookies: vec![
                cookie("_ga", "x", false),
                cookie("fbp_id", "x", false),
                cookie("ads_seen", "x", false),
                cookie("sessionid", "x", false),
                cookie("pref_theme", "x", false),
            ],
            ..PageData::new("https://example.com")
        };
        let report = analyze(&page, &AnalyzerConfig::default());
        assert_eq!(
            report.data_collection,
            vec![
                "User behavior analytics",
                "Social media tracking",
                "Advertising targeting",
                "Session management",
                "User preferences",
            ]
        );
    }

    #[test]
    fn test_tracking_capabilities_named_systems() {
        let page = PageData {
            js_scripts: vec![
                "https://www.google-analytics.com/analytics.js".to_string(),
                "https://connect.facebook.net/en_US/fbevents.js".to_string(),
                "https://static.hotjar.com/c.js".to_string(),
            ],
            ..PageData::new("https://example.com")
        };
        let report = analyze(&page, &AnalyzerConfig::default());
        assert!(report
            .tracking_capabilities
            .iter()
            .any(|c| c.starts_with("Google Analytics")));
        assert!(report
            .tracking_capabilities
            .iter()
            .any(|c| c.starts_with("Facebook Pixel")));
        assert!(report
            .tracking_capabilities
            .iter()
            .any(|c| c.starts_with("Hotjar")));
    }

    #[test]
    fn test_third_party_domains_deduplicated() {
        let page = PageData {
            cookies: vec![
                cookie("_ga", ".google-analytics.com", true),
                cookie("_gid", ".google-analytics.com", true),
                cookie("fr", ".facebook.com", true),
            ],
            ..PageData::new("https://example.com")
        };
        let report = analyze(&page, &AnalyzerConfig::default());
        assert_eq!(
            report.third_party_access,
            vec![".google-analytics.com", ".facebook.com"]
        );
    }

    #[test]
    fn test_privacy_concerns_thresholds() {
        // 11 cookies, 6 of them session third-party from distinct domains,
        // plus an ads purpose.
        let mut cookies: Vec<Cookie> = (0..6)
            .map(|i| cookie(&format!("c{}", i), &format!("d{}.example", i), true))
            .collect();
        cookies.push(cookie("ads_profile", "example.com", false));
        for i in 0..4 {
            cookies.push(Cookie {
                expires: Some(1_900_000_000.0),
                ..cookie(&format!("p{}", i), "example.com", false)
            });
        }
        let page = PageData {
            cookies,
            ..PageData::new("https://example.com")
        };
        let report = analyze(&page, &AnalyzerConfig::default());
        assert_eq!(report.privacy_concerns.len(), 4, "{:?}", report.privacy_concerns);
    }
}
