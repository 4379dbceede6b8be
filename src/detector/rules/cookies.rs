//! Cookie and tracking detection rules.
//!
//! Two registered rules covering four pattern outputs: consent-banner and
//! excessive-cookie detection, then third-party tracking cookies and
//! tracking scripts. Like the dark-pattern rules these are pure functions
//! that treat missing data as "no finding".

use anyhow::Result;

use crate::config::{Config, CONSENT_KEYWORDS, ESSENTIAL_COOKIE_PATTERNS};
use crate::detector::finding::{Finding, Pattern, Severity};
use crate::page::PageData;
use crate::tracking;

/// Consent-banner presence (low) and excessive non-essential cookies
/// (medium).
pub fn cookie_issues(page: &PageData, config: &Config) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    let html = page.html_lower();

    if CONSENT_KEYWORDS.iter().any(|kw| html.contains(kw)) {
        findings.push(
            Finding::new(
                Pattern::CookieConsentBanner,
                Severity::Low,
                "Cookie consent banner detected - review what data sharing is allowed.",
            )
            .with_evidence("HTML contains cookie/privacy related terms"),
        );
    }

    let non_essential = page
        .cookies
        .iter()
        .filter(|cookie| {
            let name = cookie.name.to_lowercase();
            !ESSENTIAL_COOKIE_PATTERNS
                .iter()
                .any(|pattern| name.contains(pattern))
        })
        .count();

    if non_essential > config.detector.excessive_cookie_threshold {
        findings.push(
            Finding::new(
                Pattern::ExcessiveCookies,
                Severity::Medium,
                format!("Excessive non-essential cookies: {}", non_essential),
            )
            .with_evidence(format!("Cookies involved: {}", non_essential)),
        );
    }

    Ok(findings)
}

/// Third-party tracking cookies (high) and tracking scripts (medium).
pub fn third_party_tracking(page: &PageData, config: &Config) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    // Distinct third-party cookie domains on the configured tracking list.
    let mut tracking_domains: Vec<&str> = Vec::new();
    for cookie in &page.cookies {
        if cookie.is_third_party && config.analyzer.is_known_tracker(&cookie.domain) {
            if !tracking_domains.contains(&cookie.domain.as_str()) {
                tracking_domains.push(cookie.domain.as_str());
            }
        }
    }

    if !tracking_domains.is_empty() {
        let shown: Vec<&str> = tracking_domains.iter().take(5).copied().collect();
        findings.push(
            Finding::new(
                Pattern::ThirdPartyTracking,
                Severity::High,
                format!(
                    "Third-party tracking detected from {} domains",
                    tracking_domains.len()
                ),
            )
            .with_evidence(format!("Domains: {}", shown.join(", "))),
        );
    }

    let access = tracking::analyze_cookie_access(page, &config.analyzer);
    if !access.tracking_capabilities.is_empty() {
        let shown: Vec<&str> = access
            .tracking_capabilities
            .iter()
            .take(3)
            .map(|s| s.as_str())
            .collect();
        findings.push(
            Finding::new(
                Pattern::TrackingScripts,
                Severity::Medium,
                format!(
                    "Tracking scripts detected: {} systems",
                    access.tracking_capabilities.len()
                ),
            )
            .with_evidence(format!("Systems: {}", shown.join(", "))),
        );
    }

    Ok(findings)
}
