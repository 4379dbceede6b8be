//! Per-domain tracking likelihood and risk.
//!
//! Scores how likely a third-party cookie domain is performing behavioral
//! tracking, independent of the fixed tracking-domain list (unlisted domains
//! with tracking-like characteristics are flagged too). The likelihood is a
//! saturating sum of independent heuristic signals, capped at 1.0; the risk
//! level comes from a vote of four boolean high-risk factors.

use serde::Serialize;
use strum_macros::Display;
use url::Url;

use crate::config::{
    AnalyzerConfig, HIGH_RISK_COOKIE_COUNT, HIGH_RISK_LIKELIHOOD, LIKELIHOOD_KNOWN_TRACKER,
    LIKELIHOOD_NAME_RATIO_WEIGHT, LIKELIHOOD_SCRIPT_REFERENCE, LIKELIHOOD_SUSPICIOUS_DOMAIN,
    LIKELIHOOD_WATCHLIST_TLD, LOW_RISK_LIKELIHOOD, SUSPICIOUS_DOMAIN_SUBSTRINGS,
    TRACKING_COOKIE_NAME_PATTERNS, WATCHLIST_TLDS,
};
use crate::page::Cookie;

/// Coarse risk bucket for one tracking domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
}

/// Profile of one third-party domain the page grants data access to.
/// Computed fresh per analysis call; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerInfo {
    pub domain: String,
    pub is_known_tracker: bool,
    /// Heuristic estimate in [0, 1] of how likely the domain tracks users.
    pub tracking_likelihood: f64,
    /// Category label (analytics, advertising, social media, ...).
    pub tracker_type: String,
    pub cookie_count: usize,
    pub has_scripts: bool,
    pub risk_level: RiskLevel,
    /// Representative purposes inferred from the domain's cookie names.
    pub cookie_purposes: Vec<String>,
}

/// Builds the full per-domain profile from the domain's cookies and the
/// page's script URLs.
pub fn profile_domain(
    domain: &str,
    cookies: &[&Cookie],
    js_scripts: &[String],
    config: &AnalyzerConfig,
) -> TrackerInfo {
    let is_known_tracker = config.is_known_tracker(domain);
    let has_scripts = scripts_reference_domain(domain, js_scripts);
    let tracking_likelihood = tracking_likelihood(domain, cookies, has_scripts, is_known_tracker);
    let risk_level = risk_level(tracking_likelihood, cookies, is_known_tracker);

    TrackerInfo {
        domain: domain.to_string(),
        is_known_tracker,
        tracking_likelihood,
        tracker_type: classify_tracker_type(domain).to_string(),
        cookie_count: cookies.len(),
        has_scripts,
        risk_level,
        cookie_purposes: cookie_purposes(cookies),
    }
}

/// Saturating sum of the heuristic signals, capped at 1.0.
///
/// A domain with zero cookies contributes a name-pattern ratio of 0 rather
/// than dividing by zero.
pub fn tracking_likelihood(
    domain: &str,
    cookies: &[&Cookie],
    has_scripts: bool,
    is_known_tracker: bool,
) -> f64 {
    let domain_lower = domain.to_lowercase();
    let mut likelihood = 0.0;

    if is_known_tracker {
        likelihood += LIKELIHOOD_KNOWN_TRACKER;
    }

    if !cookies.is_empty() {
        let tracking_named = cookies
            .iter()
            .filter(|cookie| {
                let name = cookie.name.to_lowercase();
                TRACKING_COOKIE_NAME_PATTERNS
                    .iter()
                    .any(|pattern| name.contains(pattern))
            })
            .count();
        likelihood += (tracking_named as f64 / cookies.len() as f64) * LIKELIHOOD_NAME_RATIO_WEIGHT;
    }

    if has_scripts {
        likelihood += LIKELIHOOD_SCRIPT_REFERENCE;
    }

    if SUSPICIOUS_DOMAIN_SUBSTRINGS
        .iter()
        .any(|s| domain_lower.contains(s))
    {
        likelihood += LIKELIHOOD_SUSPICIOUS_DOMAIN;
    }

    if WATCHLIST_TLDS.iter().any(|tld| domain_lower.ends_with(tld)) {
        likelihood += LIKELIHOOD_WATCHLIST_TLD;
    }

    likelihood.min(1.0)
}

/// Votes the four high-risk factors into a risk level.
///
/// Factors: likelihood above the high-risk threshold; more than
/// `HIGH_RISK_COOKIE_COUNT` cookies; domain on the known-tracker list; any
/// cookie name containing "ads" or "track".
pub fn risk_level(likelihood: f64, cookies: &[&Cookie], is_known_tracker: bool) -> RiskLevel {
    let has_ad_cookie_names = cookies.iter().any(|cookie| {
        let name = cookie.name.to_lowercase();
        name.contains("ads") || name.contains("track")
    });

    let factors = [
        likelihood > HIGH_RISK_LIKELIHOOD,
        cookies.len() > HIGH_RISK_COOKIE_COUNT,
        is_known_tracker,
        has_ad_cookie_names,
    ]
    .iter()
    .filter(|&&f| f)
    .count();

    if factors >= 3 {
        RiskLevel::High
    } else if factors >= 2 {
        RiskLevel::Medium
    } else if likelihood > LOW_RISK_LIKELIHOOD {
        RiskLevel::Low
    } else {
        RiskLevel::Minimal
    }
}

/// True when any script URL on the page references the domain.
///
/// Prefers host comparison via URL parsing; falls back to a substring match
/// for script entries that are not absolute URLs.
pub fn scripts_reference_domain(domain: &str, js_scripts: &[String]) -> bool {
    let needle = domain.trim_start_matches('.').to_lowercase();
    if needle.is_empty() {
        return false;
    }

    js_scripts.iter().any(|script| {
        if let Ok(parsed) = Url::parse(script) {
            if let Some(host) = parsed.host_str() {
                let host = host.to_lowercase();
                return host == needle || host.ends_with(&format!(".{}", needle));
            }
        }
        script.to_lowercase().contains(&needle)
    })
}

/// Classifies a domain into a coarse tracker category by substring.
pub fn classify_tracker_type(domain: &str) -> &'static str {
    let domain = domain.to_lowercase();
    if domain.contains("analytics") || domain.contains("chartbeat") || domain.contains("parsely") {
        "analytics"
    } else if domain.contains("doubleclick")
        || domain.contains("adsystem")
        || domain.contains("adnxs")
        || domain.contains("criteo")
        || domain.contains("taboola")
        || domain.contains("outbrain")
        || domain.contains("ads")
    {
        "advertising"
    } else if domain.contains("facebook")
        || domain.contains("twitter")
        || domain.contains("linkedin")
        || domain.contains("licdn")
    {
        "social media"
    } else if domain.contains("tagmanager") || domain.contains("segment") {
        "tag manager"
    } else if domain.contains("hotjar") || domain.contains("fullstory") || domain.contains("mixpanel")
    {
        "session replay"
    } else if domain.contains("cdn") || domain.contains("cloudflare") || domain.contains("akamai") {
        "cdn"
    } else {
        "unknown"
    }
}

/// Infers representative purposes from the domain's cookie names, first
/// match per cookie, deduplicated in first-seen order.
pub fn cookie_purposes(cookies: &[&Cookie]) -> Vec<String> {
    let mut purposes: Vec<String> = Vec::new();
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
        if !purposes.iter().any(|p| p == purpose) {
            purposes.push(purpose.to_string());
        }
    }
    purposes
}
