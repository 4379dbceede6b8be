//! Tracking-domain profiling.
//!
//! This module quantifies the third-party data flows a page grants:
//! - `access`: cookie access analysis (purposes, systems, domains, concerns)
//! - `likelihood`: per-domain tracking likelihood and risk level
//! - `privacy`: the derived privacy impact assessment
//!
//! The profiler works from cookies and script URLs alone. It flags domains
//! on the configured tracking list and unlisted domains whose cookies,
//! scripts, or naming look tracking-like.

pub mod access;
pub mod likelihood;
pub mod privacy;

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::page::Cookie;

pub use access::{analyze as analyze_cookie_access, CookieAccessReport, CookieStats};
pub use likelihood::{profile_domain, RiskLevel, TrackerInfo};
pub use privacy::{assess as assess_privacy_impact, PrivacyAssessment, RiskTier};

/// Aggregate view of every third-party domain the page grants data access
/// to. Each domain appears exactly once, in first-seen cookie order.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingAccessReport {
    /// Per-domain profiles, deduplicated by domain.
    pub domains: Vec<TrackerInfo>,
    pub total_tracking_domains: usize,
    /// Domains on the configured tracking list.
    pub known_trackers: usize,
    /// Unlisted domains whose likelihood still exceeds the low-risk
    /// threshold.
    pub potential_trackers: usize,
    pub high_risk_domains: usize,
    /// Named tracking systems recognized from script URLs.
    pub tracking_capabilities: Vec<String>,
}

/// Profiles every distinct third-party cookie domain on the page.
pub fn profile(
    cookies: &[Cookie],
    js_scripts: &[String],
    config: &AnalyzerConfig,
) -> TrackingAccessReport {
    // Group third-party cookies by domain, preserving first-seen order so
    // repeated runs produce identical reports.
    let mut grouped: Vec<(String, Vec<&Cookie>)> = Vec::new();
    for cookie in cookies {
        if !cookie.is_third_party || cookie.domain.is_empty() {
            continue;
        }
        match grouped.iter_mut().find(|(domain, _)| *domain == cookie.domain) {
            Some((_, group)) => group.push(cookie),
            None => grouped.push((cookie.domain.clone(), vec![cookie])),
        }
    }

    let domains: Vec<TrackerInfo> = grouped
        .iter()
        .map(|(domain, group)| profile_domain(domain, group, js_scripts, config))
        .collect();

    let known_trackers = domains.iter().filter(|d| d.is_known_tracker).count();
    let potential_trackers = domains
        .iter()
        .filter(|d| !d.is_known_tracker && d.tracking_likelihood > crate::config::LOW_RISK_LIKELIHOOD)
        .count();
    let high_risk_domains = domains
        .iter()
        .filter(|d| d.risk_level == RiskLevel::High)
        .count();

    // Capability labels come from script URLs, so unlisted script-only
    // trackers still surface here.
    let mut tracking_capabilities: Vec<String> = Vec::new();
    for script in js_scripts {
        let script_lower = script.to_lowercase();
        for tracker in &config.tracking_domains {
            if script_lower.contains(tracker.as_str()) {
                let label = access::capability_label(tracker);
                if !tracking_capabilities.contains(&label) {
                    tracking_capabilities.push(label);
                }
            }
        }
    }

    log::debug!(
        "Tracking profile: {} domain(s), {} known, {} potential, {} high-risk",
        domains.len(),
        known_trackers,
        potential_trackers,
        high_risk_domains
    );

    TrackingAccessReport {
        total_tracking_domains: domains.len(),
        known_trackers,
        potential_trackers,
        high_risk_domains,
        tracking_capabilities,
        domains,
    }
}
