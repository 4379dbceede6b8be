//! Privacy impact assessment.
//!
//! Converts the tracking profile's aggregates plus raw cookie counts into a
//! 0-100 privacy score via saturating deductions, maps the score to a risk
//! tier, and emits tier-appropriate recommendations. Pure function of its
//! inputs; no additional state.

use serde::Serialize;
use strum_macros::Display;

use crate::config::{
    IMPACT_HIGH_RISK_DOMAIN_CAP, IMPACT_KNOWN_TRACKER_CAP, IMPACT_PER_HIGH_RISK_DOMAIN,
    IMPACT_PER_KNOWN_TRACKER, IMPACT_PER_SESSION_COOKIE, IMPACT_PER_THIRD_PARTY_COOKIE,
    IMPACT_PER_TRACKING_DOMAIN, IMPACT_SESSION_COOKIE_CAP, IMPACT_THIRD_PARTY_COOKIE_CAP,
    IMPACT_TRACKING_DOMAIN_CAP,
};
use crate::tracking::TrackingAccessReport;

/// Overall privacy risk tier for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskTier {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Higher scores are better; lower tiers mean less exposure.
    pub fn from_score(score: u32) -> Self {
        match score {
            80..=100 => RiskTier::Minimal,
            60..=79 => RiskTier::Low,
            40..=59 => RiskTier::Medium,
            20..=39 => RiskTier::High,
            _ => RiskTier::Critical,
        }
    }
}

/// Privacy impact of the page's tracking exposure.
#[derive(Debug, Clone, Serialize)]
pub struct PrivacyAssessment {
    /// 100 minus the capped deductions; higher is better.
    pub privacy_score: u32,
    pub risk_tier: RiskTier,
    pub recommendations: Vec<String>,
}

/// Assesses privacy impact from the tracking profile and raw cookie counts.
///
/// Each signal deducts a fixed amount per unit up to its own cap, so no
/// single signal can dominate the score and the total never underflows.
pub fn assess(
    report: &TrackingAccessReport,
    third_party_cookies: usize,
    session_cookies: usize,
) -> PrivacyAssessment {
    let deductions = [
        (report.total_tracking_domains as u32)
            .saturating_mul(IMPACT_PER_TRACKING_DOMAIN)
            .min(IMPACT_TRACKING_DOMAIN_CAP),
        (report.known_trackers as u32)
            .saturating_mul(IMPACT_PER_KNOWN_TRACKER)
            .min(IMPACT_KNOWN_TRACKER_CAP),
        (report.high_risk_domains as u32)
            .saturating_mul(IMPACT_PER_HIGH_RISK_DOMAIN)
            .min(IMPACT_HIGH_RISK_DOMAIN_CAP),
        (third_party_cookies as u32)
            .saturating_mul(IMPACT_PER_THIRD_PARTY_COOKIE)
            .min(IMPACT_THIRD_PARTY_COOKIE_CAP),
        (session_cookies as u32)
            .saturating_mul(IMPACT_PER_SESSION_COOKIE)
            .min(IMPACT_SESSION_COOKIE_CAP),
    ];

    let total_deduction: u32 = deductions.iter().sum();
    let privacy_score = 100u32.saturating_sub(total_deduction);
    let risk_tier = RiskTier::from_score(privacy_score);

    PrivacyAssessment {
        privacy_score,
        risk_tier,
        recommendations: recommendations(risk_tier, report),
    }
}

fn recommendations(tier: RiskTier, report: &TrackingAccessReport) -> Vec<String> {
    let mut recs = Vec::new();

    match tier {
        RiskTier::Critical | RiskTier::High => {
            recs.push("Use a tracker-blocking extension or DNS filter on this site".to_string());
            recs.push("Clear cookies after each visit".to_string());
            recs.push("Avoid logging in or submitting personal data".to_string());
        }
        RiskTier::Medium => {
            recs.push("Review the cookie consent options and reject non-essential cookies".to_string());
            recs.push("Consider blocking third-party cookies in the browser".to_string());
        }
        RiskTier::Low => {
            recs.push("Reject optional cookies when prompted".to_string());
        }
        RiskTier::Minimal => {
            recs.push("No special precautions needed".to_string());
        }
    }

    if report.high_risk_domains > 0 {
        recs.push(format!(
            "{} high-risk tracking domain(s) observed - consider blocking them individually",
            report.high_risk_domains
        ));
    }

    recs
}
