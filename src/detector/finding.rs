//! Finding and score types for the detection engine.
//!
//! A `Finding` is one detected instance of a dark pattern or tracking
//! concern. The engine aggregates findings into a `Score` with a letter
//! grade. All identifiers serialize in `snake_case`/lowercase to match the
//! report contract.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::config::SeverityWeights;

/// Every pattern identifier the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Pattern {
    PreTickedCheckbox,
    HiddenUnsubscribe,
    OverloadedConsent,
    MisleadingButton,
    ForcedPopup,
    CountdownTimer,
    EndlessScroll,
    HiddenCosts,
    FakeReviews,
    SubscriptionTrap,
    PrivacyBuried,
    AggressiveAds,
    DataCollection,
    AccessibilityIssues,
    CookieConsentBanner,
    ExcessiveCookies,
    ThirdPartyTracking,
    TrackingScripts,
}

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Points this severity contributes to the aggregate score.
    pub fn weight(&self, weights: &SeverityWeights) -> u32 {
        match self {
            Severity::High => weights.high,
            Severity::Medium => weights.medium,
            Severity::Low => weights.low,
        }
    }
}

/// Letter grade derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Maps a clamped total score to a grade. Lower scores are better.
    pub fn from_score(total: u32) -> Self {
        match total {
            0..=19 => Grade::A,
            20..=39 => Grade::B,
            40..=59 => Grade::C,
            60..=79 => Grade::D,
            _ => Grade::F,
        }
    }
}

/// One detected dark pattern or tracking concern. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub pattern: Pattern,
    pub severity: Severity,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    /// Rendered reference to the offending element, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
}

impl Finding {
    /// A finding with neither evidence nor an offending element.
    pub fn new(pattern: Pattern, severity: Severity, description: impl Into<String>) -> Self {
        Finding {
            pattern,
            severity,
            description: description.into(),
            evidence: None,
            element: None,
        }
    }

    /// Attaches an evidence string.
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    /// Attaches a rendered element reference.
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

/// Per-severity finding counts, taken over the unclamped finding set.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScoreBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregate score over all findings for one page.
#[derive(Debug, Clone, Serialize)]
pub struct Score {
    /// Saturating sum of severity weights, clamped to [0, 100].
    pub total_score: u32,
    pub grade: Grade,
    pub breakdown: ScoreBreakdown,
}

impl Score {
    /// Computes the score for a finding set.
    ///
    /// The total saturates at [`crate::config::MAX_TOTAL_SCORE`]; the
    /// breakdown counts every finding regardless of the cap.
    pub fn from_findings(findings: &[Finding], weights: &SeverityWeights) -> Self {
        let raw: u32 = findings
            .iter()
            .map(|f| f.severity.weight(weights))
            .fold(0, u32::saturating_add);
        let total_score = raw.min(crate::config::MAX_TOTAL_SCORE);

        let mut breakdown = ScoreBreakdown::default();
        for finding in findings {
            match finding.severity {
                Severity::High => breakdown.high += 1,
                Severity::Medium => breakdown.medium += 1,
                Severity::Low => breakdown.low += 1,
            }
        }

        Score {
            total_score,
            grade: Grade::from_score(total_score),
            breakdown,
        }
    }
}

/// Result of running the full rule set against one page: findings in rule
/// registration order, plus the aggregate score.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResult {
    pub findings: Vec<Finding>,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> SeverityWeights {
        SeverityWeights::default()
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(0), Grade::A);
        assert_eq!(Grade::from_score(19), Grade::A);
        assert_eq!(Grade::from_score(20), Grade::B);
        assert_eq!(Grade::from_score(39), Grade::B);
        assert_eq!(Grade::from_score(40), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(79), Grade::D);
        assert_eq!(Grade::from_score(80), Grade::F);
        assert_eq!(Grade::from_score(100), Grade::F);
    }

    #[test]
    fn test_one_of_each_severity_scores_seventeen() {
        let findings = vec![
            Finding::new(Pattern::PreTickedCheckbox, Severity::High, "high"),
            Finding::new(Pattern::ForcedPopup, Severity::Medium, "medium"),
            Finding::new(Pattern::CountdownTimer, Severity::Low, "low"),
        ];
        let score = Score::from_findings(&findings, &weights());
        assert_eq!(score.total_score, 17, "10 + 5 + 2");
        assert_eq!(score.grade, Grade::A);
        assert_eq!(score.breakdown.high, 1);
        assert_eq!(score.breakdown.medium, 1);
        assert_eq!(score.breakdown.low, 1);
    }

    #[test]
    fn test_score_saturates_at_one_hundred() {
        // 15 high findings would be 150 points raw; the total clamps but
        // the breakdown keeps the true count.
        let findings: Vec<Finding> = (0..15)
            .map(|_| Finding::new(Pattern::SubscriptionTrap, Severity::High, "trap"))
            .collect();
        let score = Score::from_findings(&findings, &weights());
        assert_eq!(score.total_score, 100);
        assert_eq!(score.grade, Grade::F);
        assert_eq!(score.breakdown.high, 15);
    }

    #[test]
    fn test_empty_findings_score_zero_grade_a() {
        let score = Score::from_findings(&[], &weights());
        assert_eq!(score.total_score, 0);
        assert_eq!(score.grade, Grade::A);
        assert_eq!(score.breakdown.high, 0);
        assert_eq!(score.breakdown.medium, 0);
        assert_eq!(score.breakdown.low, 0);
    }

    #[test]
    fn test_pattern_serializes_snake_case() {
        let json = serde_json::to_string(&Pattern::PreTickedCheckbox).unwrap();
        assert_eq!(json, "\"pre_ticked_checkbox\"");
        assert_eq!(Pattern::PreTickedCheckbox.to_string(), "pre_ticked_checkbox");
        assert_eq!(Pattern::CookieConsentBanner.to_string(), "cookie_consent_banner");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"high\"");
        assert_eq!(Severity::Medium.to_string(), "medium");
    }

    #[test]
    fn test_custom_weights_respected() {
        let custom = SeverityWeights {
            high: 50,
            medium: 25,
            low: 1,
        };
        let findings = vec![
            Finding::new(Pattern::HiddenCosts, Severity::High, "h"),
            Finding::new(Pattern::FakeReviews, Severity::Medium, "m"),
        ];
        let score = Score::from_findings(&findings, &custom);
        assert_eq!(score.total_score, 75);
        assert_eq!(score.grade, Grade::D);
    }
}
