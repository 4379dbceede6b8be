//! Page-level privacy scoring.
//!
//! Turns the cookie access report into a 0-100 score with a letter
//! grade, deducting in two tiers per concern axis: a heavy deduction
//! when the axis is clearly bad, a light one when it is merely present.

use serde::Serialize;

use crate::tracking::CookieAccessReport;

/// Privacy score for a single page, graded A through F.
#[derive(Debug, Clone, Serialize)]
pub struct PrivacyScore {
    pub score: u32,
    pub grade: char,
    pub concerns: Vec<String>,
}

/// Scores page privacy from the cookie access report.
pub fn score(report: &CookieAccessReport) -> PrivacyScore {
    let mut score = 100i32;
    let mut concerns = Vec::new();

    if report.third_party_access.len() > 5 {
        score -= 30;
        concerns.push("Extensive third-party tracking".to_string());
    } else if report.third_party_access.len() > 2 {
        score -= 15;
        concerns.push("Multiple third-party domains".to_string());
    }

    if report.tracking_capabilities.len() > 3 {
        score -= 25;
        concerns.push("Multiple tracking systems".to_string());
    } else if !report.tracking_capabilities.is_empty() {
        score -= 10;
        concerns.push("Tracking systems detected".to_string());
    }

    if report.privacy_concerns.len() > 2 {
        score -= 20;
        concerns.push("Multiple privacy concerns".to_string());
    } else if !report.privacy_concerns.is_empty() {
        score -= 10;
        concerns.push("Privacy concerns detected".to_string());
    }

    PrivacyScore {
        score: score.max(0) as u32,
        grade: grade_for(score),
        concerns,
    }
}

fn grade_for(score: i32) -> char {
    if score >= 80 {
        'A'
    } else if score >= 60 {
        'B'
    } else if score >= 40 {
        'C'
    } else if score >= 20 {
        'D'
    } else {
        'F'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::{CookieAccessReport, CookieStats};

    fn report(third_party: usize, capabilities: usize, concerns: usize) -> CookieAccessReport {
        CookieAccessReport {
            data_collection: Vec::new(),
            tracking_capabilities: (0..capabilities).map(|i| format!("cap {i}")).collect(),
            third_party_access: (0..third_party).map(|i| format!("domain{i}.com")).collect(),
            privacy_concerns: (0..concerns).map(|i| format!("concern {i}")).collect(),
            cookie_stats: CookieStats::default(),
        }
    }

    #[test]
    fn test_clean_report_is_grade_a() {
        let result = score(&report(0, 0, 0));
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, 'A');
        assert!(result.concerns.is_empty());
    }

    #[test]
    fn test_light_tracking_deductions() {
        // 3 third-party domains (-15) plus one capability (-10) = 75.
        let result = score(&report(3, 1, 0));
        assert_eq!(result.score, 75);
        assert_eq!(result.grade, 'B');
        assert_eq!(
            result.concerns,
            vec!["Multiple third-party domains", "Tracking systems detected"]
        );
    }

    #[test]
    fn test_worst_case_bottoms_out_at_f() {
        // -30 - 25 - 20 = 25 remaining.
        let result = score(&report(6, 4, 3));
        assert_eq!(result.score, 25);
        assert_eq!(result.grade, 'D');
        assert_eq!(result.concerns.len(), 3);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for(80), 'A');
        assert_eq!(grade_for(79), 'B');
        assert_eq!(grade_for(60), 'B');
        assert_eq!(grade_for(59), 'C');
        assert_eq!(grade_for(40), 'C');
        assert_eq!(grade_for(39), 'D');
        assert_eq!(grade_for(20), 'D');
        assert_eq!(grade_for(19), 'F');
    }
}
