//! Console summary of a scan.

use colored::Colorize;

use crate::detector::Grade;
use crate::page::{AnalyzedPage, ScanResult};

/// Prints a per-page and overall summary of a scan to stdout.
pub fn print_summary(result: &ScanResult) {
    println!();
    println!(
        "{} v{} - {} page(s) analyzed",
        result.scan_info.tool.bold(),
        result.scan_info.version,
        result.scan_info.pages_analyzed
    );
    println!();

    for page in &result.pages {
        print_page_summary(page);
    }

    let total_findings: usize = result
        .pages
        .iter()
        .filter_map(|p| p.dark_patterns.as_ref())
        .map(|d| d.findings.len())
        .sum();
    let worst = result
        .pages
        .iter()
        .filter_map(|p| p.dark_patterns.as_ref())
        .map(|d| d.score.total_score)
        .max()
        .unwrap_or(0);
    println!(
        "Total: {} finding(s), worst page score {}",
        total_findings, worst
    );
}

fn print_page_summary(page: &AnalyzedPage) {
    println!("{}", page.page.url.bold());
    if let Some(category) = &page.category {
        println!("  Category: {category}");
    }

    if let Some(detection) = &page.dark_patterns {
        let grade = format_grade(detection.score.grade);
        println!(
            "  Dark patterns: {} finding(s), score {}/100, grade {}",
            detection.findings.len(),
            detection.score.total_score,
            grade
        );
        for finding in &detection.findings {
            println!(
                "    [{}] {}: {}",
                format_severity(&finding.severity.to_string()),
                finding.pattern,
                finding.description
            );
        }
    }

    if let Some(assessment) = &page.privacy_assessment {
        println!(
            "  Privacy: score {}/100, risk {}",
            assessment.privacy_score, assessment.risk_tier
        );
    }

    if let Some(tracking) = &page.tracking_access {
        if tracking.total_tracking_domains > 0 {
            println!(
                "  Tracking: {} domain(s), {} known tracker(s), {} high risk",
                tracking.total_tracking_domains,
                tracking.known_trackers,
                tracking.high_risk_domains
            );
        }
    }
    println!();
}

fn format_grade(grade: Grade) -> colored::ColoredString {
    let text = grade.to_string();
    match grade {
        Grade::A | Grade::B => text.green(),
        Grade::C => text.yellow(),
        Grade::D | Grade::F => text.red(),
    }
}

fn format_severity(severity: &str) -> colored::ColoredString {
    match severity {
        "high" => severity.red(),
        "medium" => severity.yellow(),
        _ => severity.normal(),
    }
}
