//! Dark-pattern detection engine.
//!
//! `DarkPatternDetector` runs every registered rule against one page,
//! collects findings in registration order, and computes the aggregate
//! score. Rules are isolated: a rule that returns an error is logged and
//! skipped, and never aborts detection of the remaining rules.

mod finding;
pub mod rules;

use strum::IntoEnumIterator;

pub use finding::{DetectionResult, Finding, Grade, Pattern, Score, ScoreBreakdown, Severity};
pub use rules::{RegisteredRule, RuleFn};

use crate::config::Config;
use crate::page::PageData;

/// The detection engine: an ordered rule registry plus the configuration
/// shared with every rule.
pub struct DarkPatternDetector {
    config: Config,
    rules: Vec<RegisteredRule>,
}

impl DarkPatternDetector {
    /// Builds an engine with the default rule set.
    pub fn new(config: Config) -> Self {
        DarkPatternDetector {
            config,
            rules: rules::default_rules(),
        }
    }

    /// Builds an engine with no rules registered. Mostly useful in tests.
    pub fn empty(config: Config) -> Self {
        DarkPatternDetector {
            config,
            rules: Vec::new(),
        }
    }

    /// Appends a rule after the currently registered ones.
    pub fn register(&mut self, name: &'static str, rule: RuleFn) {
        self.rules.push(RegisteredRule { name, run: rule });
    }

    /// Runs every registered rule against the page.
    ///
    /// Findings appear in rule-registration order. A failing rule
    /// contributes zero findings; the error is logged with the rule's name
    /// and the remaining rules still run.
    pub fn detect(&self, page: &PageData) -> DetectionResult {
        let mut findings: Vec<Finding> = Vec::new();

        for rule in &self.rules {
            match (rule.run)(page, &self.config) {
                Ok(mut rule_findings) => findings.append(&mut rule_findings),
                Err(e) => {
                    log::warn!(
                        "Rule '{}' failed on {} and was skipped: {:#}",
                        rule.name,
                        page.url,
                        e
                    );
                }
            }
        }

        let score = Score::from_findings(&findings, &self.config.detector.severity_weights);
        log::debug!(
            "Detection for {}: {} finding(s), score {}/100 ({})",
            page.url,
            findings.len(),
            score.total_score,
            score.grade
        );

        DetectionResult { findings, score }
    }

    /// Every pattern identifier the engine can produce, for report
    /// completeness checks.
    pub fn supported_patterns() -> Vec<Pattern> {
        Pattern::iter().collect()
    }
}
