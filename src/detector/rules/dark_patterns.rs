//! Dark-pattern detection rules.
//!
//! Each rule is a pure function of `(&PageData, &Config)` that inspects one
//! manipulation concern and returns zero or more findings. Rules share no
//! state and tolerate empty fields: absence of data means no finding.
//!
//! Trigger conditions and severities are fixed; the few tunable thresholds
//! come from `DetectorConfig`.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::config::{Config, MISLEADING_TERMS, POSITIVE_ACTION_TERMS};
use crate::detector::finding::{Finding, Pattern, Severity};
use crate::page::PageData;

// Regex patterns
const DISPLAY_NONE_PATTERN: &str = r"display:\s*none";
const COUNTDOWN_PATTERN: &str = r"\b\d+\s*(second|minute|hour)";
const FREE_SHIPPING_PATTERN: &str = r"\bshipping\b.*\bfree\b";
const DOLLAR_AMOUNT_PATTERN: &str = r"\$\d+";
const FIVE_STAR_PATTERN: &str = r"\b5\s*star\b";

static DISPLAY_NONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DISPLAY_NONE_PATTERN).expect("Failed to parse display:none pattern - this is a bug")
});

static COUNTDOWN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(COUNTDOWN_PATTERN).expect("Failed to parse countdown pattern - this is a bug")
});

static FREE_SHIPPING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FREE_SHIPPING_PATTERN)
        .expect("Failed to parse free-shipping pattern - this is a bug")
});

static DOLLAR_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DOLLAR_AMOUNT_PATTERN)
        .expect("Failed to parse dollar-amount pattern - this is a bug")
});

static FIVE_STAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FIVE_STAR_PATTERN).expect("Failed to parse five-star pattern - this is a bug")
});

/// Checkboxes that arrive already ticked opt the user in without consent.
pub fn pre_ticked_checkbox(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    for form in &page.forms {
        for input in &form.inputs {
            if input.input_type == "checkbox" && input.checked {
                let name = if input.name.is_empty() {
                    "unnamed"
                } else {
                    input.name.as_str()
                };
                findings.push(
                    Finding::new(
                        Pattern::PreTickedCheckbox,
                        Severity::High,
                        format!("Pre-ticked checkbox found: {}", name),
                    )
                    .with_element(input.describe()),
                );
            }
        }
    }
    Ok(findings)
}

/// An unsubscribe mention alongside `display:none` styling suggests the
/// opt-out is hidden from view.
pub fn hidden_unsubscribe(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let html = page.html_lower();
    if html.contains("unsubscribe") && DISPLAY_NONE_RE.is_match(&html) {
        return Ok(vec![Finding::new(
            Pattern::HiddenUnsubscribe,
            Severity::Medium,
            "Potential hidden unsubscribe link detected.",
        )
        .with_evidence("HTML contains 'unsubscribe' with 'display:none'")]);
    }
    Ok(vec![])
}

/// Consent banners with more accept buttons than reject buttons steer the
/// user toward agreeing.
pub fn overloaded_consent(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let buttons: Vec<String> = page
        .submit_inputs()
        .map(|input| input.value.to_lowercase())
        .collect();

    let accept_count = buttons
        .iter()
        .filter(|b| b.contains("accept") || b.contains("agree"))
        .count();
    let reject_count = buttons
        .iter()
        .filter(|b| b.contains("reject") || b.contains("decline") || b.contains("no"))
        .count();

    if accept_count > reject_count && !page.popups.is_empty() {
        return Ok(vec![Finding::new(
            Pattern::OverloadedConsent,
            Severity::Medium,
            format!(
                "Overloaded consent banner: {} accept vs {} reject buttons.",
                accept_count, reject_count
            ),
        )
        .with_evidence(format!(
            "Popups: {}, Accept buttons: {}",
            page.popups.len(),
            accept_count
        ))]);
    }
    Ok(vec![])
}

/// Buttons whose label says "cancel" while the action subscribes.
pub fn misleading_button(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    for input in page.submit_inputs() {
        let text = input.value.to_lowercase();
        let has_negative = MISLEADING_TERMS.iter().any(|term| text.contains(term));
        let has_positive = POSITIVE_ACTION_TERMS.iter().any(|term| text.contains(term));
        if has_negative && has_positive {
            findings.push(
                Finding::new(
                    Pattern::MisleadingButton,
                    Severity::High,
                    format!("Misleading button text: '{}'", input.value),
                )
                .with_element(input.describe()),
            );
        }
    }
    Ok(findings)
}

/// Modal popups block the page until the user interacts.
pub fn forced_popup(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let modal_selectors: Vec<&str> = page
        .popups
        .iter()
        .filter(|p| p.selector.to_lowercase().contains("modal"))
        .map(|p| p.selector.as_str())
        .collect();

    if !modal_selectors.is_empty() {
        return Ok(vec![Finding::new(
            Pattern::ForcedPopup,
            Severity::Medium,
            format!(
                "Forced popup/modal detected: {} modals.",
                modal_selectors.len()
            ),
        )
        .with_evidence(format!("Modal selectors: {:?}", modal_selectors))]);
    }
    Ok(vec![])
}

/// Countdown timers pressure the user into acting before "time runs out".
pub fn countdown_timer(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    if COUNTDOWN_RE.is_match(&page.html_lower()) {
        return Ok(vec![Finding::new(
            Pattern::CountdownTimer,
            Severity::Low,
            "Countdown timer detected (potential pressure tactic).",
        )
        .with_evidence("HTML contains time-related numbers")]);
    }
    Ok(vec![])
}

/// Infinite scroll keeps the user on the page without a natural stopping
/// point.
pub fn endless_scroll(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let html = page.html_lower();
    if ["infinite", "load more", "scroll"]
        .iter()
        .any(|term| html.contains(term))
    {
        return Ok(vec![Finding::new(
            Pattern::EndlessScroll,
            Severity::Low,
            "Potential endless scroll or auto-load detected.",
        )
        .with_evidence("HTML contains scroll/load related terms")]);
    }
    Ok(vec![])
}

/// "Free shipping" messaging next to dollar amounts often hides fees until
/// checkout.
pub fn hidden_costs(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let html = page.html_lower();
    if FREE_SHIPPING_RE.is_match(&html) && DOLLAR_AMOUNT_RE.is_match(&html) {
        return Ok(vec![Finding::new(
            Pattern::HiddenCosts,
            Severity::High,
            "Potential hidden costs detected (e.g., shipping fees).",
        )
        .with_evidence("HTML mentions 'free shipping' and prices")]);
    }
    Ok(vec![])
}

/// Review mentions paired with uniform five-star ratings.
pub fn fake_reviews(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let html = page.html_lower();
    if html.contains("review") && FIVE_STAR_RE.is_match(&html) {
        return Ok(vec![Finding::new(
            Pattern::FakeReviews,
            Severity::Medium,
            "Potential fake reviews or exaggerated ratings.",
        )
        .with_evidence("HTML contains reviews and high ratings")]);
    }
    Ok(vec![])
}

/// "Free trial" buttons that quietly roll into paid subscriptions.
pub fn subscription_trap(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    for input in page.submit_inputs() {
        let text = input.value.to_lowercase();
        if text.contains("free") && (text.contains("trial") || text.contains("subscribe")) {
            findings.push(
                Finding::new(
                    Pattern::SubscriptionTrap,
                    Severity::High,
                    format!("Potential subscription trap: '{}'", input.value),
                )
                .with_element(input.describe()),
            );
        }
    }
    Ok(findings)
}

/// A privacy mention buried in a very long page is effectively unreadable.
pub fn privacy_buried(page: &PageData, config: &Config) -> Result<Vec<Finding>> {
    let html = page.html_lower();
    if html.contains("privacy") && html.len() > config.detector.privacy_buried_html_len {
        return Ok(vec![Finding::new(
            Pattern::PrivacyBuried,
            Severity::Low,
            "Privacy policy might be buried in long page.",
        )
        .with_evidence("Large HTML with 'privacy' mention")]);
    }
    Ok(vec![])
}

/// Popup/overlay markup signals interstitial advertising.
pub fn aggressive_ads(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let html = page.html_lower();
    if html.contains("popup") || html.contains("overlay") {
        return Ok(vec![Finding::new(
            Pattern::AggressiveAds,
            Severity::Medium,
            "Aggressive ads or overlays detected.",
        )
        .with_evidence("HTML contains popup/overlay mentions")]);
    }
    Ok(vec![])
}

/// Analytics/tracking script URLs indicate behavioral data collection.
/// Emits one finding per matching script.
pub fn data_collection(page: &PageData, _config: &Config) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    for script in &page.js_scripts {
        let script_lower = script.to_lowercase();
        if script_lower.contains("analytics") || script_lower.contains("tracking") {
            findings.push(
                Finding::new(
                    Pattern::DataCollection,
                    Severity::Low,
                    "Potential extensive data collection via tracking scripts.",
                )
                .with_evidence(format!("Tracking script: {}", script)),
            );
        }
    }
    Ok(findings)
}

/// More than half the images missing alt text (strictly) is an
/// accessibility failure.
pub fn accessibility_issues(page: &PageData, config: &Config) -> Result<Vec<Finding>> {
    let total = page.images.len();
    if total == 0 {
        return Ok(vec![]);
    }
    let missing = page.images.iter().filter(|img| img.alt.is_empty()).count();
    if missing as f64 / total as f64 > config.detector.alt_text_missing_ratio {
        return Ok(vec![Finding::new(
            Pattern::AccessibilityIssues,
            Severity::Low,
            format!("Many images missing alt text: {}/{}", missing, total),
        )
        .with_evidence("Accessibility concern for screen readers")]);
    }
    Ok(vec![])
}
