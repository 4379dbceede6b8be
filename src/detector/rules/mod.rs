//! The rule library.
//!
//! Rules are plain function pointers with a static name for logging. The
//! engine owns an ordered list of `RegisteredRule`s; the default set is
//! built here and callers may append their own through the engine's
//! `register()`.

pub mod cookies;
pub mod dark_patterns;

use anyhow::Result;

use crate::config::Config;
use crate::detector::finding::Finding;
use crate::page::PageData;

/// A detection rule: pure function of the page snapshot and configuration.
pub type RuleFn = fn(&PageData, &Config) -> Result<Vec<Finding>>;

/// A rule plus its identity, used when logging rule failures.
#[derive(Clone, Copy)]
pub struct RegisteredRule {
    pub name: &'static str,
    pub run: RuleFn,
}

/// The default rule set in registration order: the fourteen dark-pattern
/// rules, then the cookie/tracking rules. Finding order in a
/// `DetectionResult` follows this order.
pub fn default_rules() -> Vec<RegisteredRule> {
    vec![
        RegisteredRule {
            name: "pre_ticked_checkbox",
            run: dark_patterns::pre_ticked_checkbox,
        },
        RegisteredRule {
            name: "hidden_unsubscribe",
            run: dark_patterns::hidden_unsubscribe,
        },
        RegisteredRule {
            name: "overloaded_consent",
            run: dark_patterns::overloaded_consent,
        },
        RegisteredRule {
            name: "misleading_button",
            run: dark_patterns::misleading_button,
        },
        RegisteredRule {
            name: "forced_popup",
            run: dark_patterns::forced_popup,
        },
        RegisteredRule {
            name: "countdown_timer",
            run: dark_patterns::countdown_timer,
        },
        RegisteredRule {
            name: "endless_scroll",
            run: dark_patterns::endless_scroll,
        },
        RegisteredRule {
            name: "hidden_costs",
            run: dark_patterns::hidden_costs,
        },
        RegisteredRule {
            name: "fake_reviews",
            run: dark_patterns::fake_reviews,
        },
        RegisteredRule {
            name: "subscription_trap",
            run: dark_patterns::subscription_trap,
        },
        RegisteredRule {
            name: "privacy_buried",
            run: dark_patterns::privacy_buried,
        },
        RegisteredRule {
            name: "aggressive_ads",
            run: dark_patterns::aggressive_ads,
        },
        RegisteredRule {
            name: "data_collection",
            run: dark_patterns::data_collection,
        },
        RegisteredRule {
            name: "accessibility_issues",
            run: dark_patterns::accessibility_issues,
        },
        RegisteredRule {
            name: "cookie_issues",
            run: cookies::cookie_issues,
        },
        RegisteredRule {
            name: "third_party_tracking",
            run: cookies::third_party_tracking,
        },
    ]
}
