//! Heuristic constants.
//!
//! Every threshold, weight, and keyword table used by the rules and
//! profilers lives here under a name. The numeric thresholds mirror the
//! behavior of the crawler pipeline this engine was built against; they are
//! deliberately not re-derived. Values that callers may want to tune are
//! also exposed as fields on the config structs, with these as defaults.

// Severity weights (dark-pattern score)
/// Points contributed by one high-severity finding.
pub const SEVERITY_WEIGHT_HIGH: u32 = 10;
/// Points contributed by one medium-severity finding.
pub const SEVERITY_WEIGHT_MEDIUM: u32 = 5;
/// Points contributed by one low-severity finding.
pub const SEVERITY_WEIGHT_LOW: u32 = 2;
/// The dark-pattern score saturates at this value.
pub const MAX_TOTAL_SCORE: u32 = 100;

// Dark-pattern rule thresholds
/// Pages longer than this with a "privacy" mention are treated as burying
/// their privacy policy.
pub const PRIVACY_BURIED_HTML_LEN: usize = 100_000;
/// Fraction of images missing alt text above which (strictly) the
/// accessibility rule fires.
pub const ALT_TEXT_MISSING_RATIO: f64 = 0.5;
/// Non-essential cookie count above which (strictly) the excessive-cookie
/// rule fires.
pub const EXCESSIVE_COOKIE_THRESHOLD: usize = 5;

/// Cookie-name fragments that mark a cookie as essential (excluded from the
/// excessive-cookie count).
pub const ESSENTIAL_COOKIE_PATTERNS: &[&str] = &["session", "csrf", "auth", "login", "security"];

/// HTML keywords that indicate a cookie-consent banner.
pub const CONSENT_KEYWORDS: &[&str] = &["cookie", "consent", "privacy", "tracking", "gdpr", "ccpa"];

/// Submit-button terms counted as accepting consent.
pub const ACCEPT_TERMS: &[&str] = &["accept", "agree"];
/// Submit-button terms counted as rejecting consent.
pub const REJECT_TERMS: &[&str] = &["reject", "decline", "no"];
/// Negative-action terms that make a button misleading when combined with a
/// positive action.
pub const MISLEADING_TERMS: &[&str] = &["cancel", "close", "no thanks"];
/// Positive-action terms checked alongside `MISLEADING_TERMS`.
pub const POSITIVE_ACTION_TERMS: &[&str] = &["subscribe", "sign up", "yes"];

// Tracking-domain profiler
/// Cookie-name fragments characteristic of tracking cookies.
pub const TRACKING_COOKIE_NAME_PATTERNS: &[&str] =
    &["_ga", "_gid", "fbp", "utm_", "track", "visitor", "session_id"];

/// Domain substrings that look tracking-related even when the domain is not
/// on the known-tracker list.
pub const SUSPICIOUS_DOMAIN_SUBSTRINGS: &[&str] = &[
    "track",
    "analytics",
    "pixel",
    "ads",
    "metric",
    "stats",
    "collect",
    "beacon",
    "telemetry",
    "marketing",
];

/// TLDs that cheap tracker infrastructure tends to sit on.
pub const WATCHLIST_TLDS: &[&str] = &[".io", ".co", ".app", ".ly", ".me", ".tv"];

// Likelihood signal weights (saturating sum, capped at 1.0)
/// Signal: domain matches the known-tracker list.
pub const LIKELIHOOD_KNOWN_TRACKER: f64 = 1.0;
/// Weight applied to the fraction of a domain's cookies with tracking names.
pub const LIKELIHOOD_NAME_RATIO_WEIGHT: f64 = 0.8;
/// Signal: a script URL on the page references the domain.
pub const LIKELIHOOD_SCRIPT_REFERENCE: f64 = 0.6;
/// Signal: the domain itself contains a suspicious substring.
pub const LIKELIHOOD_SUSPICIOUS_DOMAIN: f64 = 0.4;
/// Signal: the domain's TLD is on the watch-list.
pub const LIKELIHOOD_WATCHLIST_TLD: f64 = 0.2;

// Risk-level vote thresholds
/// Likelihood above which a domain counts one high-risk factor.
pub const HIGH_RISK_LIKELIHOOD: f64 = 0.8;
/// Likelihood above which an otherwise unremarkable domain is at least low
/// risk.
pub const LOW_RISK_LIKELIHOOD: f64 = 0.3;
/// Cookie count above which (strictly) a domain counts one high-risk factor.
pub const HIGH_RISK_COOKIE_COUNT: usize = 3;

// Privacy impact assessment deductions (per unit, with per-signal caps)
pub const IMPACT_PER_TRACKING_DOMAIN: u32 = 5;
pub const IMPACT_TRACKING_DOMAIN_CAP: u32 = 25;
pub const IMPACT_PER_KNOWN_TRACKER: u32 = 8;
pub const IMPACT_KNOWN_TRACKER_CAP: u32 = 25;
pub const IMPACT_PER_HIGH_RISK_DOMAIN: u32 = 10;
pub const IMPACT_HIGH_RISK_DOMAIN_CAP: u32 = 30;
pub const IMPACT_PER_THIRD_PARTY_COOKIE: u32 = 2;
pub const IMPACT_THIRD_PARTY_COOKIE_CAP: u32 = 20;
pub const IMPACT_PER_SESSION_COOKIE: u32 = 1;
pub const IMPACT_SESSION_COOKIE_CAP: u32 = 10;

// Content-quality deductions off a 100-point baseline
pub const QUALITY_DEDUCT_NO_HTTPS: u32 = 20;
pub const QUALITY_DEDUCT_NO_META_DESCRIPTION: u32 = 10;
pub const QUALITY_DEDUCT_POOR_TITLE: u32 = 15;
pub const QUALITY_DEDUCT_POOR_ALT_COVERAGE: u32 = 10;
/// Titles at or below this length are treated as missing.
pub const QUALITY_MIN_TITLE_LEN: usize = 10;
/// Alt-text coverage at or above this counts as a strength.
pub const QUALITY_GOOD_ALT_COVERAGE: f64 = 0.8;
/// Alt-text coverage below this costs quality points.
pub const QUALITY_POOR_ALT_COVERAGE: f64 = 0.5;

// Category scoring weights
pub const CATEGORY_URL_WEIGHT: u32 = 3;
pub const CATEGORY_TITLE_WEIGHT: u32 = 2;
pub const CATEGORY_CONTENT_WEIGHT: u32 = 1;
pub const CATEGORY_META_WEIGHT: u32 = 2;
/// Hard boost for flagship retailer domains (amazon, ebay, walmart).
pub const CATEGORY_MAJOR_RETAILER_BOOST: u32 = 10;
/// Boost applied when the URL's TLD pins a category (.edu, .gov).
pub const CATEGORY_TLD_BOOST: u32 = 5;
/// Minimum winning score; anything below categorizes as "General".
pub const CATEGORY_MIN_SCORE: u32 = 2;

/// Fraction of images with adult indicators above which the primary image
/// content type is "adult".
pub const ADULT_IMAGE_RATIO: f64 = 0.3;

/// Default known tracking domains, matched by substring against cookie
/// domains and script URLs. Grouped by what the operator does.
pub const DEFAULT_TRACKING_DOMAINS: &[&str] = &[
    // Analytics and tag management
    "google-analytics.com",
    "googletagmanager.com",
    "doubleclick.net",
    "googleadservices.com",
    "googlesyndication.com",
    // Social media trackers
    "facebook.com",
    "facebook.net",
    "connect.facebook.net",
    "ads-twitter.com",
    "analytics.twitter.com",
    "ads.linkedin.com",
    "licdn.com",
    // Session replay and product analytics
    "hotjar.com",
    "mixpanel.com",
    "amplitude.com",
    "segment.com",
    "segment.io",
    "fullstory.com",
    "heap.io",
    // Advertising networks
    "amazon-adsystem.com",
    "outbrain.com",
    "taboola.com",
    "criteo.com",
    "criteo.net",
    "pubmatic.com",
    "openx.net",
    "adnxs.com",
    "adsrvr.org",
    "rubiconproject.com",
    // Audience measurement
    "chartbeat.com",
    "parsely.com",
    "quantserve.com",
    "scorecardresearch.com",
    "quantcast.com",
    // Marketing automation and CRM
    "hubspot.com",
    "hs-scripts.com",
    "marketo.net",
    "mktoresp.com",
    "mailchimp.com",
    "pardot.com",
    // Performance monitoring that doubles as telemetry
    "newrelic.com",
    "nr-data.net",
    "datadoghq.com",
    "sentry-cdn.com",
    // Consent platforms (observe consent state across sites)
    "cookiebot.com",
    "cookielaw.org",
    "onetrust.com",
    "consensu.org",
    // Search and misc
    "bat.bing.com",
    "ads.yahoo.com",
    "analytics.yahoo.com",
    "yandex.ru",
    // Mobile attribution
    "appsflyer.com",
    "adjust.com",
    "branch.io",
    // Support widgets with visitor tracking
    "intercom.io",
    "intercomcdn.com",
    "driftt.com",
    "tawk.to",
    "crisp.chat",
    "zdassets.com",
];
