//! Crawled page data model.
//!
//! `PageData` is the typed contract with the crawler: one record per crawled
//! page, deserialized from the crawler's JSON output. Every list field
//! defaults to empty so partial extractions deserialize to "no signal"
//! rather than an error.
//!
//! `AnalyzedPage` wraps a `PageData` with named optional fields that each
//! pipeline stage fills in. Stages only ever attach their own field; the
//! underlying page snapshot is never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::ContentAnalysis;
use crate::detector::DetectionResult;
use crate::tracking::{CookieAccessReport, PrivacyAssessment, TrackingAccessReport};

/// A `<meta>` tag extracted from the page head.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaTag {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A popup or modal element the crawler observed on the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Popup {
    #[serde(default)]
    pub selector: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub visible: bool,
}

/// A single form input element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormInput {
    /// Input type attribute (`checkbox`, `submit`, `text`, ...).
    #[serde(rename = "type", default)]
    pub input_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
}

impl FormInput {
    /// Renders a short reference to this input for finding evidence.
    pub fn describe(&self) -> String {
        if self.name.is_empty() {
            format!("<input type=\"{}\">", self.input_type)
        } else {
            format!("<input type=\"{}\" name=\"{}\">", self.input_type, self.name)
        }
    }
}

/// A form and its inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub inputs: Vec<FormInput>,
}

/// An image element with its accessibility attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
}

/// A browser cookie captured after page load.
///
/// `is_third_party` is derived by the crawler: true when the cookie domain
/// does not match the page's registrable domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cookie {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub path: String,
    /// Expiry as a unix timestamp; `None` marks a session cookie.
    #[serde(default)]
    pub expires: Option<f64>,
    #[serde(rename = "httpOnly", default)]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
    #[serde(rename = "sameSite", default)]
    pub same_site: Option<String>,
    #[serde(default)]
    pub is_third_party: bool,
}

impl Cookie {
    /// Session cookies have no expiry and vanish when the browser closes.
    pub fn is_session(&self) -> bool {
        self.expires.is_none()
    }
}

/// Immutable snapshot of one crawled page.
///
/// Produced once by the crawler and only read by the analyzers. Strings may
/// be empty and lists may be empty; no field is ever absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub meta_tags: Vec<MetaTag>,
    #[serde(default)]
    pub css_links: Vec<String>,
    #[serde(default)]
    pub js_scripts: Vec<String>,
    #[serde(default)]
    pub popups: Vec<Popup>,
    #[serde(default)]
    pub forms: Vec<Form>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub cookies: Vec<Cookie>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl PageData {
    /// Creates an empty page snapshot for the given URL.
    ///
    /// Useful for constructing fixtures; real snapshots come from the
    /// crawler's JSON.
    pub fn new(url: impl Into<String>) -> Self {
        PageData {
            url: url.into(),
            title: String::new(),
            html: String::new(),
            meta_tags: Vec::new(),
            css_links: Vec::new(),
            js_scripts: Vec::new(),
            popups: Vec::new(),
            forms: Vec::new(),
            links: Vec::new(),
            images: Vec::new(),
            cookies: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Lowercased HTML body, the form every text heuristic matches against.
    pub fn html_lower(&self) -> String {
        self.html.to_lowercase()
    }

    /// Iterates over all submit-button inputs across every form.
    pub fn submit_inputs(&self) -> impl Iterator<Item = &FormInput> {
        self.forms
            .iter()
            .flat_map(|form| form.inputs.iter())
            .filter(|input| input.input_type == "submit")
    }
}

/// One page plus the analyses that have run against it.
///
/// Each pipeline stage attaches its output as a named optional field;
/// unpopulated fields are omitted from the serialized report.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedPage {
    #[serde(flatten)]
    pub page: PageData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_access: Option<CookieAccessReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_access: Option<TrackingAccessReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_assessment: Option<PrivacyAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_patterns: Option<DetectionResult>,
}

impl AnalyzedPage {
    /// Wraps a crawled page with no analyses attached yet.
    pub fn new(page: PageData) -> Self {
        AnalyzedPage {
            page,
            category: None,
            cookie_access: None,
            tracking_access: None,
            privacy_assessment: None,
            content: None,
            dark_patterns: None,
        }
    }
}

/// Metadata about one scan run.
#[derive(Debug, Clone, Serialize)]
pub struct ScanInfo {
    pub tool: String,
    pub version: String,
    pub pages_analyzed: usize,
    pub timestamp: DateTime<Utc>,
}

/// The complete output document for a scan: run metadata plus every
/// analyzed page.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub scan_info: ScanInfo,
    pub pages: Vec<AnalyzedPage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_data_deserializes_with_missing_lists() {
        // The crawler may omit any list field entirely; all of them must
        // default to empty rather than failing deserialization.
        let json = r#"{"url": "https://example.com"}"#;
        let page: PageData = serde_json::from_str(json).expect("minimal page should deserialize");
        assert!(page.cookies.is_empty());
        assert!(page.forms.is_empty());
        assert!(page.js_scripts.is_empty());
        assert!(page.images.is_empty());
        assert_eq!(page.title, "");
        assert_eq!(page.html, "");
    }

    #[test]
    fn test_cookie_session_detection() {
        let session = Cookie {
            name: "sid".to_string(),
            ..Default::default()
        };
        let persistent = Cookie {
            name: "pref".to_string(),
            expires: Some(1_900_000_000.0),
            ..Default::default()
        };
        assert!(session.is_session());
        assert!(!persistent.is_session());
    }

    #[test]
    fn test_cookie_renamed_fields() {
        let json = r#"{
            "name": "_ga", "value": "GA1.2", "domain": ".google-analytics.com",
            "path": "/", "expires": 1900000000.0, "httpOnly": false,
            "secure": true, "sameSite": "Lax", "is_third_party": true
        }"#;
        let cookie: Cookie = serde_json::from_str(json).expect("cookie should deserialize");
        assert!(cookie.secure);
        assert!(!cookie.http_only);
        assert!(cookie.is_third_party);
        assert_eq!(cookie.same_site.as_deref(), Some("Lax"));
    }

    #[test]
    fn test_form_input_type_rename() {
        let json = r#"{"type": "checkbox", "name": "newsletter", "checked": true}"#;
        let input: FormInput = serde_json::from_str(json).expect("input should deserialize");
        assert_eq!(input.input_type, "checkbox");
        assert!(input.checked);
        assert_eq!(input.describe(), "<input type=\"checkbox\" name=\"newsletter\">");
    }

    #[test]
    fn test_submit_inputs_spans_forms() {
        let page = PageData {
            forms: vec![
                Form {
                    inputs: vec![
                        FormInput {
                            input_type: "submit".to_string(),
                            value: "Accept".to_string(),
                            ..Default::default()
                        },
                        FormInput {
                            input_type: "text".to_string(),
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
                Form {
                    inputs: vec![FormInput {
                        input_type: "submit".to_string(),
                        value: "Reject".to_string(),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            ],
            ..PageData::new("https://example.com")
        };
        let values: Vec<&str> = page.submit_inputs().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["Accept", "Reject"]);
    }
}
