//! Response-shape validation for the wiki resource endpoint
//!
//! The endpoint always serializes the full key set (`error` and `url` are
//! null on success), so shape validation checks key presence rather than
//! non-null values. A body that does not carry the expected keys is treated
//! as malformed and handled explicitly by the controller instead of being
//! silently dropped mid-parse.

use serde_json::Value;

/// Public base under which wikis are served.
pub const PUBLIC_WIKI_BASE: &str = "https://personalwiki.com.de";

/// Public URL for a user's wiki, constructed client-side.
///
/// The endpoint's own `url` field is relative and is deliberately ignored.
pub fn public_wiki_url(username: &str) -> String {
    format!("{PUBLIC_WIKI_BASE}/wikis/{username}")
}

/// Key set a response body must carry to be considered well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Create/update responses: `success`, `error`, `url`.
    Save,
    /// Delete responses: `success`, `error`.
    Delete,
}

impl ResponseShape {
    fn required_keys(self) -> &'static [&'static str] {
        match self {
            ResponseShape::Save => &["success", "error", "url"],
            ResponseShape::Delete => &["success", "error"],
        }
    }
}

/// Outcome reported by a well-formed response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiOutcome {
    pub success: bool,
    pub error: Option<String>,
    pub url: Option<String>,
}

/// A validated response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResponse {
    /// All required keys present and `success` is a boolean.
    Parsed(WikiOutcome),
    /// Missing keys, non-boolean `success`, or not a JSON object.
    Malformed,
}

impl ActionResponse {
    /// Validate a response body against the key set for the given shape.
    pub fn from_value(value: &Value, shape: ResponseShape) -> Self {
        let Some(object) = value.as_object() else {
            return ActionResponse::Malformed;
        };
        if !shape.required_keys().iter().all(|key| object.contains_key(*key)) {
            return ActionResponse::Malformed;
        }
        let Some(success) = object["success"].as_bool() else {
            return ActionResponse::Malformed;
        };

        let field = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };

        ActionResponse::Parsed(WikiOutcome {
            success,
            error: field("error"),
            url: field("url"),
        })
    }
}
