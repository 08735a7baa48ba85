//! Request schema for the create/get surface.
//!
//! Inputs arrive as loosely typed JSON (or CLI flags) and are parsed and
//! validated here before anything reaches a `SnippetStore`.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnipError};
use crate::storage::{NewSnippet, Snippet};

/// Maximum url length in bytes.
pub const MAX_URL_BYTES: usize = 64;

/// Maximum opaque content size in bytes.
pub const MAX_CONTENT_BYTES: usize = 1024 * 1024;

/// `createSnippet` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSnippetInput {
    pub url: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burn_at: Option<DateTime<Utc>>,
}

impl CreateSnippetInput {
    /// Parse a JSON request body.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| SnipError::Validation(format!("Invalid createSnippet input: {}", e)))
    }

    /// Validate and convert into a store-ready snippet.
    pub fn into_new_snippet(self) -> Result<NewSnippet> {
        let mut snippet = NewSnippet::new(self.url, self.content);
        if let Some(burn_at) = self.burn_at {
            snippet = snippet.with_burn_at(burn_at);
        }
        snippet.validate()?;
        Ok(snippet)
    }
}

/// `getSnippet` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetSnippetInput {
    pub url: String,
}

impl GetSnippetInput {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        validate_url(&url)?;
        Ok(Self { url })
    }
}

/// `getSnippet` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetView {
    pub url: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burn_at: Option<DateTime<Utc>>,
}

impl From<Snippet> for SnippetView {
    fn from(snippet: Snippet) -> Self {
        Self {
            url: snippet.url,
            content: snippet.content,
            created_at: snippet.created_at,
            burn_at: snippet.burn_at,
        }
    }
}

/// Check a snippet url: 1-64 bytes of ASCII alphanumerics, `-` or `_`.
pub fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(SnipError::Validation("Url cannot be empty".to_string()));
    }
    if url.len() > MAX_URL_BYTES {
        return Err(SnipError::Validation(format!(
            "Url too long (max {} bytes)",
            MAX_URL_BYTES
        )));
    }
    if !url
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(SnipError::Validation(
            "Url contains invalid characters".to_string(),
        ));
    }
    Ok(())
}

/// Latest year a stored timestamp may carry.
pub const MAX_TIMESTAMP_YEAR: i32 = 9999;

/// Check a timestamp fits the stored RFC 3339 form (years 0000-9999).
pub fn validate_timestamp(value: DateTime<Utc>, field: &str) -> Result<()> {
    if !(0..=MAX_TIMESTAMP_YEAR).contains(&value.year()) {
        return Err(SnipError::Validation(format!(
            "{} out of range (years 0000-{})",
            field, MAX_TIMESTAMP_YEAR
        )));
    }
    Ok(())
}

/// Check opaque content: non-empty and at most 1 MiB.
pub fn validate_content(content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(SnipError::Validation("Content cannot be empty".to_string()));
    }
    if content.len() > MAX_CONTENT_BYTES {
        return Err(SnipError::Validation(format!(
            "Content too large (max {} bytes)",
            MAX_CONTENT_BYTES
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_input_from_json() {
        let input = CreateSnippetInput::from_json(
            r#"{"url":"abc123","content":"opaque","burnAt":"2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(input.url, "abc123");
        assert_eq!(
            input.burn_at,
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        );

        let snippet = input.into_new_snippet().unwrap();
        assert_eq!(snippet.content, "opaque");
        assert!(snippet.created_at.is_none());
    }

    #[test]
    fn test_create_input_burn_at_optional() {
        let input = CreateSnippetInput::from_json(r#"{"url":"abc123","content":"opaque"}"#).unwrap();
        assert!(input.burn_at.is_none());
    }

    #[test]
    fn test_create_input_rejects_wrong_types() {
        assert!(CreateSnippetInput::from_json(r#"{"url":42,"content":"opaque"}"#).is_err());
        assert!(CreateSnippetInput::from_json(r#"{"url":"abc123"}"#).is_err());
        assert!(CreateSnippetInput::from_json(
            r#"{"url":"abc123","content":"opaque","burnAt":"tomorrow"}"#
        )
        .is_err());
        assert!(CreateSnippetInput::from_json(
            r#"{"url":"abc123","content":"opaque","extra":true}"#
        )
        .is_err());
    }

    #[test]
    fn test_create_input_validates_url() {
        let input = CreateSnippetInput {
            url: "../etc/passwd".to_string(),
            content: "opaque".to_string(),
            burn_at: None,
        };
        let err = input.into_new_snippet().unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
    }

    #[test]
    fn test_validate_url_limits() {
        assert!(validate_url("abc123").is_ok());
        assert!(validate_url("a-b_c").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("has space").is_err());
        assert!(validate_url(&"a".repeat(MAX_URL_BYTES)).is_ok());
        assert!(validate_url(&"a".repeat(MAX_URL_BYTES + 1)).is_err());
    }

    #[test]
    fn test_validate_content_limits() {
        assert!(validate_content("x").is_ok());
        assert!(validate_content("").is_err());
        assert!(validate_content(&"x".repeat(MAX_CONTENT_BYTES)).is_ok());
        assert!(validate_content(&"x".repeat(MAX_CONTENT_BYTES + 1)).is_err());
    }

    #[test]
    fn test_create_input_rejects_far_future_burn_at() {
        let input = CreateSnippetInput::from_json(
            r#"{"url":"abc123","content":"opaque","burnAt":"+12345-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let err = input.into_new_snippet().unwrap_err();
        assert!(matches!(err, SnipError::Validation(ref msg) if msg.contains("burn_at")));
    }

    #[test]
    fn test_validate_timestamp_year_bounds() {
        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let past_last = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        let before_zero = Utc.with_ymd_and_hms(-1, 1, 1, 0, 0, 0).unwrap();

        assert!(validate_timestamp(last, "burn_at").is_ok());
        assert!(validate_timestamp(past_last, "burn_at").is_err());
        assert!(validate_timestamp(before_zero, "created_at").is_err());
    }

    #[test]
    fn test_get_input_validates() {
        assert_eq!(GetSnippetInput::new("abc123").unwrap().url, "abc123");
        assert!(GetSnippetInput::new("").is_err());
    }

    #[test]
    fn test_view_json_shape() {
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let view = SnippetView::from(Snippet {
            url: "abc123".to_string(),
            content: "opaque".to_string(),
            created_at: created,
            burn_at: None,
        });

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["url"], "abc123");
        assert_eq!(value["content"], "opaque");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("burnAt").is_none());
    }
}
