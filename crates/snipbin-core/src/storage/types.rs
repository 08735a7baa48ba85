//! Core data types for the storage layer.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{validate_content, validate_timestamp, validate_url};

/// A stored snippet.
///
/// Timestamps are kept at microsecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Public lookup key
    pub url: String,

    /// Opaque ciphertext, never interpreted by the store
    pub content: String,

    /// When the snippet was persisted
    pub created_at: DateTime<Utc>,

    /// Optional burn time
    pub burn_at: Option<DateTime<Utc>>,
}

/// The projection returned by visibility listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetSummary {
    pub url: String,
    pub burn_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<&Snippet> for SnippetSummary {
    fn from(snippet: &Snippet) -> Self {
        Self {
            url: snippet.url.clone(),
            burn_at: snippet.burn_at,
            created_at: snippet.created_at,
        }
    }
}

/// Builder for creating new snippets.
#[derive(Debug, Clone)]
pub struct NewSnippet {
    /// Caller-generated url
    pub url: String,

    /// Opaque content
    pub content: String,

    /// Optional burn time
    pub burn_at: Option<DateTime<Utc>>,

    /// Optional creation time override (defaults to now at persistence)
    pub created_at: Option<DateTime<Utc>>,
}

impl NewSnippet {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
            burn_at: None,
            created_at: None,
        }
    }

    /// Set the burn time, truncated to the stored microsecond precision.
    pub fn with_burn_at(mut self, burn_at: DateTime<Utc>) -> Self {
        self.burn_at = Some(burn_at.trunc_subsecs(6));
        self
    }

    /// Override the creation time, truncated like `with_burn_at`.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at.trunc_subsecs(6));
        self
    }

    /// Check url, content and timestamp limits before anything touches the
    /// database.
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.url)?;
        validate_content(&self.content)?;
        if let Some(burn_at) = self.burn_at {
            validate_timestamp(burn_at, "burn_at")?;
        }
        if let Some(created_at) = self.created_at {
            validate_timestamp(created_at, "created_at")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Timelike};

    #[test]
    fn test_new_snippet_builder() {
        let now = Utc::now().trunc_subsecs(6);
        let snippet = NewSnippet::new("abc123", "opaque")
            .with_burn_at(now + Duration::days(1))
            .with_created_at(now);

        assert_eq!(snippet.url, "abc123");
        assert_eq!(snippet.content, "opaque");
        assert_eq!(snippet.burn_at, Some(now + Duration::days(1)));
        assert_eq!(snippet.created_at, Some(now));
        assert!(snippet.validate().is_ok());
    }

    #[test]
    fn test_new_snippet_validate_rejects_empty_content() {
        let snippet = NewSnippet::new("abc123", "");
        assert!(snippet.validate().is_err());
    }

    #[test]
    fn test_new_snippet_validate_rejects_out_of_range_years() {
        let far = Utc.with_ymd_and_hms(12345, 1, 1, 0, 0, 0).unwrap();
        let snippet = NewSnippet::new("abc123", "opaque").with_burn_at(far);
        assert!(snippet.validate().is_err());

        let snippet = NewSnippet::new("abc123", "opaque").with_created_at(far);
        assert!(snippet.validate().is_err());
    }

    #[test]
    fn test_builder_truncates_to_microseconds() {
        let precise = Utc
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let snippet = NewSnippet::new("abc123", "opaque").with_burn_at(precise);

        assert_eq!(snippet.burn_at.unwrap().nanosecond(), 123_456_000);
    }

    #[test]
    fn test_summary_from_snippet() {
        let now = Utc::now();
        let snippet = Snippet {
            url: "abc123".to_string(),
            content: "opaque".to_string(),
            created_at: now,
            burn_at: None,
        };

        let summary = SnippetSummary::from(&snippet);
        assert_eq!(summary.url, "abc123");
        assert_eq!(summary.created_at, now);
        assert_eq!(summary.burn_at, None);
    }
}
