//! Snippet row type for database queries.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Result, SnipError};
use crate::storage::types::{Snippet, SnippetSummary};

/// Raw row data from the snippets table, before parsing into domain types.
#[derive(Debug)]
pub struct SnippetRow {
    pub url: String,
    pub content: String,
    pub created_at: String,
    pub burn_at: Option<String>,
}

impl SnippetRow {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            url: row.get(0)?,
            content: row.get(1)?,
            created_at: row.get(2)?,
            burn_at: row.get(3)?,
        })
    }
}

/// Timestamps are stored as fixed-width RFC 3339 UTC strings.
pub(crate) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(value: &str, column: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| SnipError::Storage(format!("Invalid {} timestamp: {}", column, e)))
}

impl TryFrom<SnippetRow> for Snippet {
    type Error = SnipError;

    fn try_from(row: SnippetRow) -> Result<Self> {
        let created_at = parse_timestamp(&row.created_at, "created_at")?;
        let burn_at = row
            .burn_at
            .as_deref()
            .map(|value| parse_timestamp(value, "burn_at"))
            .transpose()?;

        Ok(Snippet {
            url: row.url,
            content: row.content,
            created_at,
            burn_at,
        })
    }
}

impl TryFrom<SnippetRow> for SnippetSummary {
    type Error = SnipError;

    fn try_from(row: SnippetRow) -> Result<Self> {
        let snippet = Snippet::try_from(row)?;
        Ok(SnippetSummary::from(&snippet))
    }
}
