//! SQLite snippet store.
//!
//! One `snippets` table keyed by url. Content is stored exactly as given;
//! timestamps are fixed-width RFC 3339 UTC strings so they sort as text.

mod row;

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{ffi, Connection, OptionalExtension};

use crate::error::{Result, SnipError};
use crate::storage::expiry::ExpiryPolicy;
use crate::storage::traits::SnippetStore;
use crate::storage::types::{NewSnippet, Snippet, SnippetSummary};

pub use row::SnippetRow;
use row::format_timestamp;

/// SQLite-backed snippet store.
pub struct SqliteSnippetStore {
    conn: Mutex<Connection>,
    expiry_policy: ExpiryPolicy,
}

impl SqliteSnippetStore {
    const FORMAT_VERSION: &'static str = "1";

    const SCHEMA: &'static str = r#"
        CREATE TABLE meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE snippets (
            url TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL,
            burn_at TEXT
        );

        CREATE INDEX snippets_created_at ON snippets(created_at);
    "#;

    /// Open a throwaway store backed by memory.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(&conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Replace the expiry policy (defaults to `ExpiryPolicy::Clock`).
    pub fn with_expiry_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.expiry_policy = policy;
        self
    }

    /// `get` evaluated at an explicit instant.
    pub fn get_at(&self, url: &str, now: DateTime<Utc>) -> Result<Snippet> {
        let conn = self.lock()?;
        let row = conn
            .query_row(
                "SELECT url, content, created_at, burn_at FROM snippets WHERE url = ?",
                [url],
                SnippetRow::from_row,
            )
            .optional()?;
        drop(conn);

        let snippet = match row {
            Some(row) => Snippet::try_from(row)?,
            None => {
                tracing::debug!(url, "snippet not found");
                return Err(SnipError::SnippetNotFound(url.to_string()));
            }
        };

        if self
            .expiry_policy
            .is_burned(snippet.created_at, snippet.burn_at, now)
        {
            tracing::debug!(url, policy = %self.expiry_policy, "snippet burned");
            return Err(SnipError::SnippetBurned(url.to_string()));
        }

        Ok(snippet)
    }

    /// `list_visible` evaluated at an explicit instant.
    pub fn list_visible_at(&self, now: DateTime<Utc>) -> Result<Vec<SnippetSummary>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT url, content, created_at, burn_at FROM snippets ORDER BY created_at ASC, url ASC",
        )?;
        let rows = stmt
            .query_map([], SnippetRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut visible = Vec::new();
        for row in rows {
            let summary = SnippetSummary::try_from(row)?;
            if self
                .expiry_policy
                .is_listed(summary.created_at, summary.burn_at, now)
            {
                visible.push(summary);
            }
        }

        tracing::debug!(
            visible = visible.len(),
            policy = %self.expiry_policy,
            "listed visible snippets"
        );
        Ok(visible)
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            expiry_policy: ExpiryPolicy::default(),
        }
    }

    fn initialize(conn: &Connection) -> Result<()> {
        conn.execute_batch(Self::SCHEMA)?;
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["format_version", Self::FORMAT_VERSION],
        )?;
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["created_at", &format_timestamp(Utc::now())],
        )?;
        Ok(())
    }

    fn verify_format(conn: &Connection) -> Result<()> {
        let version: Option<String> = conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'format_version'",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| SnipError::Storage(format!("Not a snippet store: {}", e)))?;

        match version.as_deref() {
            Some(found) if found == Self::FORMAT_VERSION => Ok(()),
            Some(other) => Err(SnipError::Storage(format!(
                "Unsupported store format version: {}",
                other
            ))),
            None => Err(SnipError::Storage(
                "Not a snippet store: format version missing".to_string(),
            )),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| SnipError::Storage("SQLite connection poisoned".to_string()))
    }

    fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(inner, _)
                if inner.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
        )
    }
}

impl SnippetStore for SqliteSnippetStore {
    fn init(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(SnipError::StoreExists(path.display().to_string()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::initialize(&conn)?;
        tracing::info!(path = %path.display(), "initialized snippet store");
        Ok(())
    }

    fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SnipError::StoreNotFound(path.display().to_string()));
        }

        let conn = Connection::open(path)?;
        Self::verify_format(&conn)?;
        Ok(Self::from_connection(conn))
    }

    fn expiry_policy(&self) -> ExpiryPolicy {
        self.expiry_policy
    }

    fn create(&mut self, snippet: &NewSnippet) -> Result<()> {
        snippet.validate()?;

        let created_at = snippet.created_at.unwrap_or_else(Utc::now);
        let conn = self.lock()?;
        let result = conn.execute(
            "INSERT INTO snippets (url, content, created_at, burn_at) VALUES (?, ?, ?, ?)",
            (
                &snippet.url,
                &snippet.content,
                format_timestamp(created_at),
                snippet.burn_at.map(format_timestamp),
            ),
        );

        match result {
            Ok(_) => {
                tracing::debug!(url = %snippet.url, burn_at = ?snippet.burn_at, "snippet created");
                Ok(())
            }
            Err(err) if Self::is_unique_violation(&err) => {
                tracing::warn!(url = %snippet.url, "snippet url collision");
                Err(SnipError::DuplicateUrl(snippet.url.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get(&self, url: &str) -> Result<Snippet> {
        self.get_at(url, Utc::now())
    }

    fn list_visible(&self) -> Result<Vec<SnippetSummary>> {
        self.list_visible_at(Utc::now())
    }

    fn count(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| SnipError::Storage(format!("Invalid snippet count: {}", count)))
    }
}
