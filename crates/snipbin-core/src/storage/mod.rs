//! Snippet storage: trait, data types, expiry policy, SQLite backend.

pub mod expiry;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use expiry::ExpiryPolicy;
pub use sqlite::SqliteSnippetStore;
pub use traits::SnippetStore;
pub use types::{NewSnippet, Snippet, SnippetSummary};
