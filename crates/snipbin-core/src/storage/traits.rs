//! Snippet store trait definition.
//!
//! The `SnippetStore` trait defines the interface every backend implements.
//! Backends persist opaque strings; they never encrypt or decrypt.

use std::path::Path;

use super::expiry::ExpiryPolicy;
use super::types::{NewSnippet, Snippet, SnippetSummary};
use crate::error::Result;

/// Storage interface for snippets.
///
/// All implementations must ensure:
/// - `url` is unique across all records
/// - Records are never updated after creation
/// - Burn times are enforced as read filters, never by deletion
pub trait SnippetStore: Send + Sync {
    /// Create a new, empty store at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `SnipError::StoreExists` if the file already exists.
    fn init(path: &Path) -> Result<()>
    where
        Self: Sized;

    /// Open an existing store.
    ///
    /// # Errors
    ///
    /// Returns `SnipError::StoreNotFound` if the file is missing, or
    /// `SnipError::Storage` if it is not a snippet store.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// The burn-time policy applied by `get` and `list_visible`.
    fn expiry_policy(&self) -> ExpiryPolicy;

    /// Insert a new snippet.
    ///
    /// # Errors
    ///
    /// - `SnipError::Validation` if url or content break the input rules
    /// - `SnipError::DuplicateUrl` if the url is taken; the existing record
    ///   is left untouched
    fn create(&mut self, snippet: &NewSnippet) -> Result<()>;

    /// Get a snippet by url.
    ///
    /// # Errors
    ///
    /// - `SnipError::SnippetNotFound` if no record matches
    /// - `SnipError::SnippetBurned` if the expiry policy refuses it
    fn get(&self, url: &str) -> Result<Snippet>;

    /// List the snippets the expiry policy still publishes, oldest first.
    fn list_visible(&self) -> Result<Vec<SnippetSummary>>;

    /// Total number of stored records, burned or not.
    fn count(&self) -> Result<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_snippet_store<T: SnippetStore>(_store: T) {}
    }
}
