//! Error types for snipbin core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing hints.

use thiserror::Error;

/// Result type alias for snipbin operations.
pub type Result<T> = std::result::Result<T, SnipError>;

/// Core error type for snipbin operations.
#[derive(Debug, Error)]
pub enum SnipError {
    /// A snippet with this url already exists
    #[error("Snippet already exists: {0}")]
    DuplicateUrl(String),

    /// No snippet matches the url
    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    /// The snippet exists but its burn time has passed
    #[error("Snippet has been burned: {0}")]
    SnippetBurned(String),

    /// Password did not unwrap the ciphertext
    #[error("Incorrect password")]
    IncorrectPassword,

    /// Opaque content is not something `encrypt` produced
    #[error("Malformed ciphertext: {0}")]
    MalformedCiphertext(String),

    /// Encryption or decryption error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Input validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Store file missing on open
    #[error("Snippet store not found: {0}")]
    StoreNotFound(String),

    /// Store file already present on init
    #[error("Snippet store already exists: {0}")]
    StoreExists(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SnipError {
    /// True for the conditions a reader should see as "no such snippet".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SnipError::SnippetNotFound(_) | SnipError::SnippetBurned(_)
        )
    }

    /// True when a caller should treat the failure as a wrong password.
    pub fn is_incorrect_password(&self) -> bool {
        matches!(
            self,
            SnipError::IncorrectPassword | SnipError::MalformedCiphertext(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burned_counts_as_not_found() {
        assert!(SnipError::SnippetBurned("abc".to_string()).is_not_found());
        assert!(SnipError::SnippetNotFound("abc".to_string()).is_not_found());
        assert!(!SnipError::IncorrectPassword.is_not_found());
    }

    #[test]
    fn test_malformed_counts_as_incorrect_password() {
        assert!(SnipError::MalformedCiphertext("bad".to_string()).is_incorrect_password());
        assert!(!SnipError::Validation("bad".to_string()).is_incorrect_password());
    }
}
