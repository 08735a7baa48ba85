//! # snipbin core
//!
//! Core library for snipbin - a password-protected snippet store with
//! shareable ids and optional burn times.
//!
//! The store never sees plaintext: content is encrypted by the caller
//! before `create` and decrypted after `get`.
//!
//! ## Architecture
//!
//! - **storage**: `SnippetStore` trait, SQLite backend, expiry policy
//! - **crypto**: client cipher helper (encrypt, decrypt, reveal)
//! - **id**: short random snippet urls
//! - **input**: parse-and-validate layer for create/get requests
//! - **fs**: atomic file replacement

pub mod crypto;
pub mod error;
pub mod fs;
pub mod id;
pub mod input;
pub mod storage;

pub use error::{Result, SnipError};
pub use storage::{ExpiryPolicy, SnippetStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
