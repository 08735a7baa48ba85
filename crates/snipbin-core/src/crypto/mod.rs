//! Client-side cipher helper for snippets.
//!
//! Snippets are encrypted before they reach the store and decrypted after
//! they come back out. The store only ever handles opaque strings.
//!
//! ## Security Model
//!
//! - Passphrase-based encryption using Age (scrypt KDF, ChaCha20-Poly1305)
//! - Ciphertext is authenticated: a wrong password fails, it never decodes
//!   to garbage
//! - Decrypted buffers are zeroized once converted to a `String`
//! - No key caching between calls
//!
//! ## Threat Model
//!
//! We defend against:
//! - Anyone holding the snippet url but not the password
//! - Theft of the snippet store
//!
//! We do NOT defend against:
//! - Snippets created with the empty (default) password
//! - Offline brute force of weak passwords beyond what scrypt costs

pub mod cipher;

pub use cipher::{decrypt, encrypt, reveal, Reveal, DEFAULT_PASSWORD};
