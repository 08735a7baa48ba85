//! Age passphrase encryption rendered as opaque base64 strings.

use std::io::{Read, Write};
use std::iter;

use age::secrecy::SecretString;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::error::{Result, SnipError};

/// Password used when the author supplies none.
///
/// The snippet url is never used as an implicit password.
pub const DEFAULT_PASSWORD: &str = "";

/// Outcome of trying to open a snippet with a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// Decryption succeeded and produced non-empty text
    Plaintext(String),
    /// Wrong password, malformed content, or an empty result
    IncorrectPassword,
}

/// Encrypt snippet text into an opaque string.
///
/// An empty password is accepted and still produces ciphertext; it does not
/// mean "store as plaintext".
///
/// # Examples
///
/// ```
/// use snipbin_core::crypto::encrypt;
///
/// let opaque = encrypt("hello world", "secret").unwrap();
/// assert!(!opaque.contains("hello world"));
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    let encryptor = age::Encryptor::with_user_passphrase(SecretString::from(password.to_string()));

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut encrypted)
        .map_err(|e| SnipError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| SnipError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| SnipError::Crypto(format!("Encryption finish failed: {}", e)))?;

    Ok(STANDARD.encode(&encrypted))
}

/// Decrypt an opaque string produced by [`encrypt`].
///
/// # Errors
///
/// - `SnipError::IncorrectPassword` if the password does not match
/// - `SnipError::MalformedCiphertext` if the input is not base64, not an age
///   file, truncated, or decrypts to something other than UTF-8
///
/// # Examples
///
/// ```
/// use snipbin_core::crypto::{decrypt, encrypt};
///
/// let opaque = encrypt("hello world", "secret").unwrap();
/// assert_eq!(decrypt(&opaque, "secret").unwrap(), "hello world");
/// ```
pub fn decrypt(opaque: &str, password: &str) -> Result<String> {
    let encrypted = STANDARD
        .decode(opaque.trim())
        .map_err(|e| SnipError::MalformedCiphertext(format!("Invalid base64: {}", e)))?;

    let decryptor = age::Decryptor::new(encrypted.as_slice())
        .map_err(|e| SnipError::MalformedCiphertext(format!("Invalid age header: {}", e)))?;

    let identity = age::scrypt::Identity::new(SecretString::from(password.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => SnipError::IncorrectPassword,
            _ => SnipError::Crypto(format!("Decryption failed: {}", e)),
        })?;

    let mut decrypted = Zeroizing::new(Vec::new());
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| SnipError::MalformedCiphertext(format!("Corrupted payload: {}", e)))?;

    std::str::from_utf8(&decrypted)
        .map(|text| text.to_string())
        .map_err(|_| SnipError::MalformedCiphertext("Plaintext is not UTF-8".to_string()))
}

/// Try to open a snippet, folding every failure into `IncorrectPassword`.
///
/// An empty plaintext is also reported as `IncorrectPassword`: a snippet
/// author can never store empty text, so an empty result means the content
/// did not open.
pub fn reveal(opaque: &str, password: &str) -> Reveal {
    match decrypt(opaque, password) {
        Ok(text) if !text.is_empty() => Reveal::Plaintext(text),
        Ok(_) => Reveal::IncorrectPassword,
        Err(err) => {
            tracing::debug!(error = %err, "snippet did not open");
            Reveal::IncorrectPassword
        }
    }
}
