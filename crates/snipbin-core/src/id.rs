//! Short random snippet urls.
//!
//! Urls are 24 characters: a lowercase letter followed by lowercase
//! alphanumerics, drawn from the OS CSPRNG. There is no collision retry;
//! the store rejects duplicates.

use crate::error::{Result, SnipError};

/// Length of generated snippet urls.
pub const SNIPPET_URL_LENGTH: usize = 24;

const LEADING_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh snippet url.
pub fn new_snippet_url() -> Result<String> {
    let mut source = RandomBytes::new();
    let mut url = String::with_capacity(SNIPPET_URL_LENGTH);
    url.push(source.pick(LEADING_ALPHABET)?);
    while url.len() < SNIPPET_URL_LENGTH {
        url.push(source.pick(ALPHABET)?);
    }
    Ok(url)
}

/// Buffered CSPRNG output with rejection sampling over small alphabets.
struct RandomBytes {
    buf: [u8; 64],
    pos: usize,
}

impl RandomBytes {
    fn new() -> Self {
        Self {
            buf: [0u8; 64],
            pos: 64,
        }
    }

    fn next_byte(&mut self) -> Result<u8> {
        if self.pos == self.buf.len() {
            getrandom::getrandom(&mut self.buf)
                .map_err(|e| SnipError::Crypto(format!("Random source failed: {}", e)))?;
            self.pos = 0;
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    fn pick(&mut self, alphabet: &[u8]) -> Result<char> {
        // Largest multiple of the alphabet size that fits in a byte.
        let limit = 256 - (256 % alphabet.len());
        loop {
            let byte = self.next_byte()? as usize;
            if byte < limit {
                return Ok(alphabet[byte % alphabet.len()] as char);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_url_shape() {
        let url = new_snippet_url().unwrap();

        assert_eq!(url.len(), SNIPPET_URL_LENGTH);
        let first = url.chars().next().unwrap();
        assert!(first.is_ascii_lowercase());
        assert!(url
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_urls_are_unique() {
        let urls: HashSet<String> = (0..500).map(|_| new_snippet_url().unwrap()).collect();
        assert_eq!(urls.len(), 500);
    }

    #[test]
    fn test_generated_url_passes_validation() {
        let url = new_snippet_url().unwrap();
        assert!(crate::input::validate_url(&url).is_ok());
    }
}
