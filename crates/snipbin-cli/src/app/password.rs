//! Password resolution for creating and opening snippets.

use dialoguer::Password;
use snipbin_core::crypto::{reveal, Reveal, DEFAULT_PASSWORD};

use crate::constants::{MAX_PASSWORD_ATTEMPTS, PASSWORD_ENV};
use crate::errors::CliError;

fn env_password() -> Option<String> {
    std::env::var(PASSWORD_ENV).ok()
}

/// Pick the password for a new snippet.
///
/// Order: --no-password, --password, SNIPBIN_PASSWORD, interactive prompt.
/// Without any of these the empty default password is used.
pub fn resolve_create_password(
    explicit: Option<&str>,
    no_password: bool,
    interactive: bool,
) -> anyhow::Result<String> {
    if no_password {
        return Ok(DEFAULT_PASSWORD.to_string());
    }
    if let Some(value) = explicit {
        return Ok(value.to_string());
    }
    if let Some(value) = env_password() {
        return Ok(value);
    }
    if !interactive {
        tracing::info!("no password supplied; using the empty default password");
        return Ok(DEFAULT_PASSWORD.to_string());
    }
    Password::new()
        .with_prompt("Password (leave empty for none)")
        .with_confirmation("Confirm password", "Passwords do not match")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Decrypt `content`, re-prompting on a wrong password when interactive.
///
/// Without an explicit or environment password the empty default password
/// is tried first, so unprotected snippets open without a prompt.
pub fn open_with_retry(
    content: &str,
    explicit: Option<&str>,
    interactive: bool,
) -> anyhow::Result<String> {
    let supplied = explicit.map(|value| value.to_string()).or_else(env_password);
    let first = supplied
        .clone()
        .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());

    if let Reveal::Plaintext(text) = reveal(content, &first) {
        return Ok(text);
    }

    if !interactive {
        let message = if supplied.is_some() {
            "Incorrect password"
        } else {
            "This snippet is password protected"
        };
        return Err(CliError::auth_failed_with_hint(
            message,
            format!("Hint: Pass --password or set {}.", PASSWORD_ENV),
        )
        .into());
    }

    if supplied.is_some() {
        eprintln!("Incorrect password. Please try again.");
    }

    for attempt in 1..=MAX_PASSWORD_ATTEMPTS {
        let password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;

        match reveal(content, &password) {
            Reveal::Plaintext(text) => return Ok(text),
            Reveal::IncorrectPassword => {
                tracing::debug!(attempt, "incorrect password");
                if attempt < MAX_PASSWORD_ATTEMPTS {
                    eprintln!("Incorrect password. Please try again.");
                }
            }
        }
    }

    Err(CliError::auth_failed_with_hint(
        "Incorrect password",
        format!("Hint: Gave up after {} attempts.", MAX_PASSWORD_ATTEMPTS),
    )
    .into())
}
