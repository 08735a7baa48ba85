//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes. Core `SnipError`s that bubble
//! up through `anyhow` are classified the same way.

use std::fmt;

use snipbin_core::SnipError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, store, snippet)
    NotFound { message: String, hint: String },

    /// Wrong password
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Pick the process exit code for an error returned by a command.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<SnipError>() {
        Some(core) if core.is_not_found() => exit_codes::NOT_FOUND,
        Some(SnipError::StoreNotFound(_)) => exit_codes::NOT_FOUND,
        Some(core) if core.is_incorrect_password() => exit_codes::AUTH_FAILED,
        Some(SnipError::Validation(_)) | Some(SnipError::DuplicateUrl(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_codes() {
        assert_eq!(
            CliError::not_found("Snippet not found", "Hint: check the url").exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            CliError::auth_failed_with_hint("Incorrect password", "Hint").exit_code(),
            exit_codes::AUTH_FAILED
        );
        assert_eq!(
            CliError::invalid_input("bad").exit_code(),
            exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_core_errors_classified() {
        let burned = anyhow::Error::new(SnipError::SnippetBurned("abc".to_string()));
        assert_eq!(exit_code_for(&burned), exit_codes::NOT_FOUND);

        let wrong = anyhow::Error::new(SnipError::IncorrectPassword);
        assert_eq!(exit_code_for(&wrong), exit_codes::AUTH_FAILED);

        let dup = anyhow::Error::new(SnipError::DuplicateUrl("abc".to_string()));
        assert_eq!(exit_code_for(&dup), exit_codes::INVALID_INPUT);

        let other = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&other), 1);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Snippet not found: abc", "Hint: Run `snipbin list`.");
        assert_eq!(
            err.to_string(),
            "Snippet not found: abc\nHint: Run `snipbin list`."
        );
    }
}
