//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error
/// - 2: Usage error (clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Snippet, store, or config not found (burned snippets included).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Incorrect password.
    pub const AUTH_FAILED: i32 = 5;
}

/// Password prompts allowed before `get` gives up.
pub const MAX_PASSWORD_ATTEMPTS: usize = 3;

/// Environment variable consulted for passwords before prompting.
pub const PASSWORD_ENV: &str = "SNIPBIN_PASSWORD";
