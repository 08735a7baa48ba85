//! Application-level utilities for the snipbin CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and store files
//! - Password prompting with retry for opening snippets

mod context;
mod password;
mod resolver;

pub use context::AppContext;
pub use password::{open_with_retry, resolve_create_password};
pub use resolver::resolve_config_path;
