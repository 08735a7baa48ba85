//! Tracing subscriber setup.
//!
//! `SNIPBIN_LOG` takes an `EnvFilter` directive and wins over `-v`.
//! Logs always go to stderr so stdout stays pipeable.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SNIPBIN_LOG";

pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
