//! Diagnostic logging via tracing-subscriber.
//!
//! Logs go to stderr so stdout carries only the report. `RUST_LOG` wins over
//! the `-v` count when set.

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// HTTP stack crates that are too chatty below `warn`.
const NOISY: &[(&str, &str)] = &[
    ("hyper", "warn"),
    ("hyper_util", "warn"),
    ("reqwest", "warn"),
    ("rustls", "warn"),
];

/// Base level for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the `EnvFilter` from the base level plus the noisy-crate overrides.
fn build_env_filter(level: &str) -> Result<EnvFilter, Box<dyn Error>> {
    let mut directives = vec![level.to_string()];
    for (target, lvl) in NOISY {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| format!("Invalid tracing filter '{}': {}", filter_str, e).into())
}

/// Install the global subscriber.
pub fn init(verbosity: u8) -> Result<(), Box<dyn Error>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_env_filter(level_for(verbosity))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to initialise logging: {}", e).into())
}
