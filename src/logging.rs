//! Diagnostic logging using tracing.
//!
//! Everything goes to stderr; stdout carries only the compiler's output.

use anyhow::Context;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "AST_MERGE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `AST_MERGE_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber.
pub fn init() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()
        .context("failed to install log subscriber")
}
