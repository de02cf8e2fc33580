// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Reports go to stdout; engine decisions such as degraded lookups and gated
//! metrics are logged through `tracing` so they never mix with output.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when no environment override is set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Builds the filter: `FLOWLENS_LOG`, then `RUST_LOG`, then the default.
pub fn filter(verbose: bool) -> EnvFilter {
    if let Some(directives) = env::log_filter() {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal() && !env::no_color())
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
