#![warn(missing_docs)]

//! Shared logging helpers, CLI argument definitions, and tracing utilities for the clinic workspace.
//!
//! This crate consolidates logging infrastructure:
//! - [`fmt`]: Render tracing events to logfmt strings
//! - [`forward`]: Forward page logs to the editor host
//! - CLI argument parsing for log level configuration

use std::env;

use clap::Args;
use tracing_subscriber::EnvFilter;

pub mod fmt;
pub mod forward;

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "clinic_engine=trace,config=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// Final filter spec for these flags; see [`compute_spec`].
    pub fn spec(&self) -> String {
        compute_spec(
            self.trace,
            self.debug,
            self.log_level.as_deref(),
            self.log_filter.as_deref(),
        )
    }
}

/// Crate targets that constitute "our" logs.
fn our_crates() -> &'static [&'static str] {
    &[
        "clinic",
        "clinic_engine",
        "clinic_protocol",
        "config",
        "logging",
    ]
}

/// Filter directive setting the same `level` for all of our crates.
fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|t| format!("{}={}", t, lvl))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `RUST_LOG` env
/// - default to crate-scoped `info`
pub fn compute_spec(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
) -> String {
    if let Some(spec) = log_filter {
        return spec.to_string();
    }
    if trace {
        return level_spec_for("trace");
    }
    if debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = log_level {
        return level_spec_for(lvl);
    }
    env::var("RUST_LOG").unwrap_or_else(|_| level_spec_for("info"))
}

/// Create an `EnvFilter` from a spec string.
pub fn env_filter_from_spec(spec: &str) -> EnvFilter {
    EnvFilter::new(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        assert_eq!(
            compute_spec(true, false, Some("warn"), Some("config=trace")),
            "config=trace"
        );
    }

    #[test]
    fn flags_scope_level_to_our_crates() {
        let spec = compute_spec(false, true, None, None);
        assert!(spec.contains("clinic_engine=debug"));
        assert!(spec.contains("config=debug"));
        assert_eq!(spec.split(',').count(), our_crates().len());

        let spec = compute_spec(false, false, Some("WARN"), None);
        assert!(spec.split(',').all(|d| d.ends_with("=warn")));
    }

    #[test]
    fn args_delegate_to_compute_spec() {
        let args = LogArgs {
            trace: true,
            ..LogArgs::default()
        };
        assert_eq!(args.spec(), level_spec_for("trace"));
    }
}
