//! Environment-driven settings.

use std::env;
use std::path::PathBuf;

/// Path to a JSON registry snapshot used instead of the live registry.
pub const SNAPSHOT_ENV: &str = "GST_WHICH_SNAPSHOT";
/// Tracing filter directives; `RUST_LOG` is consulted when unset.
pub const LOG_ENV: &str = "GST_WHICH_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub snapshot: Option<PathBuf>,
    pub color: bool,
    pub log_filter: String,
}

impl Config {
    /// Reads the process environment. `stdout_is_terminal` decides color when
    /// `NO_COLOR` is not set.
    pub fn from_env(stdout_is_terminal: bool) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), stdout_is_terminal)
    }

    pub fn from_lookup<F>(lookup: F, stdout_is_terminal: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot = lookup(SNAPSHOT_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        // Any non-empty NO_COLOR disables color (https://no-color.org).
        let no_color = lookup("NO_COLOR").is_some_and(|value| !value.is_empty());

        let log_filter = lookup(LOG_ENV)
            .or_else(|| lookup("RUST_LOG"))
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            snapshot,
            color: stdout_is_terminal && !no_color,
            log_filter,
        }
    }
}
