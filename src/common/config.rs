//! Runtime configuration loaded from the process environment.

use std::env;

/// Snapshot of configuration values consumed by the module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppCfg {
    /// `EnvFilter` directive string, e.g. `warn` or `hello_world=debug`.
    pub log_filter: String,
    /// Emit JSON lines instead of the human readable format.
    pub log_json: bool,
}

impl AppCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            log_filter: env_or("HELLO_WORLD_LOG", "warn"),
            log_json: parse_flag(&env_or("HELLO_WORLD_LOG_JSON", "0")),
        }
    }
}

impl Default for AppCfg {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
