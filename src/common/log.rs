//! Process-wide `tracing` subscriber installation.
//!
//! The module is loaded into someone else's process, so output goes to stderr
//! and an already-installed global subscriber is left alone.

use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

use super::config::AppCfg;

static INIT: Once = Once::new();

/// Install the subscriber described by `cfg`. Only the first call has an effect.
pub fn init(cfg: &AppCfg) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(true);

        // Err means the host already owns the global dispatcher.
        let installed = if cfg.log_json {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        };

        if installed {
            tracing::trace!(filter = %cfg.log_filter, json = cfg.log_json, "logging initialised");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let cfg = AppCfg::default();
        init(&cfg);
        init(&cfg);
        assert!(INIT.is_completed());
    }

    #[test]
    fn bad_filter_falls_back() {
        let cfg = AppCfg {
            log_filter: "[[not a filter".to_string(),
            log_json: true,
        };
        init(&cfg);
        assert!(INIT.is_completed());
    }
}
