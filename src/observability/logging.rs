//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Route log output to stderr so the report owns stdout
//!
//! # Design Decisions
//! - `RUST_LOG` overrides everything
//! - `--verbose` raises this crate to debug
//! - Credentials and tokens are never logged

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Default filter directive when `RUST_LOG` is unset.
pub fn default_directive(config: &ObservabilityConfig) -> String {
    let level = if config.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    format!("commvault_backup={}", level)
}

/// Install the global tracing subscriber.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(config).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_level() {
        let mut config = ObservabilityConfig::default();
        assert_eq!(default_directive(&config), "commvault_backup=info");

        config.log_level = "warn".into();
        assert_eq!(default_directive(&config), "commvault_backup=warn");

        config.verbose = true;
        assert_eq!(default_directive(&config), "commvault_backup=debug");
    }
}
