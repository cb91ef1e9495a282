//! Configuration schema definitions.
//!
//! This module defines the settings a single controller run works from.
//! The structure is built from command-line arguments; defaults mirror the
//! CLI defaults.

use std::time::Duration;

use url::Url;

/// Root configuration for one controller run.
#[derive(Debug, Clone, Default)]
pub struct ControllerConfig {
    /// Backup-management server endpoint.
    pub server: ServerConfig,

    /// The backup job to launch.
    pub job: JobConfig,

    /// Status polling settings.
    pub polling: PollingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Server endpoint configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server hostname or IP address.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Use HTTPS instead of plain HTTP.
    pub use_ssl: bool,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 8400,
            use_ssl: true,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Base URL all API paths are joined onto, e.g. `https://host:8400/`.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        let scheme = if self.use_ssl { "https" } else { "http" };
        Url::parse(&format!("{}://{}:{}/", scheme, self.host, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Job launch parameters.
#[derive(Debug, Clone, Default)]
pub struct JobConfig {
    /// Client (machine) to back up.
    pub client: String,

    /// Backup set name.
    pub backup_set: String,

    /// Subclient name; the server's default scope when absent.
    pub subclient: Option<String>,
}

/// Polling configuration.
#[derive(Debug, Clone)]
pub struct PollingConfig {
    /// Delay between status checks in seconds.
    pub check_interval_secs: u64,

    /// Maximum time to wait for a terminal state in seconds.
    pub timeout_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 30,
            timeout_secs: 3600,
        }
    }
}

impl PollingConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Force debug logging for this crate.
    pub verbose: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            verbose: false,
        }
    }
}
