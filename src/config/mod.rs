//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command-line arguments (clap)
//!     → schema.rs (ControllerConfig with defaults)
//!     → validation.rs (semantic checks)
//!     → ControllerConfig (validated, immutable)
//!     → borrowed by session, poller and logging
//!
//! --config-file path
//!     → loader.rs (read & deserialize [authentication])
//!     → FileCredentials (lowest non-interactive credential source)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once validated; one run, one config
//! - All fields have defaults matching the CLI defaults
//! - Validation separates syntactic (clap/serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_credentials_file, ConfigError, FileCredentials};
pub use schema::{ControllerConfig, JobConfig, ObservabilityConfig, PollingConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
