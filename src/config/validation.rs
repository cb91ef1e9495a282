//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (clap and serde handle syntactic)
//! - Validate value ranges (intervals > 0, port valid)
//! - Reject blank identifiers the server would refuse anyway
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ControllerConfig → Result<(), Vec<ValidationError>>
//! - Runs before any network traffic

use thiserror::Error;

use crate::config::schema::ControllerConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server host must not be empty")]
    EmptyHost,

    #[error("server port must not be 0")]
    ZeroPort,

    #[error("client name must not be empty")]
    EmptyClient,

    #[error("backup set name must not be empty")]
    EmptyBackupSet,

    #[error("{field} must be greater than 0")]
    ZeroDuration { field: &'static str },

    #[error("invalid server address: {0}")]
    InvalidAddress(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ControllerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    } else if let Err(e) = config.server.base_url() {
        errors.push(ValidationError::InvalidAddress(e.to_string()));
    }
    if config.server.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration {
            field: "request timeout",
        });
    }

    if config.job.client.trim().is_empty() {
        errors.push(ValidationError::EmptyClient);
    }
    if config.job.backup_set.trim().is_empty() {
        errors.push(ValidationError::EmptyBackupSet);
    }

    if config.polling.check_interval_secs == 0 {
        errors.push(ValidationError::ZeroDuration {
            field: "check interval",
        });
    }
    if config.polling.timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration { field: "timeout" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ControllerConfig {
        let mut config = ControllerConfig::default();
        config.server.host = "cv01".into();
        config.job.client = "SERVER01".into();
        config.job.backup_set = "DefaultBackupSet".into();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = valid_config();
        config.server.host = "  ".into();
        config.job.backup_set.clear();
        config.polling.check_interval_secs = 0;
        config.polling.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyHost));
        assert!(errors.contains(&ValidationError::EmptyBackupSet));
        assert!(errors.contains(&ValidationError::ZeroDuration {
            field: "check interval"
        }));
    }

    #[test]
    fn test_host_with_spaces_is_invalid_address() {
        let mut config = valid_config();
        config.server.host = "bad host".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidAddress(_)));
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::ZeroDuration { field: "timeout" };
        assert_eq!(err.to_string(), "timeout must be greater than 0");
    }
}
