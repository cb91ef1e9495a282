//! Error taxonomy and process exit codes.

use thiserror::Error;

use crate::client::ApiError;
use crate::config::{ConfigError, ValidationError};
use crate::credentials::CredentialError;

/// Process exit status reported to the calling shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitStatus {
    Success = 0,
    AuthError = 1,
    /// Launch failure or a server-confirmed job failure.
    JobFailed = 2,
    TimedOut = 3,
    StatusCheckFailed = 4,
    /// Invalid arguments, configuration, or any unexpected error.
    InvalidInput = 5,
    Cancelled = 6,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Errors that end a run before a poll outcome exists.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid arguments: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("credentials error: {0}")]
    Credentials(#[from] CredentialError),

    #[error("authentication failed: {0}")]
    Auth(#[source] ApiError),

    #[error("failed to launch backup job: {0}")]
    Launch(#[source] ApiError),

    #[error("operation cancelled by user")]
    Cancelled,

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ControllerError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            ControllerError::Config(_)
            | ControllerError::Validation(_)
            | ControllerError::Credentials(_)
            | ControllerError::Unexpected(_) => ExitStatus::InvalidInput,
            ControllerError::Auth(_) => ExitStatus::AuthError,
            ControllerError::Launch(_) => ExitStatus::JobFailed,
            ControllerError::Cancelled => ExitStatus::Cancelled,
        }
    }
}

/// Result type for controller runs.
pub type ControllerResult<T> = Result<T, ControllerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::AuthError.code(), 1);
        assert_eq!(ExitStatus::JobFailed.code(), 2);
        assert_eq!(ExitStatus::TimedOut.code(), 3);
        assert_eq!(ExitStatus::StatusCheckFailed.code(), 4);
        assert_eq!(ExitStatus::InvalidInput.code(), 5);
        assert_eq!(ExitStatus::Cancelled.code(), 6);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            ControllerError::Auth(ApiError::Rejected).exit_status(),
            ExitStatus::AuthError
        );
        assert_eq!(
            ControllerError::Launch(ApiError::MissingJobId).exit_status(),
            ExitStatus::JobFailed
        );
        assert_eq!(
            ControllerError::Credentials(CredentialError::PromptUnavailable { field: "username" })
                .exit_status(),
            ExitStatus::InvalidInput
        );
        assert_eq!(ControllerError::Cancelled.exit_status(), ExitStatus::Cancelled);
    }

    #[test]
    fn test_error_display() {
        let err = ControllerError::Validation(vec![
            ValidationError::EmptyHost,
            ValidationError::EmptyClient,
        ]);
        assert_eq!(
            err.to_string(),
            "invalid arguments: server host must not be empty; client name must not be empty"
        );

        let err = ControllerError::Auth(ApiError::Status {
            endpoint: "Login",
            status: 401,
        });
        assert_eq!(err.to_string(), "authentication failed: Login returned HTTP 401");
    }
}
