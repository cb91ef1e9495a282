//! Backup-management server client.
//!
//! # Data Flow
//! ```text
//! Credentials
//!     → session.rs authenticate (POST /Login → bearer token)
//!     → session.rs launch_backup (POST /Backup → JobHandle)
//!     → StatusSource::job_status (GET /Job/{id} → JobStatus), once per poll
//! ```

pub mod session;
pub mod types;

use thiserror::Error;

pub use session::Session;
pub use types::{JobHandle, JobStatus};

/// Errors from a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure.
    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success HTTP status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// Response body was not the expected JSON.
    #[error("{endpoint} returned an invalid body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid credentials")]
    Rejected,

    #[error("login succeeded but no token was returned")]
    MissingToken,

    #[error("job status response was empty")]
    EmptyStatus,

    #[error("backup response did not contain a job id")]
    MissingJobId,

    #[error("session is not authenticated")]
    NotAuthenticated,

    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Anything that can report the current status of a job.
///
/// The poller depends on this rather than on [`Session`] directly.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    async fn job_status(&self, job: JobHandle) -> Result<JobStatus, ApiError>;
}
