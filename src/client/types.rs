//! Wire types for the backup-management REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Job type submitted with every launch request.
pub const BACKUP_JOB_TYPE: &str = "BACKUP";

/// Server-assigned job identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobHandle(pub i64);

impl JobHandle {
    /// Sentinel meaning "no job was created".
    pub const NONE: JobHandle = JobHandle(-1);

    /// Whether this handle names a job the server actually issued.
    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for JobHandle {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for JobHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `POST /Login` body.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /Login` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub token: Option<String>,
}

/// `POST /Backup` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRequest<'a> {
    pub client_name: &'a str,
    pub backup_set_name: &'a str,
    /// Empty string selects the server's default subclient scope.
    pub subclient_name: &'a str,
    pub job_type: &'static str,
}

/// `POST /Backup` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupResponse {
    #[serde(default)]
    pub job_id: Option<i64>,
}

/// `GET /Job/{jobId}` response: one snapshot of a job.
///
/// Timing and counter fields are kept as raw JSON values because servers
/// report them as numbers or preformatted strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_time: Option<Value>,
    #[serde(default)]
    pub end_time: Option<Value>,
    #[serde(default)]
    pub duration: Option<Value>,
    #[serde(default)]
    pub files_processed: Option<Value>,
    #[serde(default)]
    pub bytes_processed: Option<Value>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl JobStatus {
    /// True when the server reported none of the status fields.
    pub fn is_empty(&self) -> bool {
        *self == JobStatus::default()
    }

    /// Raw state string, `UNKNOWN` when the server omitted it.
    pub fn state(&self) -> &str {
        self.status.as_deref().unwrap_or("UNKNOWN")
    }
}
