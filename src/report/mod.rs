//! Execution report rendering.
//!
//! Rendering is pure: the wall-clock stamp is passed in so output is
//! deterministic for a given input.

use chrono::Local;
use serde_json::Value;

use crate::client::{JobHandle, JobStatus};

const RULE: &str = "============================================================";

/// Placeholder for a field the server did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for an absent error message.
pub const NO_ERROR: &str = "None";

/// Local time a report was generated, formatted `%Y-%m-%d %H:%M:%S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTimestamp(String);

impl ReportTimestamp {
    pub fn now() -> Self {
        Self(Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }

    pub fn fixed(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) if s.is_empty() => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render the final report for a job.
///
/// `outcome` is the poller's verdict; `status` is the last server snapshot,
/// absent when the wait ended without one.
pub fn render(
    job: JobHandle,
    outcome: &str,
    status: Option<&JobStatus>,
    timestamp: &ReportTimestamp,
) -> String {
    let empty = JobStatus::default();
    let status = status.unwrap_or(&empty);

    let error_message = status
        .error_message
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(NO_ERROR);

    let lines = [
        RULE.to_string(),
        "COMMVAULT BACKUP EXECUTION REPORT".to_string(),
        RULE.to_string(),
        format!("Timestamp: {}", timestamp.as_str()),
        format!("Job ID: {}", job),
        format!("Outcome: {}", outcome),
        format!("Status: {}", status.status.as_deref().unwrap_or(NOT_AVAILABLE)),
        format!("Start Time: {}", field(status.start_time.as_ref())),
        format!("End Time: {}", field(status.end_time.as_ref())),
        format!("Duration: {}", field(status.duration.as_ref())),
        format!("Files Processed: {}", field(status.files_processed.as_ref())),
        format!("Bytes Processed: {}", field(status.bytes_processed.as_ref())),
        format!("Error Message: {}", error_message),
        RULE.to_string(),
    ];

    lines.join("\n")
}
