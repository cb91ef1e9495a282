//! Job state classification and poll outcomes.

use std::time::Duration;

use crate::client::{ApiError, JobStatus};
use crate::error::ExitStatus;

/// Server-reported job state, reduced to what the poller acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Known in-flight state.
    Running,
    /// Finished successfully (terminal).
    Succeeded,
    /// Finished unsuccessfully (terminal).
    Failed,
    /// A state this client does not recognize; treated as still in flight.
    Unknown,
}

impl JobState {
    /// Map a raw server state string. Matching is exact.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "COMPLETED" | "SUCCESS" => JobState::Succeeded,
            "FAILED" | "ERROR" | "ABORTED" => JobState::Failed,
            "RUNNING" | "PENDING" | "WAITING" | "QUEUED" | "SUSPENDED" => JobState::Running,
            _ => JobState::Unknown,
        }
    }
}

/// Non-terminal phases of the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// Job launched, no status requested yet.
    Pending,
    /// At least one non-terminal status observed.
    Polling,
}

impl std::fmt::Display for PollPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollPhase::Pending => f.write_str("pending"),
            PollPhase::Polling => f.write_str("polling"),
        }
    }
}

/// Terminal state of the poller.
#[derive(Debug)]
pub enum PollOutcome {
    Succeeded(JobStatus),
    Failed(JobStatus),
    /// The wait exceeded the configured timeout.
    TimedOut { elapsed: Duration, polls: u32 },
    /// A status query failed; the job outcome is unknown.
    StatusUnavailable(ApiError),
}

impl PollOutcome {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            PollOutcome::Succeeded(_) => ExitStatus::Success,
            PollOutcome::Failed(_) => ExitStatus::JobFailed,
            PollOutcome::TimedOut { .. } => ExitStatus::TimedOut,
            PollOutcome::StatusUnavailable(_) => ExitStatus::StatusCheckFailed,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_status().code()
    }

    /// Last status snapshot, present only for server-confirmed outcomes.
    pub fn final_status(&self) -> Option<&JobStatus> {
        match self {
            PollOutcome::Succeeded(status) | PollOutcome::Failed(status) => Some(status),
            PollOutcome::TimedOut { .. } | PollOutcome::StatusUnavailable(_) => None,
        }
    }

    /// Short outcome label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            PollOutcome::Succeeded(_) => "SUCCEEDED",
            PollOutcome::Failed(_) => "FAILED",
            PollOutcome::TimedOut { .. } => "TIMED_OUT",
            PollOutcome::StatusUnavailable(_) => "STATUS_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_terminal_states() {
        assert_eq!(JobState::classify("COMPLETED"), JobState::Succeeded);
        assert_eq!(JobState::classify("SUCCESS"), JobState::Succeeded);
        assert_eq!(JobState::classify("FAILED"), JobState::Failed);
        assert_eq!(JobState::classify("ERROR"), JobState::Failed);
        assert_eq!(JobState::classify("ABORTED"), JobState::Failed);
    }

    #[test]
    fn test_classify_non_terminal_states() {
        assert_eq!(JobState::classify("RUNNING"), JobState::Running);
        assert_eq!(JobState::classify("QUEUED"), JobState::Running);
        assert_eq!(JobState::classify("UNKNOWN"), JobState::Unknown);
        assert_eq!(JobState::classify("Completed w/ one or more errors"), JobState::Unknown);
        assert_eq!(JobState::classify("completed"), JobState::Unknown);
        assert_eq!(JobState::classify(""), JobState::Unknown);
    }

    #[test]
    fn test_exit_codes() {
        let ok = PollOutcome::Succeeded(JobStatus::default());
        let failed = PollOutcome::Failed(JobStatus::default());
        let timed_out = PollOutcome::TimedOut {
            elapsed: Duration::from_secs(10),
            polls: 3,
        };
        let unavailable = PollOutcome::StatusUnavailable(ApiError::Status {
            endpoint: "Job",
            status: 500,
        });

        assert_eq!(ok.exit_code(), 0);
        assert_eq!(failed.exit_code(), 2);
        assert_eq!(timed_out.exit_code(), 3);
        assert_eq!(unavailable.exit_code(), 4);

        assert!(ok.final_status().is_some());
        assert!(timed_out.final_status().is_none());
        assert!(unavailable.final_status().is_none());
    }
}
