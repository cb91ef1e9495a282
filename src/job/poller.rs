//! Job completion polling.
//!
//! Each iteration runs, in this order:
//!
//! ```text
//! elapsed > timeout?  ── yes ──→ TimedOut
//!        │ no
//!        ▼
//! query status ── error ──→ StatusUnavailable
//!        │
//!        ▼
//! classify ── Succeeded / Failed ──→ terminal
//!        │ Running / Unknown
//!        ▼
//! sleep(check_interval) ──→ next iteration
//! ```
//!
//! The elapsed check precedes the query, so at most `ceil(timeout / interval) + 1`
//! queries are issued. A failed query is not retried.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{sleep, Instant};

use crate::client::{JobHandle, StatusSource};
use crate::config::PollingConfig;
use crate::job::state::{JobState, PollOutcome, PollPhase};
use crate::lifecycle::shutdown::wait_for_shutdown;

/// The wait was interrupted by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Waits for a single job to reach a terminal state.
#[derive(Debug, Clone)]
pub struct JobPoller {
    check_interval: Duration,
    timeout: Duration,
}

impl JobPoller {
    pub fn new(config: &PollingConfig) -> Self {
        Self::with_durations(config.check_interval(), config.timeout())
    }

    pub fn with_durations(check_interval: Duration, timeout: Duration) -> Self {
        Self {
            check_interval,
            timeout,
        }
    }

    /// Poll `job` until it finishes, the timeout passes, a query fails, or
    /// a shutdown signal arrives.
    pub async fn wait<S: StatusSource>(
        &self,
        source: &S,
        job: JobHandle,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> Result<PollOutcome, Cancelled> {
        let started = Instant::now();
        let mut phase = PollPhase::Pending;
        let mut polls: u32 = 0;

        tracing::info!(
            job_id = %job,
            check_interval_secs = self.check_interval.as_secs_f64(),
            timeout_secs = self.timeout.as_secs_f64(),
            "Waiting for job completion"
        );

        loop {
            let elapsed = started.elapsed();
            if elapsed > self.timeout {
                tracing::error!(
                    job_id = %job,
                    timeout_secs = self.timeout.as_secs(),
                    polls,
                    "Job timed out"
                );
                return Ok(PollOutcome::TimedOut { elapsed, polls });
            }

            let result = tokio::select! {
                result = source.job_status(job) => result,
                _ = wait_for_shutdown(shutdown) => return Err(Cancelled),
            };
            polls += 1;

            let status = match result {
                Ok(status) => status,
                Err(e) => {
                    tracing::error!(job_id = %job, error = %e, "Failed to get job status");
                    return Ok(PollOutcome::StatusUnavailable(e));
                }
            };

            let state = JobState::classify(status.state());
            tracing::info!(job_id = %job, status = %status.state(), "Job status");

            match state {
                JobState::Succeeded => {
                    tracing::info!(job_id = %job, "Job completed successfully");
                    return Ok(PollOutcome::Succeeded(status));
                }
                JobState::Failed => {
                    tracing::error!(job_id = %job, status = %status.state(), "Job failed");
                    return Ok(PollOutcome::Failed(status));
                }
                JobState::Unknown => {
                    tracing::warn!(job_id = %job, status = %status.state(), "Unrecognized job state, still waiting");
                }
                JobState::Running => {}
            }

            if phase == PollPhase::Pending {
                phase = PollPhase::Polling;
                tracing::debug!(job_id = %job, phase = %phase, "Poller state change");
            }

            tokio::select! {
                _ = sleep(self.check_interval) => {}
                _ = wait_for_shutdown(shutdown) => return Err(Cancelled),
            }
        }
    }
}
