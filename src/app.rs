//! Run orchestration.
//!
//! ```text
//! validate → credentials → Session::authenticate → launch_backup
//!          → JobPoller::wait → report::render
//! ```
//!
//! Every step is fail-fast. Everything after credential resolution races
//! the shutdown receiver so an interrupt ends the run promptly.

use std::path::Path;

use tokio::sync::broadcast;
use tracing::Instrument;
use uuid::Uuid;

use crate::client::{JobHandle, Session};
use crate::config::{load_credentials_file, validate_config, ControllerConfig, FileCredentials};
use crate::credentials::{resolve, CredentialPrompt, CredentialSources, Credentials};
use crate::error::{ControllerError, ControllerResult, ExitStatus};
use crate::job::{JobPoller, PollOutcome};
use crate::lifecycle::wait_for_shutdown;
use crate::report::{render, ReportTimestamp};

/// Result of a run that reached a poll outcome.
#[derive(Debug)]
pub struct RunReport {
    pub job: JobHandle,
    pub outcome: PollOutcome,
    /// Rendered report text.
    pub text: String,
}

impl RunReport {
    pub fn exit_status(&self) -> ExitStatus {
        self.outcome.exit_status()
    }
}

/// Gather non-interactive credential sources: arguments, environment, file.
pub fn credential_sources(
    username: Option<String>,
    password: Option<String>,
    config_file: Option<&Path>,
) -> ControllerResult<CredentialSources> {
    let file = match config_file {
        Some(path) => load_credentials_file(path)?,
        None => FileCredentials::default(),
    };
    Ok(CredentialSources::from_env(username, password, file))
}

/// Resolve credentials off the async runtime, abandoning a blocked prompt on shutdown.
pub async fn obtain_credentials<P>(
    sources: CredentialSources,
    prompt: P,
    shutdown: &mut broadcast::Receiver<()>,
) -> ControllerResult<Credentials>
where
    P: CredentialPrompt + Send + 'static,
{
    let task = tokio::task::spawn_blocking(move || resolve(sources, &prompt));
    tokio::select! {
        joined = task => match joined {
            Ok(result) => Ok(result?),
            Err(e) => Err(ControllerError::Unexpected(format!("credential prompt task failed: {}", e))),
        },
        _ = wait_for_shutdown(shutdown) => Err(ControllerError::Cancelled),
    }
}

/// Authenticate, launch, wait, and render.
pub async fn execute(
    config: &ControllerConfig,
    credentials: &Credentials,
    shutdown: &mut broadcast::Receiver<()>,
) -> ControllerResult<RunReport> {
    let mut session =
        Session::new(&config.server).map_err(|e| ControllerError::Unexpected(e.to_string()))?;

    tokio::select! {
        result = session.authenticate(credentials) => result.map_err(ControllerError::Auth)?,
        _ = wait_for_shutdown(shutdown) => return Err(ControllerError::Cancelled),
    }

    let job = tokio::select! {
        result = session.launch_backup(&config.job) => result.map_err(ControllerError::Launch)?,
        _ = wait_for_shutdown(shutdown) => return Err(ControllerError::Cancelled),
    };

    let poller = JobPoller::new(&config.polling);
    let outcome = poller
        .wait(&session, job, shutdown)
        .await
        .map_err(|_| ControllerError::Cancelled)?;

    let text = render(
        job,
        outcome.label(),
        outcome.final_status(),
        &ReportTimestamp::now(),
    );

    Ok(RunReport { job, outcome, text })
}

/// Full controller run for one job.
pub async fn run<P>(
    config: &ControllerConfig,
    sources: CredentialSources,
    prompt: P,
    shutdown: &mut broadcast::Receiver<()>,
) -> ControllerResult<RunReport>
where
    P: CredentialPrompt + Send + 'static,
{
    let span = tracing::info_span!("run", run_id = %Uuid::new_v4());

    async move {
        validate_config(config).map_err(ControllerError::Validation)?;
        let credentials = obtain_credentials(sources, prompt, shutdown).await?;
        let report = execute(config, &credentials, shutdown).await?;
        tracing::info!(
            job_id = %report.job,
            outcome = report.outcome.label(),
            exit_code = report.exit_status().code(),
            "Run finished"
        );
        Ok(report)
    }
    .instrument(span)
    .await
}
