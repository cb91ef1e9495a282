//! Authenticated API session.
//!
//! # Responsibilities
//! - Exchange credentials for a bearer token (`POST /Login`)
//! - Launch a backup job (`POST /Backup`)
//! - Fetch job status snapshots (`GET /Job/{jobId}`)
//!
//! # Design Decisions
//! - One session per run, owned by the caller and passed by reference
//! - No retries anywhere: login is single-shot and launch is not idempotent
//! - Token is attached to every call after login; no refresh

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::client::types::{
    BackupRequest, BackupResponse, JobHandle, JobStatus, LoginRequest, LoginResponse,
    BACKUP_JOB_TYPE,
};
use crate::client::{ApiError, StatusSource};
use crate::config::{JobConfig, ServerConfig};
use crate::credentials::Credentials;

/// Connection to one backup-management server.
pub struct Session {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl Session {
    /// Create an unauthenticated session for the configured server.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|source| ApiError::Transport {
                endpoint: "client",
                source,
            })?;

        tracing::debug!(base_url = %base_url, "Session created");

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Log in and keep the returned bearer token for later calls.
    pub async fn authenticate(&mut self, credentials: &Credentials) -> Result<(), ApiError> {
        let url = self.base_url.join("Login")?;
        let body = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response: LoginResponse = self
            .send_json("Login", self.client.post(url).json(&body))
            .await?;

        if !response.is_authenticated {
            return Err(ApiError::Rejected);
        }
        let token = response
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)?;

        self.token = Some(token);
        tracing::info!(username = %credentials.username(), "Authentication successful");
        Ok(())
    }

    /// Submit a backup request. Never retried: a second submit could start a second job.
    pub async fn launch_backup(&self, job: &JobConfig) -> Result<JobHandle, ApiError> {
        let url = self.base_url.join("Backup")?;
        let body = BackupRequest {
            client_name: &job.client,
            backup_set_name: &job.backup_set,
            subclient_name: job.subclient.as_deref().unwrap_or(""),
            job_type: BACKUP_JOB_TYPE,
        };

        let request = self.authorized(self.client.post(url))?.json(&body);
        let response: BackupResponse = self.send_json("Backup", request).await?;

        let handle = response
            .job_id
            .map(JobHandle::from)
            .filter(|h| h.is_valid())
            .ok_or(ApiError::MissingJobId)?;

        tracing::info!(
            job_id = %handle,
            client = %job.client,
            backup_set = %job.backup_set,
            "Backup job launched"
        );
        Ok(handle)
    }

    /// Fetch a fresh status snapshot for a job. A snapshot with no fields is an error.
    pub async fn job_status(&self, job: JobHandle) -> Result<JobStatus, ApiError> {
        let url = self.base_url.join(&format!("Job/{}", job))?;
        let request = self.authorized(self.client.get(url))?;
        let status: JobStatus = self.send_json("Job", request).await?;
        if status.is_empty() {
            return Err(ApiError::EmptyStatus);
        }
        Ok(status)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        Ok(request.bearer_auth(token))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

impl StatusSource for Session {
    async fn job_status(&self, job: JobHandle) -> Result<JobStatus, ApiError> {
        Session::job_status(self, job).await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}
