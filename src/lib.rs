//! CommVault backup controller library.
//!
//! # Architecture Overview
//!
//! ```text
//!   credentials ──▶ client::Session ──▶ client::Session ──▶ job::JobPoller ──▶ report
//!   (resolver)      (authenticate)      (launch_backup)     (poll loop)       (render)
//!
//!   config · lifecycle (shutdown) · observability (logging) · error (exit codes)
//! ```

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod job;
pub mod lifecycle;
pub mod observability;
pub mod report;

pub use app::{run, RunReport};
pub use client::{JobHandle, JobStatus, Session};
pub use config::ControllerConfig;
pub use error::{ControllerError, ExitStatus};
pub use job::{JobPoller, JobState, PollOutcome};
pub use lifecycle::Shutdown;
