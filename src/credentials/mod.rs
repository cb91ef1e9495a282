//! Credential resolution subsystem.
//!
//! # Data Flow
//! ```text
//! --username/--password ─┐
//! COMMVAULT_* env vars ──┼─→ resolver.rs (per-field precedence)
//! credentials file ──────┘          │
//!                                   ▼ (only for missing fields)
//!                            prompt.rs (CredentialPrompt)
//!                                   │
//!                                   ▼
//!                              Credentials
//! ```

pub mod prompt;
pub mod resolver;

use thiserror::Error;

pub use prompt::{CredentialPrompt, NoPrompt, TerminalPrompt};
pub use resolver::{resolve, CredentialSources, PASSWORD_ENV, USERNAME_ENV};

/// Errors raised while obtaining credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// No source supplied the field and prompting is not possible here.
    #[error("{field} not provided and interactive prompt is unavailable")]
    PromptUnavailable { field: &'static str },

    /// Reading from the terminal failed.
    #[error("failed to read credentials from terminal: {0}")]
    Prompt(#[source] std::io::Error),
}

/// A resolved username/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
