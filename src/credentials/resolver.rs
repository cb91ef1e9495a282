//! Credential precedence chain.
//!
//! Each field is resolved on its own, highest source first:
//!
//! ```text
//! explicit argument → environment variable → credentials file → prompt
//! ```
//!
//! so a username from the environment can pair with a prompted password.
//! Empty strings count as absent at every layer.

use crate::config::loader::non_empty;
use crate::config::FileCredentials;
use crate::credentials::prompt::CredentialPrompt;
use crate::credentials::{CredentialError, Credentials};

/// Environment variable holding the fallback username.
pub const USERNAME_ENV: &str = "COMMVAULT_USERNAME";

/// Environment variable holding the fallback password.
pub const PASSWORD_ENV: &str = "COMMVAULT_PASSWORD";

/// Every non-interactive place a credential may come from.
#[derive(Debug, Clone, Default)]
pub struct CredentialSources {
    pub cli_username: Option<String>,
    pub cli_password: Option<String>,
    pub env_username: Option<String>,
    pub env_password: Option<String>,
    pub file: FileCredentials,
}

impl CredentialSources {
    /// Combine explicit arguments and file values with the process environment.
    pub fn from_env(
        cli_username: Option<String>,
        cli_password: Option<String>,
        file: FileCredentials,
    ) -> Self {
        Self {
            cli_username,
            cli_password,
            env_username: std::env::var(USERNAME_ENV).ok(),
            env_password: std::env::var(PASSWORD_ENV).ok(),
            file,
        }
    }
}

/// Where a resolved field came from. Logged, never the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialOrigin {
    Argument,
    Environment,
    File,
    Prompt,
}

impl std::fmt::Display for CredentialOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CredentialOrigin::Argument => "argument",
            CredentialOrigin::Environment => "environment",
            CredentialOrigin::File => "file",
            CredentialOrigin::Prompt => "prompt",
        };
        f.write_str(name)
    }
}

fn pick(
    candidates: [(Option<String>, CredentialOrigin); 3],
) -> Option<(String, CredentialOrigin)> {
    candidates
        .into_iter()
        .find_map(|(value, origin)| non_empty(value).map(|v| (v, origin)))
}

/// Resolve a username/password pair.
///
/// The prompt is consulted only for fields no other source supplied.
pub fn resolve(
    sources: CredentialSources,
    prompt: &dyn CredentialPrompt,
) -> Result<Credentials, CredentialError> {
    let CredentialSources {
        cli_username,
        cli_password,
        env_username,
        env_password,
        file,
    } = sources;

    let (username, user_origin) = match pick([
        (cli_username, CredentialOrigin::Argument),
        (env_username, CredentialOrigin::Environment),
        (file.username, CredentialOrigin::File),
    ]) {
        Some(found) => found,
        None => (prompt.prompt_username()?, CredentialOrigin::Prompt),
    };

    let (password, pass_origin) = match pick([
        (cli_password, CredentialOrigin::Argument),
        (env_password, CredentialOrigin::Environment),
        (file.password, CredentialOrigin::File),
    ]) {
        Some(found) => found,
        None => (prompt.prompt_password()?, CredentialOrigin::Prompt),
    };

    tracing::debug!(
        username_source = %user_origin,
        password_source = %pass_origin,
        "Credentials resolved"
    );

    Ok(Credentials::new(username, password))
}
