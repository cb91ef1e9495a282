//! Interactive credential prompting.
//!
//! Prompting is the last resort of credential resolution. It sits behind a
//! trait so headless callers can refuse (or script) it instead of blocking
//! on a terminal that is not there.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::credentials::CredentialError;

/// Source of credentials typed by an operator.
pub trait CredentialPrompt {
    /// Ask for a username (echoed input).
    fn prompt_username(&self) -> Result<String, CredentialError>;

    /// Ask for a password (hidden input).
    fn prompt_password(&self) -> Result<String, CredentialError>;
}

/// Prompts on the controlling terminal.
///
/// Refuses to prompt when stdin is not a terminal (cron, CI, pipes).
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn ensure_interactive(field: &'static str) -> Result<(), CredentialError> {
        if io::stdin().is_terminal() {
            Ok(())
        } else {
            Err(CredentialError::PromptUnavailable { field })
        }
    }
}

impl CredentialPrompt for TerminalPrompt {
    fn prompt_username(&self) -> Result<String, CredentialError> {
        Self::ensure_interactive("username")?;

        let mut stderr = io::stderr();
        write!(stderr, "Enter CommVault username: ").map_err(CredentialError::Prompt)?;
        stderr.flush().map_err(CredentialError::Prompt)?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(CredentialError::Prompt)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_password(&self) -> Result<String, CredentialError> {
        Self::ensure_interactive("password")?;
        rpassword::prompt_password("Enter CommVault password: ").map_err(CredentialError::Prompt)
    }
}

/// Never prompts; for unattended runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl CredentialPrompt for NoPrompt {
    fn prompt_username(&self) -> Result<String, CredentialError> {
        Err(CredentialError::PromptUnavailable { field: "username" })
    }

    fn prompt_password(&self) -> Result<String, CredentialError> {
        Err(CredentialError::PromptUnavailable { field: "password" })
    }
}
