//! Credentials file loading from disk.
//!
//! The file is either a small TOML document:
//!
//! ```toml
//! [authentication]
//! username = "admin"
//! password = "secret"
//! ```
//!
//! or the INI form older deployments keep as `auth.conf`:
//!
//! ```ini
//! [Authentication]
//! username = admin
//! password = secret
//! ```
//!
//! TOML is tried first. INI section and key names are case-insensitive.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use configparser::ini::Ini;
use serde::Deserialize;
use thiserror::Error;

/// INI section holding the credentials; `Ini::new` lowercases names.
const INI_SECTION: &str = "authentication";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error in {}: not valid TOML ({toml_error}) or INI ({ini_error})", path.display())]
    Parse {
        path: PathBuf,
        toml_error: toml::de::Error,
        ini_error: String,
    },
}

/// Username/password fallback values read from a credentials file.
///
/// Blank entries are normalized to `None`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FileCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for FileCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Default, Deserialize)]
struct CredentialsFile {
    #[serde(default, alias = "Authentication")]
    authentication: AuthenticationSection,
}

#[derive(Debug, Default, Deserialize)]
struct AuthenticationSection {
    username: Option<String>,
    password: Option<String>,
}

/// Load fallback credentials from a TOML or INI file.
///
/// A path that does not exist yields empty credentials; a file that exists
/// but cannot be read or parsed is an error.
pub fn load_credentials_file(path: &Path) -> Result<FileCredentials, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Credentials file not found, skipping");
        return Ok(FileCredentials::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_credentials(&content).map_err(|(toml_error, ini_error)| ConfigError::Parse {
        path: path.to_path_buf(),
        toml_error,
        ini_error,
    })
}

fn parse_credentials(content: &str) -> Result<FileCredentials, (toml::de::Error, String)> {
    match parse_toml(content) {
        Ok(creds) => Ok(creds),
        Err(toml_err) => parse_ini(content).map_err(|ini_err| (toml_err, ini_err)),
    }
}

fn parse_toml(content: &str) -> Result<FileCredentials, toml::de::Error> {
    let file: CredentialsFile = toml::from_str(content)?;
    Ok(FileCredentials {
        username: non_empty(file.authentication.username),
        password: non_empty(file.authentication.password),
    })
}

fn parse_ini(content: &str) -> Result<FileCredentials, String> {
    let mut ini = Ini::new();
    ini.read(content.to_string())?;
    Ok(FileCredentials {
        username: non_empty(ini.get(INI_SECTION, "username")),
        password: non_empty(ini.get(INI_SECTION, "password")),
    })
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
