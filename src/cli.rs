//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{ControllerConfig, JobConfig, ObservabilityConfig, PollingConfig, ServerConfig};

const AFTER_HELP: &str = "\
Environment Variables:
  COMMVAULT_USERNAME  CommVault username
  COMMVAULT_PASSWORD  CommVault password

Configuration File Format (auth.toml):
  [authentication]
  username = \"your_username\"
  password = \"your_password\"

Exit Codes:
  0  Success
  1  Authentication error
  2  Job launch or execution error
  3  Timeout error
  4  Status check error
  5  Invalid arguments or unexpected error
  6  Cancelled by user";

#[derive(Debug, Parser)]
#[command(name = "commvault-backup")]
#[command(version, about = "Launch a CommVault backup job and wait for it to finish", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// CommVault server hostname or IP address
    #[arg(long)]
    pub host: String,

    /// Client name to back up
    #[arg(long)]
    pub client: String,

    /// Backup set name
    #[arg(long)]
    pub backup_set: String,

    /// CommVault server port
    #[arg(long, default_value_t = 8400)]
    pub port: u16,

    /// Use SSL/TLS (`--use-ssl false` for plain HTTP)
    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub use_ssl: bool,

    /// Subclient name
    #[arg(long)]
    pub subclient: Option<String>,

    /// CommVault username
    #[arg(long)]
    pub username: Option<String>,

    /// CommVault password
    #[arg(long)]
    pub password: Option<String>,

    /// Credentials file path
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Status check interval in seconds
    #[arg(long, default_value_t = 30)]
    pub check_interval: u64,

    /// Maximum wait time in seconds
    #[arg(long, default_value_t = 3600)]
    pub timeout: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings for the run, without credentials.
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            server: ServerConfig {
                host: self.host.clone(),
                port: self.port,
                use_ssl: self.use_ssl,
                request_timeout_secs: self.request_timeout,
            },
            job: JobConfig {
                client: self.client.clone(),
                backup_set: self.backup_set.clone(),
                subclient: self.subclient.clone().filter(|s| !s.is_empty()),
            },
            polling: PollingConfig {
                check_interval_secs: self.check_interval,
                timeout_secs: self.timeout,
            },
            observability: ObservabilityConfig {
                verbose: self.verbose,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 7] = [
        "commvault-backup",
        "--host",
        "cv.example.com",
        "--client",
        "SERVER01",
        "--backup-set",
        "DefaultBackupSet",
    ];

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(REQUIRED).unwrap();
        let config = cli.controller_config();
        assert_eq!(config.server.port, 8400);
        assert!(config.server.use_ssl);
        assert_eq!(config.polling.check_interval_secs, 30);
        assert_eq!(config.polling.timeout_secs, 3600);
        assert!(config.job.subclient.is_none());
        assert!(!config.observability.verbose);
        assert!(cli.username.is_none());
        assert!(cli.config_file.is_none());
    }

    #[test]
    fn test_all_options() {
        let mut args = REQUIRED.to_vec();
        args.extend([
            "--port",
            "81",
            "--use-ssl",
            "false",
            "--subclient",
            "default",
            "--username",
            "admin",
            "--password",
            "secret",
            "--config-file",
            "auth.toml",
            "--check-interval",
            "60",
            "--timeout",
            "7200",
            "-v",
        ]);
        let cli = Cli::try_parse_from(args).unwrap();
        let config = cli.controller_config();
        assert_eq!(config.server.port, 81);
        assert!(!config.server.use_ssl);
        assert_eq!(config.job.subclient.as_deref(), Some("default"));
        assert_eq!(config.polling.check_interval_secs, 60);
        assert_eq!(config.polling.timeout_secs, 7200);
        assert!(config.observability.verbose);
        assert_eq!(cli.username.as_deref(), Some("admin"));
        assert_eq!(cli.config_file, Some(PathBuf::from("auth.toml")));
    }

    #[test]
    fn test_bare_use_ssl_flag() {
        let mut args = REQUIRED.to_vec();
        args.push("--use-ssl");
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.use_ssl);

        let mut args = vec!["commvault-backup", "--use-ssl"];
        args.extend_from_slice(&REQUIRED[1..]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.use_ssl);
        assert_eq!(cli.host, "cv.example.com");

        let mut args = REQUIRED.to_vec();
        args.extend(["--use-ssl", "false"]);
        assert!(!Cli::try_parse_from(args).unwrap().use_ssl);
    }

    #[test]
    fn test_missing_required_argument() {
        let result = Cli::try_parse_from(["commvault-backup", "--host", "cv"]);
        assert!(result.is_err());
    }
}
