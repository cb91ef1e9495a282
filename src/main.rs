//! CommVault backup controller.
//!
//! Authenticates against a CommVault server, launches one backup job,
//! waits for it to finish and prints an execution report. The process exit
//! code reflects the outcome (see `--help`).

use std::process;

use clap::Parser;

use commvault_backup::app;
use commvault_backup::cli::Cli;
use commvault_backup::credentials::TerminalPrompt;
use commvault_backup::error::{ControllerError, ExitStatus};
use commvault_backup::lifecycle::{signals, Shutdown};
use commvault_backup::observability::logging;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // clap's usage error code (2) would read as a job failure.
            let code = if e.exit_code() == 0 {
                ExitStatus::Success
            } else {
                ExitStatus::InvalidInput
            };
            process::exit(code.code());
        }
    };

    let config = cli.controller_config();
    logging::init(&config.observability);

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        use_ssl = config.server.use_ssl,
        client = %config.job.client,
        backup_set = %config.job.backup_set,
        "commvault-backup v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let shutdown = Shutdown::new();
    let _listener = signals::spawn_interrupt_listener(&shutdown);
    let mut shutdown_rx = shutdown.subscribe();

    let result = match app::credential_sources(
        cli.username.clone(),
        cli.password.clone(),
        cli.config_file.as_deref(),
    ) {
        Ok(sources) => app::run(&config, sources, TerminalPrompt, &mut shutdown_rx).await,
        Err(e) => Err(e),
    };

    // process::exit rather than returning: a cancelled prompt leaves a
    // blocking thread the runtime would otherwise wait on.
    match result {
        Ok(report) => {
            println!("{}", report.text);
            process::exit(report.exit_status().code());
        }
        Err(ControllerError::Cancelled) => {
            eprintln!("\nOperation cancelled by user");
            process::exit(ExitStatus::Cancelled.code());
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_status().code());
        }
    }
}
