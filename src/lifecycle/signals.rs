//! OS signal handling.
//!
//! # Responsibilities
//! - Listen for Ctrl+C (SIGINT)
//! - Translate it into a shutdown broadcast
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Cancellation is a control-plane event, not a job state

use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers `shutdown` when the operator presses Ctrl+C.
pub fn spawn_interrupt_listener(shutdown: &Shutdown) -> JoinHandle<()> {
    let tx = shutdown.sender();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::warn!("Interrupt received, cancelling");
                let _ = tx.send(());
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            }
        }
    })
}
