//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//!
//! A run-scoped span carries the run id through every event.
//! ```

pub mod logging;
