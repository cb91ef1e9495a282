//! Job lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! JobHandle (from launch)
//!     → poller.rs (elapsed check → status query → classify → sleep)
//!     → state.rs (JobState classification of each raw status string)
//!     → PollOutcome (Succeeded | Failed | TimedOut | StatusUnavailable)
//! ```
//!
//! # Design Decisions
//! - One poller per job handle; no state shared between pollers
//! - Fail fast: a failed status query ends the wait
//! - Unknown server states keep polling rather than guessing an outcome

pub mod poller;
pub mod state;

pub use poller::{Cancelled, JobPoller};
pub use state::{JobState, PollOutcome, PollPhase};
