//! Host-side collaborators for structured errors.
//!
//! Provides the logging collaborator that honours `suppress_logging`, concrete
//! presenters for terminals and tracing sinks, and the argument parsing used
//! by the `fault-report` binary.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod cli;
pub mod error;
pub mod presenter;
pub mod reporter;

pub use error::ReportError;
pub use presenter::{ConsolePresenter, TracingPresenter};
pub use reporter::{level_for, Disposition, Reporter};
