//! Error types for the report crate.

use fault_core::CoreError;

/// Errors that can occur while setting up the reporter.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The display configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] CoreError),
}
