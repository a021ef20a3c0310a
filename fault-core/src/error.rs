//! Error types for the core crate.

/// Errors produced by the `fault-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A render mode name was neither `debug` nor `release`.
    #[error("invalid render mode '{value}': expected 'debug' or 'release'")]
    InvalidRenderMode { value: String },

    /// A log threshold was not an integer.
    #[error("invalid log threshold '{value}': expected an integer")]
    InvalidThreshold { value: String },
}
