//! Structured error values for uniform logging and display.
//!
//! A [`StructuredError`] carries a message, a clamped [`Severity`], free-form
//! caller data and the [`CallerSite`] that raised it. Rendering depends on an
//! explicit [`RenderMode`]; presentation goes through an injected
//! [`Presenter`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod present;
pub mod render;
pub mod severity;
pub mod site;
pub mod structured;

pub use config::DisplayConfig;
pub use error::CoreError;
pub use present::{Presenter, DEFAULT_TITLE};
pub use render::{render, RenderMode};
pub use severity::Severity;
pub use site::CallerSite;
pub use structured::{StructuredError, UNKNOWN_METHOD, WRAPPED_FAILURE_LABEL};
