//! Human-readable rendering of structured errors.
//!
//! Release builds expose only the bare message; debug builds prefix it with
//! caller-site identity and caller data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::structured::StructuredError;

/// Selects how much of a structured error is surfaced by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Caller-site identity and caller data are included.
    Debug,
    /// Only the message is rendered.
    Release,
}

impl RenderMode {
    /// The mode matching how this crate was compiled (`debug_assertions`).
    #[must_use]
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::for_build()
    }
}

impl FromStr for RenderMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "dev" => Ok(Self::Debug),
            "release" | "prod" => Ok(Self::Release),
            _ => Err(CoreError::InvalidRenderMode { value: s.to_owned() }),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => f.write_str("debug"),
            Self::Release => f.write_str("release"),
        }
    }
}

/// Renders `error` under `mode`.
///
/// In debug mode the first matching case wins:
/// 1. no method name: `message` or `message: callerData`
/// 2. no file name: `method() @line: message` or `method() @line: callerData - message`
/// 3. otherwise: `method() in "file" @(line): message` or
///    `method() in "file" @line: callerData - message`
///
/// The method-name check uses the stored value, so an explicitly empty name
/// takes the first case even though [`StructuredError::method_name`] reads
/// as `"Unknown"`.
#[must_use]
pub fn render(error: &StructuredError, mode: RenderMode) -> String {
    let message = error.message();
    if mode == RenderMode::Release {
        return message.to_owned();
    }

    let data = error.caller_data();
    if !error.has_method_name() {
        return if data.is_empty() { message.to_owned() } else { format!("{message}: {data}") };
    }

    let method = error.method_name();
    let file = error.file_name();
    let line = error.line_number();
    match (file.is_empty(), data.is_empty()) {
        (true, true) => format!("{method}() @{line}: {message}"),
        (true, false) => format!("{method}() @{line}: {data} - {message}"),
        (false, true) => format!("{method}() in \"{file}\" @({line}): {message}"),
        (false, false) => format!("{method}() in \"{file}\" @{line}: {data} - {message}"),
    }
}
