//! The structured error value.

use std::error::Error;
use std::fmt;

use crate::present::{Presenter, DEFAULT_TITLE};
use crate::render::{render, RenderMode};
use crate::severity::Severity;
use crate::site::CallerSite;

/// Caller data used when wrapping a failure without explicit context.
pub const WRAPPED_FAILURE_LABEL: &str = "wrapped platform failure";

/// Method name reported when none was stored.
pub const UNKNOWN_METHOD: &str = "Unknown";

/// An error value carrying severity, caller data and the site that raised it.
///
/// Structured errors are boundary values: they normalise heterogeneous
/// failures into one shape and keep no cause chain. All fields are fixed at
/// construction; out-of-range inputs are clamped rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredError {
    message: String,
    caller_data: String,
    severity: Severity,
    method_name: String,
    file_name: String,
    line_number: u32,
    suppress_logging: bool,
}

impl StructuredError {
    /// Creates a structured error from a message.
    ///
    /// # Arguments
    /// - `message`: the failure description, stored verbatim
    /// - `severity`: clamped into `[1, 100]`
    /// - `caller_data`: free-form context from the raising code, may be empty
    /// - `site`: where the error was raised, usually [`caller_site!`](crate::caller_site)
    pub fn new(
        message: impl Into<String>,
        severity: i64,
        caller_data: impl Into<String>,
        site: CallerSite,
    ) -> Self {
        let mut err = Self {
            message: message.into(),
            caller_data: String::new(),
            severity: Severity::MIN,
            method_name: String::new(),
            file_name: String::new(),
            line_number: 0,
            suppress_logging: false,
        };
        err.set_caller_data(caller_data);
        err.set_severity(severity);
        err.set_method_name(site.method);
        err.set_file_name(site.file);
        err.set_line_number(site.line);
        err
    }

    /// Wraps an existing failure, adopting its message verbatim.
    ///
    /// The failure's own `source()` chain is not walked or kept. When
    /// `caller_data` is `None`, [`WRAPPED_FAILURE_LABEL`] is used.
    pub fn from_failure<E>(
        failure: &E,
        severity: i64,
        caller_data: Option<&str>,
        site: CallerSite,
    ) -> Self
    where
        E: Error + ?Sized,
    {
        Self::new(
            failure.to_string(),
            severity,
            caller_data.unwrap_or(WRAPPED_FAILURE_LABEL),
            site,
        )
    }

    /// Marks this error as expected, so logging collaborators skip it.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.suppress_logging = true;
        self
    }

    fn set_caller_data(&mut self, caller_data: impl Into<String>) {
        self.caller_data = caller_data.into();
    }

    fn set_severity(&mut self, severity: i64) {
        self.severity = Severity::new(severity);
    }

    fn set_method_name(&mut self, method_name: impl Into<String>) {
        self.method_name = method_name.into();
    }

    fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
    }

    fn set_line_number(&mut self, line_number: i64) {
        self.line_number = u32::try_from(line_number.max(0)).unwrap_or(u32::MAX);
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn caller_data(&self) -> &str {
        &self.caller_data
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The raising function's name, or `"Unknown"` when none was stored.
    #[must_use]
    pub fn method_name(&self) -> &str {
        if self.method_name.is_empty() {
            UNKNOWN_METHOD
        } else {
            &self.method_name
        }
    }

    /// Whether a non-empty method name was stored.
    #[must_use]
    pub fn has_method_name(&self) -> bool {
        !self.method_name.is_empty()
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Whether automatic logging of this occurrence should be skipped.
    #[must_use]
    pub fn suppress_logging(&self) -> bool {
        self.suppress_logging
    }

    /// Renders this error under `mode`. See [`render`].
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        render(self, mode)
    }

    /// Hands the rendered error to `presenter`.
    ///
    /// An empty `title` is replaced by [`DEFAULT_TITLE`]. Blocks for as long as
    /// the presenter does.
    pub fn show(&self, presenter: &dyn Presenter, title: &str, mode: RenderMode) {
        let title = if title.is_empty() { DEFAULT_TITLE } else { title };
        presenter.present(title, &self.render(mode));
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderMode::for_build()))
    }
}

impl Error for StructuredError {}
