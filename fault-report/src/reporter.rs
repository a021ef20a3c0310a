//! Logging collaborator for structured errors.
//!
//! The core never logs. [`Reporter`] is the component that does, emitting one
//! `tracing` event per reported error unless the error asked to be skipped.

use fault_core::{DisplayConfig, Presenter, Severity, StructuredError};
use tracing::{debug, error, info, trace, warn, Level};

/// What [`Reporter::report`] did with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// An event was emitted at this level.
    Logged(Level),
    /// The error had `suppress_logging` set.
    Suppressed,
    /// The error's severity was below the configured threshold.
    BelowThreshold,
}

/// Maps a severity to the tracing level its event is emitted at.
///
/// `80..=100` error, `50..80` warn, `20..50` info, below that debug.
#[must_use]
pub fn level_for(severity: Severity) -> Level {
    match severity.value() {
        80..=u8::MAX => Level::ERROR,
        50..=79 => Level::WARN,
        20..=49 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Logs and presents structured errors according to a [`DisplayConfig`].
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: DisplayConfig,
}

impl Reporter {
    /// Create a reporter with the given configuration.
    #[must_use]
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Logs `err` unless it is suppressed or below the threshold.
    ///
    /// The event message is the rendering under the configured mode; the
    /// caller-site fields are always attached as structured fields.
    pub fn report(&self, err: &StructuredError) -> Disposition {
        if err.suppress_logging() {
            trace!(severity = err.severity().value(), "structured error not logged: suppressed");
            return Disposition::Suppressed;
        }
        if err.severity() < self.config.log_threshold {
            trace!(
                severity = err.severity().value(),
                threshold = self.config.log_threshold.value(),
                "structured error not logged: below threshold"
            );
            return Disposition::BelowThreshold;
        }

        let level = level_for(err.severity());
        let rendered = err.render(self.config.mode);
        macro_rules! emit {
            ($event:ident) => {
                $event!(
                    severity = err.severity().value(),
                    method = err.method_name(),
                    file = err.file_name(),
                    line = err.line_number(),
                    caller_data = err.caller_data(),
                    "{}",
                    rendered
                )
            };
        }
        if level == Level::ERROR {
            emit!(error);
        } else if level == Level::WARN {
            emit!(warn);
        } else if level == Level::INFO {
            emit!(info);
        } else {
            emit!(debug);
        }
        Disposition::Logged(level)
    }

    /// Reports `err`, then hands it to `presenter`.
    ///
    /// An empty `title` falls back to the configured default title.
    pub fn report_and_show(
        &self,
        err: &StructuredError,
        presenter: &dyn Presenter,
        title: &str,
    ) -> Disposition {
        let disposition = self.report(err);
        let title = if title.is_empty() { self.config.default_title.as_str() } else { title };
        err.show(presenter, title, self.config.mode);
        disposition
    }
}
