//! Concrete presentation surfaces for rendered errors.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use fault_core::Presenter;
use tracing::{error, warn};

/// Writes `"{title}: {body}"` lines to a terminal or any other writer.
///
/// Write failures are logged and swallowed; presentation never fails the caller.
#[derive(Debug)]
pub struct ConsolePresenter<W: Write> {
    out: Mutex<W>,
}

impl ConsolePresenter<io::Stderr> {
    /// A presenter writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// Create a presenter over `out`.
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn present(&self, title: &str, body: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{title}: {body}").and_then(|()| out.flush()) {
            warn!(error = %e, title, "failed to present error on console");
        }
    }
}

/// Presents errors as `error`-level tracing events, for hosts without a UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn present(&self, title: &str, body: &str) {
        error!(title, "{}", body);
    }
}
