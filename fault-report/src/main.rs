//! Entry point for the `fault-report` binary.
//!
//! Raises a structured error from the command line, logs it through the
//! reporter and presents it on standard error.

use clap::Parser;
use fault_core::{DisplayConfig, StructuredError};
use fault_report::cli::Invocation;
use fault_report::{ConsolePresenter, Disposition, ReportError, Reporter};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn run(invocation: Invocation) -> Result<(), ReportError> {
    let config = DisplayConfig::from_env()?;

    let mut err = StructuredError::new(
        invocation.message,
        invocation.severity,
        invocation.caller_data,
        fault_core::caller_site!(),
    );
    if invocation.quiet {
        err = err.quiet();
    }

    debug!(mode = %config.mode, "reporting structured error");
    let reporter = Reporter::new(config);
    let disposition =
        reporter.report_and_show(&err, &ConsolePresenter::stderr(), &invocation.title);
    if let Disposition::Logged(level) = disposition {
        debug!(%level, "structured error logged");
    }
    Ok(())
}

fn main() {
    let invocation = Invocation::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(invocation) {
        error!(error = %e, "fault-report failed");
        std::process::exit(1);
    }
}
