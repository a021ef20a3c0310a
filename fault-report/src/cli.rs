//! Command-line interface of the `fault-report` binary.

use clap::Parser;

/// Severity used when none is given on the command line.
pub const DEFAULT_SEVERITY: i64 = 50;

/// Raise a structured error, log it and present it on standard error.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fault-report")]
#[command(version)]
#[command(about = "Raise, log and present a structured error")]
#[command(long_about = None)]
pub struct Invocation {
    /// Raise the error with logging suppressed
    #[arg(short, long)]
    pub quiet: bool,

    /// Presentation title; empty uses the configured default
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Message of the error to raise
    pub message: String,

    /// Severity, clamped into [1, 100] when the error is built
    #[arg(allow_negative_numbers = true, default_value_t = DEFAULT_SEVERITY)]
    pub severity: i64,

    /// Free-form caller data
    #[arg(default_value = "")]
    pub caller_data: String,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, clap::Error> {
        Invocation::try_parse_from(std::iter::once("fault-report").chain(args.iter().copied()))
    }

    #[test]
    fn message_only_uses_defaults() {
        let inv = match parse(&["disk full"]) {
            Ok(i) => i,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(inv.message, "disk full");
        assert_eq!(inv.severity, DEFAULT_SEVERITY);
        assert_eq!(inv.caller_data, "");
        assert_eq!(inv.title, "");
        assert!(!inv.quiet);
    }

    #[test]
    fn all_arguments_are_parsed() {
        let args = ["-q", "--title", "Backup", "disk full", "-4", "volume /dev/sda"];
        let inv = match parse(&args) {
            Ok(i) => i,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(inv.quiet);
        assert_eq!(inv.title, "Backup");
        assert_eq!(inv.message, "disk full");
        assert_eq!(inv.severity, -4, "severity is clamped later, not at parse time");
        assert_eq!(inv.caller_data, "volume /dev/sda");
    }

    #[test]
    fn short_title_flag() {
        let inv = parse(&["-t", "Sync", "m"]);
        assert!(matches!(inv, Ok(i) if i.title == "Sync" && i.message == "m"));
    }

    #[test]
    fn double_dash_ends_flags() {
        let inv = parse(&["--", "--quiet"]);
        assert!(matches!(inv, Ok(i) if i.message == "--quiet" && !i.quiet));
    }

    #[test]
    fn missing_message_is_rejected() {
        let err = parse(&["--quiet"]).err().map(|e| e.kind());
        assert_eq!(err, Some(ErrorKind::MissingRequiredArgument));
    }

    #[test]
    fn non_integer_severity_is_rejected() {
        let err = parse(&["m", "high"]).err().map(|e| e.kind());
        assert_eq!(err, Some(ErrorKind::ValueValidation));
    }

    #[test]
    fn surplus_and_unknown_arguments_are_rejected() {
        let surplus = parse(&["m", "1", "d", "extra"]).err().map(|e| e.kind());
        assert_eq!(surplus, Some(ErrorKind::UnknownArgument));

        let unknown = parse(&["--loud", "m"]).err().map(|e| e.kind());
        assert_eq!(unknown, Some(ErrorKind::UnknownArgument));
    }

    #[test]
    fn title_without_value_is_rejected() {
        let err = match parse(&["m", "--title"]) {
            Err(e) => e,
            Ok(i) => panic!("expected an error, got {i:?}"),
        };
        assert!(err.to_string().contains("--title"), "error must name the flag: {err}");
        assert_ne!(err.kind(), ErrorKind::UnknownArgument);
    }
}
