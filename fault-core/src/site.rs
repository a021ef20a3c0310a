//! Caller-site identity: where a structured error was raised.

use std::panic::Location;

/// Raw caller-site input supplied when a structured error is constructed.
///
/// Values are carried as given; [`StructuredError`](crate::StructuredError)
/// normalises them on construction. Prefer [`caller_site!`](crate::caller_site)
/// or [`CallerSite::here`] over filling the fields by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerSite {
    /// Name of the function that raised the error.
    pub method: String,
    /// Source file of the raising code.
    pub file: String,
    /// Line within `file`. Negative values are clamped to 0 downstream.
    pub line: i64,
}

impl CallerSite {
    /// Creates a caller site from explicit values.
    pub fn new(method: impl Into<String>, file: impl Into<String>, line: i64) -> Self {
        Self { method: method.into(), file: file.into(), line }
    }

    /// Caller site used when no introspection is available: empty names, line 0.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Captures file and line of the caller; the method name must be supplied.
    #[track_caller]
    pub fn here(method: impl Into<String>) -> Self {
        let location = Location::caller();
        Self::new(method, location.file(), i64::from(location.line()))
    }
}

/// Reduces a `type_name` path of a local marker fn to the enclosing function's name.
#[doc(hidden)]
#[must_use]
pub fn enclosing_fn_name(marker_path: &'static str) -> &'static str {
    let mut path = marker_path.strip_suffix("::__fault_marker").unwrap_or(marker_path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Captures the [`CallerSite`] of the invocation point.
///
/// The method name is the enclosing function's name, without its module path.
///
/// ```
/// fn load_settings() -> fault_core::CallerSite {
///     fault_core::caller_site!()
/// }
///
/// assert_eq!(load_settings().method, "load_settings");
/// ```
#[macro_export]
macro_rules! caller_site {
    () => {{
        fn __fault_marker() {}
        fn __fault_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallerSite::new(
            $crate::site::enclosing_fn_name(__fault_type_name_of(__fault_marker)),
            ::core::file!(),
            ::core::primitive::i64::from(::core::line!()),
        )
    }};
}

/// Builds a [`StructuredError`](crate::StructuredError) at the invocation point.
///
/// `structured_error!(message, severity)` or
/// `structured_error!(message, severity, caller_data)`.
#[macro_export]
macro_rules! structured_error {
    ($message:expr, $severity:expr $(,)?) => {
        $crate::StructuredError::new($message, $severity, "", $crate::caller_site!())
    };
    ($message:expr, $severity:expr, $caller_data:expr $(,)?) => {
        $crate::StructuredError::new($message, $severity, $caller_data, $crate::caller_site!())
    };
}
