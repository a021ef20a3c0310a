//! Fuzz target: construction and rendering of `StructuredError`.
//!
//! Splits arbitrary input into message, caller data, method and file, and
//! checks the invariants that must hold for any field values.

#![no_main]

use fault_core::{CallerSite, RenderMode, StructuredError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let severity = i64::from(data[0] as i8) * 3;
    let line = i64::from(i32::from_le_bytes([data[1], data[2], data[3], data[4]]));
    let text = String::from_utf8_lossy(&data[5..]);
    let mut parts = text.splitn(4, '\u{0}');
    let message = parts.next().unwrap_or_default();
    let caller_data = parts.next().unwrap_or_default();
    let method = parts.next().unwrap_or_default();
    let file = parts.next().unwrap_or_default();

    let site = CallerSite::new(method, file, line);
    let err = StructuredError::new(message, severity, caller_data, site);

    let value = err.severity().value();
    assert!((1..=100).contains(&value), "severity {value} escaped [1, 100]");
    assert_eq!(i64::from(err.line_number()), line.max(0));
    assert!(!err.method_name().is_empty(), "method name must never read as empty");

    assert_eq!(err.render(RenderMode::Release), message, "release must render the bare message");
    let debug = err.render(RenderMode::Debug);
    assert_eq!(debug, err.render(RenderMode::Debug), "rendering must be deterministic");
    assert!(debug.contains(message), "debug rendering must contain the message");
});
