//! Clamped severity ratings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logging and handling priority of a structured error, always in `[1, 100]`.
///
/// Out-of-range inputs are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Severity(u8);

impl Severity {
    /// Lowest representable severity.
    pub const MIN: Self = Self(1);
    /// Highest representable severity.
    pub const MAX: Self = Self(100);

    /// Creates a `Severity`, clamping `value` into `[1, 100]`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        // The clamp above keeps the value inside u8 range.
        Self(u8::try_from(clamped).unwrap_or(Self::MAX.0))
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i64> for Severity {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_in_range_is_kept() {
        assert_eq!(Severity::new(1).value(), 1);
        assert_eq!(Severity::new(42).value(), 42);
        assert_eq!(Severity::new(100).value(), 100);
    }

    #[test]
    fn severity_out_of_range_is_clamped() {
        assert_eq!(Severity::new(0), Severity::MIN);
        assert_eq!(Severity::new(-5), Severity::MIN);
        assert_eq!(Severity::new(i64::MIN), Severity::MIN);
        assert_eq!(Severity::new(101), Severity::MAX);
        assert_eq!(Severity::new(i64::MAX), Severity::MAX);
    }

    #[test]
    fn severity_deserialize_clamps() {
        let s: Severity = match serde_json::from_str("250") {
            Ok(s) => s,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(s, Severity::MAX, "deserialized severity must be clamped");
    }

    proptest::proptest! {
        #[test]
        fn proptest_severity_is_clamped(value in proptest::prelude::any::<i64>()) {
            let expected = value.clamp(1, 100);
            proptest::prop_assert_eq!(i64::from(Severity::new(value).value()), expected);
        }
    }
}
