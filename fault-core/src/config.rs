//! Display configuration, decided once at process start.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::present::DEFAULT_TITLE;
use crate::render::RenderMode;
use crate::severity::Severity;

/// Environment variable selecting the [`RenderMode`].
pub const RENDER_MODE_ENV: &str = "FAULT_RENDER_MODE";

/// Environment variable overriding the default presentation title.
pub const DEFAULT_TITLE_ENV: &str = "FAULT_DEFAULT_TITLE";

/// Environment variable setting the lowest severity that gets logged.
pub const LOG_THRESHOLD_ENV: &str = "FAULT_LOG_THRESHOLD";

/// How structured errors are rendered, presented and logged by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DisplayConfig {
    /// Render mode for presentation and log lines.
    pub mode: RenderMode,

    /// Title used by presenters when the caller gives none.
    pub default_title: String,

    /// Errors below this severity are not logged.
    pub log_threshold: Severity,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::for_build(),
            default_title: DEFAULT_TITLE.to_owned(),
            log_threshold: Severity::MIN,
        }
    }
}

impl DisplayConfig {
    /// Create a config with the given mode; other fields take their defaults.
    #[must_use]
    pub fn new(mode: RenderMode) -> Self {
        Self { mode, ..Self::default() }
    }

    /// Builds a config from the process environment.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRenderMode`] if `FAULT_RENDER_MODE` is set to
    /// an unknown mode, or [`CoreError::InvalidThreshold`] if
    /// `FAULT_LOG_THRESHOLD` is not an integer.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Absent keys keep defaults.
    ///
    /// # Errors
    /// See [`DisplayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(mode) = lookup(RENDER_MODE_ENV) {
            config.mode = mode.parse()?;
        }
        if let Some(title) = lookup(DEFAULT_TITLE_ENV).filter(|t| !t.is_empty()) {
            config.default_title = title;
        }
        if let Some(threshold) = lookup(LOG_THRESHOLD_ENV) {
            let value = threshold
                .trim()
                .parse::<i64>()
                .map_err(|_| CoreError::InvalidThreshold { value: threshold.clone() })?;
            config.log_threshold = Severity::new(value);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = match DisplayConfig::from_lookup(lookup_from(&[])) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(config.default_title, DEFAULT_TITLE);
    }

    #[test]
    fn environment_overrides_apply() {
        let lookup = lookup_from(&[
            (RENDER_MODE_ENV, "release"),
            (DEFAULT_TITLE_ENV, "Editor"),
            (LOG_THRESHOLD_ENV, " 250 "),
        ]);
        let config = match DisplayConfig::from_lookup(lookup) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.mode, RenderMode::Release);
        assert_eq!(config.default_title, "Editor");
        assert_eq!(config.log_threshold, Severity::MAX, "threshold must be clamped");
    }

    #[test]
    fn empty_title_keeps_default() {
        let config = DisplayConfig::from_lookup(lookup_from(&[(DEFAULT_TITLE_ENV, "")]));
        assert!(matches!(config, Ok(c) if c.default_title == DEFAULT_TITLE));
    }

    #[test]
    fn invalid_mode_is_rejected() {
        let result = DisplayConfig::from_lookup(lookup_from(&[(RENDER_MODE_ENV, "loud")]));
        assert!(matches!(result, Err(CoreError::InvalidRenderMode { .. })));
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let result = DisplayConfig::from_lookup(lookup_from(&[(LOG_THRESHOLD_ENV, "high")]));
        match result {
            Err(CoreError::InvalidThreshold { value }) => assert_eq!(value, "high"),
            other => panic!("expected InvalidThreshold, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_partial_json() {
        let config: DisplayConfig = match serde_json::from_str(r#"{"mode":"release"}"#) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.mode, RenderMode::Release);
        assert_eq!(config.default_title, DEFAULT_TITLE, "missing fields take defaults");
        assert_eq!(config.log_threshold, Severity::MIN);
    }
}
