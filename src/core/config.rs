//! Declarative logger settings
//!
//! Settings cover what is naturally data: the minimum level and fixed
//! properties. Sinks and enrichers are code and stay on [`LoggerBuilder`].
//!
//! [`LoggerBuilder`]: super::logger::LoggerBuilder

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Settings loaded from JSON
///
/// # Example
///
/// ```
/// use rust_structured_logger::{LogLevel, LoggerSettings};
///
/// let settings = LoggerSettings::from_json(
///     r#"{ "minimum_level": "debug", "properties": { "Service": "billing" } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(settings.minimum_level().unwrap(), Some(LogLevel::Debug));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    /// Level name, case-insensitive; `trace`, `info` and `warn` are accepted
    pub minimum_level: Option<String>,

    /// Fixed properties attached to every event
    pub properties: BTreeMap<String, serde_json::Value>,

    /// Value for the `SourceContext` property
    pub source_context: Option<String>,
}

impl LoggerSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("read settings", path.display().to_string(), e)
        })?;
        Self::from_json(&contents)
    }

    /// Parsed minimum level, `None` when not set
    pub fn minimum_level(&self) -> Result<Option<LogLevel>> {
        self.minimum_level
            .as_deref()
            .map(|name| {
                name.parse::<LogLevel>()
                    .map_err(|e| LoggerError::config("minimum_level", e))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_settings() {
        let settings = LoggerSettings::from_json("{}").unwrap();
        assert_eq!(settings, LoggerSettings::default());
        assert_eq!(settings.minimum_level().unwrap(), None);
    }

    #[test]
    fn test_invalid_level_is_configuration_error() {
        let settings = LoggerSettings::from_json(r#"{"minimum_level": "loud"}"#).unwrap();
        assert!(matches!(
            settings.minimum_level(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            LoggerSettings::from_json(r#"{"sinks": []}"#),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"minimum_level": "Error", "source_context": "Jobs"}}"#).unwrap();

        let settings = LoggerSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.minimum_level().unwrap(), Some(LogLevel::Error));
        assert_eq!(settings.source_context.as_deref(), Some("Jobs"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = LoggerSettings::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }
}
