//! Output format configuration for sinks
//!
//! - Text: rendered message, with properties the template does not mention
//!   appended as `{Name=value}`
//! - Json: one JSON object per event carrying template, rendered message and
//!   every property

use super::log_event::LogEvent;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Output format for sink lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Example: `[2025-01-08T10:30:45.123+00:00] [INF] Order 42 shipped {Service="billing"}`
    #[default]
    Text,

    /// Example: `{"timestamp":"...","level":"INFORMATION","message_template":"Order {Id} shipped",...}`
    Json,
}

impl OutputFormat {
    /// Format an event as a single record, without a trailing newline
    pub fn format(&self, event: &LogEvent, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => format_text(event, timestamp_format),
            OutputFormat::Json => format_json(event, timestamp_format),
        }
    }
}

fn format_text(event: &LogEvent, timestamp_format: &TimestampFormat) -> String {
    let mut line = format!(
        "[{}] [{}] {}",
        timestamp_format.format(&event.timestamp()),
        event.level().short_name(),
        event.render_message()
    );

    let extra: Vec<String> = event
        .properties()
        .iter()
        .filter(|p| !event.template().property_tokens().any(|t| t.name() == p.name()))
        .map(|p| format!("{}={}", p.name(), p.value()))
        .collect();
    if !extra.is_empty() {
        line.push_str(" {");
        line.push_str(&extra.join(", "));
        line.push('}');
    }

    if let Some(error) = event.error() {
        line.push('\n');
        line.push_str(&error.to_string());
    }

    line
}

fn format_json(event: &LogEvent, timestamp_format: &TimestampFormat) -> String {
    let mut json_obj = serde_json::Map::new();

    json_obj.insert(
        "timestamp".to_string(),
        timestamp_format.to_json_value(&event.timestamp()),
    );
    json_obj.insert(
        "level".to_string(),
        serde_json::Value::String(event.level().to_string()),
    );
    json_obj.insert(
        "message_template".to_string(),
        serde_json::Value::String(event.template().text().to_string()),
    );
    json_obj.insert(
        "message".to_string(),
        serde_json::Value::String(event.render_message()),
    );

    if let Some(error) = event.error() {
        json_obj.insert(
            "error".to_string(),
            serde_json::Value::String(error.to_string()),
        );
    }

    let properties: serde_json::Map<String, serde_json::Value> = event
        .properties()
        .iter()
        .map(|p| (p.name().to_string(), p.value().to_json_value()))
        .collect();
    json_obj.insert("properties".to_string(), serde_json::Value::Object(properties));

    serde_json::Value::Object(json_obj).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use crate::core::property::LogEventProperty;
    use crate::core::template::MessageTemplate;
    use std::sync::Arc;

    fn event(error: Option<&str>) -> LogEvent {
        LogEvent::new(
            chrono::Local::now().fixed_offset(),
            LogLevel::Warning,
            error.map(|e| {
                Arc::new(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
                    as crate::core::log_event::EventError
            }),
            MessageTemplate::parse("User {User} logged in"),
            vec![
                LogEventProperty::new("User", "ada").unwrap(),
                LogEventProperty::new("Service", "auth").unwrap(),
            ],
        )
    }

    #[test]
    fn test_text_format() {
        let result = OutputFormat::Text.format(&event(None), &TimestampFormat::Iso8601);

        assert!(result.contains("[WRN]"));
        assert!(result.contains("User \"ada\" logged in"));
        assert!(result.ends_with("{Service=\"auth\"}"));
    }

    #[test]
    fn test_text_format_with_error() {
        let result = OutputFormat::Text.format(&event(Some("refused")), &TimestampFormat::Iso8601);
        assert!(result.ends_with("\nrefused"));
    }

    #[test]
    fn test_json_format() {
        let result =
            OutputFormat::Json.format(&event(Some("refused")), &TimestampFormat::UnixMillis);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "WARNING");
        assert_eq!(parsed["message_template"], "User {User} logged in");
        assert_eq!(parsed["message"], "User \"ada\" logged in");
        assert_eq!(parsed["properties"]["Service"], "auth");
        assert_eq!(parsed["error"], "refused");
        assert!(parsed["timestamp"].is_i64());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
