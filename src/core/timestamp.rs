//! Timestamp formatting utilities
//!
//! Event timestamps carry the local UTC offset at which they were taken;
//! every format here preserves or converts that offset explicitly.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

/// Timestamp format options for sink output
///
/// # Examples
///
/// ```
/// use rust_structured_logger::TimestampFormat;
///
/// let format = TimestampFormat::Iso8601;
/// let text = format.format(&chrono::Local::now().fixed_offset());
/// assert!(text.contains('T'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+02:00`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456+02:00`
    Iso8601Micros,

    /// RFC 3339 with whole seconds: `2025-01-08T10:30:45+02:00`
    Rfc3339,

    /// Same instant, shifted to UTC: `2025-01-08T08:30:45.123Z`
    Utc,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_structured_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// assert_eq!(format.format(&chrono::Local::now().fixed_offset()).len(), 8);
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<FixedOffset>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.to_rfc3339_opts(SecondsFormat::Millis, false),
            TimestampFormat::Iso8601Micros => {
                datetime.to_rfc3339_opts(SecondsFormat::Micros, false)
            }
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, false),
            TimestampFormat::Utc => datetime
                .with_timezone(&chrono::Utc)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Numeric formats are written as JSON numbers rather than strings
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::UnixMillis)
    }

    pub(crate) fn to_json_value(&self, datetime: &DateTime<FixedOffset>) -> serde_json::Value {
        match self {
            TimestampFormat::UnixMillis => datetime.timestamp_millis().into(),
            _ => serde_json::Value::String(self.format(datetime)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<FixedOffset> {
        // 2025-01-08 10:30:45.123456 at +02:00
        FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_keeps_offset() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123+02:00");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456+02:00");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45+02:00");
    }

    #[test]
    fn test_utc_shifts_instant() {
        let result = TimestampFormat::Utc.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T08:30:45.123Z");
    }

    #[test]
    fn test_unix_millis_json_is_number() {
        let format = TimestampFormat::UnixMillis;
        assert!(format.is_numeric());
        assert_eq!(
            format.to_json_value(&fixed_datetime()),
            serde_json::json!(1736325045123i64)
        );
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M %z".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30 +0200");
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat =
            serde_json::from_str("\"Iso8601\"").expect("deserialize Iso8601");
        assert_eq!(format, TimestampFormat::Iso8601);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
