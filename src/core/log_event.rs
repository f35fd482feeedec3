//! Log event structure

use super::log_level::LogLevel;
use super::property::{LogEventProperty, PropertyValue};
use super::template::MessageTemplate;
use chrono::{DateTime, FixedOffset};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error attached to an event; shared so events stay cheap to clone.
pub type EventError = Arc<dyn Error + Send + Sync + 'static>;

/// One structured log occurrence
///
/// Timestamp, level, template and error are fixed at construction. Only the
/// property mapping can change afterwards, which is how enrichers decorate an
/// event on its way to a sink. Properties keep their insertion order;
/// overwriting a property keeps its original position.
#[derive(Clone)]
pub struct LogEvent {
    timestamp: DateTime<FixedOffset>,
    level: LogLevel,
    error: Option<EventError>,
    template: Arc<MessageTemplate>,
    properties: Vec<LogEventProperty>,
}

impl LogEvent {
    /// Build an event. Later duplicates in `properties` replace earlier ones.
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        level: LogLevel,
        error: Option<EventError>,
        template: impl Into<Arc<MessageTemplate>>,
        properties: Vec<LogEventProperty>,
    ) -> Self {
        let mut event = Self {
            timestamp,
            level,
            error,
            template: template.into(),
            properties: Vec::with_capacity(properties.len()),
        };
        for property in properties {
            event.add_or_update_property(property);
        }
        event
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn error(&self) -> Option<&EventError> {
        self.error.as_ref()
    }

    pub fn template(&self) -> &MessageTemplate {
        &self.template
    }

    pub fn properties(&self) -> &[LogEventProperty] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name() == name)
            .map(LogEventProperty::value)
    }

    pub fn contains_property(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name() == name)
    }

    /// Add the property, replacing any existing value with the same name
    pub fn add_or_update_property(&mut self, property: LogEventProperty) {
        match self.properties.iter_mut().find(|p| p.name() == property.name()) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    /// Add the property only if no property with the same name exists
    pub fn add_property_if_absent(&mut self, property: LogEventProperty) {
        if !self.contains_property(property.name()) {
            self.properties.push(property);
        }
    }

    pub fn remove_property_value(&mut self, name: &str) -> Option<PropertyValue> {
        let index = self.properties.iter().position(|p| p.name() == name)?;
        Some(self.properties.remove(index).into_parts().1)
    }

    /// Render the message template against this event's properties
    pub fn render_message(&self) -> String {
        self.template.render(|name| self.property(name))
    }
}

impl fmt::Debug for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEvent")
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .field("template", &self.template.text())
            .field("properties", &self.properties)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(template: &str, properties: Vec<LogEventProperty>) -> LogEvent {
        LogEvent::new(
            chrono::Local::now().fixed_offset(),
            LogLevel::Information,
            None,
            MessageTemplate::parse(template),
            properties,
        )
    }

    fn prop(name: &str, value: i64) -> LogEventProperty {
        LogEventProperty::new(name, value).unwrap()
    }

    #[test]
    fn test_update_keeps_position() {
        let mut e = event("{A} {B}", vec![prop("A", 1), prop("B", 2)]);
        e.add_or_update_property(prop("A", 10));

        let names: Vec<_> = e.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(e.property("A"), Some(&PropertyValue::from(10i64)));
    }

    #[test]
    fn test_add_if_absent() {
        let mut e = event("x", vec![prop("A", 1)]);
        e.add_property_if_absent(prop("A", 2));
        e.add_property_if_absent(prop("B", 3));

        assert_eq!(e.property("A"), Some(&PropertyValue::from(1i64)));
        assert_eq!(e.property("B"), Some(&PropertyValue::from(3i64)));
    }

    #[test]
    fn test_duplicate_properties_at_construction() {
        let e = event("x", vec![prop("A", 1), prop("A", 2)]);
        assert_eq!(e.properties().len(), 1);
        assert_eq!(e.property("A"), Some(&PropertyValue::from(2i64)));
    }

    #[test]
    fn test_remove_and_render() {
        let mut e = event("Count is {Count}", vec![prop("Count", 4)]);
        assert_eq!(e.render_message(), "Count is 4");

        assert_eq!(e.remove_property_value("Count"), Some(PropertyValue::from(4i64)));
        assert_eq!(e.remove_property_value("Count"), None);
        assert_eq!(e.render_message(), "Count is {Count}");
    }

    #[test]
    fn test_error_is_shared() {
        let err: EventError = Arc::new(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        let e = LogEvent::new(
            chrono::Local::now().fixed_offset(),
            LogLevel::Error,
            Some(err),
            MessageTemplate::parse("failed"),
            Vec::new(),
        );
        let copy = e.clone();
        assert_eq!(copy.error().map(|e| e.to_string()), Some("disk".to_string()));
    }
}
