//! Template processing and property capture
//!
//! [`MessageTemplateProcessor`] turns template text plus capture arguments into
//! a parsed template and its bound properties. [`LogEventPropertyFactory`]
//! converts a single capture argument into a property, and is what enrichers
//! receive when they need to build properties of their own.
//!
//! [`TemplateProcessor`] is the default implementation of both.

use super::capture::CaptureValue;
use super::error::Result;
use super::property::{LogEventProperty, PropertyValue, ScalarValue, StructureValue};
use super::template::{Destructuring, MessageTemplate, PropertyToken};
use crate::self_log;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Builds properties from capture arguments
pub trait LogEventPropertyFactory: Send + Sync {
    /// Capture `value` under `name`, structurally when `destructure` is set
    fn create_property(
        &self,
        name: &str,
        value: CaptureValue,
        destructure: bool,
    ) -> Result<LogEventProperty>;
}

/// Parses templates and binds capture arguments to their holes
pub trait MessageTemplateProcessor: Send + Sync {
    fn process(
        &self,
        template: &str,
        values: Vec<CaptureValue>,
    ) -> (Arc<MessageTemplate>, Vec<LogEventProperty>);

    fn property_factory(&self) -> &dyn LogEventPropertyFactory;
}

/// Bounds applied while capturing values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureLimits {
    /// Nesting depth beyond which values are captured as null
    pub max_depth: usize,
    /// Strings longer than this are truncated and suffixed with `…`; a limit
    /// of zero captures every string as empty
    pub max_string_length: Option<usize>,
    /// Sequences and maps keep at most this many entries
    pub max_collection_count: Option<usize>,
}

impl Default for CaptureLimits {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_string_length: None,
            max_collection_count: None,
        }
    }
}

const TEMPLATE_CACHE_CAPACITY: usize = 1000;

/// Default template processor with a bounded parse cache
pub struct TemplateProcessor {
    limits: CaptureLimits,
    cache: RwLock<HashMap<String, Arc<MessageTemplate>>>,
}

impl TemplateProcessor {
    pub fn new() -> Self {
        Self::with_limits(CaptureLimits::default())
    }

    pub fn with_limits(limits: CaptureLimits) -> Self {
        Self {
            limits,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn limits(&self) -> &CaptureLimits {
        &self.limits
    }

    /// Parse `text`, reusing a cached parse when available
    pub fn parse(&self, text: &str) -> Arc<MessageTemplate> {
        if let Some(template) = self.cache.read().get(text) {
            return Arc::clone(template);
        }

        let template = Arc::new(MessageTemplate::parse(text));
        let mut cache = self.cache.write();
        if cache.len() >= TEMPLATE_CACHE_CAPACITY {
            cache.clear();
        }
        cache.insert(text.to_string(), Arc::clone(&template));
        template
    }

    fn bind(&self, template: &MessageTemplate, values: Vec<CaptureValue>) -> Vec<LogEventProperty> {
        let holes: Vec<&PropertyToken> = template.property_tokens().collect();
        if holes.is_empty() && values.is_empty() {
            return Vec::new();
        }

        if template.is_positional() {
            self.bind_positional(template, &holes, values)
        } else {
            self.bind_named(template, &holes, values)
        }
    }

    fn bind_positional(
        &self,
        template: &MessageTemplate,
        holes: &[&PropertyToken],
        values: Vec<CaptureValue>,
    ) -> Vec<LogEventProperty> {
        let mut used = vec![false; values.len()];
        let mut properties = Vec::with_capacity(holes.len());

        for hole in holes {
            let Some(position) = hole.position() else {
                continue;
            };
            match values.get(position) {
                Some(value) => {
                    used[position] = true;
                    let property =
                        self.capture_property(hole.name(), value.clone(), hole.destructuring());
                    properties.extend(property);
                }
                None => self_log!(
                    "Positional argument {} is missing for template `{}`",
                    position,
                    template.text()
                ),
            }
        }

        for (index, value) in values.into_iter().enumerate() {
            if !used[index] {
                properties.extend(self.capture_extra(template, index, value));
            }
        }
        properties
    }

    fn bind_named(
        &self,
        template: &MessageTemplate,
        holes: &[&PropertyToken],
        values: Vec<CaptureValue>,
    ) -> Vec<LogEventProperty> {
        if values.len() < holes.len() {
            let missing: Vec<&str> = holes[values.len()..].iter().map(|h| h.name()).collect();
            self_log!(
                "Required properties not provided for template `{}`: {}",
                template.text(),
                missing.join(", ")
            );
        }

        let mut properties = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match holes.get(index) {
                Some(hole) => {
                    let property =
                        self.capture_property(hole.name(), value, hole.destructuring());
                    properties.extend(property);
                }
                None => properties.extend(self.capture_extra(template, index, value)),
            }
        }
        properties
    }

    fn capture_extra(
        &self,
        template: &MessageTemplate,
        index: usize,
        value: CaptureValue,
    ) -> Option<LogEventProperty> {
        self_log!(
            "Too many arguments for template `{}`; argument {} captured as __{}",
            template.text(),
            index,
            index
        );
        self.capture_property(&format!("__{}", index), value, Destructuring::Default)
    }

    fn capture_property(
        &self,
        name: &str,
        value: CaptureValue,
        destructuring: Destructuring,
    ) -> Option<LogEventProperty> {
        LogEventProperty::new(name, self.capture(value, destructuring, 0)).ok()
    }

    /// Convert a capture argument into a property value, honoring the limits
    pub fn capture(
        &self,
        value: CaptureValue,
        destructuring: Destructuring,
        depth: usize,
    ) -> PropertyValue {
        if depth > self.limits.max_depth {
            return PropertyValue::Scalar(ScalarValue::Null);
        }

        if destructuring == Destructuring::Stringify {
            let rendered = match self.capture(value, Destructuring::Default, depth) {
                PropertyValue::Scalar(ScalarValue::String(s)) => s,
                other => other.to_string(),
            };
            return PropertyValue::Scalar(ScalarValue::String(self.truncate(rendered)));
        }

        match value {
            CaptureValue::Null => PropertyValue::Scalar(ScalarValue::Null),
            CaptureValue::Bool(b) => PropertyValue::Scalar(ScalarValue::Bool(b)),
            CaptureValue::Int(i) => PropertyValue::Scalar(ScalarValue::Int(i)),
            CaptureValue::UInt(u) => PropertyValue::Scalar(ScalarValue::UInt(u)),
            CaptureValue::Float(f) => PropertyValue::Scalar(ScalarValue::Float(f)),
            CaptureValue::Str(s) => PropertyValue::Scalar(ScalarValue::String(self.truncate(s))),
            CaptureValue::Sequence(items) => PropertyValue::Sequence(
                items
                    .into_iter()
                    .take(self.collection_limit())
                    .map(|item| self.capture(item, destructuring, depth + 1))
                    .collect(),
            ),
            CaptureValue::Map(entries) => {
                let entries = entries.into_iter().take(self.collection_limit());
                if destructuring == Destructuring::Destructure {
                    let properties = entries
                        .filter_map(|(name, item)| {
                            let value = self.capture(item, destructuring, depth + 1);
                            LogEventProperty::new(name, value).ok()
                        })
                        .collect();
                    PropertyValue::Structure(StructureValue::new(None, properties))
                } else {
                    PropertyValue::Dictionary(
                        entries
                            .map(|(key, item)| {
                                (
                                    ScalarValue::String(key),
                                    self.capture(item, destructuring, depth + 1),
                                )
                            })
                            .collect(),
                    )
                }
            }
        }
    }

    fn collection_limit(&self) -> usize {
        self.limits.max_collection_count.unwrap_or(usize::MAX)
    }

    fn truncate(&self, s: String) -> String {
        match self.limits.max_string_length {
            Some(0) => String::new(),
            Some(max) if s.chars().count() > max => {
                let mut truncated: String = s.chars().take(max.saturating_sub(1)).collect();
                truncated.push('…');
                truncated
            }
            _ => s,
        }
    }
}

impl Default for TemplateProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventPropertyFactory for TemplateProcessor {
    fn create_property(
        &self,
        name: &str,
        value: CaptureValue,
        destructure: bool,
    ) -> Result<LogEventProperty> {
        let destructuring = if destructure {
            Destructuring::Destructure
        } else {
            Destructuring::Default
        };
        LogEventProperty::new(name, self.capture(value, destructuring, 0))
    }
}

impl MessageTemplateProcessor for TemplateProcessor {
    fn process(
        &self,
        template: &str,
        values: Vec<CaptureValue>,
    ) -> (Arc<MessageTemplate>, Vec<LogEventProperty>) {
        let parsed = self.parse(template);
        let properties = self.bind(&parsed, values);
        (parsed, properties)
    }

    fn property_factory(&self) -> &dyn LogEventPropertyFactory {
        self
    }
}
