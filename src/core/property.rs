//! Structured property values attached to log events
//!
//! This module provides:
//! - `ScalarValue`: leaf values (strings, numbers, booleans, null)
//! - `PropertyValue`: scalar, sequence, structure or dictionary
//! - `LogEventProperty`: a validated name paired with a value

use super::error::{LoggerError, Result};
use std::fmt;

/// Leaf value of a captured property
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl ScalarValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            ScalarValue::Null => serde_json::Value::Null,
            ScalarValue::Bool(b) => serde_json::Value::Bool(*b),
            ScalarValue::Int(i) => serde_json::Value::Number((*i).into()),
            ScalarValue::UInt(u) => serde_json::Value::Number((*u).into()),
            ScalarValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ScalarValue::String(s) => serde_json::Value::String(s.clone()),
        }
    }

    /// Render without quoting strings
    pub fn to_literal(&self) -> String {
        match self {
            ScalarValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "null"),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Int(i) => write!(f, "{}", i),
            ScalarValue::UInt(u) => write!(f, "{}", u),
            ScalarValue::Float(fl) => write!(f, "{}", fl),
            ScalarValue::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

impl From<i64> for ScalarValue {
    fn from(i: i64) -> Self {
        ScalarValue::Int(i)
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        ScalarValue::Int(i as i64)
    }
}

impl From<u64> for ScalarValue {
    fn from(u: u64) -> Self {
        ScalarValue::UInt(u)
    }
}

impl From<f64> for ScalarValue {
    fn from(f: f64) -> Self {
        ScalarValue::Float(f)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Bool(b)
    }
}

/// Destructured object: an optional type tag and its named members
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureValue {
    pub type_tag: Option<String>,
    pub properties: Vec<LogEventProperty>,
}

impl StructureValue {
    pub fn new(type_tag: Option<String>, properties: Vec<LogEventProperty>) -> Self {
        Self {
            type_tag,
            properties,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name() == name)
            .map(LogEventProperty::value)
    }
}

/// Value of a log event property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Scalar(ScalarValue),
    Sequence(Vec<PropertyValue>),
    Structure(StructureValue),
    Dictionary(Vec<(ScalarValue, PropertyValue)>),
}

impl PropertyValue {
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            PropertyValue::Scalar(s) => s.to_json_value(),
            PropertyValue::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(PropertyValue::to_json_value).collect())
            }
            PropertyValue::Structure(structure) => {
                let mut obj = serde_json::Map::new();
                if let Some(tag) = &structure.type_tag {
                    obj.insert("$type".to_string(), serde_json::Value::String(tag.clone()));
                }
                for property in &structure.properties {
                    obj.insert(property.name().to_string(), property.value().to_json_value());
                }
                serde_json::Value::Object(obj)
            }
            PropertyValue::Dictionary(entries) => {
                let mut obj = serde_json::Map::new();
                for (key, value) in entries {
                    obj.insert(key.to_literal(), value.to_json_value());
                }
                serde_json::Value::Object(obj)
            }
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Scalar(s) => write!(f, "{}", s),
            PropertyValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            PropertyValue::Structure(structure) => {
                if let Some(tag) = &structure.type_tag {
                    write!(f, "{} ", tag)?;
                }
                write!(f, "{{ ")?;
                for (i, property) in structure.properties.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", property.name(), property.value())?;
                }
                write!(f, " }}")
            }
            PropertyValue::Dictionary(entries) => {
                write!(f, "[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "({}: {})", key, value)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<ScalarValue> for PropertyValue {
    fn from(value: ScalarValue) -> Self {
        PropertyValue::Scalar(value)
    }
}

macro_rules! scalar_property_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_property_from!(&str, String, i64, i32, u64, f64, bool);

/// A named property value
#[derive(Debug, Clone, PartialEq)]
pub struct LogEventProperty {
    name: String,
    value: PropertyValue,
}

impl LogEventProperty {
    /// Create a property; fails if `name` is empty or whitespace.
    pub fn new(name: impl Into<String>, value: impl Into<PropertyValue>) -> Result<Self> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(LoggerError::invalid_argument(
                "name",
                "property name must not be empty",
            ));
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// Infallible constructor for the crate's own well-known property names
    pub(crate) fn with_static_name(name: &'static str, value: PropertyValue) -> Self {
        debug_assert!(Self::is_valid_name(name));
        Self {
            name: name.to_string(),
            value,
        }
    }

    pub fn is_valid_name(name: &str) -> bool {
        !name.trim().is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn into_parts(self) -> (String, PropertyValue) {
        (self.name, self.value)
    }
}
