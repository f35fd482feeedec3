//! Loosely-typed capture arguments passed alongside a message template
//!
//! Call sites hand the logger a list of [`CaptureValue`]s, one per template
//! hole. Anything implementing [`IntoCaptures`] can be passed: `()`, tuples of
//! values convertible into `CaptureValue`, a `Vec<CaptureValue>`, or a single
//! bare `CaptureValue`. A bare value (typically a pre-built sequence) is always
//! captured as one argument, never spread across several holes.

use super::error::Result;
use serde::Serialize;
use std::fmt::Display;

/// A single capture argument before it is converted into a property value
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Sequence(Vec<CaptureValue>),
    Map(Vec<(String, CaptureValue)>),
}

impl CaptureValue {
    /// Capture any serializable value through its serde representation
    ///
    /// # Example
    ///
    /// ```
    /// use rust_structured_logger::CaptureValue;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let value = CaptureValue::serialize(&Point { x: 1, y: 2 }).unwrap();
    /// assert!(matches!(value, CaptureValue::Map(_)));
    /// ```
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Capture a value by its `Display` rendering
    pub fn display<T: Display + ?Sized>(value: &T) -> Self {
        CaptureValue::Str(value.to_string())
    }

    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CaptureValue>,
    {
        CaptureValue::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CaptureValue>,
    {
        CaptureValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, CaptureValue::Sequence(_) | CaptureValue::Map(_))
    }
}

impl From<serde_json::Value> for CaptureValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CaptureValue::Null,
            serde_json::Value::Bool(b) => CaptureValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CaptureValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    CaptureValue::UInt(u)
                } else {
                    CaptureValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => CaptureValue::Str(s),
            serde_json::Value::Array(items) => {
                CaptureValue::Sequence(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(obj) => {
                CaptureValue::Map(obj.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

macro_rules! capture_from {
    ($variant:ident as $target:ty: $($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CaptureValue {
                fn from(value: $ty) -> Self {
                    CaptureValue::$variant(value as $target)
                }
            }
        )*
    };
}

capture_from!(Int as i64: i8, i16, i32, i64, isize);
capture_from!(UInt as u64: u8, u16, u32, u64, usize);
capture_from!(Float as f64: f32, f64);

impl From<bool> for CaptureValue {
    fn from(value: bool) -> Self {
        CaptureValue::Bool(value)
    }
}

impl From<char> for CaptureValue {
    fn from(value: char) -> Self {
        CaptureValue::Str(value.to_string())
    }
}

impl From<&str> for CaptureValue {
    fn from(value: &str) -> Self {
        CaptureValue::Str(value.to_string())
    }
}

impl From<String> for CaptureValue {
    fn from(value: String) -> Self {
        CaptureValue::Str(value)
    }
}

impl From<&String> for CaptureValue {
    fn from(value: &String) -> Self {
        CaptureValue::Str(value.clone())
    }
}

impl<T: Into<CaptureValue>> From<Option<T>> for CaptureValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CaptureValue::Null)
    }
}

impl<T: Into<CaptureValue>> From<Vec<T>> for CaptureValue {
    fn from(items: Vec<T>) -> Self {
        CaptureValue::sequence(items)
    }
}

impl<T: Clone + Into<CaptureValue>> From<&[T]> for CaptureValue {
    fn from(items: &[T]) -> Self {
        CaptureValue::sequence(items.iter().cloned())
    }
}

/// Capture arguments as received from a call site
#[derive(Debug, Clone, PartialEq)]
pub enum Captures {
    /// The canonical shape: one entry per template hole
    Variadic(Vec<CaptureValue>),
    /// A single value handed over where the list was expected
    Bare(CaptureValue),
}

impl Captures {
    /// Normalize into the canonical list, wrapping a bare value as one argument
    pub fn normalize(self) -> Vec<CaptureValue> {
        match self {
            Captures::Variadic(values) => values,
            Captures::Bare(value) => vec![value],
        }
    }
}

/// Conversion into capture arguments
///
/// Conversion is deferred until the level gate has accepted the call, so
/// disabled calls never pay for it.
pub trait IntoCaptures {
    fn into_captures(self) -> Captures;
}

impl IntoCaptures for Captures {
    fn into_captures(self) -> Captures {
        self
    }
}

impl IntoCaptures for () {
    fn into_captures(self) -> Captures {
        Captures::Variadic(Vec::new())
    }
}

impl IntoCaptures for Vec<CaptureValue> {
    fn into_captures(self) -> Captures {
        Captures::Variadic(self)
    }
}

impl IntoCaptures for &[CaptureValue] {
    fn into_captures(self) -> Captures {
        Captures::Variadic(self.to_vec())
    }
}

impl<const N: usize> IntoCaptures for [CaptureValue; N] {
    fn into_captures(self) -> Captures {
        Captures::Variadic(self.into())
    }
}

impl IntoCaptures for CaptureValue {
    fn into_captures(self) -> Captures {
        Captures::Bare(self)
    }
}

macro_rules! tuple_captures {
    ($($name:ident),+) => {
        impl<$($name: Into<CaptureValue>),+> IntoCaptures for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_captures(self) -> Captures {
                let ($($name,)+) = self;
                Captures::Variadic(vec![$($name.into()),+])
            }
        }
    };
}

tuple_captures!(A);
tuple_captures!(A, B);
tuple_captures!(A, B, C);
tuple_captures!(A, B, C, D);
tuple_captures!(A, B, C, D, E);
tuple_captures!(A, B, C, D, E, F);
tuple_captures!(A, B, C, D, E, F, G);
tuple_captures!(A, B, C, D, E, F, G, H);
