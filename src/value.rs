//! The tagged value model.
//!
//! One `Value` covers everything the binary codec can put on the wire. The
//! variants are deliberately storage-shaped rather than Rust-shaped: `Int`
//! is always an `i64` and the descriptor decides the encoded width, `Uuid`
//! is raw bytes the encoder checks for length, and `Array` nests freely
//! with the element type coming from the descriptor chain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sql;
use crate::types::temporal::{Offset, Timestamp};
use crate::types::{Date, Interval, Time};

/// A PostgreSQL value ready for binary encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    /// Any integer; the wire width comes from the descriptor, not from the
    /// magnitude.
    Int(i64),
    /// Encoded at 32 or 64 bits depending on the descriptor.
    Float(f64),
    Text(String),
    Bytea(Vec<u8>),
    /// The raw 128 bits of a UUID. The encoder rejects any other length.
    Uuid(Vec<u8>),
    Time(Time),
    Date(Date),
    Timestamp(Timestamp),
    /// An instant paired with the wall-clock displacement it was read at.
    Timestamptz(Timestamp, Offset),
    Interval(Interval),
    /// Rectangular, possibly nested. Callers are responsible for keeping
    /// nesting rectangular; the encoder sizes dimensions from the first
    /// element chain.
    Array(Vec<Value>),
}

impl Value {
    /// A UUID value from raw bytes; must be exactly 16 to encode.
    pub fn uuid(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Uuid(bytes.into())
    }

    pub fn array(values: impl Into<Vec<Value>>) -> Self {
        Value::Array(values.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Renders the value as a PostgreSQL literal, same as [`sql::literal`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&sql::literal(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytea(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytea(bytes.to_vec())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(u: uuid::Uuid) -> Self {
        Value::Uuid(u.as_bytes().to_vec())
    }
}

impl From<Time> for Value {
    fn from(t: Time) -> Self {
        Value::Time(t)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Value::Date(d)
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Interval> for Value {
    fn from(i: Interval) -> Self {
        Value::Interval(i)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
