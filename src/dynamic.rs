//! Loosely typed decode output.
//!
//! The decoder cannot return [`Value`](crate::Value): inside an array the
//! element type is only known through `TypeInfo::elem_type`, so results come
//! back as this small tagged sum and downstream code reifies them with the
//! descriptor in hand (see [`Interval::from_dynamic`](crate::Interval::from_dynamic)
//! for the shape such a reifier takes).

use serde::{Deserialize, Serialize};

/// A decoded wire value before type-directed reification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Dynamic {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Array(Vec<Dynamic>),
}

impl Dynamic {
    /// The contained `i64`, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Dynamic::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The contained element list, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Dynamic]> {
        match self {
            Dynamic::Array(items) => Some(items),
            _ => None,
        }
    }
}
