//! # pgcodec: PostgreSQL binary value codec
//!
//! Encodes and decodes PostgreSQL values in the binary wire format used by
//! the frontend/backend protocol (`Bind` parameters, `DataRow` columns).
//! This crate is the pure computation layer of a driver: no sockets, no
//! async, no SQL generation beyond a single-value literal helper.
//!
//! ## Architecture
//!
//! ```text
//! Value × TypeInfo → encode → length-prefixed bytes
//! bytes × TypeInfo → decode → Dynamic → (type-directed reify)
//! ```
//!
//! Dispatch runs on the descriptor's `typsend`/`typreceive` function names,
//! so one code path covers built-ins and user-defined domains alike. The
//! decoder returns the loosely typed [`Dynamic`] rather than [`Value`]
//! because inside arrays the element type is only known through
//! `TypeInfo::elem_type`.
//!
//! ## Example
//!
//! ```
//! use pgcodec::{decode, encode, oid, Dynamic, Value};
//!
//! let int4 = pgcodec::builtin(oid::INT4).unwrap();
//! let bytes = encode(&Value::Int(42), &int4).unwrap();
//! assert_eq!(&bytes[..], &[0, 0, 0, 4, 0, 0, 0, 42]);
//!
//! // The outer length prefix belongs to the message framing; strip it
//! // before decoding.
//! let decoded = decode(&bytes[4..], &int4).unwrap();
//! assert_eq!(decoded, Dynamic::Int(42));
//! ```
//!
//! Everything here is a total function over its inputs; values and
//! descriptors are immutable, so concurrent use needs no synchronization.

pub mod dynamic;
pub mod error;
pub mod protocol;
pub mod sql;
pub mod type_info;
pub mod types;
pub mod value;

pub use dynamic::Dynamic;
pub use error::{DecodeError, EncodeError};
pub use protocol::{builtin, decode, encode, is_array_oid, oid, oid_to_name};
pub use type_info::TypeInfo;
pub use types::temporal::{Duration, Offset, Timestamp};
pub use types::{Date, Interval, Time};
pub use value::Value;
