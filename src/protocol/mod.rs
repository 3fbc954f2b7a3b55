//! Binary wire-format coding (pure, sync).
//!
//! No async, no I/O, just value ↔ bytes computation. The driver layer that
//! frames `Bind` and `DataRow` messages sits above this module.

pub mod decoder;
pub mod encoder;
pub mod types;
pub(crate) mod wire;

pub use decoder::decode;
pub use encoder::encode;
pub use types::{builtin, is_array_oid, oid, oid_to_name};
