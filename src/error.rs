//! Error types for the binary value codec.
//!
//! Both enums render to the short messages clients log and match on, so the
//! `Display` strings are part of the stable interface. Variants carry
//! structured payloads so callers can branch without string comparison.

use thiserror::Error;

/// Errors produced while encoding a [`Value`](crate::Value) to wire bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value variant does not match the descriptor's `typsend`.
    ///
    /// `value` is the rendering of what was being encoded: the expected send
    /// function name for most variants, the integer literal for `Int`, or
    /// the single-quoted text for `Text`.
    #[error("Attempted to encode {value} as {typesend}")]
    TypeMismatch { value: String, typesend: String },

    /// An `Int` falls outside the range of the target integer type.
    #[error("Out of range for {0}")]
    OutOfRange(&'static str),

    /// A `Float` was paired with a `typsend` that is neither `float4send`
    /// nor `float8send`.
    #[error("Unsupported float type")]
    UnsupportedFloatType,

    /// A `Uuid` payload that is not exactly 16 bytes.
    #[error("Invalid UUID")]
    InvalidUuid,

    /// An array descriptor without an element descriptor.
    #[error("Missing elem type info")]
    MissingElemType,
}

/// Errors produced while decoding wire bytes to a [`Dynamic`](crate::Dynamic).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is malformed for the named type: wrong width, bad UTF-8,
    /// or broken framing inside an array.
    #[error("invalid {0}")]
    Invalid(&'static str),

    /// A date payload whose month component falls outside 1..=12.
    #[error("Invalid month")]
    InvalidMonth,

    /// An array descriptor without an element descriptor.
    #[error("elem type missing")]
    ElemTypeMissing,

    /// The descriptor's `typreceive` is not one this codec handles.
    #[error("Unsupported type")]
    UnsupportedType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_error_messages() {
        let err = EncodeError::TypeMismatch {
            value: "boolsend".to_string(),
            typesend: "int4send".to_string(),
        };
        assert_eq!(err.to_string(), "Attempted to encode boolsend as int4send");
        assert_eq!(
            EncodeError::OutOfRange("int2").to_string(),
            "Out of range for int2"
        );
        assert_eq!(
            EncodeError::UnsupportedFloatType.to_string(),
            "Unsupported float type"
        );
        assert_eq!(EncodeError::InvalidUuid.to_string(), "Invalid UUID");
        assert_eq!(
            EncodeError::MissingElemType.to_string(),
            "Missing elem type info"
        );
    }

    #[test]
    fn decode_error_messages() {
        assert_eq!(DecodeError::Invalid("int4").to_string(), "invalid int4");
        assert_eq!(DecodeError::InvalidMonth.to_string(), "Invalid month");
        assert_eq!(DecodeError::ElemTypeMissing.to_string(), "elem type missing");
        assert_eq!(DecodeError::UnsupportedType.to_string(), "Unsupported type");
    }
}
