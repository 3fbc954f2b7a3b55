//! Binary decoder: raw payload bytes × `TypeInfo` → [`Dynamic`].
//!
//! The caller strips the outer length prefix before handing bytes in (a
//! `DataRow` parser already has it); array elements carry their own
//! per-element prefixes and are framed internally. Dispatch runs on the
//! descriptor's `typreceive` name. Arrays come back flat, in stream order;
//! dimensionality lives in the header and callers that need the shape
//! reapply it out of band.

use crate::dynamic::Dynamic;
use crate::error::DecodeError;
use crate::protocol::wire::{be_f32, be_f64, be_i16, be_i32, be_i64, be_u32, Reader};
use crate::type_info::TypeInfo;
use crate::types::temporal::{
    gregorian_days_to_date, seconds_to_time, GS_TO_UNIX_EPOCH, POSTGRES_GD_EPOCH,
    POSTGRES_GS_EPOCH,
};

/// Decode one value's payload bytes into a loosely typed container.
pub fn decode(bytes: &[u8], info: &TypeInfo) -> Result<Dynamic, DecodeError> {
    match info.typereceive.as_str() {
        "boolrecv" => match bytes {
            [0] => Ok(Dynamic::Bool(false)),
            [1] => Ok(Dynamic::Bool(true)),
            _ => Err(DecodeError::Invalid("bool")),
        },

        "oidrecv" => Ok(Dynamic::Int(i64::from(be_u32(bytes, "oid")?))),
        "int2recv" => Ok(Dynamic::Int(i64::from(be_i16(bytes, "int2")?))),
        "int4recv" => Ok(Dynamic::Int(i64::from(be_i32(bytes, "int4")?))),
        "int8recv" => Ok(Dynamic::Int(be_i64(bytes, "int8")?)),

        "float4recv" => {
            let x = be_f32(bytes, "float4")?;
            Ok(Dynamic::Float(round_decimals(f64::from(x), 4)))
        }
        "float8recv" => {
            let x = be_f64(bytes, "float8")?;
            Ok(Dynamic::Float(round_decimals(x, 8)))
        }

        "textrecv" | "namerecv" | "charrecv" => decode_utf8(bytes, "text"),
        "varcharrecv" => decode_utf8(bytes, "varchar"),

        "bytearecv" => Ok(Dynamic::Bytes(bytes.to_vec())),

        "uuid_recv" => {
            if bytes.len() != 16 {
                return Err(DecodeError::Invalid("uuid"));
            }
            Ok(Dynamic::Bytes(bytes.to_vec()))
        }

        "time_recv" => {
            let micros = be_i64(bytes, "time")?;
            let (hours, minutes, seconds) = seconds_to_time(micros / 1_000_000);
            Ok(Dynamic::Array(vec![
                Dynamic::Int(hours),
                Dynamic::Int(minutes),
                Dynamic::Int(seconds),
                Dynamic::Int(micros % 1_000_000),
            ]))
        }

        "date_recv" => {
            let days = be_i32(bytes, "date")?;
            let (year, month, day) = gregorian_days_to_date(i64::from(days) + POSTGRES_GD_EPOCH);
            if !(1..=12).contains(&month) {
                return Err(DecodeError::InvalidMonth);
            }
            Ok(Dynamic::Array(vec![
                Dynamic::Int(year),
                Dynamic::Int(month),
                Dynamic::Int(day),
            ]))
        }

        "timestamp_recv" | "timestamptz_recv" => {
            let micros = be_i64(bytes, "timestamp")?;
            Ok(decode_timestamp(micros))
        }

        "interval_recv" => {
            if bytes.len() != 16 {
                return Err(DecodeError::Invalid("interval"));
            }
            let micros = be_i64(&bytes[..8], "interval")?;
            let days = be_i32(&bytes[8..12], "interval")?;
            let months = be_i32(&bytes[12..16], "interval")?;
            Ok(Dynamic::Array(vec![
                Dynamic::Int(i64::from(months)),
                Dynamic::Int(i64::from(days)),
                Dynamic::Int(micros),
            ]))
        }

        "array_recv" => decode_array(bytes, info),

        _ => Err(DecodeError::UnsupportedType),
    }
}

/// Map the wire microsecond count to microseconds since the Unix epoch,
/// with the two extreme i64 values reserved for the infinities.
fn decode_timestamp(micros: i64) -> Dynamic {
    match micros {
        i64::MAX => Dynamic::String("infinity".to_string()),
        i64::MIN => Dynamic::String("-infinity".to_string()),
        n => Dynamic::Int(
            (n / 1_000_000 + POSTGRES_GS_EPOCH - GS_TO_UNIX_EPOCH) * 1_000_000 + n % 1_000_000,
        ),
    }
}

fn decode_utf8(bytes: &[u8], what: &'static str) -> Result<Dynamic, DecodeError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(Dynamic::String(s.to_string())),
        Err(_) => Err(DecodeError::Invalid(what)),
    }
}

/// Round to `places` decimal digits after the point. The wire carries exact
/// IEEE 754; callers that need the raw bit pattern decode the bytes
/// themselves instead of going through [`Dynamic`].
fn round_decimals(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = x * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        x
    }
}

fn decode_array(bytes: &[u8], info: &TypeInfo) -> Result<Dynamic, DecodeError> {
    let elem_type = info
        .elem_type
        .as_deref()
        .ok_or(DecodeError::ElemTypeMissing)?;

    let mut reader = Reader::new(bytes);
    let num_dims = reader.i32("array")?;
    let _flags = reader.i32("array")?;
    let _elem_oid = reader.i32("array")?;
    let num_dims = usize::try_from(num_dims).map_err(|_| DecodeError::Invalid("array"))?;
    for _ in 0..num_dims {
        let _dim_len = reader.i32("array")?;
        let _lower_bound = reader.i32("array")?;
    }

    let mut elements = Vec::new();
    while !reader.is_empty() {
        let size = reader.i32("array")?;
        if size == -1 {
            elements.push(Dynamic::Null);
            continue;
        }
        let size = usize::try_from(size).map_err(|_| DecodeError::Invalid("array"))?;
        let payload = reader.take(size, "array")?;
        elements.push(decode(payload, elem_type)?);
    }
    Ok(Dynamic::Array(elements))
}
