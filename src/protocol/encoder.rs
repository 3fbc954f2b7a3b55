//! Binary encoder: `Value` × `TypeInfo` → length-prefixed wire bytes.
//!
//! Every successful encoding is a big-endian i32 length followed by that
//! many payload bytes; `NULL` is length `-1` with no payload, exactly the
//! shape a `Bind` parameter or `DataRow` column takes on the wire. Non-null
//! values dispatch on the descriptor's `typsend` name and are validated
//! against it before any byte is written: a failed encode produces no
//! output.

use bytes::{BufMut, BytesMut};

use crate::error::EncodeError;
use crate::protocol::wire::{self, put_len_prefixed, put_null};
use crate::type_info::TypeInfo;
use crate::types::temporal::{date_to_gregorian_days, POSTGRES_GD_EPOCH, UNIX_TO_PG_SECONDS};
use crate::value::Value;

/// Encode one value as its length-prefixed binary representation.
pub fn encode(value: &Value, info: &TypeInfo) -> Result<BytesMut, EncodeError> {
    let mut buf = BytesMut::new();
    match value {
        Value::Null => put_null(&mut buf),

        Value::Bool(b) => {
            expect_send(info, "boolsend")?;
            buf.put_i32(1);
            buf.put_u8(u8::from(*b));
        }

        Value::Int(n) => encode_int(&mut buf, *n, info)?,

        Value::Float(x) => encode_float(&mut buf, *x, info)?,

        Value::Text(s) => {
            let accepted = ["varcharsend", "textsend", "charsend", "namesend"];
            if !accepted.contains(&info.typesend.as_str()) {
                return Err(mismatch(format!("'{}'", s), info));
            }
            put_len_prefixed(&mut buf, s.as_bytes());
        }

        Value::Bytea(bytes) => {
            expect_send(info, "byteasend")?;
            put_len_prefixed(&mut buf, bytes);
        }

        Value::Uuid(bytes) => {
            expect_send(info, "uuid_send")?;
            if bytes.len() != 16 {
                return Err(EncodeError::InvalidUuid);
            }
            put_len_prefixed(&mut buf, bytes);
        }

        Value::Date(date) => {
            expect_send(info, "date_send")?;
            let days = date_to_gregorian_days(
                i64::from(date.year),
                i64::from(date.month),
                i64::from(date.day),
            ) - POSTGRES_GD_EPOCH;
            buf.put_i32(4);
            buf.put_i32(days as i32);
        }

        Value::Time(time) => {
            expect_send(info, "time_send")?;
            buf.put_i32(8);
            buf.put_i64(time.to_micros_of_day());
        }

        Value::Timestamp(ts) => {
            expect_send(info, "timestamp_send")?;
            buf.put_i32(8);
            buf.put_i64(pg_micros(*ts));
        }

        Value::Timestamptz(ts, offset) => {
            expect_send(info, "timestamptz_send")?;
            let shifted = ts.add(offset.as_duration());
            buf.put_i32(8);
            buf.put_i64(pg_micros(shifted));
        }

        Value::Interval(interval) => {
            expect_send(info, "interval_send")?;
            buf.put_i32(16);
            buf.put_i64(interval.seconds * 1_000_000 + interval.microseconds);
            buf.put_i32(interval.days as i32);
            buf.put_i32(interval.months as i32);
        }

        Value::Array(values) => {
            expect_send(info, "array_send")?;
            encode_array(&mut buf, values, info)?;
        }
    }
    Ok(buf)
}

/// Microseconds since the PostgreSQL epoch.
fn pg_micros(ts: crate::types::Timestamp) -> i64 {
    let (seconds, nanos) = ts.to_unix_seconds_and_nanos();
    (seconds - UNIX_TO_PG_SECONDS) * 1_000_000 + nanos / 1000
}

fn expect_send(info: &TypeInfo, send: &'static str) -> Result<(), EncodeError> {
    if info.typesend == send {
        Ok(())
    } else {
        Err(mismatch(send, info))
    }
}

fn mismatch(value: impl Into<String>, info: &TypeInfo) -> EncodeError {
    EncodeError::TypeMismatch {
        value: value.into(),
        typesend: info.typesend.clone(),
    }
}

fn encode_int(buf: &mut BytesMut, n: i64, info: &TypeInfo) -> Result<(), EncodeError> {
    match info.typesend.as_str() {
        "oidsend" => {
            let n = u32::try_from(n).map_err(|_| EncodeError::OutOfRange("oid"))?;
            buf.put_i32(4);
            buf.put_u32(n);
        }
        "int2send" => {
            let n = i16::try_from(n).map_err(|_| EncodeError::OutOfRange("int2"))?;
            buf.put_i32(2);
            buf.put_i16(n);
        }
        "int4send" => {
            let n = i32::try_from(n).map_err(|_| EncodeError::OutOfRange("int4"))?;
            buf.put_i32(4);
            buf.put_i32(n);
        }
        "int8send" => {
            buf.put_i32(8);
            buf.put_i64(n);
        }
        _ => return Err(mismatch(n.to_string(), info)),
    }
    Ok(())
}

fn encode_float(buf: &mut BytesMut, x: f64, info: &TypeInfo) -> Result<(), EncodeError> {
    match info.typesend.as_str() {
        "float4send" => {
            buf.put_i32(4);
            buf.put_f32(x as f32);
        }
        "float8send" => {
            buf.put_i32(8);
            buf.put_f64(x);
        }
        _ => return Err(EncodeError::UnsupportedFloatType),
    }
    Ok(())
}

/// Dimension lengths read off the first-element chain. Ragged nesting is
/// not validated; lower bounds are always 1.
fn arr_dims(values: &[Value]) -> Vec<i32> {
    match values.first() {
        None => vec![],
        Some(Value::Array(inner)) => {
            let mut dims = vec![values.len() as i32];
            dims.extend(arr_dims(inner));
            dims
        }
        Some(_) => vec![values.len() as i32],
    }
}

fn encode_array(buf: &mut BytesMut, values: &[Value], info: &TypeInfo) -> Result<(), EncodeError> {
    let elem_type = info
        .elem_type
        .as_deref()
        .ok_or(EncodeError::MissingElemType)?;

    let mut encoded = Vec::with_capacity(values.len());
    let mut has_nulls = false;
    for value in values {
        let bytes = encode(value, elem_type)?;
        has_nulls = has_nulls || bytes[..] == wire::NULL_FRAME;
        encoded.push(bytes);
    }

    let dims = arr_dims(values);
    let mut payload = BytesMut::new();
    payload.put_i32(dims.len() as i32);
    payload.put_i32(i32::from(has_nulls));
    payload.put_i32(elem_type.oid as i32);
    for dim in dims {
        payload.put_i32(dim);
        payload.put_i32(1);
    }
    for bytes in encoded {
        payload.put_slice(&bytes);
    }

    put_len_prefixed(buf, &payload);
    Ok(())
}
