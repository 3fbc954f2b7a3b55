//! Byte-buffer primitives shared by the encoder and decoder.
//!
//! All wire integers are big-endian; every encoded value is framed by a
//! signed 32-bit length with `-1` reserved for SQL `NULL`. Writers build on
//! [`bytes::BufMut`]; readers are explicit checked conversions so a short or
//! oversized payload surfaces as a [`DecodeError`] instead of a panic.

use bytes::{BufMut, BytesMut};

use crate::error::DecodeError;

/// Length prefix that denotes SQL `NULL` on the wire.
pub(crate) const NULL_LEN: i32 = -1;

/// The four bytes an encoded `NULL` occupies: `NULL_LEN` and no payload.
pub(crate) const NULL_FRAME: [u8; 4] = (-1i32).to_be_bytes();

/// Write `payload` preceded by its big-endian i32 length.
pub(crate) fn put_len_prefixed(buf: &mut BytesMut, payload: &[u8]) {
    buf.put_i32(payload.len() as i32);
    buf.put_slice(payload);
}

/// Write the `NULL` frame: length `-1`, no payload.
pub(crate) fn put_null(buf: &mut BytesMut) {
    buf.put_i32(NULL_LEN);
}

/// Read a whole payload as one big-endian i16.
pub(crate) fn be_i16(bytes: &[u8], what: &'static str) -> Result<i16, DecodeError> {
    let arr: [u8; 2] = bytes.try_into().map_err(|_| DecodeError::Invalid(what))?;
    Ok(i16::from_be_bytes(arr))
}

/// Read a whole payload as one big-endian i32.
pub(crate) fn be_i32(bytes: &[u8], what: &'static str) -> Result<i32, DecodeError> {
    let arr: [u8; 4] = bytes.try_into().map_err(|_| DecodeError::Invalid(what))?;
    Ok(i32::from_be_bytes(arr))
}

/// Read a whole payload as one big-endian u32.
pub(crate) fn be_u32(bytes: &[u8], what: &'static str) -> Result<u32, DecodeError> {
    let arr: [u8; 4] = bytes.try_into().map_err(|_| DecodeError::Invalid(what))?;
    Ok(u32::from_be_bytes(arr))
}

/// Read a whole payload as one big-endian i64.
pub(crate) fn be_i64(bytes: &[u8], what: &'static str) -> Result<i64, DecodeError> {
    let arr: [u8; 8] = bytes.try_into().map_err(|_| DecodeError::Invalid(what))?;
    Ok(i64::from_be_bytes(arr))
}

/// Read a whole payload as one IEEE 754 binary32.
pub(crate) fn be_f32(bytes: &[u8], what: &'static str) -> Result<f32, DecodeError> {
    let arr: [u8; 4] = bytes.try_into().map_err(|_| DecodeError::Invalid(what))?;
    Ok(f32::from_be_bytes(arr))
}

/// Read a whole payload as one IEEE 754 binary64.
pub(crate) fn be_f64(bytes: &[u8], what: &'static str) -> Result<f64, DecodeError> {
    let arr: [u8; 8] = bytes.try_into().map_err(|_| DecodeError::Invalid(what))?;
    Ok(f64::from_be_bytes(arr))
}

/// Sequential reader over a multi-field payload (the array container).
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the next four bytes as a big-endian i32.
    pub(crate) fn i32(&mut self, what: &'static str) -> Result<i32, DecodeError> {
        let bytes = self.take(4, what)?;
        be_i32(bytes, what)
    }

    /// Consume the next `n` bytes.
    pub(crate) fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8], DecodeError> {
        if self.buf.len() < n {
            return Err(DecodeError::Invalid(what));
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_prefix_framing() {
        let mut buf = BytesMut::new();
        put_len_prefixed(&mut buf, &[0xAA, 0xBB]);
        assert_eq!(&buf[..], &[0, 0, 0, 2, 0xAA, 0xBB]);
    }

    #[test]
    fn null_frame() {
        let mut buf = BytesMut::new();
        put_null(&mut buf);
        assert_eq!(&buf[..], &NULL_FRAME);
        assert_eq!(NULL_FRAME, [0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn exact_width_reads() {
        assert_eq!(be_i16(&[0x00, 0x2A], "int2").unwrap(), 42);
        assert_eq!(be_i32(&[0xFF, 0xFF, 0xFF, 0xFF], "int4").unwrap(), -1);
        assert_eq!(be_u32(&[0xFF, 0xFF, 0xFF, 0xFF], "oid").unwrap(), u32::MAX);
        assert_eq!(be_i64(&[0, 0, 0, 0, 0, 0, 0, 7], "int8").unwrap(), 7);
        assert_eq!(be_f64(&1.5f64.to_be_bytes(), "float8").unwrap(), 1.5);
    }

    #[test]
    fn wrong_width_is_rejected() {
        assert_eq!(be_i32(&[0, 0, 1], "int4"), Err(DecodeError::Invalid("int4")));
        assert_eq!(
            be_i32(&[0, 0, 0, 1, 0], "int4"),
            Err(DecodeError::Invalid("int4"))
        );
        assert_eq!(be_f32(&[1, 2], "float4"), Err(DecodeError::Invalid("float4")));
    }

    #[test]
    fn reader_consumes_in_order() {
        let data = [0u8, 0, 0, 5, 0xDE, 0xAD];
        let mut r = Reader::new(&data);
        assert_eq!(r.i32("array").unwrap(), 5);
        assert_eq!(r.take(2, "array").unwrap(), &[0xDE, 0xAD]);
        assert!(r.is_empty());
        assert_eq!(r.i32("array"), Err(DecodeError::Invalid("array")));
    }
}
