//! SQL literal rendering.
//!
//! Turns a [`Value`] into a single-quoted PostgreSQL literal for composing
//! SQL text. This is the boundary helper for callers that cannot use the
//! extended protocol; the binary encoder is the primary path.

use crate::types::temporal::Timestamp;
use crate::value::Value;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Render a value as a PostgreSQL-parseable literal.
pub fn literal(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),

        Value::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),

        Value::Int(n) => {
            let mut digits = itoa::Buffer::new();
            out.push_str(digits.format(*n));
        }

        Value::Float(x) => {
            let mut digits = ryu::Buffer::new();
            out.push_str(digits.format(*x));
        }

        Value::Text(s) => {
            out.push('\'');
            for c in s.chars() {
                if c == '\'' {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('\'');
        }

        Value::Bytea(bytes) => {
            out.push_str("'\\x");
            for byte in bytes {
                out.push(HEX_UPPER[usize::from(byte >> 4)] as char);
                out.push(HEX_UPPER[usize::from(byte & 0x0F)] as char);
            }
            out.push('\'');
        }

        Value::Uuid(bytes) => {
            out.push('\'');
            match uuid::Uuid::from_slice(bytes) {
                Ok(u) => out.push_str(&u.hyphenated().to_string()),
                // Not 128 bits; render what we have rather than guess.
                Err(_) => {
                    for byte in bytes {
                        out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0'));
                        out.push(char::from_digit(u32::from(byte & 0x0F), 16).unwrap_or('0'));
                    }
                }
            }
            out.push('\'');
        }

        Value::Time(t) => {
            out.push('\'');
            out.push_str(&format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second));
            let millis = t.nanos / 1_000_000;
            if millis > 0 {
                if millis < 10 {
                    out.push_str(&format!(".00{}", millis));
                } else if millis < 100 {
                    out.push_str(&format!(".0{}", millis));
                } else {
                    out.push_str(&format!(".{}", millis));
                }
            }
            out.push('\'');
        }

        Value::Date(d) => {
            out.push('\'');
            out.push_str(&format!("{}-{:02}-{:02}", d.year, d.month, d.day));
            out.push('\'');
        }

        Value::Timestamp(ts) => write_timestamp(out, *ts),

        Value::Timestamptz(ts, offset) => {
            write_timestamp(out, ts.add(offset.as_duration()));
        }

        Value::Interval(i) => {
            out.push('\'');
            out.push_str(&i.to_iso8601());
            out.push('\'');
        }

        Value::Array(values) => {
            out.push_str("ARRAY[");
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, v);
            }
            out.push(']');
        }
    }
}

fn write_timestamp(out: &mut String, ts: Timestamp) {
    out.push('\'');
    out.push_str(&ts.to_rfc3339());
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::temporal::{Offset, Timestamp};
    use crate::types::{Date, Interval, Time};

    #[test]
    fn scalars() {
        assert_eq!(literal(&Value::Null), "NULL");
        assert_eq!(literal(&Value::Bool(true)), "TRUE");
        assert_eq!(literal(&Value::Bool(false)), "FALSE");
        assert_eq!(literal(&Value::Int(-42)), "-42");
        assert_eq!(literal(&Value::Float(1.5)), "1.5");
    }

    #[test]
    fn text_escapes_single_quotes() {
        assert_eq!(literal(&Value::from("plain")), "'plain'");
        assert_eq!(literal(&Value::from("it's")), r"'it\'s'");
    }

    #[test]
    fn bytea_hex() {
        assert_eq!(
            literal(&Value::Bytea(vec![0x00, 0xAB, 0xFF])),
            r"'\x00ABFF'"
        );
    }

    #[test]
    fn uuid_hyphenated_lowercase() {
        let u = uuid::Uuid::parse_str("550E8400-E29B-41D4-A716-446655440000").unwrap();
        assert_eq!(
            literal(&Value::from(u)),
            "'550e8400-e29b-41d4-a716-446655440000'"
        );
    }

    #[test]
    fn time_millisecond_padding() {
        assert_eq!(literal(&Value::Time(Time::new(9, 5, 0, 0))), "'09:05:00'");
        assert_eq!(
            literal(&Value::Time(Time::new(9, 5, 0, 7_000_000))),
            "'09:05:00.007'"
        );
        assert_eq!(
            literal(&Value::Time(Time::new(9, 5, 0, 70_000_000))),
            "'09:05:00.070'"
        );
        assert_eq!(
            literal(&Value::Time(Time::new(9, 5, 0, 700_000_000))),
            "'09:05:00.700'"
        );
    }

    #[test]
    fn date_padding() {
        assert_eq!(literal(&Value::Date(Date::new(2024, 3, 7))), "'2024-03-07'");
        assert_eq!(literal(&Value::Date(Date::new(532, 11, 30))), "'532-11-30'");
    }

    #[test]
    fn timestamps() {
        let ts = Timestamp::from_unix_seconds(1);
        assert_eq!(literal(&Value::Timestamp(ts)), "'1970-01-01T00:00:01Z'");
        // The offset shifts the rendered instant the same way the encoder
        // shifts the wire value.
        assert_eq!(
            literal(&Value::Timestamptz(ts, Offset::new(1, 0))),
            "'1969-12-31T23:00:01Z'"
        );
    }

    #[test]
    fn intervals() {
        let i = Interval::new(3, 7, 30, 200_000);
        assert_eq!(literal(&Value::Interval(i)), "'P3M7DT30.2S'");
    }

    #[test]
    fn arrays_recurse() {
        let v = Value::array([
            Value::array([Value::Int(1), Value::Null]),
            Value::array([Value::from("a")]),
        ]);
        assert_eq!(literal(&v), "ARRAY[ARRAY[1, NULL], ARRAY['a']]");
    }

    #[test]
    fn display_matches_literal() {
        let v = Value::from("it's");
        assert_eq!(v.to_string(), literal(&v));
    }
}
