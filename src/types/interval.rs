//! PostgreSQL `interval` values.
//!
//! An interval keeps months, days, and sub-day time as independent signed
//! fields; a month is not a fixed number of days, so no normalization
//! happens across units. On the wire the sub-day part travels as a single
//! microsecond count; in memory it is split into whole seconds plus a
//! microsecond remainder.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::dynamic::Dynamic;
use crate::error::DecodeError;

const MICROS_PER_SEC: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interval {
    pub months: i64,
    pub days: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl Interval {
    pub fn new(months: i64, days: i64, seconds: i64, microseconds: i64) -> Self {
        Self {
            months,
            days,
            seconds,
            microseconds,
        }
    }

    /// An interval of `n` months and nothing else.
    pub fn months(n: i64) -> Self {
        Self {
            months: n,
            ..Self::default()
        }
    }

    /// An interval of `n` days and nothing else.
    pub fn days(n: i64) -> Self {
        Self {
            days: n,
            ..Self::default()
        }
    }

    /// An interval of `n` seconds and nothing else.
    pub fn seconds(n: i64) -> Self {
        Self {
            seconds: n,
            ..Self::default()
        }
    }

    /// An interval of `n` microseconds and nothing else.
    pub fn microseconds(n: i64) -> Self {
        Self {
            microseconds: n,
            ..Self::default()
        }
    }

    /// Reify a decoded interval: a `[months, days, microseconds]` triple as
    /// produced by [`decode`](crate::decode) for `interval_recv`.
    pub fn from_dynamic(value: &Dynamic) -> Result<Self, DecodeError> {
        if let Dynamic::Array(parts) = value {
            if let [Dynamic::Int(months), Dynamic::Int(days), Dynamic::Int(micros)] =
                parts.as_slice()
            {
                return Ok(Self {
                    months: *months,
                    days: *days,
                    seconds: micros / MICROS_PER_SEC,
                    microseconds: micros % MICROS_PER_SEC,
                });
            }
        }
        Err(DecodeError::Invalid("interval"))
    }

    /// Render as an ISO 8601 duration, e.g. `P3M7DT30.2S`.
    ///
    /// The time part carries seconds combined with the microsecond field;
    /// fractional seconds keep positional significance (`20_000` µs is
    /// `.02`, not `.2`) with trailing zeros stripped.
    pub fn to_iso8601(&self) -> String {
        if *self == Self::default() {
            return "PT0S".to_string();
        }

        let mut out = String::from("P");
        let mut digits = itoa::Buffer::new();
        if self.months != 0 {
            out.push_str(digits.format(self.months));
            out.push('M');
        }
        if self.days != 0 {
            out.push_str(digits.format(self.days));
            out.push('D');
        }

        let total_seconds = self.seconds + self.microseconds / MICROS_PER_SEC;
        let micros = self.microseconds % MICROS_PER_SEC;
        if total_seconds == 0 && micros == 0 {
            return out;
        }

        out.push('T');
        if total_seconds == 0 && micros < 0 {
            out.push_str("-0");
        } else {
            out.push_str(digits.format(total_seconds));
        }
        if micros != 0 {
            let frac = format!("{:06}", micros.abs());
            out.push('.');
            out.push_str(frac.trim_end_matches('0'));
        }
        out.push('S');
        out
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, other: Interval) -> Interval {
        Interval {
            months: self.months + other.months,
            days: self.days + other.days,
            seconds: self.seconds + other.seconds,
            microseconds: self.microseconds + other.microseconds,
        }
    }
}
