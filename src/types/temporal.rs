//! Temporal conversions for PostgreSQL wire values.
//!
//! PostgreSQL stores dates as days and timestamps as microseconds relative
//! to 2000-01-01, while callers think in the Unix epoch. This module holds
//! the calendar math bridging the two: proleptic Gregorian day counts
//! (day 0 is 0000-01-01, so 2000-01-01 is day 730_485), time-of-day
//! decomposition, and the instant/duration types the codec shifts around.

use serde::{Deserialize, Serialize};

/// 2000-01-01 as a Gregorian day count.
pub const POSTGRES_GD_EPOCH: i64 = 730_485;

/// 1970-01-01 as a Gregorian day count.
pub const UNIX_GD_EPOCH: i64 = 719_528;

/// 2000-01-01T00:00:00Z in Gregorian seconds.
pub const POSTGRES_GS_EPOCH: i64 = 63_113_904_000;

/// 1970-01-01T00:00:00Z in Gregorian seconds.
pub const GS_TO_UNIX_EPOCH: i64 = 62_167_219_200;

/// Seconds from the Unix epoch to the PostgreSQL epoch.
pub const UNIX_TO_PG_SECONDS: i64 = POSTGRES_GS_EPOCH - GS_TO_UNIX_EPOCH;

const SECONDS_PER_DAY: i64 = 86_400;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const MICROS_PER_SEC: i64 = 1_000_000;

/// Cumulative days before each month in a non-leap year.
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const MONTH_LENGTHS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}

/// Days in all years before `year`, counting from year 0 (a leap year).
fn days_before_year(year: i64) -> i64 {
    365 * year + ceil_div(year, 4) - ceil_div(year, 100) + ceil_div(year, 400)
}

/// Convert a civil date to its Gregorian day count.
///
/// `date_to_gregorian_days(2000, 1, 1)` is [`POSTGRES_GD_EPOCH`].
pub fn date_to_gregorian_days(year: i64, month: i64, day: i64) -> i64 {
    let m = (month.clamp(1, 12) - 1) as usize;
    let mut days = days_before_year(year) + DAYS_BEFORE_MONTH[m] + (day - 1);
    if m >= 2 && is_leap_year(year) {
        days += 1;
    }
    days
}

/// Convert a Gregorian day count back to `(year, month, day)`.
pub fn gregorian_days_to_date(days: i64) -> (i64, i64, i64) {
    // First guess from the 400-year cycle length, then settle exactly.
    let mut year = (400 * days).div_euclid(146_097);
    while days_before_year(year + 1) <= days {
        year += 1;
    }
    while days_before_year(year) > days {
        year -= 1;
    }

    let mut remaining = days - days_before_year(year);
    let leap = is_leap_year(year);
    let mut month = 1;
    for (i, len) in MONTH_LENGTHS.iter().enumerate() {
        let len = if i == 1 && leap { len + 1 } else { *len };
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }
    (year, month, remaining + 1)
}

/// Decompose seconds within a day into `(hours, minutes, seconds)`.
pub fn seconds_to_time(seconds: i64) -> (i64, i64, i64) {
    (seconds / 3600, seconds / 60 % 60, seconds % 60)
}

/// A point in time: seconds and nanoseconds since the Unix epoch.
///
/// Nanoseconds are normalized to `0..1_000_000_000`, so instants before
/// 1970 carry negative seconds and a non-negative subsecond part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    seconds: i64,
    nanos: u32,
}

impl Timestamp {
    /// Build from seconds and nanoseconds since the Unix epoch.
    /// `nanos` outside `0..1_000_000_000` is carried into the seconds.
    pub fn from_unix(seconds: i64, nanos: i64) -> Self {
        Self {
            seconds: seconds + nanos.div_euclid(NANOS_PER_SEC),
            nanos: nanos.rem_euclid(NANOS_PER_SEC) as u32,
        }
    }

    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    pub fn from_unix_micros(micros: i64) -> Self {
        Self {
            seconds: micros.div_euclid(MICROS_PER_SEC),
            nanos: (micros.rem_euclid(MICROS_PER_SEC) * 1000) as u32,
        }
    }

    /// The instant as `(seconds, nanoseconds)` since the Unix epoch.
    pub fn to_unix_seconds_and_nanos(self) -> (i64, i64) {
        (self.seconds, i64::from(self.nanos))
    }

    /// The instant in microseconds since the Unix epoch. Sub-microsecond
    /// precision is truncated.
    pub fn to_unix_micros(self) -> i64 {
        self.seconds * MICROS_PER_SEC + i64::from(self.nanos) / 1000
    }

    /// Shift the instant by a signed duration.
    pub fn add(self, duration: Duration) -> Self {
        let (secs, nanos) = duration.to_seconds_and_nanos();
        Self::from_unix(self.seconds + secs, i64::from(self.nanos) + nanos)
    }

    /// Render at UTC as RFC 3339, e.g. `1970-01-01T00:00:01Z`, with the
    /// subsecond fraction included only when non-zero.
    pub fn to_rfc3339(self) -> String {
        let days = self.seconds.div_euclid(SECONDS_PER_DAY);
        let second_of_day = self.seconds.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = gregorian_days_to_date(days + UNIX_GD_EPOCH);
        let (h, m, s) = seconds_to_time(second_of_day);
        let mut out = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            year, month, day, h, m, s
        );
        if self.nanos != 0 {
            let frac = format!("{:09}", self.nanos);
            out.push('.');
            out.push_str(frac.trim_end_matches('0'));
        }
        out.push('Z');
        out
    }
}

/// A signed span of time: whole seconds plus a nanosecond remainder of the
/// same sign, the remainder strictly less than one second in magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Duration {
    seconds: i64,
    nanos: i64,
}

impl Duration {
    pub fn from_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self::from_seconds(minutes * 60)
    }

    pub fn from_hours(hours: i64) -> Self {
        Self::from_seconds(hours * 3600)
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self {
            seconds: nanos / NANOS_PER_SEC,
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    pub fn to_seconds_and_nanos(self) -> (i64, i64) {
        (self.seconds, self.nanos)
    }
}

/// A wall-clock displacement from UTC, as `(hours, minutes)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub hours: i32,
    pub minutes: i32,
}

impl Offset {
    pub fn new(hours: i32, minutes: i32) -> Self {
        Self { hours, minutes }
    }

    /// The duration that, added to a local wall-clock reading, yields the
    /// UTC instant: positive offsets (east of UTC) shift the instant
    /// earlier, negative offsets later. The minutes component inherits the
    /// direction chosen for the hours, including when `hours == 0`.
    pub fn as_duration(self) -> Duration {
        let sign: i64 = if self.hours < 0 { 1 } else { -1 };
        let minutes = (i64::from(self.hours.abs()) * 60 + i64::from(self.minutes)) * sign;
        Duration::from_minutes(minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_constants_agree() {
        assert_eq!(date_to_gregorian_days(2000, 1, 1), POSTGRES_GD_EPOCH);
        assert_eq!(date_to_gregorian_days(1970, 1, 1), UNIX_GD_EPOCH);
        assert_eq!(POSTGRES_GD_EPOCH * SECONDS_PER_DAY, POSTGRES_GS_EPOCH);
        assert_eq!(UNIX_GD_EPOCH * SECONDS_PER_DAY, GS_TO_UNIX_EPOCH);
        assert_eq!(UNIX_TO_PG_SECONDS, 946_684_800);
    }

    #[test]
    fn day_zero_is_year_zero() {
        assert_eq!(date_to_gregorian_days(0, 1, 1), 0);
        assert_eq!(gregorian_days_to_date(0), (0, 1, 1));
        // Year 0 is a leap year, so 0001-01-01 is day 366.
        assert_eq!(date_to_gregorian_days(1, 1, 1), 366);
    }

    #[test]
    fn civil_date_round_trip() {
        let samples = [
            (0, 1, 1),
            (0, 12, 31),
            (1600, 2, 29),
            (1900, 2, 28),
            (1900, 3, 1),
            (1970, 1, 1),
            (1999, 12, 31),
            (2000, 2, 29),
            (2024, 2, 29),
            (2024, 3, 1),
            (2100, 2, 28),
            (9999, 12, 31),
        ];
        for (y, m, d) in samples {
            let days = date_to_gregorian_days(y, m, d);
            assert_eq!(gregorian_days_to_date(days), (y, m, d), "for {y}-{m}-{d}");
        }
    }

    #[test]
    fn consecutive_days_are_consecutive_dates() {
        let start = date_to_gregorian_days(1999, 2, 26);
        let expected = [
            (1999, 2, 26),
            (1999, 2, 27),
            (1999, 2, 28),
            (1999, 3, 1),
            (1999, 3, 2),
        ];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(gregorian_days_to_date(start + i as i64), *want);
        }
    }

    #[test]
    fn time_of_day_decomposition() {
        assert_eq!(seconds_to_time(0), (0, 0, 0));
        assert_eq!(seconds_to_time(79), (0, 1, 19));
        assert_eq!(seconds_to_time(3_661), (1, 1, 1));
        assert_eq!(seconds_to_time(86_399), (23, 59, 59));
    }

    #[test]
    fn timestamp_micro_round_trip() {
        for micros in [0, 1, -1, 999_999, -999_999, 1_704_067_200_000_000, -62_135_596_800_000_000]
        {
            assert_eq!(Timestamp::from_unix_micros(micros).to_unix_micros(), micros);
        }
    }

    #[test]
    fn timestamp_normalizes_negative_subseconds() {
        let ts = Timestamp::from_unix_micros(-500_000);
        assert_eq!(ts.to_unix_seconds_and_nanos(), (-1, 500_000_000));
    }

    #[test]
    fn add_shifts_across_second_boundaries() {
        let ts = Timestamp::from_unix(10, 900_000_000);
        let later = ts.add(Duration::from_nanos(200_000_000));
        assert_eq!(later.to_unix_seconds_and_nanos(), (11, 100_000_000));
        let earlier = ts.add(Duration::from_nanos(-1_000_000_001));
        assert_eq!(earlier.to_unix_seconds_and_nanos(), (9, 899_999_999));
    }

    #[test]
    fn rfc3339_formatting() {
        assert_eq!(
            Timestamp::from_unix_seconds(1).to_rfc3339(),
            "1970-01-01T00:00:01Z"
        );
        assert_eq!(
            Timestamp::from_unix(1_704_067_200, 500_000_000).to_rfc3339(),
            "2024-01-01T00:00:00.5Z"
        );
        assert_eq!(
            Timestamp::from_unix_seconds(-1).to_rfc3339(),
            "1969-12-31T23:59:59Z"
        );
    }

    #[test]
    fn offset_direction_follows_hour_sign() {
        // East of UTC: the shift runs backwards.
        let (secs, _) = Offset::new(10, 30).as_duration().to_seconds_and_nanos();
        assert_eq!(secs, -630 * 60);
        // West of UTC: forwards, and the minutes ride along with the hours.
        let (secs, _) = Offset::new(-6, 30).as_duration().to_seconds_and_nanos();
        assert_eq!(secs, 390 * 60);
        // Zero hours counts as non-negative.
        let (secs, _) = Offset::new(0, 45).as_duration().to_seconds_and_nanos();
        assert_eq!(secs, -45 * 60);
    }
}
