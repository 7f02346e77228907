//! Calendar value types produced by the parsers.

use crate::calendar;
use crate::error::{Error, ErrorKind};
use crate::Span;
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "./time_tests.rs"]
mod tests;

/// A proleptic Gregorian calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

/// A time of day with nanosecond resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl Time {
    /// Midnight, the time of day assumed for a date-only input.
    pub const MIDNIGHT: Time = Time {
        hour: 0,
        minute: 0,
        second: 0,
        nanosecond: 0,
    };
}

/// How the offset of a [`Timestamp`] was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeOffset {
    /// A suffix which, when applied to a time, denotes a UTC offset of 00:00;
    /// often spoken “Zulu” from the ICAO phonetic alphabet representation of the letter “Z”.
    Z,
    /// Explicit numeric offset between local time and UTC.
    Custom { minutes: i16 },
}

/// A signed `hh:mm` offset as written in the input, before validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    pub negative: bool,
    pub hours: u8,
    pub minutes: u8,
}

impl UtcOffset {
    /// `+00:00`
    pub const UTC: UtcOffset = UtcOffset {
        negative: false,
        hours: 0,
        minutes: 0,
    };

    /// Signed total in minutes, east of UTC positive.
    pub fn total_minutes(self) -> i16 {
        let total = self.hours as i16 * 60 + self.minutes as i16;
        if self.negative { -total } else { total }
    }
}

/// Classification of how (or whether) a timezone was given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimestampKind {
    /// No offset marker: the wall clock time is not tied to any zone.
    #[default]
    Unspecified,
    /// The `Z` marker.
    Utc,
    /// An explicit `+hh:mm` or `-hh:mm` offset.
    Local,
}

const NO_OFFSET: i16 = i16::MIN;
const ZULU: i16 = i16::MAX;

/// Longest output of [`Timestamp::format`].
pub const MAX_FORMAT_LEN: usize = 48;

/// Date, time of day and optional UTC offset.
///
/// The date and time are the wall clock values exactly as written; the
/// offset, when present, is kept alongside rather than applied, so the
/// original text can be reproduced. [`Timestamp::unix_seconds`] gives the
/// UTC-anchored instant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    date: Date,
    time: Time,
    /// Number of fraction digits in the original input, capped at nine.
    precision: u8,
    offset_minutes: i16,
}

impl Default for Timestamp {
    /// `0001-01-01T00:00:00`, the earliest representable value.
    fn default() -> Self {
        Timestamp {
            date: Date {
                year: calendar::MIN_YEAR,
                month: 1,
                day: 1,
            },
            time: Time::MIDNIGHT,
            precision: 0,
            offset_minutes: NO_OFFSET,
        }
    }
}

impl Timestamp {
    pub(crate) fn from_parts(date: Date, time: Time, offset: Option<TimeOffset>) -> Timestamp {
        let offset_minutes = match offset {
            None => NO_OFFSET,
            Some(TimeOffset::Z) => ZULU,
            Some(TimeOffset::Custom { minutes }) => minutes,
        };
        Timestamp {
            date,
            time,
            precision: if time.nanosecond == 0 { 0 } else { 9 },
            offset_minutes,
        }
    }

    pub(crate) fn with_zulu(mut self) -> Timestamp {
        self.offset_minutes = ZULU;
        self
    }

    pub(crate) fn with_subsecond_precision(mut self, digits: u8) -> Timestamp {
        self.precision = digits.min(crate::MAX_FRACTION_DIGITS);
        self
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn offset(&self) -> Option<TimeOffset> {
        match self.offset_minutes {
            ZULU => Some(TimeOffset::Z),
            NO_OFFSET => None,
            minutes => Some(TimeOffset::Custom { minutes }),
        }
    }

    /// The offset in minutes east of UTC; zero for `Z` and for no offset.
    pub fn offset_minutes(&self) -> i16 {
        match self.offset() {
            Some(TimeOffset::Custom { minutes }) => minutes,
            _ => 0,
        }
    }

    pub fn kind(&self) -> TimestampKind {
        match self.offset() {
            None => TimestampKind::Unspecified,
            Some(TimeOffset::Z) => TimestampKind::Utc,
            Some(TimeOffset::Custom { .. }) => TimestampKind::Local,
        }
    }

    /// Number of digits in the original fractional seconds, 0 if there were none.
    pub fn subsecond_precision(&self) -> u8 {
        self.precision
    }

    /// Whole seconds since 1970-01-01T00:00:00Z.
    ///
    /// A value without an offset is treated as if it were UTC.
    pub fn unix_seconds(&self) -> i64 {
        calendar::local_seconds(self.date, self.time) - self.offset_minutes() as i64 * 60
    }

    /// Writes the canonical `YYYY-MM-DDThh:mm:ss[.f][Z|±hh:mm]` form into `buf`.
    pub fn format<'a>(&self, buf: &'a mut [u8; MAX_FORMAT_LEN]) -> &'a str {
        let mut pos: usize = 0;

        write_4(buf, &mut pos, self.date.year);
        write_byte(buf, &mut pos, b'-');
        write_2(buf, &mut pos, self.date.month);
        write_byte(buf, &mut pos, b'-');
        write_2(buf, &mut pos, self.date.day);
        write_byte(buf, &mut pos, b'T');
        write_2(buf, &mut pos, self.time.hour);
        write_byte(buf, &mut pos, b':');
        write_2(buf, &mut pos, self.time.minute);
        write_byte(buf, &mut pos, b':');
        write_2(buf, &mut pos, self.time.second);

        if self.precision > 0 {
            write_byte(buf, &mut pos, b'.');
            write_frac(buf, &mut pos, self.time.nanosecond, self.precision);
        }

        match self.offset() {
            None => {}
            Some(TimeOffset::Z) => write_byte(buf, &mut pos, b'Z'),
            Some(TimeOffset::Custom { minutes }) => {
                let sign = if minutes < 0 { b'-' } else { b'+' };
                let abs = minutes.unsigned_abs();
                write_byte(buf, &mut pos, sign);
                write_2(buf, &mut pos, (abs / 60) as u8);
                write_byte(buf, &mut pos, b':');
                write_2(buf, &mut pos, (abs % 60) as u8);
            }
        }

        // SAFETY: every byte written above is ASCII.
        unsafe { std::str::from_utf8_unchecked(&buf[..pos]) }
    }
}

#[inline(always)]
fn write_byte(buf: &mut [u8], pos: &mut usize, b: u8) {
    buf[*pos] = b;
    *pos += 1;
}

#[inline(always)]
fn write_2(buf: &mut [u8], pos: &mut usize, val: u8) {
    buf[*pos] = b'0' + val / 10;
    buf[*pos + 1] = b'0' + val % 10;
    *pos += 2;
}

#[inline(always)]
fn write_4(buf: &mut [u8], pos: &mut usize, val: u16) {
    buf[*pos] = b'0' + (val / 1000) as u8;
    buf[*pos + 1] = b'0' + ((val / 100) % 10) as u8;
    buf[*pos + 2] = b'0' + ((val / 10) % 10) as u8;
    buf[*pos + 3] = b'0' + (val % 10) as u8;
    *pos += 4;
}

/// Writes all nine digits of `nanos`, then keeps only the leading `nd`.
#[inline(always)]
fn write_frac(buf: &mut [u8], pos: &mut usize, nanos: u32, nd: u8) {
    let mut val = nanos;
    for i in (0..9).rev() {
        buf[*pos + i] = b'0' + (val % 10) as u8;
        val /= 10;
    }
    *pos += nd as usize;
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_FORMAT_LEN];
        f.write_str(self.format(&mut buf))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    /// Parses a complete timestamp; unlike [`parse`](crate::parse), trailing
    /// bytes are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = crate::parse::sequential::scan(s.as_bytes())?;
        if parsed.consumed != s.len() {
            return Err((ErrorKind::TrailingInput, Span::at(parsed.consumed, s.len())).into());
        }
        Ok(parsed.value)
    }
}
