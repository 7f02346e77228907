//! Flexible ISO 8601 timestamp parsing.
//!
//! Accepted forms, all ASCII:
//!
//! ```text
//! YYYY-MM-DD                  1997-07-16
//! YYYY-MM-DDThh:mm            1997-07-16T19:20
//! YYYY-MM-DDThh:mm:ss         1997-07-16T19:20:30
//! YYYY-MM-DDThh:mm:ss.s       1997-07-16T19:20:30.45
//! YYYY-MM-DDThh:mmTZD         1997-07-16T19:20+01:00
//! YYYY-MM-DDThh:mm:ssTZD      1997-07-16T19:20:30-01:00
//! YYYY-MM-DDThh:mm:ss.sTZD    1997-07-16T19:20:30.45Z
//! ```
//!
//! Parsing stops at the longest recognised prefix; whatever follows is left
//! for the caller and reported through [`Parsed::consumed`]. Once a separator
//! (`T`, `:`, `.`, `+`, `-`) has been taken, the segment it introduces is
//! mandatory. An offset directly after the date is always an error.
//!
//! Two independent implementations of the grammar are provided, see
//! [`Variant`]. They agree on every input.

use crate::calendar::{compose_local, compose_utc, compose_with_offset};
use crate::digits::digit;
use crate::error::Error;
use crate::time::{Date, Time, Timestamp, TimestampKind, UtcOffset};

pub mod sequential;
pub mod state_machine;

#[cfg(test)]
#[path = "./parse_tests.rs"]
mod tests;

pub(crate) const HYPHEN: u8 = b'-';
pub(crate) const COLON: u8 = b':';
pub(crate) const PERIOD: u8 = b'.';
pub(crate) const PLUS: u8 = b'+';
pub(crate) const MINUS: u8 = b'-';
pub(crate) const TIME_PREFIX: u8 = b'T';
pub(crate) const UTC_MARKER: u8 = b'Z';

/// Fraction digits kept; further digits are consumed but truncated.
pub const MAX_FRACTION_DIGITS: u8 = 9;

/// Result of a successful parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Parsed {
    /// The composed timestamp.
    pub value: Timestamp,
    /// Length of the recognised prefix of the input.
    pub consumed: usize,
    /// How the offset was given.
    pub kind: TimestampKind,
}

/// Selects one of the two parser implementations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Segment by segment scan, see [`sequential`].
    #[default]
    Sequential,
    /// Explicit state machine, see [`state_machine`].
    StateMachine,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Sequential, Variant::StateMachine];

    pub fn parse(self, input: &[u8]) -> Option<Parsed> {
        match self {
            Variant::Sequential => sequential::parse(input),
            Variant::StateMachine => state_machine::parse(input),
        }
    }
}

/// Parses the longest timestamp prefix of `input` with the default [`Variant`].
pub fn parse(input: &[u8]) -> Option<Parsed> {
    Variant::default().parse(input)
}

/// The byte that decides how the zone portion of a timestamp is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Marker {
    Utc,
    Plus,
    Minus,
}

impl Marker {
    #[inline]
    pub(crate) fn from_byte(byte: u8) -> Option<Marker> {
        match byte {
            UTC_MARKER => Some(Marker::Utc),
            PLUS => Some(Marker::Plus),
            MINUS => Some(Marker::Minus),
            _ => None,
        }
    }
}

/// Fractional seconds as scanned, before scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Fraction {
    value: u32,
    /// Digits kept in `value`, at most [`MAX_FRACTION_DIGITS`].
    digits: u8,
}

impl Fraction {
    pub(crate) fn nanoseconds(self) -> u32 {
        self.value * 10u32.pow((MAX_FRACTION_DIGITS - self.digits) as u32)
    }
}

/// Greedily consumes the digits starting at `at`.
///
/// Returns the fraction and the offset past the last digit, which equals `at`
/// when there were none.
pub(crate) fn scan_fraction(input: &[u8], at: usize) -> (Fraction, usize) {
    let mut fraction = Fraction::default();
    let mut i = at;
    while let Some(d) = input.get(i).copied().and_then(digit) {
        if fraction.digits < MAX_FRACTION_DIGITS {
            fraction.value = fraction.value * 10 + d as u32;
            fraction.digits += 1;
        }
        i += 1;
    }
    (fraction, i)
}

/// Values accumulated while scanning, shared by both parsers.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Fields {
    pub(crate) year: u16,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    pub(crate) fraction: Fraction,
    pub(crate) marker: Option<Marker>,
    pub(crate) offset_hours: u8,
    pub(crate) offset_minutes: u8,
}

impl Fields {
    /// Hands the scanned fields to the calendar composer.
    pub(crate) fn finish(&self, consumed: usize) -> Result<Parsed, Error> {
        let date = Date {
            year: self.year,
            month: self.month,
            day: self.day,
        };
        let time = Time {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            nanosecond: self.fraction.nanoseconds(),
        };
        let (value, kind) = match self.marker {
            None => (compose_local(date, time)?, TimestampKind::Unspecified),
            Some(Marker::Utc) => (compose_utc(date, time)?, TimestampKind::Utc),
            Some(sign @ (Marker::Plus | Marker::Minus)) => {
                let offset = UtcOffset {
                    negative: sign == Marker::Minus,
                    hours: self.offset_hours,
                    minutes: self.offset_minutes,
                };
                (
                    compose_with_offset(date, time, offset)?,
                    TimestampKind::Local,
                )
            }
        };
        debug_assert_eq!(value.kind(), kind);
        Ok(Parsed {
            value: value.with_subsecond_precision(self.fraction.digits),
            consumed,
            kind,
        })
    }
}
