//! An allocation-free parser for the flexible ISO 8601 date, time and UTC
//! offset format:
//!
//! ```text
//! DATE        = 4DIGIT "-" 2DIGIT "-" 2DIGIT
//! TIME        = 2DIGIT ":" 2DIGIT [ ":" 2DIGIT [ "." 1*DIGIT ] ]
//! OFFSET      = "Z" | ("+" | "-") 2DIGIT ":" 2DIGIT
//! DATETIME    = DATE [ "T" TIME [ OFFSET ] ]
//! ```
//!
//! Parsing works on raw bytes, recognises the longest valid prefix and
//! reports how many bytes it used, so a timestamp embedded in a larger buffer
//! can be read in place. Malformed or impossible values (`1997-02-30`,
//! `25:00`) fail with `None` rather than panicking.
//!
//! # Examples
//!
//! ```
//! use isostamp::{TimeOffset, TimestampKind};
//!
//! let parsed = isostamp::parse(b"1997-07-16T19:20:30.45+01:00, next").unwrap();
//! assert_eq!(parsed.consumed, 28);
//! assert_eq!(parsed.kind, TimestampKind::Local);
//!
//! let ts = parsed.value;
//! assert_eq!(ts.date().year, 1997);
//! assert_eq!(ts.time().nanosecond, 450_000_000);
//! assert_eq!(ts.offset(), Some(TimeOffset::Custom { minutes: 60 }));
//! assert_eq!(ts.to_string(), "1997-07-16T19:20:30.45+01:00");
//!
//! // Trailing bytes are an error when parsing a whole string.
//! assert!("1997-07-16 garbage".parse::<isostamp::Timestamp>().is_err());
//! ```

#[macro_use]
mod logging;

mod calendar;
mod digits;
mod error;
pub mod parse;
mod span;
mod time;

pub use calendar::{
    MAX_OFFSET_MINUTES, MAX_YEAR, MIN_YEAR, compose_local, compose_with_offset, days_in_month,
};
pub use digits::{scan_four, scan_two};
pub use error::{Error, ErrorKind};
pub use parse::{MAX_FRACTION_DIGITS, Parsed, Variant, parse};
pub use span::Span;
pub use time::{Date, MAX_FORMAT_LEN, Time, TimeOffset, Timestamp, TimestampKind, UtcOffset};

#[cfg(feature = "serde")]
pub mod impl_serde;

/// Parses with the segment-by-segment implementation.
pub fn parse_sequential(input: &[u8]) -> Option<Parsed> {
    parse::sequential::parse(input)
}

/// Parses with the state machine implementation.
pub fn parse_state_machine(input: &[u8]) -> Option<Parsed> {
    parse::state_machine::parse(input)
}
