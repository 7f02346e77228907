//! Segment-by-segment parser.
//!
//! The date is mandatory. Every later segment is an optional extension of
//! the prefix recognised so far: it is either `Matched`,
//! `Absent` (stop at the previous checkpoint, not an error), or
//! `Fatal` once its introducing separator was seen.

use super::{COLON, Fields, HYPHEN, Marker, PERIOD, Parsed, TIME_PREFIX, scan_fraction};
use crate::Span;
use crate::digits::{scan_four, scan_two};
use crate::error::{Error, ErrorKind};

const DATE_LEN: usize = 10;

enum Segment {
    /// Recognised; holds the cursor just past the segment.
    Matched(usize),
    /// The next byte does not start this segment.
    Absent,
    Fatal(Error),
}

impl From<Result<usize, Error>> for Segment {
    fn from(result: Result<usize, Error>) -> Self {
        match result {
            Ok(next) => Segment::Matched(next),
            Err(err) => Segment::Fatal(err),
        }
    }
}

impl Segment {
    #[inline]
    fn optional(self) -> Result<Option<usize>, Error> {
        match self {
            Segment::Matched(next) => Ok(Some(next)),
            Segment::Absent => Ok(None),
            Segment::Fatal(err) => Err(err),
        }
    }
}

fn fatal(kind: ErrorKind, start: usize, end: usize) -> Error {
    trace!("sequential parser rejected input at {start}..{end}: {kind}");
    (kind, Span::at(start, end)).into()
}

fn two(input: &[u8], at: usize, field: &'static str) -> Result<(u8, usize), Error> {
    if input.len() < at + 2 {
        return Err(fatal(ErrorKind::UnexpectedEof, at, input.len()));
    }
    scan_two(input, at).ok_or_else(|| fatal(ErrorKind::InvalidDigits(field), at, at + 2))
}

fn separator(input: &[u8], at: usize, expected: u8) -> Result<usize, Error> {
    match input.get(at) {
        Some(&b) if b == expected => Ok(at + 1),
        Some(_) => Err(fatal(ErrorKind::Expected(expected as char), at, at + 1)),
        None => Err(fatal(ErrorKind::UnexpectedEof, at, at)),
    }
}

/// `YYYY-MM-DD`, the mandatory start of every timestamp.
fn date(input: &[u8], fields: &mut Fields) -> Result<usize, Error> {
    if input.len() < DATE_LEN {
        return Err(fatal(ErrorKind::UnexpectedEof, 0, input.len()));
    }
    let (year, at) =
        scan_four(input, 0).ok_or_else(|| fatal(ErrorKind::InvalidDigits("year"), 0, 4))?;
    let at = separator(input, at, HYPHEN)?;
    let (month, at) = two(input, at, "month")?;
    let at = separator(input, at, HYPHEN)?;
    let (day, at) = two(input, at, "day")?;
    fields.year = year;
    fields.month = month;
    fields.day = day;
    Ok(at)
}

/// `Thh:mm` following the date.
fn time(input: &[u8], at: usize, fields: &mut Fields) -> Segment {
    let Some(&byte) = input.get(at) else {
        return Segment::Absent;
    };
    if Marker::from_byte(byte).is_some() {
        return Segment::Fatal(fatal(ErrorKind::OffsetWithoutTime, at, at + 1));
    }
    if byte != TIME_PREFIX {
        return Segment::Absent;
    }
    hour_minute(input, at + 1, fields).into()
}

fn hour_minute(input: &[u8], at: usize, fields: &mut Fields) -> Result<usize, Error> {
    let (hour, next) = two(input, at, "hour")?;
    let next = separator(input, next, COLON)?;
    let (minute, next) = two(input, next, "minute")?;
    fields.hour = hour;
    fields.minute = minute;
    Ok(next)
}

/// `:ss` following the minutes.
fn seconds(input: &[u8], at: usize, fields: &mut Fields) -> Segment {
    if input.get(at) != Some(&COLON) {
        return Segment::Absent;
    }
    two(input, at + 1, "second")
        .map(|(second, next)| {
            fields.second = second;
            next
        })
        .into()
}

/// `.s` following the seconds, any number of digits but at least one.
fn fraction(input: &[u8], at: usize, fields: &mut Fields) -> Segment {
    if input.get(at) != Some(&PERIOD) {
        return Segment::Absent;
    }
    let (fraction, next) = scan_fraction(input, at + 1);
    if next == at + 1 {
        let end = (at + 2).min(input.len());
        return Segment::Fatal(fatal(ErrorKind::EmptyFraction, at, end));
    }
    fields.fraction = fraction;
    Segment::Matched(next)
}

/// `Z` or `±hh:mm` following any time segment.
fn offset(input: &[u8], at: usize, fields: &mut Fields) -> Segment {
    let marker = match input.get(at).copied().and_then(Marker::from_byte) {
        Some(marker) => marker,
        None => return Segment::Absent,
    };
    fields.marker = Some(marker);
    if marker == Marker::Utc {
        return Segment::Matched(at + 1);
    }
    offset_hours_minutes(input, at + 1, fields).into()
}

fn offset_hours_minutes(input: &[u8], at: usize, fields: &mut Fields) -> Result<usize, Error> {
    let (hours, next) = two(input, at, "offset hours")?;
    let next = separator(input, next, COLON)?;
    let (minutes, next) = two(input, next, "offset minutes")?;
    fields.offset_hours = hours;
    fields.offset_minutes = minutes;
    Ok(next)
}

/// Scans the longest timestamp prefix of `input`, reporting why it failed.
pub fn scan(input: &[u8]) -> Result<Parsed, Error> {
    let mut fields = Fields::default();

    let mut checkpoint = date(input, &mut fields)?;

    checkpoint = match time(input, checkpoint, &mut fields) {
        Segment::Matched(next) => next,
        Segment::Absent => return fields.finish(checkpoint),
        Segment::Fatal(err) => return Err(err),
    };

    if let Some(next) = seconds(input, checkpoint, &mut fields).optional()? {
        checkpoint = next;
        if let Some(next) = fraction(input, checkpoint, &mut fields).optional()? {
            checkpoint = next;
        }
    }

    if let Some(next) = offset(input, checkpoint, &mut fields).optional()? {
        checkpoint = next;
    }

    fields.finish(checkpoint)
}

/// Parses the longest timestamp prefix of `input`.
pub fn parse(input: &[u8]) -> Option<Parsed> {
    scan(input).ok()
}
