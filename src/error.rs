#![allow(clippy::question_mark)]
use crate::Span;
use std::fmt::{self, Debug, Display};

#[cfg(test)]
#[path = "./error_tests.rs"]
mod tests;

/// Error describing why a byte sequence is not an acceptable timestamp.
///
/// The [`Option`] returning entry points such as [`parse`](crate::parse) never
/// produce one; it is reported by [`Timestamp::from_str`](std::str::FromStr),
/// [`scan`](crate::parse::sequential::scan) and the calendar composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The error kind
    pub kind: ErrorKind,
    /// The bytes of the offending segment.
    ///
    /// Empty for range failures detected by the composer, which only sees
    /// field values.
    pub span: Span,
}

impl std::error::Error for Error {}

impl From<(ErrorKind, Span)> for Error {
    fn from((kind, span): (ErrorKind, Span)) -> Self {
        Self { kind, span }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind,
            span: Span::default(),
        }
    }
}

/// Errors that can occur while scanning or composing a timestamp.
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input ended inside a segment that must be complete.
    UnexpectedEof,

    /// A fixed-width numeric field contained something other than ASCII
    /// digits. Carries the name of the field.
    InvalidDigits(&'static str),

    /// A mandatory separator was missing.
    Expected(char),

    /// A `Z`, `+` or `-` followed the date directly, without a time of day.
    OffsetWithoutTime,

    /// A `.` after the seconds was not followed by any digit.
    EmptyFraction,

    /// A field scanned cleanly but is outside its calendar range.
    OutOfRange(&'static str),

    /// A valid timestamp was followed by bytes that are not part of it.
    TrailingInput,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::UnexpectedEof => "unexpected-eof",
            Self::InvalidDigits(..) => "invalid-digits",
            Self::Expected(..) => "expected",
            Self::OffsetWithoutTime => "offset-without-time",
            Self::EmptyFraction => "empty-fraction",
            Self::OutOfRange(..) => "out-of-range",
            Self::TrailingInput => "trailing-input",
        };
        f.write_str(text)
    }
}

impl Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

macro_rules! rtry {
    ($($tt:tt)*) => {
        if let Err(err) = $($tt)* {
            return Err(err);
        }
    };
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnexpectedEof => f.write_str("unexpected end of input"),
            ErrorKind::InvalidDigits(field) => {
                rtry!(f.write_str("expected digits for '"));
                rtry!(f.write_str(field));
                f.write_str("'")
            }
            ErrorKind::Expected(c) => {
                rtry!(f.write_str("expected separator `"));
                rtry!(Display::fmt(c, f));
                f.write_str("`")
            }
            ErrorKind::OffsetWithoutTime => {
                f.write_str("utc offset cannot follow a date without a time of day")
            }
            ErrorKind::EmptyFraction => f.write_str("fractional seconds require at least one digit"),
            ErrorKind::OutOfRange(field) => {
                rtry!(f.write_str("out of range of '"));
                rtry!(f.write_str(field));
                f.write_str("'")
            }
            ErrorKind::TrailingInput => f.write_str("unexpected trailing input after timestamp"),
        }
    }
}
