use super::*;

#[test]
fn display_all_error_kinds() {
    let cases: Vec<(ErrorKind, &str)> = vec![
        (ErrorKind::UnexpectedEof, "unexpected-eof"),
        (ErrorKind::InvalidDigits("year"), "invalid-digits"),
        (ErrorKind::Expected(':'), "expected"),
        (ErrorKind::OffsetWithoutTime, "offset-without-time"),
        (ErrorKind::EmptyFraction, "empty-fraction"),
        (ErrorKind::OutOfRange("month"), "out-of-range"),
        (ErrorKind::TrailingInput, "trailing-input"),
    ];
    for (kind, expected) in cases {
        assert_eq!(kind.to_string(), expected);
        assert_eq!(format!("{kind:?}"), expected);
    }
}

#[test]
fn display_error_messages() {
    let cases: Vec<(ErrorKind, &str)> = vec![
        (ErrorKind::UnexpectedEof, "unexpected end of input"),
        (ErrorKind::InvalidDigits("day"), "expected digits for 'day'"),
        (ErrorKind::Expected('-'), "expected separator `-`"),
        (
            ErrorKind::OffsetWithoutTime,
            "utc offset cannot follow a date without a time of day",
        ),
        (
            ErrorKind::EmptyFraction,
            "fractional seconds require at least one digit",
        ),
        (ErrorKind::OutOfRange("hour"), "out of range of 'hour'"),
        (
            ErrorKind::TrailingInput,
            "unexpected trailing input after timestamp",
        ),
    ];
    for (kind, expected) in cases {
        let err = Error::from((kind, Span::new(0, 1)));
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn from_kind_has_empty_span() {
    let err = Error::from(ErrorKind::OutOfRange("offset"));
    assert!(err.span.is_empty());
    let err: Error = (ErrorKind::Expected('T'), Span::new(10, 11)).into();
    assert_eq!(err.span, Span::new(10, 11));
    assert_eq!(err.kind, ErrorKind::Expected('T'));
}
