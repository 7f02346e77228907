use super::*;

fn date(year: u16, month: u8, day: u8) -> Date {
    Date { year, month, day }
}

fn time(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Time {
    Time {
        hour,
        minute,
        second,
        nanosecond,
    }
}

fn offset(negative: bool, hours: u8, minutes: u8) -> UtcOffset {
    UtcOffset {
        negative,
        hours,
        minutes,
    }
}

#[track_caller]
fn expect_range_err(result: Result<Timestamp, Error>, field: &str) {
    match result {
        Err(Error {
            kind: ErrorKind::OutOfRange(name),
            ..
        }) => assert_eq!(name, field),
        other => panic!("expected out-of-range '{field}', got {other:?}"),
    }
}

#[test]
fn leap_year_known_values() {
    for y in [0, 4, 400, 800, 1600, 2000, 2400, 2024, 1996] {
        assert!(is_leap_year(y), "{y} should be a leap year");
    }
    for y in [1, 100, 200, 300, 500, 1900, 2100, 2023, 2025] {
        assert!(!is_leap_year(y), "{y} should not be a leap year");
    }
}

#[test]
#[cfg_attr(miri, ignore)]
fn leap_year_exhaustive() {
    fn is_leap_naive(y: u16) -> bool {
        (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
    }
    for y in 0..=9999 {
        assert_eq!(
            is_leap_year(y),
            is_leap_naive(y),
            "is_leap_year disagreed for year {y}"
        );
    }
}

#[test]
fn month_lengths() {
    let non_leap = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let leap = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for m in 1..=12u8 {
        assert_eq!(days_in_month(2023, m), non_leap[m as usize - 1]);
        assert_eq!(days_in_month(2024, m), leap[m as usize - 1]);
    }
}

#[test]
fn epoch_days_known_values() {
    assert_eq!(epoch_days(date(1970, 1, 1)), 0);
    assert_eq!(epoch_days(date(1969, 12, 31)), -1);
    assert_eq!(epoch_days(date(2000, 1, 1)), 10_957);
    assert_eq!(epoch_days(date(2000, 3, 1)), 11_017);
    assert_eq!(epoch_days(date(1, 1, 1)), -719_162);
    assert_eq!(epoch_days(date(9999, 12, 31)), 2_932_896);
}

#[test]
#[cfg_attr(miri, ignore)]
fn epoch_days_are_contiguous() {
    let mut expected = epoch_days(date(1, 1, 1));
    for year in 1..=9999u16 {
        for month in 1..=12u8 {
            for day in 1..=days_in_month(year, month) {
                assert_eq!(epoch_days(date(year, month, day)), expected);
                expected += 1;
            }
        }
    }
}

#[test]
fn compose_local_accepts_valid_fields() {
    let ts = compose_local(date(1997, 7, 16), time(19, 20, 30, 450_000_000)).unwrap();
    assert_eq!(ts.date(), date(1997, 7, 16));
    assert_eq!(ts.time(), time(19, 20, 30, 450_000_000));
    assert_eq!(ts.offset(), None);

    compose_local(date(1, 1, 1), Time::MIDNIGHT).unwrap();
    compose_local(date(9999, 12, 31), time(23, 59, 59, 999_999_999)).unwrap();
    compose_local(date(2024, 2, 29), Time::MIDNIGHT).unwrap();
}

#[test]
fn compose_local_rejects_each_field() {
    let ok_time = time(12, 0, 0, 0);
    expect_range_err(compose_local(date(0, 1, 1), ok_time), "year");
    expect_range_err(compose_local(date(10000, 1, 1), ok_time), "year");
    expect_range_err(compose_local(date(1997, 0, 1), ok_time), "month");
    expect_range_err(compose_local(date(1997, 13, 1), ok_time), "month");
    expect_range_err(compose_local(date(1997, 1, 0), ok_time), "day");
    expect_range_err(compose_local(date(1997, 1, 32), ok_time), "day");
    expect_range_err(compose_local(date(1997, 2, 29), ok_time), "day");
    expect_range_err(compose_local(date(1900, 2, 29), ok_time), "day");
    expect_range_err(compose_local(date(1997, 4, 31), ok_time), "day");

    let ok_date = date(1997, 7, 16);
    expect_range_err(compose_local(ok_date, time(24, 0, 0, 0)), "hour");
    expect_range_err(compose_local(ok_date, time(0, 60, 0, 0)), "minute");
    expect_range_err(compose_local(ok_date, time(0, 0, 60, 0)), "second");
    expect_range_err(
        compose_local(ok_date, time(0, 0, 0, 1_000_000_000)),
        "fraction",
    );
}

#[test]
fn compose_with_offset_records_signed_minutes() {
    let d = date(1997, 7, 16);
    let t = time(19, 20, 30, 0);
    let ts = compose_with_offset(d, t, offset(false, 1, 0)).unwrap();
    assert_eq!(ts.offset(), Some(TimeOffset::Custom { minutes: 60 }));
    let ts = compose_with_offset(d, t, offset(true, 5, 30)).unwrap();
    assert_eq!(ts.offset(), Some(TimeOffset::Custom { minutes: -330 }));
    let ts = compose_with_offset(d, t, offset(true, 0, 0)).unwrap();
    assert_eq!(ts.offset(), Some(TimeOffset::Custom { minutes: 0 }));
}

#[test]
fn compose_with_offset_bounds() {
    let d = date(2000, 6, 1);
    let t = Time::MIDNIGHT;
    compose_with_offset(d, t, offset(false, 14, 0)).unwrap();
    compose_with_offset(d, t, offset(true, 14, 0)).unwrap();
    compose_with_offset(d, t, offset(false, 13, 59)).unwrap();
    expect_range_err(compose_with_offset(d, t, offset(false, 14, 1)), "offset");
    expect_range_err(compose_with_offset(d, t, offset(true, 15, 0)), "offset hours");
    expect_range_err(compose_with_offset(d, t, offset(false, 99, 0)), "offset hours");
    expect_range_err(compose_with_offset(d, t, offset(false, 1, 60)), "offset minutes");
    // Field validation happens first.
    expect_range_err(
        compose_with_offset(date(2000, 13, 1), t, offset(false, 99, 99)),
        "month",
    );
}

#[test]
fn compose_with_offset_checks_utc_instant() {
    // 0001-01-01T00:30+01:00 is 0000-12-31T23:30Z.
    expect_range_err(
        compose_with_offset(date(1, 1, 1), time(0, 30, 0, 0), offset(false, 1, 0)),
        "utc instant",
    );
    compose_with_offset(date(1, 1, 1), time(1, 0, 0, 0), offset(false, 1, 0)).unwrap();
    compose_with_offset(date(1, 1, 1), Time::MIDNIGHT, offset(true, 1, 0)).unwrap();

    // 9999-12-31T23:00-02:00 is 10000-01-01T01:00Z.
    expect_range_err(
        compose_with_offset(date(9999, 12, 31), time(23, 0, 0, 0), offset(true, 2, 0)),
        "utc instant",
    );
    compose_with_offset(
        date(9999, 12, 31),
        time(23, 59, 59, 999_999_999),
        offset(false, 0, 1),
    )
    .unwrap();
}

#[test]
fn compose_utc_marks_zulu() {
    let ts = compose_utc(date(1997, 7, 16), time(19, 20, 30, 0)).unwrap();
    assert_eq!(ts.offset(), Some(TimeOffset::Z));
    assert_eq!(ts.offset_minutes(), 0);
    expect_range_err(compose_utc(date(1997, 2, 30), Time::MIDNIGHT), "day");
}

#[test]
fn utc_anchoring() {
    let local = compose_local(date(1970, 1, 1), Time::MIDNIGHT).unwrap();
    assert_eq!(local.unix_seconds(), 0);

    let east = compose_with_offset(date(1970, 1, 1), time(1, 0, 0, 0), offset(false, 1, 0)).unwrap();
    assert_eq!(east.unix_seconds(), 0);

    let west = compose_with_offset(date(1969, 12, 31), time(19, 0, 0, 0), offset(true, 5, 0)).unwrap();
    assert_eq!(west.unix_seconds(), 0);

    let ts = compose_utc(date(2000, 1, 1), Time::MIDNIGHT).unwrap();
    assert_eq!(ts.unix_seconds(), 946_684_800);
}
