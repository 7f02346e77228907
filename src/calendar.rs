//! Range validation and composition of calendar values.
//!
//! Both parsers funnel their scanned fields through [`compose_local`] or
//! [`compose_with_offset`]; this is where syntactically well formed but
//! impossible values such as `1997-02-30` or `25:00` are rejected.

use crate::error::{Error, ErrorKind};
use crate::time::{Date, Time, TimeOffset, Timestamp, UtcOffset};

#[cfg(test)]
#[path = "./calendar_tests.rs"]
mod tests;

pub const MIN_YEAR: u16 = 1;
pub const MAX_YEAR: u16 = 9999;

/// Largest accepted magnitude of a UTC offset, `14:00`.
pub const MAX_OFFSET_MINUTES: i16 = 14 * 60;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

// Rata die of 1970-01-01 in the computational calendar (years starting in March).
const EPOCH_COMPUTATIONAL_RATA_DIE: i32 = 719_468;

pub(crate) fn is_leap_year(year: u16) -> bool {
    (((year as u64 * 1073750999) as u32) & 3221352463) <= 126976
}

/// Days in `month` of `year`. `month` must be in `1..=12`.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    const DAYS: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[month as usize]
    }
}

/// Days from 1970-01-01 to `date`, negative before the epoch.
pub(crate) fn epoch_days(date: Date) -> i32 {
    let (year, month, day) = (date.year as i32, date.month as i32, date.day as i32);
    // January and February count as months 13 and 14 of the previous year.
    let j = (month <= 2) as i32;
    let year = year - j;
    let month = month + 12 * j;
    let century = year.div_euclid(100);
    let year_days = (1461 * year).div_euclid(4) - century + century.div_euclid(4);
    let month_days = (979 * month - 2919) / 32;
    year_days + month_days + (day - 1) - EPOCH_COMPUTATIONAL_RATA_DIE
}

/// Seconds from 1970-01-01T00:00:00 to the given wall clock, ignoring any offset.
pub(crate) fn local_seconds(date: Date, time: Time) -> i64 {
    epoch_days(date) as i64 * SECONDS_PER_DAY
        + time.hour as i64 * 3600
        + time.minute as i64 * 60
        + time.second as i64
}

fn out_of_range(field: &'static str) -> Error {
    trace!("calendar field out of range: {field}");
    ErrorKind::OutOfRange(field).into()
}

fn validate(date: Date, time: Time) -> Result<(), Error> {
    if date.year < MIN_YEAR || date.year > MAX_YEAR {
        return Err(out_of_range("year"));
    }
    if date.month < 1 || date.month > 12 {
        return Err(out_of_range("month"));
    }
    if date.day < 1 || date.day > days_in_month(date.year, date.month) {
        return Err(out_of_range("day"));
    }
    if time.hour > 23 {
        return Err(out_of_range("hour"));
    }
    if time.minute > 59 {
        return Err(out_of_range("minute"));
    }
    // No leap second allowance.
    if time.second > 59 {
        return Err(out_of_range("second"));
    }
    if time.nanosecond >= NANOS_PER_SECOND {
        return Err(out_of_range("fraction"));
    }
    Ok(())
}

/// Builds a [`Timestamp`] with no offset from wall clock fields.
pub fn compose_local(date: Date, time: Time) -> Result<Timestamp, Error> {
    validate(date, time)?;
    Ok(Timestamp::from_parts(date, time, None))
}

/// Builds a [`Timestamp`] carrying an explicit UTC offset.
///
/// Besides the field ranges checked by [`compose_local`], the offset must be
/// at most `14:00` in magnitude and the UTC instant it denotes must itself
/// fall between `0001-01-01T00:00:00Z` and `9999-12-31T23:59:59.999999999Z`.
pub fn compose_with_offset(date: Date, time: Time, offset: UtcOffset) -> Result<Timestamp, Error> {
    validate(date, time)?;
    if offset.hours > 14 {
        return Err(out_of_range("offset hours"));
    }
    if offset.minutes > 59 {
        return Err(out_of_range("offset minutes"));
    }
    let minutes = offset.total_minutes();
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(out_of_range("offset"));
    }

    let utc = local_seconds(date, time) - minutes as i64 * 60;
    let min = local_seconds(
        Date {
            year: MIN_YEAR,
            month: 1,
            day: 1,
        },
        Time::MIDNIGHT,
    );
    let max = local_seconds(
        Date {
            year: MAX_YEAR,
            month: 12,
            day: 31,
        },
        Time {
            hour: 23,
            minute: 59,
            second: 59,
            nanosecond: 0,
        },
    );
    if utc < min || utc > max {
        return Err(out_of_range("utc instant"));
    }

    Ok(Timestamp::from_parts(
        date,
        time,
        Some(TimeOffset::Custom { minutes }),
    ))
}

/// Same as an offset of `+00:00`, except the result is marked as [`TimeOffset::Z`].
pub(crate) fn compose_utc(date: Date, time: Time) -> Result<Timestamp, Error> {
    Ok(compose_with_offset(date, time, UtcOffset::UTC)?.with_zulu())
}
