//! The same grammar as [`sequential`](super::sequential), driven by an
//! explicit state machine.
//!
//! Each state names the segment to scan next. States that complete a
//! segment which may legitimately end the timestamp (`Day`, `Minute`,
//! `Second`, `Fraction`, `OffsetMinutes`) are save points: on end of input or
//! an unrecognised byte the machine stops there instead of failing.

use super::{COLON, Fields, HYPHEN, Marker, PERIOD, Parsed, TIME_PREFIX, scan_fraction};
use crate::digits::{scan_four, scan_two};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Fraction,
    OffsetHours,
    OffsetMinutes,
    Invalid,
}

struct Machine<'a> {
    input: &'a [u8],
    cursor: usize,
    fields: Fields,
    proceed: bool,
}

impl Machine<'_> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.cursor).copied()
    }

    /// Two digits followed by `separator`; moves past both.
    fn two_then(&mut self, separator: u8) -> Option<u8> {
        let (value, next) = scan_two(self.input, self.cursor)?;
        if self.input.get(next) != Some(&separator) {
            return None;
        }
        self.cursor = next + 1;
        Some(value)
    }

    fn two(&mut self) -> Option<u8> {
        let (value, next) = scan_two(self.input, self.cursor)?;
        self.cursor = next;
        Some(value)
    }

    /// Decides what follows the save point `current`.
    ///
    /// `continuation` is the separator that extends `current` into a longer
    /// form, together with the state it leads to.
    fn after_save_point(&mut self, current: State, continuation: Option<(u8, State)>) -> State {
        let Some(byte) = self.peek() else {
            self.proceed = false;
            return current;
        };
        if let Some((separator, next)) = continuation {
            if byte == separator {
                self.cursor += 1;
                return next;
            }
        }
        match Marker::from_byte(byte) {
            Some(Marker::Utc) => {
                self.fields.marker = Some(Marker::Utc);
                self.cursor += 1;
                self.proceed = false;
                current
            }
            Some(sign) => {
                self.fields.marker = Some(sign);
                self.cursor += 1;
                State::OffsetHours
            }
            None => {
                self.proceed = false;
                current
            }
        }
    }

    fn step(&mut self, state: State) -> State {
        match state {
            State::Year => match scan_four(self.input, self.cursor) {
                Some((year, next)) if self.input.get(next) == Some(&HYPHEN) => {
                    self.fields.year = year;
                    self.cursor = next + 1;
                    State::Month
                }
                _ => State::Invalid,
            },
            State::Month => match self.two_then(HYPHEN) {
                Some(month) => {
                    self.fields.month = month;
                    State::Day
                }
                None => State::Invalid,
            },
            State::Day => {
                let Some(day) = self.two() else {
                    return State::Invalid;
                };
                self.fields.day = day;
                match self.peek() {
                    Some(TIME_PREFIX) => {
                        self.cursor += 1;
                        State::Hour
                    }
                    // An offset needs a time of day to apply to.
                    Some(byte) if Marker::from_byte(byte).is_some() => State::Invalid,
                    _ => {
                        self.proceed = false;
                        State::Day
                    }
                }
            }
            State::Hour => match self.two_then(COLON) {
                Some(hour) => {
                    self.fields.hour = hour;
                    State::Minute
                }
                None => State::Invalid,
            },
            State::Minute => {
                let Some(minute) = self.two() else {
                    return State::Invalid;
                };
                self.fields.minute = minute;
                self.after_save_point(State::Minute, Some((COLON, State::Second)))
            }
            State::Second => {
                let Some(second) = self.two() else {
                    return State::Invalid;
                };
                self.fields.second = second;
                self.after_save_point(State::Second, Some((PERIOD, State::Fraction)))
            }
            State::Fraction => {
                let (fraction, next) = scan_fraction(self.input, self.cursor);
                if next == self.cursor {
                    return State::Invalid;
                }
                self.fields.fraction = fraction;
                self.cursor = next;
                self.after_save_point(State::Fraction, None)
            }
            State::OffsetHours => match self.two_then(COLON) {
                Some(hours) => {
                    self.fields.offset_hours = hours;
                    State::OffsetMinutes
                }
                None => State::Invalid,
            },
            State::OffsetMinutes => match self.two() {
                Some(minutes) => {
                    self.fields.offset_minutes = minutes;
                    self.proceed = false;
                    State::OffsetMinutes
                }
                None => State::Invalid,
            },
            State::Invalid => {
                self.proceed = false;
                State::Invalid
            }
        }
    }
}

/// Parses the longest timestamp prefix of `input`.
pub fn parse(input: &[u8]) -> Option<Parsed> {
    let mut machine = Machine {
        input,
        cursor: 0,
        fields: Fields::default(),
        proceed: true,
    };
    let mut state = State::Year;

    while machine.proceed {
        if state == State::Invalid {
            trace!("state machine rejected input at byte {}", machine.cursor);
            return None;
        }
        state = machine.step(state);
    }

    match state {
        State::Day
        | State::Minute
        | State::Second
        | State::Fraction
        | State::OffsetMinutes => {}
        State::Year
        | State::Month
        | State::Hour
        | State::OffsetHours
        | State::Invalid => return None,
    }

    machine
        .fields
        .finish(machine.cursor)
        .map_err(|_err| {
            trace!("state machine composed an invalid timestamp: {_err}");
        })
        .ok()
}
