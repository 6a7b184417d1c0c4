//! Birth date parsing and validation.
//!
//! The only accepted textual form is `DD.MM.YYYY`. Day and month may be
//! written with one or two digits; the year always has four. Calendar
//! validity (month lengths, leap years) is checked against the proleptic
//! Gregorian calendar.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use crate::error::{DateGroup, DomainError, ParseError};

/// A validated calendar date of birth.
///
/// Only constructible through [`BirthDate::parse`] or
/// [`BirthDate::from_dmy`], so every value is a real date with a
/// positive four-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate {
    date: NaiveDate,
}

impl BirthDate {
    /// Parse a `DD.MM.YYYY` string. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        let groups: Vec<&str> = trimmed.split('.').collect();
        let [day, month, year] = groups.as_slice() else {
            return Err(ParseError::Shape {
                input: input.to_string(),
            });
        };

        let day = parse_group(day, DateGroup::Day)?;
        let month = parse_group(month, DateGroup::Month)?;
        let year = parse_group(year, DateGroup::Year)?;

        if !(1..=31).contains(&day) {
            return Err(ParseError::OutOfRange {
                group: DateGroup::Day,
                value: day,
            });
        }
        if !(1..=12).contains(&month) {
            return Err(ParseError::OutOfRange {
                group: DateGroup::Month,
                value: month,
            });
        }
        if year == 0 {
            return Err(ParseError::OutOfRange {
                group: DateGroup::Year,
                value: year,
            });
        }

        let date = calendar_date(day, month, year)
            .ok_or(ParseError::NotACalendarDate { day, month, year })?;
        Ok(Self { date })
    }

    /// Build from numeric components.
    ///
    /// Unlike [`BirthDate::parse`], invalid components here are a caller
    /// bug rather than bad user input.
    pub fn from_dmy(day: u32, month: u32, year: u32) -> Result<Self, DomainError> {
        if !(1..=9999).contains(&year) {
            return Err(DomainError::InvalidDate { day, month, year });
        }
        calendar_date(day, month, year)
            .map(|date| Self { date })
            .ok_or(DomainError::InvalidDate { day, month, year })
    }

    /// Day of month, 1..=31.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Month, 1..=12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Year, 1..=9999.
    pub fn year(&self) -> u32 {
        self.date.year_ce().1
    }

    /// Calendar weekday.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// The eight digits of `DDMMYYYY`, zero-padded.
    pub fn digits(&self) -> [u8; 8] {
        let (d, m, y) = (self.day(), self.month(), self.year());
        [
            (d / 10) as u8,
            (d % 10) as u8,
            (m / 10) as u8,
            (m % 10) as u8,
            (y / 1000 % 10) as u8,
            (y / 100 % 10) as u8,
            (y / 10 % 10) as u8,
            (y % 10) as u8,
        ]
    }
}

fn calendar_date(day: u32, month: u32, year: u32) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_group(text: &str, group: DateGroup) -> Result<u32, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::NonNumeric {
            group,
            text: text.to_string(),
        });
    }
    let (ok, expected) = match group {
        DateGroup::Day | DateGroup::Month => (text.len() <= 2, "1 or 2"),
        DateGroup::Year => (text.len() == 4, "4"),
    };
    if !ok {
        return Err(ParseError::GroupLength {
            group,
            len: text.len(),
            expected,
        });
    }
    // At most four ASCII digits, cannot overflow.
    Ok(text.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
}

impl FromStr for BirthDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day(), self.month(), self.year())
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
