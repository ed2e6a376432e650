use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;
use std::str::FromStr;

/// Sex of the holder, carried by the parity of the tenth digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Even digits encode `Female`, odd digits `Male`.
    #[inline]
    pub const fn from_digit(digit: u8) -> Self {
        if digit % 2 == 0 { Self::Female } else { Self::Male }
    }
}

/// Error constructing a [`BirthDate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

/// A real proleptic Gregorian calendar date.
///
/// Field order gives chronological `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month.get()", "day.get()")]
pub struct BirthDate {
    year:  u16,
    month: NonZeroU8,
    day:   NonZeroU8,
}

impl BirthDate {
    /// Creates a date, rejecting months outside 1..=12 and days that do not
    /// exist in that month (leap years included).
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let month_nz = NonZeroU8::new(month).ok_or(DateError::InvalidMonth(month))?;
        let max_day = days_in_month(year, month).ok_or(DateError::InvalidMonth(month))?;

        let day_nz = NonZeroU8::new(day).ok_or(DateError::InvalidDay { year, month, day })?;
        if day > max_day {
            return Err(DateError::InvalidDay { year, month, day });
        }

        Ok(Self {
            year,
            month: month_nz,
            day: day_nz,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns `(year, month, day)`
    pub const fn ymd(&self) -> (u16, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }
}

impl TryFrom<(u16, u8, u8)> for BirthDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<BirthDate> for (u16, u8, u8) {
    fn from(date: BirthDate) -> Self {
        date.ymd()
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(s.to_owned()));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;

        Self::new(year, month, day)
    }
}

impl Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`, or `None` if `month` is not 1..=12.
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    match month {
        FEBRUARY if is_leap_year(year) => Some(FEBRUARY_DAYS_LEAP),
        1..=MAX_MONTH => Some(DAYS_IN_MONTH[month as usize]),
        _ => None,
    }
}
