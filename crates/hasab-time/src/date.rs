//! Proleptic Gregorian `Date` type.
//!
//! Dates are stored as a serial day number (a *rata die*): serial 1 is
//! January 1 of year 1 in the proleptic Gregorian calendar, and every later
//! day adds one.  Working on serials keeps day differences and weekday
//! computation trivial and lets other calendars (the Ethiopian one in
//! particular) convert through a shared day count.
//!
//! # Valid range
//! Years 100 through 9999.  The lower bound keeps every date's Ethiopian
//! year positive; the upper bound is the last four-digit year.

use std::str::FromStr;

use hasab_core::errors::{Error, Result};

use crate::weekday::Weekday;

/// A Gregorian calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 100.
    pub const MIN: Date = Date(serial_from_ymd(100, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(9999, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial day number (serial 1 = 0001-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::InvalidDate(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year (100–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(100..=9999).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "year {year} out of range [100, 9999]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Today's date according to the local clock.
    pub fn today() -> Result<Self> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial day number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday.
        Weekday::from_days_since_monday((self.0 - 1).rem_euclid(7) as u8)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => Err(Error::InvalidDate(format!(
                "date arithmetic overflow adding {n} days"
            ))),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the latest date on or before `self` that falls on `weekday`.
    pub fn on_or_before(self, weekday: Weekday) -> Result<Self> {
        let back = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self.add_days(-back)
    }

    /// Return the earliest date strictly after `self` that falls on `weekday`.
    pub fn next_after(self, weekday: Weekday) -> Result<Self> {
        let ahead = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(if ahead == 0 { 7 } else { ahead })
    }

    /// ISO-8601 `YYYY-MM-DD` rendering.
    pub fn to_iso_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}-{d:02}")
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{d} {} {y}", MONTH_NAMES[m as usize - 1])
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD` or `DD/MM/YYYY`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (year, month, day) = if s.contains('/') {
            let mut parts = s.split('/');
            let d = parts.next();
            let m = parts.next();
            let y = parts.next();
            match (y, m, d, parts.next()) {
                (Some(y), Some(m), Some(d), None) => (y, m, d),
                _ => return Err(Error::Parse(s.to_string())),
            }
        } else {
            let mut parts = s.split('-');
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(y), Some(m), Some(d), None) => (y, m, d),
                _ => return Err(Error::Parse(s.to_string())),
            }
        };
        let parse_err = |_| Error::Parse(s.to_string());
        Date::from_ymd(
            year.parse().map_err(parse_err)?,
            month.parse().map_err(parse_err)?,
            day.parse().map_err(parse_err)?,
        )
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        // chrono counts 0001-01-01 as day 1 of the common era, as we do.
        Date::from_serial(d.num_days_from_ce())
    }
}

impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        chrono::NaiveDate::from_num_days_from_ce_opt(d.0)
            .ok_or_else(|| Error::InvalidDate(format!("{d:?} not representable")))
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_str(&self.to_iso_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial day number.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let prior = year as i32 - 1;
    let mut serial = 365 * prior + prior / 4 - prior / 100 + prior / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial day number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Peel off 400-, 100-, 4- and 1-year cycles.
    let d0 = serial - 1;
    let (n400, d1) = (d0.div_euclid(DAYS_IN_400_YEARS), d0.rem_euclid(DAYS_IN_400_YEARS));
    let (n100, d2) = (d1 / DAYS_IN_100_YEARS, d1 % DAYS_IN_100_YEARS);
    let (n4, d3) = (d2 / DAYS_IN_4_YEARS, d2 % DAYS_IN_4_YEARS);
    let n1 = d3 / 365;
    let mut year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // The last day of a leap cycle belongs to the year that just ended.
    if n100 != 4 && n1 != 4 {
        year += 1;
    }
    let year = year as u16;

    let mut remaining = serial - serial_from_ymd(year, 1, 1) + 1;
    let mut month = 1u8;
    loop {
        let days = days_in_month(year, month) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        month += 1;
    }
    (year, month, remaining as u8)
}

const DAYS_IN_4_YEARS: i32 = 4 * 365 + 1;
const DAYS_IN_100_YEARS: i32 = 25 * DAYS_IN_4_YEARS - 1;
const DAYS_IN_400_YEARS: i32 = 4 * DAYS_IN_100_YEARS + 1;

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ── Tests ─────────────────────────────────────────────────────────────────────
