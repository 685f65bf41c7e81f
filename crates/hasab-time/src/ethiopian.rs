//! Ethiopian (Ge'ez) calendar dates and conversion to and from [`Date`].
//!
//! The Ethiopian year has twelve 30-day months followed by Pagume, which has
//! five days, or six when the year is a leap year (`year % 4 == 3`).  Leap
//! years follow the Julian four-year cycle, so Enkutatash (Meskerem 1) moves
//! against the Gregorian calendar only when a Gregorian century year skips its
//! leap day.  Between March 1900 and February 2100 it falls on September 12
//! in the Gregorian year before a Gregorian leap year and on September 11
//! otherwise.
//!
//! The offset is computed from the epoch rather than looked up, so every
//! year in the [`Date`] range converts.

use hasab_core::errors::{Error, Result};

use crate::date::Date;
use crate::month::EthiopianMonth;

/// Serial day number (see [`Date::serial`]) of Meskerem 1, year 1 of the
/// Ethiopian era: August 29, 8 in the Julian calendar.
pub const ETHIOPIAN_EPOCH: i32 = 2796;

/// Years between the Ethiopian year and the Gregorian year in which it begins.
const NEW_YEAR_OFFSET: i32 = 7;

/// Days in months 1–12 combined.
const DAYS_BEFORE_PAGUME: i32 = 360;

/// Earliest Ethiopian year with days inside the [`Date`] range.
pub const MIN_CONVERTIBLE_YEAR: i32 = 92;

/// Latest Ethiopian year with days inside the [`Date`] range.
pub const MAX_CONVERTIBLE_YEAR: i32 = 9992;

/// A date in the Ethiopian calendar.
///
/// Values are immutable and always valid: they come from the checked
/// constructor [`EthiopianDate::new`] or from converting a [`Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EthiopianDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Whether Ethiopian `year` is a leap year (Pagume has six days).
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 3
}

/// Serial day number of Meskerem 1 of Ethiopian `year`, unchecked.  Only
/// called with years whose serial fits comfortably in `i32`.
fn new_year_serial(year: i32) -> i32 {
    ETHIOPIAN_EPOCH - 1 + 365 * (year - 1) + year.div_euclid(4) + 1
}

/// Gregorian date of Enkutatash (Meskerem 1) falling in `gregorian_year`.
pub fn new_year(gregorian_year: u16) -> Result<Date> {
    Date::from_serial(new_year_serial(gregorian_year as i32 - NEW_YEAR_OFFSET))
}

impl EthiopianDate {
    /// Create a validated Ethiopian date.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] when `month` is outside 1–13 or `day` is outside
    /// the month's length for `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        let m = EthiopianMonth::from_number(month).ok_or_else(|| {
            Error::InvalidDate(format!("Ethiopian month {month} out of range [1, 13]"))
        })?;
        let days_in = m.days(year);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {} {year}",
                m.name()
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Build the date that is the `day_of_year`-th (1-based) day of `year`.
    pub fn from_day_of_year(year: i32, day_of_year: u16) -> Result<Self> {
        if !(1..=366).contains(&day_of_year) {
            return Err(Error::InvalidDate(format!(
                "day {day_of_year} of Ethiopian year {year} does not exist"
            )));
        }
        let offset = day_of_year as i32 - 1;
        let (month, day) = if offset >= DAYS_BEFORE_PAGUME {
            (13, offset - DAYS_BEFORE_PAGUME + 1)
        } else {
            (offset / 30 + 1, offset % 30 + 1)
        };
        Self::new(year, month as u8, day as u8)
    }

    /// Convert a Gregorian date.
    ///
    /// The Ethiopian year is the Gregorian year minus 7 from Enkutatash
    /// onwards and minus 8 before it.  Days elapsed since that Enkutatash
    /// fill 30-day months, with anything from day 360 on belonging to Pagume.
    pub fn from_gregorian(date: Date) -> Self {
        let gregorian_year = date.year() as i32;
        let this_new_year = new_year_serial(gregorian_year - NEW_YEAR_OFFSET);
        let (year, epoch) = if date.serial() >= this_new_year {
            (gregorian_year - NEW_YEAR_OFFSET, this_new_year)
        } else {
            let year = gregorian_year - NEW_YEAR_OFFSET - 1;
            (year, new_year_serial(year))
        };
        let elapsed = date.serial() - epoch;
        let (month, day) = if elapsed >= DAYS_BEFORE_PAGUME {
            (13, elapsed - DAYS_BEFORE_PAGUME + 1)
        } else {
            (elapsed / 30 + 1, elapsed % 30 + 1)
        };
        let e = Self {
            year,
            month: month as u8,
            day: day as u8,
        };
        debug_assert!(
            e.day <= e.ethiopian_month().days(e.year),
            "{date:?} converted past the end of {}",
            e.ethiopian_month()
        );
        e
    }

    /// Convert to the Gregorian calendar.
    ///
    /// # Errors
    /// [`Error::UnsupportedYearRange`] outside
    /// [`MIN_CONVERTIBLE_YEAR`]..=[`MAX_CONVERTIBLE_YEAR`], and
    /// [`Error::InvalidDate`] for the days of those two edge years that lie
    /// outside the [`Date`] range.
    pub fn to_gregorian(&self) -> Result<Date> {
        if !(MIN_CONVERTIBLE_YEAR..=MAX_CONVERTIBLE_YEAR).contains(&self.year) {
            return Err(Error::UnsupportedYearRange {
                year: self.year,
                min: MIN_CONVERTIBLE_YEAR,
                max: MAX_CONVERTIBLE_YEAR,
            });
        }
        Date::from_serial(new_year_serial(self.year) + self.day_of_year() as i32 - 1)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The Ethiopian year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1–13).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The month as an enum.
    pub fn ethiopian_month(&self) -> EthiopianMonth {
        // `month` is validated on construction.
        EthiopianMonth::from_number(self.month).unwrap_or(EthiopianMonth::Pagume)
    }

    /// The day of the month (1–30, or 1–6 in Pagume).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The `(month, day)` pair used to key fixed feasts.
    pub fn month_day(&self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Day of the Ethiopian year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.month as u16 - 1) * 30 + self.day as u16
    }

    /// Length of this date's month.
    pub fn days_in_month(&self) -> u8 {
        self.ethiopian_month().days(self.year)
    }

    /// Whether this date's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Shift by `n` days, crossing year boundaries as needed.
    pub fn add_days(&self, n: i32) -> Result<Self> {
        Ok(Self::from_gregorian(self.to_gregorian()?.add_days(n)?))
    }

    /// The date rendered in Ge'ez script with the era suffix, e.g.
    /// `መስከረም 1, 2018 ዓ.ም.`.
    pub fn amharic(&self) -> String {
        format!(
            "{} {}, {} ዓ.ም.",
            self.ethiopian_month().geez_name(),
            self.day,
            self.year
        )
    }
}

impl std::fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}, {}", self.ethiopian_month(), self.day, self.year)
    }
}

impl From<Date> for EthiopianDate {
    fn from(date: Date) -> Self {
        Self::from_gregorian(date)
    }
}

impl TryFrom<EthiopianDate> for Date {
    type Error = Error;

    fn try_from(e: EthiopianDate) -> Result<Self> {
        e.to_gregorian()
    }
}

/// Convert a Gregorian date to the Ethiopian calendar.
pub fn gregorian_to_ethiopian(date: Date) -> EthiopianDate {
    EthiopianDate::from_gregorian(date)
}

/// Convert an Ethiopian date to the Gregorian calendar.
pub fn ethiopian_to_gregorian(date: EthiopianDate) -> Result<Date> {
    date.to_gregorian()
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EthiopianDate {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            year: i32,
            month: u8,
            day: u8,
        }
        let raw = <Raw as serde::Deserialize>::deserialize(d)?;
        EthiopianDate::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}
