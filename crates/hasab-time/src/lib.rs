//! # hasab-time
//!
//! Gregorian and Ethiopian dates, conversion between them, and the two
//! computus algorithms (Bahire Hasab for Fasika, Oudin for Western Easter).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Bahire Hasab computus and movable feasts.
pub mod bahire_hasab;

/// Western (Gregorian) Easter.
pub mod computus;

/// `Date` type.
pub mod date;

/// `EthiopianDate` and conversion to and from `Date`.
pub mod ethiopian;

/// `EthiopianMonth` — the thirteen Ethiopian months.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bahire_hasab::{BahireHasab, FasikaCache, MovableFeast};
pub use computus::western_easter;
pub use date::Date;
pub use ethiopian::{
    ethiopian_to_gregorian, gregorian_to_ethiopian, new_year, EthiopianDate,
    MAX_CONVERTIBLE_YEAR, MIN_CONVERTIBLE_YEAR,
};
pub use month::{month_name, EthiopianMonth};
pub use weekday::Weekday;
