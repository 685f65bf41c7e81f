//! # hasab-liturgy
//!
//! Feasts, fasts and seasons of the Ethiopian Orthodox calendar, the Western
//! liturgical year, and the [`LiturgicalCalendarManager`] that combines them
//! into one record per day.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Fasting classification.
pub mod fasting;

/// Fixed and movable feast days.
pub mod feast;

/// `LiturgicalCalendarManager` and `DailyLiturgicalInfo`.
pub mod manager;

/// Ethiopian liturgical seasons.
pub mod season;

/// Manager settings and fasting rules.
pub mod settings;

/// Western liturgical seasons and lectionary cycle.
pub mod western;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use fasting::{fasting_status, FastingKind, FastingStatus};
pub use feast::{feast_day, FeastDay, FeastRank};
pub use manager::{DailyLiturgicalInfo, LiturgicalCalendarManager};
pub use season::{ethiopian_color, season, EthiopianSeason};
pub use settings::{FastingRules, LiturgicalSettings};
pub use western::{
    advent_start, lectionary_cycle, western_season, LectionaryCycle, LiturgicalColor,
    WesternSeason, WesternSeasonInfo,
};
