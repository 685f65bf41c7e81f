//! `LiturgicalCalendarManager`, the entry point for daily liturgical data.
//!
//! The manager converts the date, looks up the year's Bahire Hasab through
//! its own [`FasikaCache`], classifies the day for the Ethiopian tradition,
//! computes the Western season separately, and merges both into one
//! [`DailyLiturgicalInfo`].

use hasab_core::errors::Result;
use hasab_time::{BahireHasab, Date, EthiopianDate, FasikaCache, Weekday};

use crate::fasting::{fasting_status, FastingStatus};
use crate::feast::{feast_on, FeastDay};
use crate::season::{ethiopian_color, season, EthiopianSeason};
use crate::settings::LiturgicalSettings;
use crate::western::{
    lectionary_cycle, western_season, LectionaryCycle, LiturgicalColor, WesternSeasonInfo,
};

/// Everything known about one day in both traditions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyLiturgicalInfo {
    /// The civil date.
    pub gregorian_date: Date,
    /// Its weekday.
    pub weekday: Weekday,
    /// The same day in the Ethiopian calendar.
    pub ethiopian_date: EthiopianDate,
    /// Western Sunday lectionary year.
    pub western_liturgical_year: LectionaryCycle,
    /// Western season.
    pub western_season: WesternSeasonInfo,
    /// Ethiopian season.
    pub ethiopian_season: EthiopianSeason,
    /// Ethiopian liturgical colour.
    pub ethiopian_color: LiturgicalColor,
    /// Feast of the day, if any.
    pub feast_day: Option<FeastDay>,
    /// Fasting classification.
    pub fasting: FastingStatus,
}

/// Builds [`DailyLiturgicalInfo`] records.
///
/// A manager is cheap to create and safe to share between threads.  It
/// memoizes the Bahire Hasab per Ethiopian year; results never depend on
/// what is cached.
#[derive(Debug, Default)]
pub struct LiturgicalCalendarManager {
    settings: LiturgicalSettings,
    fasika_cache: FasikaCache,
}

impl LiturgicalCalendarManager {
    /// Create a manager after validating `settings`.
    pub fn new(settings: LiturgicalSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            fasika_cache: FasikaCache::new(),
        })
    }

    /// The manager's settings.
    pub fn settings(&self) -> &LiturgicalSettings {
        &self.settings
    }

    /// Bahire Hasab for Ethiopian `year`, from the cache when possible.
    pub fn movable_feasts(&self, year: i32) -> Result<BahireHasab> {
        self.fasika_cache
            .get_or_try_insert_with(year, BahireHasab::new)
    }

    /// Liturgical information for `date`.
    pub fn daily_info(&self, date: Date) -> Result<DailyLiturgicalInfo> {
        let ethiopian = EthiopianDate::from(date);
        let hasab = self.movable_feasts(ethiopian.year())?;
        let feast_day = feast_on(ethiopian, &hasab);
        let fasting = fasting_status(
            date,
            ethiopian,
            feast_day.as_ref(),
            &hasab,
            self.settings.fasting_rules(),
        );
        let color = ethiopian_color(date, &hasab, feast_day.as_ref(), &fasting);

        Ok(DailyLiturgicalInfo {
            gregorian_date: date,
            weekday: date.weekday(),
            ethiopian_date: ethiopian,
            western_liturgical_year: lectionary_cycle(date)?,
            western_season: western_season(date)?,
            ethiopian_season: season(ethiopian, Some(&hasab)),
            ethiopian_color: color,
            feast_day,
            fasting,
        })
    }

    /// Liturgical information for the evaluation date, or the local date.
    pub fn today_info(&self) -> Result<DailyLiturgicalInfo> {
        self.daily_info(self.settings.today()?)
    }

    /// Liturgical information for an Ethiopian date.
    pub fn ethiopian_daily_info(&self, date: EthiopianDate) -> Result<DailyLiturgicalInfo> {
        self.daily_info(date.to_gregorian()?)
    }

    /// Liturgical information for every day of Ethiopian `year`, in order.
    pub fn year_info(&self, year: i32) -> Result<Vec<DailyLiturgicalInfo>> {
        let first = EthiopianDate::new(year, 1, 1)?.to_gregorian()?;
        let days = if hasab_time::ethiopian::is_leap_year(year) { 366 } else { 365 };
        (0..days)
            .map(|n| self.daily_info(first.add_days(n)?))
            .collect()
    }
}
