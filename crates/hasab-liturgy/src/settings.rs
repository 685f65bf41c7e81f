//! Calendar settings.
//!
//! [`LiturgicalSettings`] is an ordinary value handed to
//! [`LiturgicalCalendarManager::new`](crate::manager::LiturgicalCalendarManager::new).
//! It holds the **evaluation date** (the date "today" resolves to) and the
//! adjustable edges of the seasonal fasts.  There is no process-wide instance;
//! two managers built from different settings never interfere.

use hasab_core::ensure;
use hasab_core::errors::Result;
use hasab_time::{Date, EthiopianMonth, Weekday};

/// Adjustable boundaries of the fasting calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FastingRules {
    /// First day of the Advent fast as `(month, day)`, in Hedar or Tahsas.
    pub advent_start: (u8, u8),
    /// Last fasting day of Tahsas before Genna.
    pub advent_last_day_of_tahsas: u8,
    /// Last fasting day of the Assumption fast in Nehasse.
    pub assumption_last_day: u8,
    /// Days of the week kept as fasts outside the seasonal fasts.
    pub weekly_fast_days: Vec<Weekday>,
    /// Whether the Apostles' fast is kept.
    pub observe_apostles_fast: bool,
}

impl Default for FastingRules {
    fn default() -> Self {
        Self {
            advent_start: (EthiopianMonth::Hedar.number(), 1),
            advent_last_day_of_tahsas: 28,
            assumption_last_day: 15,
            weekly_fast_days: vec![Weekday::Wednesday, Weekday::Friday],
            observe_apostles_fast: true,
        }
    }
}

impl FastingRules {
    /// Check that every boundary names a real day in the right month.
    pub fn validate(&self) -> Result<()> {
        let (month, day) = self.advent_start;
        ensure!(
            month == EthiopianMonth::Hedar.number() || month == EthiopianMonth::Tahsas.number(),
            "Advent fast must start in Hedar or Tahsas, got month {month}"
        );
        ensure!(
            (1..=30).contains(&day),
            "Advent fast start day {day} out of range [1, 30]"
        );
        ensure!(
            (1..=30).contains(&self.advent_last_day_of_tahsas),
            "Advent fast last day {} out of range [1, 30]",
            self.advent_last_day_of_tahsas
        );
        ensure!(
            month == EthiopianMonth::Hedar.number() || day <= self.advent_last_day_of_tahsas,
            "Advent fast starts on Tahsas {day} after its last day Tahsas {}",
            self.advent_last_day_of_tahsas
        );
        ensure!(
            (1..=30).contains(&self.assumption_last_day),
            "Assumption fast last day {} out of range [1, 30]",
            self.assumption_last_day
        );
        Ok(())
    }

    /// Whether the `(month, day)` pair lies inside the Advent fast.
    pub fn in_advent_fast(&self, month: u8, day: u8) -> bool {
        let tahsas = EthiopianMonth::Tahsas.number();
        (month, day) >= self.advent_start
            && (month, day) <= (tahsas, self.advent_last_day_of_tahsas)
    }

    /// Whether the `(month, day)` pair lies inside the Assumption fast.
    pub fn in_assumption_fast(&self, month: u8, day: u8) -> bool {
        month == EthiopianMonth::Nehasse.number() && day <= self.assumption_last_day
    }

    /// Whether `weekday` is a weekly fast day.
    pub fn is_weekly_fast_day(&self, weekday: Weekday) -> bool {
        self.weekly_fast_days.contains(&weekday)
    }
}

/// Settings for one calendar manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiturgicalSettings {
    evaluation_date: Option<Date>,
    fasting: FastingRules,
}

impl LiturgicalSettings {
    /// Default settings: local-clock "today" and the customary fasts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the evaluation date instead of reading the local clock.
    pub fn with_evaluation_date(mut self, date: Date) -> Self {
        self.evaluation_date = Some(date);
        self
    }

    /// Replace the fasting rules.
    pub fn with_fasting_rules(mut self, rules: FastingRules) -> Self {
        self.fasting = rules;
        self
    }

    /// The fixed evaluation date, if one was set.
    pub fn evaluation_date(&self) -> Option<Date> {
        self.evaluation_date
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&mut self) {
        self.evaluation_date = None;
    }

    /// The fasting rules.
    pub fn fasting_rules(&self) -> &FastingRules {
        &self.fasting
    }

    /// The date "today" resolves to: the evaluation date, or the local clock.
    pub fn today(&self) -> Result<Date> {
        match self.evaluation_date {
            Some(d) => Ok(d),
            None => Date::today(),
        }
    }

    /// Validate every contained rule.
    pub fn validate(&self) -> Result<()> {
        self.fasting.validate()
    }
}
