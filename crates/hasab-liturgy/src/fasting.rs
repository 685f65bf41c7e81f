//! Fasting classification.
//!
//! A day is classified by the first rule that matches, in this order:
//!
//! 1. a major, non-penitential feast lifts every fast;
//! 2. the Advent fast;
//! 3. Great Lent (Abiy Tsom through the eve of Fasika);
//! 4. the Assumption fast;
//! 5. the Apostles' fast (Tsome Hawaryat through Hamle 4);
//! 6. the weekly fast days;
//! 7. otherwise no fast.

use hasab_time::{BahireHasab, Date, EthiopianDate, EthiopianMonth};

use crate::feast::FeastDay;
use crate::settings::FastingRules;

/// Which rule decided a day's fasting status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FastingKind {
    /// No fast.
    None,
    /// Weekly Wednesday / Friday fast.
    Weekly,
    /// Abiy Tsom.
    GreatLent,
    /// Tsome Nebiyat, before Genna.
    Advent,
    /// Tsome Filseta, before the Assumption.
    Assumption,
    /// Tsome Hawaryat.
    Apostles,
    /// Fast lifted by a major feast.
    FeastExemption,
}

impl FastingKind {
    /// Short English label.
    pub fn label(&self) -> &'static str {
        match self {
            FastingKind::None => "None",
            FastingKind::Weekly => "Weekly Fast",
            FastingKind::GreatLent => "Great Lent",
            FastingKind::Advent => "Advent Fast",
            FastingKind::Assumption => "Assumption Fast",
            FastingKind::Apostles => "Apostles' Fast",
            FastingKind::FeastExemption => "Feast Day",
        }
    }

    /// Customary observance for this kind of day.
    pub fn rule_descriptions(&self) -> &'static [&'static str] {
        match self {
            FastingKind::None => &["No specific fasting requirements"],
            FastingKind::Weekly => &["No meat", "No dairy", "Simple foods preferred"],
            FastingKind::GreatLent => &[
                "Complete vegan diet",
                "No animal products whatsoever",
                "One meal after 3 PM",
                "Increased prayer and almsgiving",
                "Preparation for Easter",
            ],
            FastingKind::Advent => &["Vegan diet", "No meat or dairy", "Preparation for Christmas"],
            FastingKind::Assumption => &["Vegan diet", "Preparation for Assumption of Mary"],
            FastingKind::Apostles => &["Vegan diet", "Commemoration of the Apostles"],
            FastingKind::FeastExemption => &["Fasting is lifted for the feast", "Festive meals permitted"],
        }
    }
}

impl std::fmt::Display for FastingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The fasting classification of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FastingStatus {
    /// Whether the day is kept as a fast.
    pub is_fasting: bool,
    /// The rule that decided it.
    pub kind: FastingKind,
    /// Customary observance, in order.
    pub rule_descriptions: &'static [&'static str],
    /// Human-readable explanation.
    pub reason: String,
}

impl FastingStatus {
    fn new(kind: FastingKind, reason: String) -> Self {
        Self {
            is_fasting: !matches!(kind, FastingKind::None | FastingKind::FeastExemption),
            kind,
            rule_descriptions: kind.rule_descriptions(),
            reason,
        }
    }
}

/// Classify `date`.
///
/// `ethiopian` must be `date` converted, and `hasab` the computation for its
/// Ethiopian year.
pub fn fasting_status(
    date: Date,
    ethiopian: EthiopianDate,
    feast: Option<&FeastDay>,
    hasab: &BahireHasab,
    rules: &FastingRules,
) -> FastingStatus {
    debug_assert_eq!(EthiopianDate::from(date), ethiopian);
    let (month, day) = ethiopian.month_day();

    if let Some(f) = feast.filter(|f| f.exempts_from_fasting()) {
        return FastingStatus::new(
            FastingKind::FeastExemption,
            format!("{} is a major feast", f.name_english),
        );
    }
    if rules.in_advent_fast(month, day) {
        return FastingStatus::new(
            FastingKind::Advent,
            "የልደት ጾም (Christmas preparation)".to_string(),
        );
    }
    if date >= hasab.great_lent_start() && date < hasab.fasika() {
        return FastingStatus::new(
            FastingKind::GreatLent,
            "ዐቢይ ጾም (Great Lent preparation for Easter)".to_string(),
        );
    }
    if rules.in_assumption_fast(month, day) {
        return FastingStatus::new(
            FastingKind::Assumption,
            "የፍልሰታ ጾም (Assumption of Mary preparation)".to_string(),
        );
    }
    if rules.observe_apostles_fast
        && date >= hasab.apostles_fast_start()
        && (month, day) < (EthiopianMonth::Hamle.number(), 5)
    {
        return FastingStatus::new(
            FastingKind::Apostles,
            "የሐዋርያት ጾም (Apostles' Fast)".to_string(),
        );
    }
    let weekday = date.weekday();
    if rules.is_weekly_fast_day(weekday) {
        return FastingStatus::new(FastingKind::Weekly, format!("Weekly fasting on {weekday}"));
    }
    FastingStatus::new(FastingKind::None, "Regular day".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feast::feast_on;

    fn classify(y: u16, m: u8, d: u8) -> FastingStatus {
        let date = Date::from_ymd(y, m, d).unwrap();
        let e = EthiopianDate::from(date);
        let hasab = BahireHasab::new(e.year()).unwrap();
        let feast = feast_on(e, &hasab);
        fasting_status(date, e, feast.as_ref(), &hasab, &FastingRules::default())
    }

    #[test]
    fn weekly_and_regular_days() {
        // Tikimt 2018: no seasonal fast.
        let wed = classify(2025, 10, 22);
        assert_eq!(wed.kind, FastingKind::Weekly);
        assert!(wed.is_fasting);
        assert_eq!(wed.reason, "Weekly fasting on Wednesday");
        let thu = classify(2025, 10, 23);
        assert_eq!(thu.kind, FastingKind::None);
        assert!(!thu.is_fasting);
    }

    #[test]
    fn advent_ends_before_genna() {
        assert_eq!(classify(2025, 11, 10).kind, FastingKind::Advent); // Hedar 1
        assert_eq!(classify(2026, 1, 6).kind, FastingKind::Advent); // Tahsas 28
        let genna = classify(2026, 1, 7);
        assert_eq!(genna.kind, FastingKind::FeastExemption);
        assert!(!genna.is_fasting);
    }

    #[test]
    fn great_lent_window() {
        // Fasika 2018 = 2026-04-12, Abiy Tsom = 2026-02-16.
        assert_eq!(classify(2026, 2, 15).kind, FastingKind::None); // Sunday before
        assert_eq!(classify(2026, 2, 16).kind, FastingKind::GreatLent);
        assert_eq!(classify(2026, 4, 10).kind, FastingKind::GreatLent); // Siklet
        assert_eq!(classify(2026, 4, 11).kind, FastingKind::GreatLent);
        assert_eq!(classify(2026, 4, 12).kind, FastingKind::FeastExemption);
    }

    #[test]
    fn apostles_and_assumption() {
        // Tsome Hawaryat 2018 = Pentecost + 1 = 2026-06-01.
        assert_eq!(classify(2026, 6, 1).kind, FastingKind::Apostles);
        assert_eq!(classify(2026, 7, 11).kind, FastingKind::Apostles); // Hamle 4
        assert_ne!(classify(2026, 7, 12).kind, FastingKind::Apostles); // Hamle 5
        assert_eq!(classify(2026, 8, 7).kind, FastingKind::Assumption); // Nehasse 1
        assert_eq!(classify(2026, 8, 22).kind, FastingKind::FeastExemption); // Filseta
    }
}
