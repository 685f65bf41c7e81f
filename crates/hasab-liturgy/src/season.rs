//! Ethiopian liturgical seasons and the colour of the day.

use hasab_time::{BahireHasab, Date, EthiopianDate, EthiopianMonth};

use crate::fasting::FastingStatus;
use crate::feast::{genna_day, FeastDay, FeastRank};
use crate::western::LiturgicalColor;

/// A season of the Ethiopian Orthodox year.
///
/// Variants are listed in calendar order.  [`EthiopianSeason::OrdinaryTime`]
/// covers two disjoint spans: Tikimt, and the weeks from the day after
/// Pentecost to the end of Nehasse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EthiopianSeason {
    /// Enkutatash, Meskerem 1.
    NewYear,
    /// Meskerem 2–16.
    NewYearSeason,
    /// From Meskel to the end of Meskerem.
    CrossSeason,
    /// Tikimt, and again after Pentecost.
    OrdinaryTime,
    /// From the start of Hedar to the eve of Genna.
    Advent,
    /// From Genna to the eve of Timkat.
    ChristmasSeason,
    /// From Timkat to the eve of Great Lent.
    EpiphanySeason,
    /// From the start of Great Lent through Pentecost.
    GreatLentEaster,
    /// The epagomenal days.
    Pagume,
}

impl EthiopianSeason {
    /// English name.
    pub fn name(&self) -> &'static str {
        match self {
            EthiopianSeason::NewYear => "New Year (Enkutatash)",
            EthiopianSeason::NewYearSeason => "New Year Season",
            EthiopianSeason::CrossSeason => "Cross Season (Meskel)",
            EthiopianSeason::OrdinaryTime => "Ordinary Time",
            EthiopianSeason::Advent => "Advent Season (Christmas Preparation)",
            EthiopianSeason::ChristmasSeason => "Christmas Season",
            EthiopianSeason::EpiphanySeason => "Epiphany Season",
            EthiopianSeason::GreatLentEaster => "Great Lent / Easter Season",
            EthiopianSeason::Pagume => "Pagume",
        }
    }
}

impl std::fmt::Display for EthiopianSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Day-of-year bounds of the Great Lent / Easter season.
fn lent_easter_bounds(year: i32, hasab: Option<&BahireHasab>) -> (u16, u16) {
    match hasab.filter(|h| h.year() == year) {
        Some(h) => (
            EthiopianDate::from(h.great_lent_start()).day_of_year(),
            EthiopianDate::from(h.pentecost()).day_of_year(),
        ),
        // Miyazya 1 through Ginbot 30.
        None => (211, 270),
    }
}

/// The season `date` falls in.
///
/// With the year's Bahire Hasab the Great Lent / Easter season runs from Abiy
/// Tsom through Pentecost; without it, it spans Miyazya and Ginbot.
pub fn season(date: EthiopianDate, hasab: Option<&BahireHasab>) -> EthiopianSeason {
    use EthiopianMonth::*;

    let day = date.day();
    match date.ethiopian_month() {
        Meskerem if day == 1 => return EthiopianSeason::NewYear,
        Meskerem if day < 17 => return EthiopianSeason::NewYearSeason,
        Meskerem => return EthiopianSeason::CrossSeason,
        Tikimt => return EthiopianSeason::OrdinaryTime,
        Hedar => return EthiopianSeason::Advent,
        Tahsas if day < genna_day(date.year()) => return EthiopianSeason::Advent,
        Tahsas => return EthiopianSeason::ChristmasSeason,
        Tir if day < 11 => return EthiopianSeason::ChristmasSeason,
        Pagume => return EthiopianSeason::Pagume,
        _ => {}
    }

    let (lent_start, easter_end) = lent_easter_bounds(date.year(), hasab);
    let doy = date.day_of_year();
    if doy < lent_start {
        EthiopianSeason::EpiphanySeason
    } else if doy <= easter_end {
        EthiopianSeason::GreatLentEaster
    } else {
        EthiopianSeason::OrdinaryTime
    }
}

/// The Ethiopian liturgical colour of `date`.
///
/// The first matching rule wins: purple through Great Lent, white from Fasika
/// through Pentecost, white on a major feast, purple on a fasting day, and
/// green otherwise.  `hasab` must be the computation for `date`'s Ethiopian
/// year.
pub fn ethiopian_color(
    date: Date,
    hasab: &BahireHasab,
    feast: Option<&FeastDay>,
    fasting: &FastingStatus,
) -> LiturgicalColor {
    if date >= hasab.great_lent_start() && date < hasab.fasika() {
        LiturgicalColor::Purple
    } else if date >= hasab.fasika() && date <= hasab.pentecost() {
        LiturgicalColor::White
    } else if feast.is_some_and(|f| f.rank == FeastRank::Major) {
        LiturgicalColor::White
    } else if fasting.is_fasting {
        LiturgicalColor::Purple
    } else {
        LiturgicalColor::Green
    }
}
