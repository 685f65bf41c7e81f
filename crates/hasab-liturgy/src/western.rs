//! The Western (Roman) liturgical year.
//!
//! Computed independently of the Ethiopian calendar: seasons hang off the
//! first Sunday of Advent and the Gregorian Easter date, and the Sunday
//! lectionary follows a three-year A/B/C cycle that turns over at Advent.

use hasab_core::errors::Result;
use hasab_time::{western_easter, Date, Weekday};

/// Year of the three-year Sunday lectionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LectionaryCycle {
    /// Year A (Matthew).
    A,
    /// Year B (Mark).
    B,
    /// Year C (Luke).
    C,
}

impl std::fmt::Display for LectionaryCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            LectionaryCycle::A => "A",
            LectionaryCycle::B => "B",
            LectionaryCycle::C => "C",
        };
        write!(f, "Year {letter}")
    }
}

/// Season of the Western liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WesternSeason {
    /// From the first Sunday of Advent to December 24.
    Advent,
    /// December 25 to January 6.
    Christmas,
    /// From January 7 to the eve of Ash Wednesday.
    OrdinaryTimeWinter,
    /// Ash Wednesday to the eve of Palm Sunday.
    Lent,
    /// Palm Sunday to Holy Saturday.
    HolyWeek,
    /// Easter Sunday to the eve of Pentecost.
    Easter,
    /// Pentecost Sunday.
    Pentecost,
    /// From the day after Pentecost to the eve of Advent.
    OrdinaryTimeSummer,
}

impl WesternSeason {
    /// Vestment colour of the season.
    pub fn color(&self) -> LiturgicalColor {
        match self {
            WesternSeason::Advent | WesternSeason::Lent => LiturgicalColor::Purple,
            WesternSeason::Christmas | WesternSeason::Easter => LiturgicalColor::White,
            WesternSeason::HolyWeek | WesternSeason::Pentecost => LiturgicalColor::Red,
            WesternSeason::OrdinaryTimeWinter | WesternSeason::OrdinaryTimeSummer => {
                LiturgicalColor::Green
            }
        }
    }

    /// English name.
    pub fn name(&self) -> &'static str {
        match self {
            WesternSeason::Advent => "Advent",
            WesternSeason::Christmas => "Christmas",
            WesternSeason::OrdinaryTimeWinter | WesternSeason::OrdinaryTimeSummer => {
                "Ordinary Time"
            }
            WesternSeason::Lent => "Lent",
            WesternSeason::HolyWeek => "Holy Week",
            WesternSeason::Easter => "Easter",
            WesternSeason::Pentecost => "Pentecost",
        }
    }
}

impl std::fmt::Display for WesternSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Liturgical colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LiturgicalColor {
    /// Penitential seasons.
    Purple,
    /// Feasts of the Lord.
    White,
    /// Ordinary Time.
    Green,
    /// The Passion and the Holy Spirit.
    Red,
}

/// The Western season of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WesternSeasonInfo {
    /// The season.
    pub season: WesternSeason,
    /// Its colour.
    pub color: LiturgicalColor,
    /// Easter Sunday of the date's civil year.
    pub easter_date: Date,
    /// Signed days from that Easter.
    pub days_from_easter: i32,
}

/// First Sunday of Advent in Gregorian `year`: the fourth Sunday before
/// Christmas, between November 27 and December 3.
pub fn advent_start(year: u16) -> Result<Date> {
    Date::from_ymd(year, 12, 24)?
        .on_or_before(Weekday::Sunday)?
        .add_days(-21)
}

/// Lectionary year in force on `date`.
///
/// The liturgical year opening at Advent of civil year `y` reads cycle
/// `y mod 3` (0 = A, 1 = B, 2 = C).
pub fn lectionary_cycle(date: Date) -> Result<LectionaryCycle> {
    let year = date.year();
    let opening = if date >= advent_start(year)? { year } else { year - 1 };
    Ok(match opening % 3 {
        0 => LectionaryCycle::A,
        1 => LectionaryCycle::B,
        _ => LectionaryCycle::C,
    })
}

/// The Western season of `date`.
pub fn western_season(date: Date) -> Result<WesternSeasonInfo> {
    let year = date.year();
    let easter = western_easter(year)?;
    let ash_wednesday = easter.add_days(-46)?;
    let palm_sunday = easter.add_days(-7)?;
    let pentecost = easter.add_days(49)?;
    let (_, month, day) = date.ymd();

    let season = if (month == 12 && day >= 25) || (month == 1 && day <= 6) {
        WesternSeason::Christmas
    } else if date >= advent_start(year)? {
        WesternSeason::Advent
    } else if date < ash_wednesday {
        WesternSeason::OrdinaryTimeWinter
    } else if date < palm_sunday {
        WesternSeason::Lent
    } else if date < easter {
        WesternSeason::HolyWeek
    } else if date < pentecost {
        WesternSeason::Easter
    } else if date == pentecost {
        WesternSeason::Pentecost
    } else {
        WesternSeason::OrdinaryTimeSummer
    };

    Ok(WesternSeasonInfo {
        season,
        color: season.color(),
        easter_date: easter,
        days_from_easter: easter.days_between(date),
    })
}
