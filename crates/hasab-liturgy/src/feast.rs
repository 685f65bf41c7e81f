//! Feast days of the Ethiopian Orthodox calendar.
//!
//! Fixed feasts are keyed by Ethiopian `(month, day)`.  Movable feasts come
//! from the year's [`BahireHasab`].  Fixed entries are looked up first; none
//! of them lies between Megabit 19 and Sene 19, the span Hosanna through
//! Paraclete can occupy, so a fixed feast never hides a movable one.  The
//! monthly commemoration of Michael on the 12th comes last and yields to both.

use hasab_core::errors::Result;
use hasab_time::{BahireHasab, EthiopianDate, EthiopianMonth, MovableFeast};

/// Rank of a commemoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FeastRank {
    /// One of the great feasts of the Lord or of the Church.
    Major,
    /// Commemoration of a saint.
    Saint,
    /// Monthly or annual feast of an archangel.
    Archangel,
    /// Civil or national observance.
    Public,
}

/// A liturgical commemoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeastDay {
    /// Name in Ge'ez script.
    pub name_native: &'static str,
    /// English name.
    pub name_english: &'static str,
    /// Rank.
    pub rank: FeastRank,
    /// What the day commemorates.
    pub commemoration_text: &'static str,
    /// A day of mourning that keeps its fast despite its rank.
    pub penitential: bool,
}

impl FeastDay {
    /// Whether the feast lifts any fast falling on it.
    pub fn exempts_from_fasting(&self) -> bool {
        self.rank == FeastRank::Major && !self.penitential
    }
}

const fn feast(
    name_native: &'static str,
    name_english: &'static str,
    rank: FeastRank,
    commemoration_text: &'static str,
) -> FeastDay {
    FeastDay {
        name_native,
        name_english,
        rank,
        commemoration_text,
        penitential: false,
    }
}

// ── Fixed feasts ──────────────────────────────────────────────────────────────

/// Genna.  Its Tahsas day depends on the year, see [`genna_day`].
pub const GENNA: FeastDay = feast(
    "ልደት",
    "Genna (Ethiopian Christmas)",
    FeastRank::Major,
    "Birth of Jesus Christ",
);

const FIXED_FEASTS: [(u8, u8, FeastDay); 9] = [
    (
        1,
        1,
        feast(
            "እንቁጣጣሽ",
            "Enkutatash (New Year)",
            FeastRank::Major,
            "Ethiopian New Year celebration",
        ),
    ),
    (
        1,
        17,
        feast(
            "መስቀል",
            "Meskel (Finding of the True Cross)",
            FeastRank::Major,
            "Discovery of the True Cross",
        ),
    ),
    (
        3,
        12,
        feast(
            "ቅዱስ ሚካኤል",
            "Archangel Michael",
            FeastRank::Archangel,
            "Annual feast of Saint Michael the Archangel",
        ),
    ),
    (
        3,
        21,
        feast(
            "ኅዳር ጽዮን",
            "Hidar Tsion",
            FeastRank::Saint,
            "Arrival of the Ark of the Covenant at Aksum",
        ),
    ),
    (
        4,
        19,
        feast(
            "ቅዱስ ገብርኤል",
            "Archangel Gabriel",
            FeastRank::Archangel,
            "Annual feast of Saint Gabriel the Archangel",
        ),
    ),
    (
        5,
        11,
        feast(
            "ጥምቀት",
            "Timkat (Ethiopian Epiphany)",
            FeastRank::Major,
            "Baptism of Jesus Christ",
        ),
    ),
    (
        6,
        23,
        feast(
            "የዓድዋ ድል",
            "Adwa Victory Day",
            FeastRank::Public,
            "Victory at the Battle of Adwa, 1888",
        ),
    ),
    (
        11,
        5,
        feast(
            "ጴጥሮስ ወጳውሎስ",
            "Saints Peter and Paul",
            FeastRank::Saint,
            "Martyrdom of the Apostles Peter and Paul",
        ),
    ),
    (
        12,
        16,
        feast(
            "ፍልሰታ",
            "Filseta (Assumption of Mary)",
            FeastRank::Major,
            "Assumption of the Virgin Mary",
        ),
    ),
];

/// Tahsas day of Genna in Ethiopian `year`.
///
/// Genna stays on the solar day of Julian December 25.  In the year after an
/// Ethiopian leap year the extra Pagume day moves that to Tahsas 28.
pub fn genna_day(year: i32) -> u8 {
    if year.rem_euclid(4) == 0 {
        28
    } else {
        29
    }
}

/// The fixed feast on `(month, day)` of Ethiopian `year`, if any.
pub fn fixed_feast(year: i32, month: u8, day: u8) -> Option<FeastDay> {
    if month == EthiopianMonth::Tahsas.number() && day == genna_day(year) {
        return Some(GENNA);
    }
    FIXED_FEASTS
        .iter()
        .find(|(m, d, _)| *m == month && *d == day)
        .map(|(_, _, f)| *f)
}

/// The monthly feast of Michael, kept on the 12th of every 30-day month.
pub const MONTHLY_MICHAEL: FeastDay = feast(
    "ቅዱስ ሚካኤል",
    "Archangel Michael",
    FeastRank::Archangel,
    "Monthly Michael feast",
);

/// The monthly commemoration on `(month, day)`, if any.
pub fn monthly_feast(month: u8, day: u8) -> Option<FeastDay> {
    (month != EthiopianMonth::Pagume.number() && day == 12).then_some(MONTHLY_MICHAEL)
}

// ── Movable feasts ────────────────────────────────────────────────────────────

/// The commemoration for a movable feast, for the feasts that carry one.
pub fn movable_feast_day(feast: MovableFeast) -> Option<FeastDay> {
    let day = match feast {
        MovableFeast::Hosanna => FeastDay {
            name_native: "ሆሣዕና",
            name_english: "Hosanna (Palm Sunday)",
            rank: FeastRank::Major,
            commemoration_text: "Entry of Jesus into Jerusalem",
            penitential: false,
        },
        MovableFeast::Siklet => FeastDay {
            name_native: "ስቅለት",
            name_english: "Siklet (Good Friday)",
            rank: FeastRank::Major,
            commemoration_text: "Crucifixion of Jesus Christ",
            penitential: true,
        },
        MovableFeast::Fasika => FeastDay {
            name_native: "ፋሲካ",
            name_english: "Fasika (Ethiopian Easter)",
            rank: FeastRank::Major,
            commemoration_text: "Resurrection of Jesus Christ",
            penitential: false,
        },
        MovableFeast::Erget => FeastDay {
            name_native: "ዕርገት",
            name_english: "Erget (Ascension)",
            rank: FeastRank::Major,
            commemoration_text: "Ascension of Jesus Christ",
            penitential: false,
        },
        MovableFeast::Paraclete => FeastDay {
            name_native: "ጰራቅሊጦስ",
            name_english: "Paraclete (Pentecost)",
            rank: FeastRank::Major,
            commemoration_text: "Descent of the Holy Spirit",
            penitential: false,
        },
        _ => return None,
    };
    Some(day)
}

// ── Lookup ────────────────────────────────────────────────────────────────────

/// The feast falling on `date`, using an already computed Bahire Hasab for
/// `date`'s year.
pub fn feast_on(date: EthiopianDate, hasab: &BahireHasab) -> Option<FeastDay> {
    let (month, day) = date.month_day();
    if let Some(f) = fixed_feast(date.year(), month, day) {
        return Some(f);
    }
    debug_assert_eq!(hasab.year(), date.year());
    let movable = date
        .to_gregorian()
        .ok()
        .and_then(|g| hasab.feast_on(g))
        .and_then(movable_feast_day);
    movable.or_else(|| monthly_feast(month, day))
}

/// The feast falling on `(month, day)` of Ethiopian `year`, if any.
///
/// # Errors
/// Invalid dates and years outside the Bahire Hasab range.
pub fn feast_day(year: i32, month: u8, day: u8) -> Result<Option<FeastDay>> {
    let date = EthiopianDate::new(year, month, day)?;
    if let Some(f) = fixed_feast(year, month, day) {
        return Ok(Some(f));
    }
    let hasab = BahireHasab::new(year)?;
    Ok(feast_on(date, &hasab))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_feasts() {
        assert_eq!(
            feast_day(2018, 1, 1).unwrap().unwrap().name_english,
            "Enkutatash (New Year)"
        );
        assert_eq!(feast_day(2018, 5, 11).unwrap().unwrap().rank, FeastRank::Major);
        assert_eq!(feast_day(2018, 6, 23).unwrap().unwrap().rank, FeastRank::Public);
        assert_eq!(feast_day(2018, 2, 5).unwrap(), None);
    }

    #[test]
    fn genna_moves_after_leap_year() {
        assert_eq!(feast_day(2018, 4, 29).unwrap(), Some(GENNA));
        assert_eq!(feast_day(2018, 4, 28).unwrap(), None);
        assert_eq!(feast_day(2016, 4, 28).unwrap(), Some(GENNA));
        assert_eq!(feast_day(2016, 4, 29).unwrap(), None);
    }

    #[test]
    fn movable_feasts_2017() {
        // Fasika 2017 = Miyazya 12; Siklet Miyazya 10; Hosanna Miyazya 5.
        let fasika = feast_day(2017, 8, 12).unwrap().unwrap();
        assert_eq!(fasika.name_english, "Fasika (Ethiopian Easter)");
        let siklet = feast_day(2017, 8, 10).unwrap().unwrap();
        assert!(siklet.penitential);
        assert!(!siklet.exempts_from_fasting());
        assert_eq!(feast_day(2017, 8, 5).unwrap().unwrap().name_native, "ሆሣዕና");
        assert_eq!(feast_day(2017, 8, 11).unwrap(), None);
    }

    #[test]
    fn no_fixed_feast_in_movable_window() {
        let first = (7u8, 19u8);
        let last = (10u8, 19u8);
        for (m, d, f) in FIXED_FEASTS {
            assert!(
                (m, d) < first || (m, d) > last,
                "{} collides with the movable window",
                f.name_english
            );
        }
    }

    #[test]
    fn michael_is_kept_monthly() {
        let tikimt = feast_day(2018, 2, 12).unwrap().unwrap();
        assert_eq!(tikimt, MONTHLY_MICHAEL);
        assert_eq!(tikimt.rank, FeastRank::Archangel);
        assert!(!tikimt.exempts_from_fasting());
        assert_eq!(feast_day(2018, 12, 12).unwrap(), Some(MONTHLY_MICHAEL));
        // Hedar 12 keeps its annual text.
        let hedar = feast_day(2018, 3, 12).unwrap().unwrap();
        assert_eq!(hedar.commemoration_text, "Annual feast of Saint Michael the Archangel");
        assert_eq!(feast_day(2018, 2, 13).unwrap(), None);
    }

    #[test]
    fn movable_feast_beats_monthly_michael() {
        // Fasika 2017 fell on Miyazya 12.
        let f = feast_day(2017, 8, 12).unwrap().unwrap();
        assert_eq!(f.name_english, "Fasika (Ethiopian Easter)");
        assert_eq!(feast_day(2018, 8, 12).unwrap(), Some(MONTHLY_MICHAEL));
    }

    #[test]
    fn invalid_date_is_an_error() {
        assert!(feast_day(2018, 13, 7).is_err());
        assert!(feast_day(50, 1, 2).is_err());
    }
}
