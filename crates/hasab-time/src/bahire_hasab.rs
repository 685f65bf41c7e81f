//! Bahire Hasab, the Ethiopian Orthodox computus.
//!
//! For an Ethiopian year the computation runs, in order:
//!
//! 1. *Amete Alem*, the year of the world: `5500 + year`.
//! 2. *Wenber*, the position in the 19-year lunar cycle:
//!    `(amete_alem - 1) mod 19`.
//! 3. *Abekte* (epact) `wenber * 11 mod 30` and *Metqi* `wenber * 19 mod 30`
//!    (a zero Metqi counts as 30).  The two always sum to 30.
//! 4. *Tinte Qemer*, the weekday of Meskerem 1:
//!    `(amete_alem + amete_alem div 4) mod 7`, counted from Monday.
//! 5. *Beale Metqi*: Meskerem `metqi` when `metqi > 14`, otherwise Tikimt
//!    `metqi`.
//! 6. *Mebaja Hamer*: `metqi` plus the *tewsak* of Beale Metqi's weekday.
//! 7. *Nineveh* falls on day Mebaja Hamer of Tir (if Beale Metqi was in
//!    Meskerem) or Yekatit, carried into the following month past day 30.
//!
//! Every movable feast is then a fixed tewsak offset from Nineveh
//! ([`MovableFeast::days_from_nineveh`]).  Fasika, 69 days after Nineveh,
//! always coincides with Julian-calendar Easter.

use hasab_core::cache::YearCache;
use hasab_core::ensure_post;
use hasab_core::errors::{Error, Result};

use crate::date::Date;
use crate::ethiopian::EthiopianDate;
use crate::month::EthiopianMonth;
use crate::weekday::Weekday;

/// Earliest supported Ethiopian year.
pub const MIN_YEAR: i32 = 100;

/// Latest supported Ethiopian year (its Tsome Dihnet still falls in Gregorian
/// year 9999).
pub const MAX_YEAR: i32 = 9991;

const AMETE_ALEM_OFFSET: i32 = 5500;

const FEAST_COUNT: usize = 11;

/// Per-year memo of [`BahireHasab`] results.
pub type FasikaCache = YearCache<BahireHasab>;

// ── Movable feasts ────────────────────────────────────────────────────────────

/// A feast or fast whose date is derived from Nineveh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MovableFeast {
    /// Fast of Nineveh (three days).
    Nineveh,
    /// Abiy Tsom, the start of Great Lent.
    AbiyTsom,
    /// Debre Zeit, mid-Lent.
    DebreZeit,
    /// Hosanna (Palm Sunday).
    Hosanna,
    /// Siklet (Good Friday).
    Siklet,
    /// Fasika (Easter).
    Fasika,
    /// Rikbe Kahnat.
    RikbeKahnat,
    /// Erget (Ascension).
    Erget,
    /// Paraclete (Pentecost).
    Paraclete,
    /// Tsome Hawaryat, the start of the Apostles' fast.
    TsomeHawaryat,
    /// Tsome Dihnet, the Wednesday after Pentecost.
    TsomeDihnet,
}

impl MovableFeast {
    /// Every movable feast in calendar order.
    pub const ALL: [MovableFeast; FEAST_COUNT] = [
        MovableFeast::Nineveh,
        MovableFeast::AbiyTsom,
        MovableFeast::DebreZeit,
        MovableFeast::Hosanna,
        MovableFeast::Siklet,
        MovableFeast::Fasika,
        MovableFeast::RikbeKahnat,
        MovableFeast::Erget,
        MovableFeast::Paraclete,
        MovableFeast::TsomeHawaryat,
        MovableFeast::TsomeDihnet,
    ];

    /// Days after Nineveh (the traditional tewsak table).
    pub fn days_from_nineveh(&self) -> i32 {
        match self {
            MovableFeast::Nineveh => 0,
            MovableFeast::AbiyTsom => 14,
            MovableFeast::DebreZeit => 41,
            MovableFeast::Hosanna => 62,
            MovableFeast::Siklet => 67,
            MovableFeast::Fasika => 69,
            MovableFeast::RikbeKahnat => 93,
            MovableFeast::Erget => 108,
            MovableFeast::Paraclete => 118,
            MovableFeast::TsomeHawaryat => 119,
            MovableFeast::TsomeDihnet => 121,
        }
    }

    /// Signed days from Fasika.
    pub fn days_from_fasika(&self) -> i32 {
        self.days_from_nineveh() - MovableFeast::Fasika.days_from_nineveh()
    }

    /// Transliterated Ge'ez name.
    pub fn name(&self) -> &'static str {
        match self {
            MovableFeast::Nineveh => "Tsome Nenewe",
            MovableFeast::AbiyTsom => "Abiy Tsom",
            MovableFeast::DebreZeit => "Debre Zeit",
            MovableFeast::Hosanna => "Hosanna",
            MovableFeast::Siklet => "Siklet",
            MovableFeast::Fasika => "Fasika",
            MovableFeast::RikbeKahnat => "Rikbe Kahnat",
            MovableFeast::Erget => "Erget",
            MovableFeast::Paraclete => "Paraclete",
            MovableFeast::TsomeHawaryat => "Tsome Hawaryat",
            MovableFeast::TsomeDihnet => "Tsome Dihnet",
        }
    }

    /// English name.
    pub fn english_name(&self) -> &'static str {
        match self {
            MovableFeast::Nineveh => "Fast of Nineveh",
            MovableFeast::AbiyTsom => "Great Lent",
            MovableFeast::DebreZeit => "Mid-Lent (Mount of Olives)",
            MovableFeast::Hosanna => "Palm Sunday",
            MovableFeast::Siklet => "Good Friday",
            MovableFeast::Fasika => "Easter",
            MovableFeast::RikbeKahnat => "Synod of the Priests",
            MovableFeast::Erget => "Ascension",
            MovableFeast::Paraclete => "Pentecost",
            MovableFeast::TsomeHawaryat => "Apostles' Fast",
            MovableFeast::TsomeDihnet => "Fast of Salvation",
        }
    }
}

impl std::fmt::Display for MovableFeast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Tewsak of Beale Metqi ─────────────────────────────────────────────────────

fn weekday_tewsak(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Monday => 6,
        Weekday::Tuesday => 5,
        Weekday::Wednesday => 4,
        Weekday::Thursday => 3,
        Weekday::Friday => 2,
        Weekday::Saturday => 8,
        Weekday::Sunday => 7,
    }
}

// ── BahireHasab ───────────────────────────────────────────────────────────────

/// The complete Bahire Hasab computation for one Ethiopian year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BahireHasab {
    year: i32,
    amete_alem: i32,
    wenber: u8,
    abekte: u8,
    metqi: u8,
    tinte_qemer: Weekday,
    beale_metqi: EthiopianDate,
    beale_metqi_weekday: Weekday,
    mebaja_hamer: u8,
    nineveh: EthiopianDate,
    dates: [Date; FEAST_COUNT],
}

impl BahireHasab {
    /// Run the computus for Ethiopian `year`.
    ///
    /// # Errors
    /// [`Error::UnsupportedYearRange`] outside [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(year: i32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::UnsupportedYearRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }

        let amete_alem = AMETE_ALEM_OFFSET + year;
        let wenber = (amete_alem - 1) % 19;
        let abekte = (wenber * 11) % 30;
        let metqi = match (wenber * 19) % 30 {
            0 => 30,
            m => m,
        } as u8;
        let tinte_qemer =
            Weekday::from_days_since_monday(((amete_alem + amete_alem / 4) % 7) as u8);

        let beale_month = if metqi > 14 {
            EthiopianMonth::Meskerem
        } else {
            EthiopianMonth::Tikimt
        };
        let beale_metqi = EthiopianDate::new(year, beale_month.number(), metqi)?;
        let offset = (tinte_qemer.ordinal() - 1) as u16 + beale_metqi.day_of_year() - 1;
        let beale_metqi_weekday = Weekday::from_days_since_monday((offset % 7) as u8);

        let mebaja_hamer = metqi + weekday_tewsak(beale_metqi_weekday);
        let nineveh_month = match beale_month {
            EthiopianMonth::Meskerem => EthiopianMonth::Tir,
            _ => EthiopianMonth::Yekatit,
        };
        let nineveh = if mebaja_hamer > 30 {
            EthiopianDate::new(year, nineveh_month.number() + 1, mebaja_hamer - 30)?
        } else {
            EthiopianDate::new(year, nineveh_month.number(), mebaja_hamer)?
        };

        let nineveh_date = nineveh.to_gregorian()?;
        let mut dates = [nineveh_date; FEAST_COUNT];
        for (slot, feast) in dates.iter_mut().zip(MovableFeast::ALL) {
            *slot = nineveh_date.add_days(feast.days_from_nineveh())?;
        }

        let fasika = dates[MovableFeast::Fasika as usize];
        ensure_post!(
            fasika.weekday() == Weekday::Sunday,
            "Fasika {year} computed as {fasika}, a {}",
            fasika.weekday()
        );

        Ok(Self {
            year,
            amete_alem,
            wenber: wenber as u8,
            abekte: abekte as u8,
            metqi,
            tinte_qemer,
            beale_metqi,
            beale_metqi_weekday,
            mebaja_hamer,
            nineveh,
            dates,
        })
    }

    // ── Intermediate values ───────────────────────────────────────────────────

    /// The Ethiopian year this computation is for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Year of the world (`5500 + year`).
    pub fn amete_alem(&self) -> i32 {
        self.amete_alem
    }

    /// Position in the 19-year cycle (0–18).
    pub fn wenber(&self) -> u8 {
        self.wenber
    }

    /// Epact (0–29).
    pub fn abekte(&self) -> u8 {
        self.abekte
    }

    /// Metqi (1–30).
    pub fn metqi(&self) -> u8 {
        self.metqi
    }

    /// Weekday of Meskerem 1.
    pub fn tinte_qemer(&self) -> Weekday {
        self.tinte_qemer
    }

    /// Beale Metqi, in Meskerem or Tikimt.
    pub fn beale_metqi(&self) -> EthiopianDate {
        self.beale_metqi
    }

    /// Weekday of Beale Metqi.
    pub fn beale_metqi_weekday(&self) -> Weekday {
        self.beale_metqi_weekday
    }

    /// Day of the month on which Nineveh falls, before carrying past day 30.
    pub fn mebaja_hamer(&self) -> u8 {
        self.mebaja_hamer
    }

    /// The start of the Fast of Nineveh.
    pub fn nineveh(&self) -> EthiopianDate {
        self.nineveh
    }

    // ── Feast dates ───────────────────────────────────────────────────────────

    /// Gregorian date of `feast`.
    pub fn date_of(&self, feast: MovableFeast) -> Date {
        self.dates[feast as usize]
    }

    /// Ethiopian date of `feast`.
    pub fn ethiopian_date_of(&self, feast: MovableFeast) -> EthiopianDate {
        EthiopianDate::from_gregorian(self.date_of(feast))
    }

    /// The feast falling on `date`, if any.
    pub fn feast_on(&self, date: Date) -> Option<MovableFeast> {
        MovableFeast::ALL
            .into_iter()
            .find(|f| self.date_of(*f) == date)
    }

    /// Easter Sunday.
    pub fn fasika(&self) -> Date {
        self.date_of(MovableFeast::Fasika)
    }

    /// Good Friday (Fasika − 2).
    pub fn good_friday(&self) -> Date {
        self.date_of(MovableFeast::Siklet)
    }

    /// Palm Sunday (Fasika − 7).
    pub fn palm_sunday(&self) -> Date {
        self.date_of(MovableFeast::Hosanna)
    }

    /// Ascension (Fasika + 39).
    pub fn ascension(&self) -> Date {
        self.date_of(MovableFeast::Erget)
    }

    /// Pentecost (Fasika + 49).
    pub fn pentecost(&self) -> Date {
        self.date_of(MovableFeast::Paraclete)
    }

    /// First day of Great Lent (Fasika − 55).
    pub fn great_lent_start(&self) -> Date {
        self.date_of(MovableFeast::AbiyTsom)
    }

    /// First day of the Apostles' fast (Fasika + 50).
    pub fn apostles_fast_start(&self) -> Date {
        self.date_of(MovableFeast::TsomeHawaryat)
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Gregorian date of Fasika in Ethiopian `year`.
pub fn fasika(year: i32) -> Result<Date> {
    Ok(BahireHasab::new(year)?.fasika())
}

/// Gregorian date of Good Friday in Ethiopian `year`.
pub fn good_friday(year: i32) -> Result<Date> {
    Ok(BahireHasab::new(year)?.good_friday())
}

/// Gregorian date of Palm Sunday in Ethiopian `year`.
pub fn palm_sunday(year: i32) -> Result<Date> {
    Ok(BahireHasab::new(year)?.palm_sunday())
}

/// Gregorian date of the Ascension in Ethiopian `year`.
pub fn ascension(year: i32) -> Result<Date> {
    Ok(BahireHasab::new(year)?.ascension())
}

/// Gregorian date of Pentecost in Ethiopian `year`.
pub fn pentecost(year: i32) -> Result<Date> {
    Ok(BahireHasab::new(year)?.pentecost())
}

/// Gregorian date of the first day of Great Lent in Ethiopian `year`.
pub fn great_lent_start(year: i32) -> Result<Date> {
    Ok(BahireHasab::new(year)?.great_lent_start())
}

/// Gregorian date of the first day of the Apostles' fast in Ethiopian `year`.
pub fn apostles_fast_start(year: i32) -> Result<Date> {
    Ok(BahireHasab::new(year)?.apostles_fast_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intermediate_values_2018() {
        let bh = BahireHasab::new(2018).unwrap();
        assert_eq!(bh.amete_alem(), 7518);
        assert_eq!(bh.wenber(), 12);
        assert_eq!(bh.abekte(), 12);
        assert_eq!(bh.metqi(), 18);
        assert_eq!(bh.tinte_qemer(), Weekday::Thursday);
        assert_eq!(bh.beale_metqi(), EthiopianDate::new(2018, 1, 18).unwrap());
        assert_eq!(bh.beale_metqi_weekday(), Weekday::Sunday);
        assert_eq!(bh.mebaja_hamer(), 25);
        assert_eq!(bh.nineveh(), EthiopianDate::new(2018, 5, 25).unwrap());
        assert_eq!(bh.fasika(), Date::from_ymd(2026, 4, 12).unwrap());
    }

    #[test]
    fn tinte_qemer_matches_new_year_weekday() {
        for year in 1990..2040 {
            let bh = BahireHasab::new(year).unwrap();
            let meskerem_1 = EthiopianDate::new(year, 1, 1).unwrap().to_gregorian().unwrap();
            assert_eq!(bh.tinte_qemer(), meskerem_1.weekday(), "{year}");
            assert_eq!(
                bh.beale_metqi_weekday(),
                bh.beale_metqi().to_gregorian().unwrap().weekday(),
                "{year}"
            );
        }
    }

    #[test]
    fn abekte_and_metqi_sum_to_thirty() {
        for year in 1990..2030 {
            let bh = BahireHasab::new(year).unwrap();
            assert_eq!(bh.abekte() + bh.metqi(), 30, "{year}");
        }
    }

    #[test]
    fn fasika_offsets() {
        assert_eq!(MovableFeast::Siklet.days_from_fasika(), -2);
        assert_eq!(MovableFeast::Hosanna.days_from_fasika(), -7);
        assert_eq!(MovableFeast::AbiyTsom.days_from_fasika(), -55);
        assert_eq!(MovableFeast::Erget.days_from_fasika(), 39);
        assert_eq!(MovableFeast::Paraclete.days_from_fasika(), 49);
        assert_eq!(MovableFeast::TsomeHawaryat.days_from_fasika(), 50);
    }

    #[test]
    fn range_is_enforced() {
        assert_eq!(
            BahireHasab::new(99),
            Err(Error::UnsupportedYearRange {
                year: 99,
                min: MIN_YEAR,
                max: MAX_YEAR
            })
        );
        assert!(fasika(MAX_YEAR + 1).is_err());
        assert!(fasika(MIN_YEAR).is_ok());
        assert!(fasika(MAX_YEAR).is_ok());
    }

    #[test]
    fn feast_on_finds_movable_days() {
        let bh = BahireHasab::new(2017).unwrap();
        assert_eq!(bh.feast_on(bh.fasika()), Some(MovableFeast::Fasika));
        assert_eq!(bh.feast_on(bh.good_friday()), Some(MovableFeast::Siklet));
        assert_eq!(bh.feast_on(bh.fasika() + 1), None);
    }
}
