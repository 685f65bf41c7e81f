//! Integration tests for the Bahire Hasab computus.

use hasab_time::bahire_hasab::{
    ascension, fasika, good_friday, palm_sunday, pentecost, MAX_YEAR, MIN_YEAR,
};
use hasab_time::{BahireHasab, Date, EthiopianDate, EthiopianMonth, FasikaCache, MovableFeast, Weekday};
use proptest::prelude::*;

fn eth(y: i32, m: u8, d: u8) -> EthiopianDate {
    EthiopianDate::new(y, m, d).unwrap()
}

/// Julian-calendar Easter (Meeus) mapped onto a Gregorian `Date`.
fn julian_easter(year: i32) -> Date {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    // Serial of a Julian date: two days before the proleptic Gregorian count
    // at year 1, with the Julian leap rule.
    let before_march = if month <= 2 {
        0
    } else if year % 4 == 0 {
        -1
    } else {
        -2
    };
    let serial = -2 + 365 * (year - 1) + (year - 1) / 4 + (367 * month - 362) / 12 + before_march + day;
    Date::from_serial(serial).unwrap()
}

// ─── Reference fixtures ───────────────────────────────────────────────────────

#[test]
fn fasika_fixtures() {
    let cases = [
        (2016, eth(2016, 8, 27)),
        (2017, eth(2017, 8, 12)),
        (2019, eth(2019, 8, 24)),
        (2020, eth(2020, 8, 8)),
    ];
    for (year, expected) in cases {
        let bh = BahireHasab::new(year).unwrap();
        assert_eq!(bh.ethiopian_date_of(MovableFeast::Fasika), expected, "Fasika {year}");
    }
}

#[test]
fn fasika_gregorian_dates() {
    assert_eq!(fasika(2016).unwrap(), Date::from_ymd(2024, 5, 5).unwrap());
    assert_eq!(fasika(2017).unwrap(), Date::from_ymd(2025, 4, 20).unwrap());
    assert_eq!(fasika(2018).unwrap(), Date::from_ymd(2026, 4, 12).unwrap());
    assert_eq!(fasika(2019).unwrap(), Date::from_ymd(2027, 5, 2).unwrap());
}

#[test]
fn derived_feasts_2017() {
    let f = fasika(2017).unwrap();
    assert_eq!(good_friday(2017).unwrap(), f - 2);
    assert_eq!(palm_sunday(2017).unwrap(), f - 7);
    assert_eq!(ascension(2017).unwrap(), f + 39);
    assert_eq!(pentecost(2017).unwrap(), f + 49);
    assert_eq!(good_friday(2017).unwrap().weekday(), Weekday::Friday);
    assert_eq!(ascension(2017).unwrap().weekday(), Weekday::Thursday);
}

// ─── Structural properties ────────────────────────────────────────────────────

#[test]
fn fasika_is_sunday_for_fifty_years() {
    for year in 2000..2050 {
        assert_eq!(fasika(year).unwrap().weekday(), Weekday::Sunday, "Fasika {year}");
    }
}

#[test]
fn fasika_falls_in_megabit_or_miyazya() {
    for year in 1900..2100 {
        let month = BahireHasab::new(year)
            .unwrap()
            .ethiopian_date_of(MovableFeast::Fasika)
            .ethiopian_month();
        assert!(
            matches!(month, EthiopianMonth::Megabit | EthiopianMonth::Miyazya),
            "Fasika {year} in {month}"
        );
    }
}

#[test]
fn movable_feasts_stay_inside_their_window() {
    // Megabit 19 .. Sene 19 bounds Hosanna through Paraclete in every year.
    let first = eth(2000, 7, 19).day_of_year();
    let last = eth(2000, 10, 19).day_of_year();
    for year in 1900..2100 {
        let bh = BahireHasab::new(year).unwrap();
        for feast in [
            MovableFeast::Hosanna,
            MovableFeast::Siklet,
            MovableFeast::Fasika,
            MovableFeast::Erget,
            MovableFeast::Paraclete,
        ] {
            let doy = bh.ethiopian_date_of(feast).day_of_year();
            assert!((first..=last).contains(&doy), "{feast} {year} at day {doy}");
        }
    }
}

#[test]
fn feast_order_is_calendar_order() {
    let bh = BahireHasab::new(2018).unwrap();
    let dates: Vec<Date> = MovableFeast::ALL.iter().map(|f| bh.date_of(*f)).collect();
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn cache_returns_computed_value() {
    let cache = FasikaCache::new();
    let bh = cache
        .get_or_try_insert_with(2018, BahireHasab::new)
        .unwrap();
    assert_eq!(bh, BahireHasab::new(2018).unwrap());
    assert_eq!(cache.len(), 1);
    assert!(cache.get_or_try_insert_with(MAX_YEAR + 1, BahireHasab::new).is_err());
    assert_eq!(cache.len(), 1);
}

proptest! {
    /// Invariant: Fasika coincides with Julian-calendar Easter over the whole range.
    #[test]
    fn fasika_is_julian_easter(year in MIN_YEAR..=MAX_YEAR) {
        prop_assert_eq!(fasika(year).unwrap(), julian_easter(year + 8));
    }

    /// Invariant: Fasika is always a Sunday.
    #[test]
    fn fasika_is_sunday(year in MIN_YEAR..=MAX_YEAR) {
        prop_assert_eq!(fasika(year).unwrap().weekday(), Weekday::Sunday);
    }
}
