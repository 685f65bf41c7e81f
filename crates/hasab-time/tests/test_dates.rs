//! Integration tests for the Gregorian `Date` type.

use hasab_core::errors::Error;
use hasab_time::date::{days_in_month, is_leap_year};
use hasab_time::weekday::Weekday;
use hasab_time::Date;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Consistency ──────────────────────────────────────────────────────────────

#[test]
fn consecutive_serials_walk_the_calendar() {
    let mut prev = date(1899, 12, 31);
    let end = date(2101, 1, 1);
    while prev < end {
        let next = prev + 1;
        let (py, pm, pd) = prev.ymd();
        let (ny, nm, nd) = next.ymd();

        if pd == days_in_month(py, pm) {
            assert_eq!(nd, 1, "{next:?} should start a month");
            if pm == 12 {
                assert_eq!((ny, nm), (py + 1, 1), "{next:?} should start a year");
            } else {
                assert_eq!((ny, nm), (py, pm + 1));
            }
        } else {
            assert_eq!((ny, nm, nd), (py, pm, pd + 1));
        }

        let expected = Weekday::from_days_since_monday(prev.weekday().ordinal());
        assert_eq!(next.weekday(), expected, "weekday sequence broken at {next:?}");
        prev = next;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert!(!is_leap_year(2025));
}

#[test]
fn range_limits() {
    assert_eq!(Date::MIN, date(100, 1, 1));
    assert_eq!(Date::MAX, date(9999, 12, 31));
    assert!(matches!(Date::MAX.add_days(1), Err(Error::InvalidDate(_))));
    assert!(matches!(Date::MIN.add_days(-1), Err(Error::InvalidDate(_))));
    assert!(Date::from_ymd(99, 12, 31).is_err());
    assert!(Date::from_ymd(2023, 2, 29).is_err());
}

#[test]
fn parsing() {
    assert_eq!("2025-09-11".parse::<Date>().unwrap(), date(2025, 9, 11));
    assert_eq!("07/01/2026".parse::<Date>().unwrap(), date(2026, 1, 7));
    assert!(matches!("2025/09/11".parse::<Date>(), Err(Error::Parse(_))));
    assert!(matches!("2025-13-01".parse::<Date>(), Err(Error::InvalidDate(_))));
}

#[test]
fn days_between_is_antisymmetric() {
    let a = date(2025, 9, 11);
    let b = date(2026, 1, 7);
    assert_eq!(a.days_between(b), 118);
    assert_eq!(b.days_between(a), -118);
    assert_eq!(b - a, 118);
}

proptest! {
    /// Invariant: serial → ymd → serial is the identity across the supported range.
    #[test]
    fn ymd_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }

    /// Invariant: ISO rendering parses back to the same date.
    #[test]
    fn iso_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        prop_assert_eq!(d.to_iso_string().parse::<Date>().unwrap(), d);
    }

    /// Invariant: weekday agrees with chrono.
    #[test]
    fn weekday_matches_chrono(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        use chrono::Datelike;
        let d = Date::from_serial(serial).unwrap();
        let n = chrono::NaiveDate::try_from(d).unwrap();
        prop_assert_eq!(
            d.weekday().ordinal() as u32,
            n.weekday().number_from_monday()
        );
    }
}
