//! Western (Gregorian) Easter.

use hasab_core::errors::Result;

use crate::date::Date;

/// Easter Sunday of Gregorian `year` in the Western calendar.
///
/// Uses Oudin's algorithm; all intermediate terms stay non-negative for
/// years in the [`Date`] range.
pub fn western_easter(year: u16) -> Result<Date> {
    let y = year as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn known_dates() {
        let cases = [
            (1818, 3, 22),
            (2000, 4, 23),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2285, 3, 22),
        ];
        for (y, m, d) in cases {
            assert_eq!(western_easter(y).unwrap(), Date::from_ymd(y, m, d).unwrap(), "{y}");
        }
    }

    #[test]
    fn always_a_sunday_between_march_22_and_april_25() {
        for y in 1583..=2400u16 {
            let e = western_easter(y).unwrap();
            assert_eq!(e.weekday(), Weekday::Sunday, "{e}");
            assert!(e >= Date::from_ymd(y, 3, 22).unwrap());
            assert!(e <= Date::from_ymd(y, 4, 25).unwrap());
        }
    }
}
