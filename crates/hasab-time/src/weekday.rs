//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1..=7 => Some(ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Construct from a count of days after Monday, reduced modulo 7.
    pub fn from_days_since_monday(n: u8) -> Self {
        ALL[(n % 7) as usize]
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Amharic name of the day (`ሰኞ` … `እሑድ`).
    pub fn amharic_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "ሰኞ",
            Weekday::Tuesday => "ማክሰኞ",
            Weekday::Wednesday => "ረቡዕ",
            Weekday::Thursday => "ሐሙስ",
            Weekday::Friday => "ዓርብ",
            Weekday::Saturday => "ቅዳሜ",
            Weekday::Sunday => "እሑድ",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_roundtrip() {
        for n in 1..=7u8 {
            assert_eq!(Weekday::from_ordinal(n).unwrap().ordinal(), n);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn days_since_monday_wraps() {
        assert_eq!(Weekday::from_days_since_monday(0), Weekday::Monday);
        assert_eq!(Weekday::from_days_since_monday(6), Weekday::Sunday);
        assert_eq!(Weekday::from_days_since_monday(9), Weekday::Wednesday);
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::Friday.to_string(), "Friday");
        assert_eq!(Weekday::Wednesday.amharic_name(), "ረቡዕ");
    }
}
