//! `EthiopianMonth` — the thirteen months of the Ethiopian year.

use hasab_core::errors::{Error, Result};

/// Month of the Ethiopian year.
///
/// Variants are numbered 1–13 (Meskerem = 1, Pagume = 13).  Months 1–12
/// always have 30 days; Pagume has 5, or 6 in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum EthiopianMonth {
    /// Meskerem (1), begins Sept 11/12.
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hedar (3).
    Hedar = 3,
    /// Tahsas (4).
    Tahsas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miyazya (8).
    Miyazya = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehasse (12).
    Nehasse = 12,
    /// Pagume (13), the five- or six-day epagomenal month.
    Pagume = 13,
}

const ALL: [EthiopianMonth; 13] = [
    EthiopianMonth::Meskerem,
    EthiopianMonth::Tikimt,
    EthiopianMonth::Hedar,
    EthiopianMonth::Tahsas,
    EthiopianMonth::Tir,
    EthiopianMonth::Yekatit,
    EthiopianMonth::Megabit,
    EthiopianMonth::Miyazya,
    EthiopianMonth::Ginbot,
    EthiopianMonth::Sene,
    EthiopianMonth::Hamle,
    EthiopianMonth::Nehasse,
    EthiopianMonth::Pagume,
];

const NAMES: [&str; 13] = [
    "Meskerem", "Tikimt", "Hedar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miyazya", "Ginbot",
    "Sene", "Hamle", "Nehasse", "Pagume",
];

const GEEZ_NAMES: [&str; 13] = [
    "መስከረም", "ጥቅምት", "ኅዳር", "ታኅሣሥ", "ጥር", "የካቲት", "መጋቢት", "ሚያዝያ", "ግንቦት", "ሰኔ", "ሐምሌ",
    "ነሐሴ", "ጳጉሜን",
];

impl EthiopianMonth {
    /// Construct from a number (1 = Meskerem … 13 = Pagume).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=13 => Some(ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Transliterated name (`"Meskerem"`, `"Tikimt"`, …).
    pub fn name(&self) -> &'static str {
        NAMES[*self as usize - 1]
    }

    /// Name in Ge'ez script (`"መስከረም"`, …).
    pub fn geez_name(&self) -> &'static str {
        GEEZ_NAMES[*self as usize - 1]
    }

    /// Number of days in this month for the given Ethiopian year.
    pub fn days(&self, year: i32) -> u8 {
        match self {
            EthiopianMonth::Pagume if crate::ethiopian::is_leap_year(year) => 6,
            EthiopianMonth::Pagume => 5,
            _ => 30,
        }
    }
}

/// Transliterated name of Ethiopian month `month` (1–13).
pub fn month_name(month: u8) -> Result<&'static str> {
    EthiopianMonth::from_number(month)
        .map(|m| m.name())
        .ok_or_else(|| Error::InvalidDate(format!("month {month} out of range [1, 13]")))
}

impl std::fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<EthiopianMonth> for u8 {
    fn from(m: EthiopianMonth) -> u8 {
        m as u8
    }
}
