//! # hasab
//!
//! Ethiopian calendar conversion, the Bahire Hasab computus, and a
//! liturgical calendar covering the Ethiopian Orthodox and Western
//! traditions.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hasab-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! hasab = "0.1"
//! ```
//!
//! ```rust
//! use hasab::liturgy::LiturgicalCalendarManager;
//! use hasab::time::Date;
//!
//! let manager = LiturgicalCalendarManager::default();
//! let info = manager.daily_info(Date::from_ymd(2026, 1, 7)?)?;
//! assert_eq!(info.ethiopian_date.to_string(), "Tahsas 29, 2018");
//! assert_eq!(
//!     info.feast_day.map(|f| f.name_english),
//!     Some("Genna (Ethiopian Christmas)")
//! );
//!
//! let json = serde_json::to_value(&info).unwrap();
//! assert_eq!(json["gregorian_date"], "2026-01-07");
//! # Ok::<(), hasab::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and the per-year cache.
pub use hasab_core as core;

/// Gregorian and Ethiopian dates, Bahire Hasab, Western Easter.
pub use hasab_time as time;

/// Feasts, fasts, seasons and the calendar manager.
pub use hasab_liturgy as liturgy;
