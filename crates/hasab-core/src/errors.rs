//! Error types for hasab-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Nothing is signalled by
//! panicking or by silently clamping inputs: callers decide whether to surface
//! the message or fall back to a default.

use thiserror::Error;

/// The top-level error type used throughout hasab-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A Gregorian or Ethiopian date with an out-of-range component.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A year outside the range an operation supports.
    #[error("year {year} outside supported range [{min}, {max}]")]
    UnsupportedYearRange {
        /// The offending year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Text that could not be parsed into a date.
    #[error("cannot parse {0:?} as a date")]
    Parse(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),
}

/// Shorthand `Result` type used throughout hasab-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hasab_core::{ensure, errors::Error};
/// fn day_of_month(d: u8) -> hasab_core::errors::Result<u8> {
///     ensure!((1..=30).contains(&d), "day {d} out of range");
///     Ok(d)
/// }
/// assert!(day_of_month(12).is_ok());
/// assert!(day_of_month(31).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hasab_core::{ensure_post, errors::Error};
/// fn double(x: i32) -> hasab_core::errors::Result<i32> {
///     let result = x * 2;
///     ensure_post!(result % 2 == 0, "result must be even, got {result}");
///     Ok(result)
/// }
/// assert!(double(3).is_ok());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}
