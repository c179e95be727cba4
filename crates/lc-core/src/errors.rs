//! Error types for leavecal.
//!
//! A single `thiserror`-derived enum covers construction, parsing and
//! workflow errors.  The `ensure!` macro defined here returns early with a
//! `Precondition` error.
//!
//! Availability checks on a proposed leave range are *not* reported through
//! this type; see `lc_leave::ValidationError`.

use thiserror::Error;

/// The top-level error type used throughout leavecal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (e.g. an illegal status transition).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (out-of-range components or arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// A boundary string could not be parsed.
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// What was being parsed (`"date"`, `"month"`, …).
        what: &'static str,
        /// The offending input.
        input: String,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout leavecal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lc_core::{ensure, errors::Error};
/// fn positive(days: i32) -> lc_core::errors::Result<i32> {
///     ensure!(days > 0, "days must be positive, got {days}");
///     Ok(days)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
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
