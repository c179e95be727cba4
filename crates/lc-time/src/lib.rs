//! # lc-time
//!
//! Calendar-date, weekday, date-range and reference-month types, the
//! `Calendar` trait, and the weekend-plus-holiday [`BlockedDateSet`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Weekends plus a supplied holiday list.
pub mod blocked;

/// Calendar trait, day classification and the weekend-only calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DateRange` — inclusive date span and the overlap test.
pub mod range;

/// `Weekday` — day of the week.
pub mod weekday;

/// `YearMonth` — a reference month.
pub mod year_month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use blocked::{BlockedDateSet, Holiday};
pub use calendar::{Calendar, DayKind, WeekendsOnly};
pub use date::Date;
pub use range::DateRange;
pub use weekday::Weekday;
pub use year_month::YearMonth;
