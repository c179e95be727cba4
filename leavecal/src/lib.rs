//! # leavecal
//!
//! Month calendars and availability checks for leave requests.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.  Application code should depend on this crate rather
//! than the individual `lc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use leavecal::leave::{CalendarGrid, LeaveInterval, LeaveStatus};
//! use leavecal::time::{Date, YearMonth};
//!
//! let today: Date = "2025-06-15".parse().unwrap();
//! let trip = LeaveInterval::new(
//!     "a01",
//!     "2025-06-10".parse().unwrap(),
//!     "2025-06-12".parse().unwrap(),
//!     LeaveStatus::Pending,
//! )
//! .unwrap();
//!
//! let grid = CalendarGrid::build(YearMonth::containing(today).unwrap(), today, &[trip]);
//! assert_eq!(grid.cells().count(), 42);
//! assert!(grid.cell("2025-06-12".parse().unwrap()).unwrap().has_leave());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, settings and boundary parsers.
pub use lc_core as core;

/// Dates, months, date ranges and blocked-date calendars.
pub use lc_time as time;

/// Leave intervals, the month grid and availability validation.
pub use lc_leave as leave;
