//! # lc-leave
//!
//! Leave requests on a month calendar: the 42-cell grid, availability
//! validation of a proposed range, the approval workflow, and the
//! request groupings used by manager and HR screens.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Availability validation of a proposed leave range.
pub mod availability;

/// Request groupings for manager and HR screens.
pub mod board;

/// The 6 × 7 month grid.
pub mod grid;

/// `LeaveInterval` and `LeaveId`.
pub mod interval;

/// `LeaveStatus` and the approval workflow.
pub mod status;

/// `CalendarView` — navigation state for one calendar screen.
pub mod view;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use availability::{validate, AvailabilityValidator, BalanceCheck, ValidationError};
pub use board::RequestBoard;
pub use grid::{CalendarGrid, CalendarGridBuilder, DayCell};
pub use interval::{LeaveId, LeaveInterval};
pub use status::{LeaveStatus, Reviewer};
pub use view::CalendarView;
