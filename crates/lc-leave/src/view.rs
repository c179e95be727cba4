//! `CalendarView` — month navigation over a request and holiday snapshot.
//!
//! The view owns the state a calendar screen keeps between renders: the
//! reference month, today's date, the latest request list and the blocked
//! dates.  Every call to [`CalendarView::grid`] builds a fresh grid.

use crate::availability::{self, ValidationError};
use crate::grid::{CalendarGrid, CalendarGridBuilder};
use crate::interval::{LeaveId, LeaveInterval};
use lc_core::errors::Result;
use lc_time::{BlockedDateSet, Date, DateRange, Holiday, YearMonth};

/// State of one calendar screen.
#[derive(Debug, Clone)]
pub struct CalendarView {
    month: YearMonth,
    today: Date,
    requests: Vec<LeaveInterval>,
    blocked: BlockedDateSet,
}

impl CalendarView {
    /// A view opened on the month containing `today`, with no requests and
    /// weekends as the only blocked dates.
    pub fn new(today: Date) -> Result<Self> {
        Ok(Self {
            month: YearMonth::containing(today)?,
            today,
            requests: Vec::new(),
            blocked: BlockedDateSet::new(),
        })
    }

    /// A view opened on the current month, using [`Date::today`].
    pub fn for_today() -> Result<Self> {
        Self::new(Date::today()?)
    }

    /// The month on display.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// The reference date.
    pub fn today(&self) -> Date {
        self.today
    }

    /// The current request snapshot.
    pub fn requests(&self) -> &[LeaveInterval] {
        &self.requests
    }

    /// The current blocked dates.
    pub fn blocked(&self) -> &BlockedDateSet {
        &self.blocked
    }

    /// Step back one month.
    pub fn show_previous_month(&mut self) {
        self.month = self.month.previous();
        tracing::trace!(month = %self.month, "calendar navigated");
    }

    /// Step forward one month.
    pub fn show_next_month(&mut self) {
        self.month = self.month.next();
        tracing::trace!(month = %self.month, "calendar navigated");
    }

    /// Jump to the month containing `today`, updating the reference date.
    pub fn show_today(&mut self, today: Date) -> Result<()> {
        self.month = YearMonth::containing(today)?;
        self.today = today;
        tracing::trace!(month = %self.month, "calendar navigated");
        Ok(())
    }

    /// Replace the request snapshot after a fetch.
    pub fn replace_requests(&mut self, requests: Vec<LeaveInterval>) {
        tracing::trace!(count = requests.len(), "request snapshot replaced");
        self.requests = requests;
    }

    /// Rebuild the blocked dates from a fresh holiday list.
    pub fn replace_holidays<I>(&mut self, holidays: I)
    where
        I: IntoIterator<Item = Holiday>,
    {
        self.blocked = BlockedDateSet::from_holidays(holidays);
    }

    /// Build the grid for the month on display.
    pub fn grid(&self) -> CalendarGrid {
        tracing::trace!(month = %self.month, requests = self.requests.len(), "building grid");
        CalendarGridBuilder::new(self.month, self.today)
            .calendar(&self.blocked)
            .build(&self.requests)
    }

    /// Check a proposed range against this view's snapshot.
    ///
    /// Pass the id of the request being edited as `exclude_id`.
    pub fn validate(
        &self,
        candidate: DateRange,
        exclude_id: Option<&LeaveId>,
    ) -> Result<(), ValidationError> {
        availability::validate(
            candidate,
            &self.requests,
            &self.blocked,
            self.today,
            exclude_id,
        )
    }
}
