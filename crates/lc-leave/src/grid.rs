//! Month grid — six Sunday-first weeks of annotated day cells.
//!
//! The grid always holds 42 cells: the reference month plus the trailing
//! days of the previous month and the leading days of the next one.  It is
//! rebuilt wholesale on every navigation or data refresh and never mutated.

use crate::interval::LeaveInterval;
use lc_time::{Calendar, Date, DayKind, Weekday, WeekendsOnly, YearMonth};

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Rows per grid.
pub const WEEKS_PER_GRID: usize = 6;

/// Cells per grid.
pub const CELLS_PER_GRID: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// One day of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// The cell's date.
    pub date: Date,
    /// `true` for days of the reference month, `false` for padding.
    pub is_current_month: bool,
    /// `true` for the current-month cell equal to today.
    pub is_today: bool,
    /// Weekend / holiday classification.
    pub kind: DayKind,
    /// Requests taking leave on this day, in input order.  Always empty on
    /// padding cells.
    pub overlapping: Vec<LeaveInterval>,
}

impl DayCell {
    /// Return `true` if at least one request covers this day.
    pub fn has_leave(&self) -> bool {
        !self.overlapping.is_empty()
    }

    /// Return `true` if leave may not start or end on this day.
    pub fn is_blocked(&self) -> bool {
        self.kind.is_blocked()
    }

    /// Day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.date.day_of_month()
    }
}

/// A 6 × 7 month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    month: YearMonth,
    weeks: Vec<[DayCell; DAYS_PER_WEEK]>,
}

impl CalendarGrid {
    /// Build the grid for `month`.  See [`CalendarGridBuilder`].
    pub fn build(month: YearMonth, today: Date, intervals: &[LeaveInterval]) -> Self {
        CalendarGridBuilder::new(month, today).build(intervals)
    }

    /// Column headings, Sunday first: `["Sun", "Mon", … "Sat"]`.
    pub fn weekday_header() -> [&'static str; DAYS_PER_WEEK] {
        Weekday::SUNDAY_FIRST.map(|weekday| weekday.short_name())
    }

    /// The reference month.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// The six weeks, Sunday first.
    pub fn weeks(&self) -> &[[DayCell; DAYS_PER_WEEK]] {
        &self.weeks
    }

    /// All 42 cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    /// The cell showing `date`, if it is inside the window.
    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        let offset = date - self.first_date();
        if (0..CELLS_PER_GRID as i32).contains(&offset) {
            let offset = offset as usize;
            Some(&self.weeks[offset / DAYS_PER_WEEK][offset % DAYS_PER_WEEK])
        } else {
            None
        }
    }

    /// Date of the top-left cell (always a Sunday).
    pub fn first_date(&self) -> Date {
        self.weeks[0][0].date
    }

    /// Date of the bottom-right cell (always a Saturday).
    pub fn last_date(&self) -> Date {
        self.weeks[WEEKS_PER_GRID - 1][DAYS_PER_WEEK - 1].date
    }

    /// The cell flagged as today, if today is shown in the reference month.
    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cells().find(|cell| cell.is_today)
    }
}

/// Builds a [`CalendarGrid`] from a reference month, today's date and a
/// snapshot of leave requests.
///
/// Cells are classified with [`WeekendsOnly`] unless a calendar (usually a
/// [`lc_time::BlockedDateSet`]) is supplied.
#[derive(Debug, Clone, Copy)]
pub struct CalendarGridBuilder<'a> {
    month: YearMonth,
    today: Date,
    calendar: &'a dyn Calendar,
}

impl<'a> CalendarGridBuilder<'a> {
    /// Begin building the grid for `month`.
    pub fn new(month: YearMonth, today: Date) -> Self {
        Self {
            month,
            today,
            calendar: &WeekendsOnly,
        }
    }

    /// Classify cells with `calendar`.
    pub fn calendar(mut self, calendar: &'a dyn Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Produce the grid.
    pub fn build(&self, intervals: &[LeaveInterval]) -> CalendarGrid {
        let first = self.month.first_day();
        let leading = first.weekday().sunday_index() as i32;
        let origin = first - leading;

        let weeks = (0..WEEKS_PER_GRID)
            .map(|week| {
                std::array::from_fn(|day| {
                    let offset = (week * DAYS_PER_WEEK + day) as i32;
                    self.cell(origin + offset, intervals)
                })
            })
            .collect();

        CalendarGrid {
            month: self.month,
            weeks,
        }
    }

    fn cell(&self, date: Date, intervals: &[LeaveInterval]) -> DayCell {
        let is_current_month = self.month.contains(date);
        let overlapping = if is_current_month {
            intervals
                .iter()
                .filter(|interval| interval.covers(date))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };
        DayCell {
            date,
            is_current_month,
            is_today: is_current_month && date == self.today,
            kind: self.calendar.classify(date),
            overlapping,
        }
    }
}
