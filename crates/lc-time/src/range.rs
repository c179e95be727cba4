//! `DateRange` — an inclusive span of calendar dates.

use crate::date::Date;
use lc_core::ensure;
use lc_core::errors::Result;
use serde::{Deserialize, Serialize};

/// An inclusive `[start, end]` date span.
///
/// Ranges built with [`DateRange::new`] satisfy `start <= end`.  A proposed
/// range typed in by a user may be inverted; build it with
/// [`DateRange::unchecked`] and let validation report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: Date,
    /// Last day (inclusive).
    pub end: Date,
}

impl DateRange {
    /// Create a range, requiring `start <= end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        ensure!(start <= end, "range start {start} is after end {end}");
        Ok(Self { start, end })
    }

    /// Create a range without checking its orientation.
    pub fn unchecked(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Return `true` if `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Return `true` if `date` lies within the range, both ends included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Return `true` if the two ranges share at least one day.
    ///
    /// Ranges that merely touch (`self.end == other.start`) overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Iterate over every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let start = self.start.serial();
        let end = self.end.serial();
        (start..=end).filter_map(|serial| Date::from_serial(serial).ok())
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
