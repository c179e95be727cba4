//! Availability checks for a proposed leave range.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. `start <= end`, else [`ValidationError::InvalidRange`];
//! 2. `start >= today`, else [`ValidationError::PastDate`];
//! 3. neither end falls on a weekend or holiday, else
//!    [`ValidationError::BlockedDate`] (start is checked first);
//! 4. no existing request overlaps the range, else
//!    [`ValidationError::Overlap`] naming the first conflict.
//!
//! A [`BalanceCheck`] may be layered on top; it only runs once the four
//! checks above have passed.

use crate::interval::{LeaveId, LeaveInterval};
use lc_time::{BlockedDateSet, Calendar, Date, DateRange};
use thiserror::Error;

/// Why a proposed leave range cannot be submitted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The start date is after the end date.
    #[error("start date {start} cannot be after end date {end}")]
    InvalidRange {
        /// Proposed start.
        start: Date,
        /// Proposed end.
        end: Date,
    },

    /// The start date is before today.
    #[error("start date {start} cannot be in the past (today is {today})")]
    PastDate {
        /// Proposed start.
        start: Date,
        /// The reference date.
        today: Date,
    },

    /// The start or end date is a weekend or holiday.
    #[error("{date} is a weekend or holiday")]
    BlockedDate {
        /// The offending endpoint.
        date: Date,
    },

    /// The range overlaps an existing request.
    #[error("leave dates overlap with existing request {id}")]
    Overlap {
        /// Id of the first conflicting request.
        id: LeaveId,
    },

    /// More working days requested than the employee has left.
    #[error("{requested} working days requested but only {available} available")]
    InsufficientBalance {
        /// Working days in the proposed range.
        requested: u32,
        /// Remaining balance.
        available: u32,
    },
}

/// Validate `candidate` against existing requests, blocked dates and today.
///
/// `exclude_id` names the request being edited so it does not conflict with
/// itself.
pub fn validate(
    candidate: DateRange,
    existing: &[LeaveInterval],
    blocked: &BlockedDateSet,
    today: Date,
    exclude_id: Option<&LeaveId>,
) -> Result<(), ValidationError> {
    let mut validator = AvailabilityValidator::new(blocked, today);
    if let Some(id) = exclude_id {
        validator = validator.excluding(id);
    }
    validator.validate(candidate, existing)
}

/// Optional check that the range fits in the remaining leave balance.
///
/// Working days are the days of the range not blocked by the validator's
/// [`BlockedDateSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceCheck {
    available_days: u32,
}

impl BalanceCheck {
    /// Allow at most `available_days` working days.
    pub fn new(available_days: u32) -> Self {
        Self { available_days }
    }

    /// Remaining balance.
    pub fn available_days(&self) -> u32 {
        self.available_days
    }

    /// Check `candidate` against the balance.
    pub fn check(
        &self,
        candidate: DateRange,
        calendar: &dyn Calendar,
    ) -> Result<(), ValidationError> {
        let requested = calendar.business_days_between(candidate.start, candidate.end);
        if requested > self.available_days {
            return Err(ValidationError::InsufficientBalance {
                requested,
                available: self.available_days,
            });
        }
        Ok(())
    }
}

/// Reusable validator bound to one blocked-date set and one reference date.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityValidator<'a> {
    blocked: &'a BlockedDateSet,
    today: Date,
    exclude: Option<&'a LeaveId>,
    balance: Option<BalanceCheck>,
}

impl<'a> AvailabilityValidator<'a> {
    /// Create a validator.
    pub fn new(blocked: &'a BlockedDateSet, today: Date) -> Self {
        Self {
            blocked,
            today,
            exclude: None,
            balance: None,
        }
    }

    /// Ignore the request with this id when looking for overlaps.
    pub fn excluding(mut self, id: &'a LeaveId) -> Self {
        self.exclude = Some(id);
        self
    }

    /// Also enforce a remaining leave balance.
    pub fn with_balance(mut self, balance: BalanceCheck) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Run every check in order, stopping at the first failure.
    pub fn validate(
        &self,
        candidate: DateRange,
        existing: &[LeaveInterval],
    ) -> Result<(), ValidationError> {
        let DateRange { start, end } = candidate;
        if !candidate.is_ordered() {
            return Err(ValidationError::InvalidRange { start, end });
        }
        if start < self.today {
            return Err(ValidationError::PastDate {
                start,
                today: self.today,
            });
        }
        for date in [start, end] {
            if self.blocked.contains(date) {
                return Err(ValidationError::BlockedDate { date });
            }
        }
        if let Some(conflict) = self.first_conflict(candidate, existing) {
            return Err(ValidationError::Overlap {
                id: conflict.id().clone(),
            });
        }
        if let Some(balance) = &self.balance {
            balance.check(candidate, self.blocked)?;
        }
        Ok(())
    }

    /// First existing request (in input order) overlapping `candidate`.
    pub fn first_conflict<'r>(
        &self,
        candidate: DateRange,
        existing: &'r [LeaveInterval],
    ) -> Option<&'r LeaveInterval> {
        existing
            .iter()
            .filter(|interval| Some(interval.id()) != self.exclude)
            .find(|interval| candidate.overlaps(&interval.range()))
    }
}
