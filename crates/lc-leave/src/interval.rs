//! `LeaveInterval` — one fetched leave request.

use crate::status::LeaveStatus;
use lc_core::ensure;
use lc_core::errors::{Error, Result};
use lc_time::{Date, DateRange};
use serde::{Deserialize, Serialize};

/// Record identifier of a leave request.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveId(String);

impl LeaveId {
    /// Wrap a record id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LeaveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeaveId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LeaveId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A leave request's inclusive date span plus its descriptive fields.
///
/// Immutable once fetched; identity is [`LeaveInterval::id`].  The
/// invariant `start_date <= end_date` holds for every value, including
/// deserialised ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawLeaveInterval")]
pub struct LeaveInterval {
    id: LeaveId,
    start_date: Date,
    end_date: Date,
    status: LeaveStatus,
    #[serde(rename = "type")]
    leave_type: String,
    reason: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLeaveInterval {
    id: LeaveId,
    start_date: Date,
    end_date: Date,
    #[serde(default)]
    status: LeaveStatus,
    #[serde(default, rename = "type")]
    leave_type: String,
    #[serde(default)]
    reason: String,
}

impl TryFrom<RawLeaveInterval> for LeaveInterval {
    type Error = Error;

    fn try_from(raw: RawLeaveInterval) -> Result<Self> {
        let interval = LeaveInterval::new(raw.id, raw.start_date, raw.end_date, raw.status)?;
        Ok(interval.with_type(raw.leave_type).with_reason(raw.reason))
    }
}

impl LeaveInterval {
    /// Create an interval with empty type and reason.
    pub fn new(
        id: impl Into<LeaveId>,
        start_date: Date,
        end_date: Date,
        status: LeaveStatus,
    ) -> Result<Self> {
        let id = id.into();
        ensure!(
            start_date <= end_date,
            "leave request {id}: start {start_date} is after end {end_date}"
        );
        Ok(Self {
            id,
            start_date,
            end_date,
            status,
            leave_type: String::new(),
            reason: String::new(),
        })
    }

    /// Set the leave type (e.g. `"Vacation"`, `"Sick Leave"`).
    pub fn with_type(mut self, leave_type: impl Into<String>) -> Self {
        self.leave_type = leave_type.into();
        self
    }

    /// Set the free-text reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Record id.
    pub fn id(&self) -> &LeaveId {
        &self.id
    }

    /// First day of leave.
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Last day of leave (inclusive).
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Current status.
    pub fn status(&self) -> LeaveStatus {
        self.status
    }

    /// Leave type; empty when the source left it blank.
    pub fn leave_type(&self) -> &str {
        &self.leave_type
    }

    /// Reason; empty when the source left it blank.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The inclusive span as a [`DateRange`].
    pub fn range(&self) -> DateRange {
        DateRange::unchecked(self.start_date, self.end_date)
    }

    /// Return `true` if leave is taken on `date`.
    pub fn covers(&self, date: Date) -> bool {
        self.range().contains(date)
    }
}

impl std::fmt::Display for LeaveInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.leave_type.is_empty() {
            "Leave"
        } else {
            &self.leave_type
        };
        write!(f, "{kind} {} ({})", self.range(), self.status)?;
        if !self.reason.is_empty() {
            write!(f, ": {}", self.reason)?;
        }
        Ok(())
    }
}
