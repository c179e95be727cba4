//! Leave-request status and the two-step approval workflow.
//!
//! A request starts `Pending`.  The manager either approves it (it becomes
//! `ManagerApproved` and waits for HR) or rejects it.  HR then approves
//! (`Approved`) or rejects a manager-approved request.

use lc_core::ensure;
use lc_core::errors::Result;
use serde::{Deserialize, Serialize};

/// Status of a leave request, serialised with the picklist values
/// `Pending`, `ManagerApproved`, `Approved` and `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeaveStatus {
    /// Submitted, awaiting the manager.
    #[default]
    Pending,
    /// Approved by the manager, awaiting HR.
    ManagerApproved,
    /// Approved by HR; final.
    Approved,
    /// Rejected by the manager or HR; final.
    Rejected,
}

/// Who is acting on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reviewer {
    /// The employee's manager (first step).
    Manager,
    /// Human resources (second step).
    Hr,
}

impl LeaveStatus {
    /// Return `true` if the request is still awaiting the manager.
    pub fn is_pending(&self) -> bool {
        matches!(self, LeaveStatus::Pending)
    }

    /// Only pending requests may be edited or cancelled by their owner.
    pub fn is_editable(&self) -> bool {
        self.is_pending()
    }

    /// Approved at either level.
    pub fn is_approved(&self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::ManagerApproved)
    }

    /// Return `true` if the request is waiting for an HR decision.
    pub fn awaits_hr(&self) -> bool {
        matches!(self, LeaveStatus::ManagerApproved)
    }

    /// Return `true` if the request was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, LeaveStatus::Rejected)
    }

    /// Return `true` if no further decision can be taken.
    pub fn is_final(&self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }

    /// The status `reviewer` is allowed to act on.
    pub fn awaiting(reviewer: Reviewer) -> LeaveStatus {
        match reviewer {
            Reviewer::Manager => LeaveStatus::Pending,
            Reviewer::Hr => LeaveStatus::ManagerApproved,
        }
    }

    /// Status after `reviewer` approves.
    pub fn approve(self, reviewer: Reviewer) -> Result<LeaveStatus> {
        ensure!(
            self == Self::awaiting(reviewer),
            "{reviewer:?} cannot approve a request that is {self}"
        );
        Ok(match reviewer {
            Reviewer::Manager => LeaveStatus::ManagerApproved,
            Reviewer::Hr => LeaveStatus::Approved,
        })
    }

    /// Status after `reviewer` rejects.
    pub fn reject(self, reviewer: Reviewer) -> Result<LeaveStatus> {
        ensure!(
            self == Self::awaiting(reviewer),
            "{reviewer:?} cannot reject a request that is {self}"
        );
        Ok(LeaveStatus::Rejected)
    }

    /// The picklist value.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::ManagerApproved => "ManagerApproved",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
