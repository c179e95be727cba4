//! Read-only views over a request snapshot for the manager and HR screens.

use crate::interval::{LeaveId, LeaveInterval};
use crate::status::LeaveStatus;
use lc_core::ensure;
use lc_core::errors::{Error, Result};

/// A snapshot of leave requests grouped by workflow state.
///
/// Every accessor preserves the snapshot's order.
#[derive(Debug, Clone, Copy)]
pub struct RequestBoard<'a> {
    requests: &'a [LeaveInterval],
}

impl<'a> RequestBoard<'a> {
    /// Wrap a snapshot.
    pub fn new(requests: &'a [LeaveInterval]) -> Self {
        Self { requests }
    }

    /// All requests.
    pub fn all(&self) -> &'a [LeaveInterval] {
        self.requests
    }

    /// Requests awaiting the manager.
    pub fn pending(&self) -> Vec<&'a LeaveInterval> {
        self.filtered(LeaveStatus::is_pending)
    }

    /// Requests approved at either level (the manager's "approved" column).
    pub fn approved(&self) -> Vec<&'a LeaveInterval> {
        self.filtered(LeaveStatus::is_approved)
    }

    /// Rejected requests.
    pub fn rejected(&self) -> Vec<&'a LeaveInterval> {
        self.filtered(LeaveStatus::is_rejected)
    }

    /// Manager-approved requests waiting for HR.
    pub fn awaiting_hr(&self) -> Vec<&'a LeaveInterval> {
        self.filtered(LeaveStatus::awaits_hr)
    }

    /// Requests HR has approved.
    pub fn hr_approved(&self) -> Vec<&'a LeaveInterval> {
        self.filtered(|status| *status == LeaveStatus::Approved)
    }

    /// Look a request up by id.
    pub fn find(&self, id: &LeaveId) -> Option<&'a LeaveInterval> {
        self.requests.iter().find(|request| request.id() == id)
    }

    /// The request with `id`, provided its owner may still edit it.
    pub fn editable(&self, id: &LeaveId) -> Result<&'a LeaveInterval> {
        let Some(request) = self.find(id) else {
            let message = format!("no leave request with id {id}");
            return Err(Error::InvalidArgument(message));
        };
        ensure!(
            request.status().is_editable(),
            "leave request {id} is {} and can no longer be edited",
            request.status()
        );
        Ok(request)
    }

    fn filtered(&self, keep: impl Fn(&LeaveStatus) -> bool) -> Vec<&'a LeaveInterval> {
        self.requests
            .iter()
            .filter(|request| keep(&request.status()))
            .collect()
    }
}
