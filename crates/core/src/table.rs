// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use leavecal_domain::{LeaveRequest, LeaveStatus, StatusTone};
use serde::Serialize;

/// Column a request listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Fewest days first.
    Days,
    /// Pending, then approved, then rejected.
    Status,
}

/// Narrowing and ordering applied to a request listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    /// Keep only requests with this status.
    pub status: Option<LeaveStatus>,
    /// Keep only requests whose type, details, or duration contain this text, ignoring case.
    pub search: Option<String>,
    /// Order rows by this column. Unsorted rows keep insertion order.
    pub sort: Option<SortKey>,
}

/// One row of a request listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveRow<'a> {
    /// Position of the request in the table, used to open its detail view.
    pub index: usize,
    /// The request.
    pub request: &'a LeaveRequest,
    /// The status color intent.
    pub tone: StatusTone,
}

/// The leave requests of one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveRequestTable {
    requests: Vec<LeaveRequest>,
}

impl LeaveRequestTable {
    /// Creates a table holding `requests` in the given order.
    #[must_use]
    pub const fn new(requests: Vec<LeaveRequest>) -> Self {
        Self { requests }
    }

    /// Appends a request and returns its index.
    pub fn push(&mut self, request: LeaveRequest) -> usize {
        self.requests.push(request);
        self.requests.len() - 1
    }

    /// Returns the number of requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Returns all requests in insertion order.
    #[must_use]
    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    /// Returns the request at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::RequestNotFound` if `index` is out of range.
    pub fn get(&self, index: usize) -> Result<&LeaveRequest, CoreError> {
        self.requests.get(index).ok_or(CoreError::RequestNotFound {
            index,
            len: self.requests.len(),
        })
    }

    /// Returns every row, unfiltered, in insertion order.
    #[must_use]
    pub fn rows(&self) -> Vec<LeaveRow<'_>> {
        self.query(&TableFilter::default())
    }

    /// Returns the rows that pass `filter`, in the order it asks for.
    #[must_use]
    pub fn query(&self, filter: &TableFilter) -> Vec<LeaveRow<'_>> {
        let needle: Option<String> = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut rows: Vec<LeaveRow<'_>> = self
            .requests
            .iter()
            .enumerate()
            .filter(|(_, request)| filter.status.is_none_or(|status| request.status == status))
            .filter(|(_, request)| needle.as_deref().is_none_or(|n| matches_search(request, n)))
            .map(|(index, request)| LeaveRow {
                index,
                request,
                tone: request.tone(),
            })
            .collect();

        // Stable sorts: ties keep insertion order.
        match filter.sort {
            Some(SortKey::Days) => rows.sort_by_key(|row| row.request.days()),
            Some(SortKey::Status) => rows.sort_by_key(|row| status_rank(row.request.status)),
            None => {}
        }

        rows
    }
}

fn matches_search(request: &LeaveRequest, needle: &str) -> bool {
    [
        request.leave_type.as_str(),
        request.details.as_str(),
        request.duration_label.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

const fn status_rank(status: LeaveStatus) -> u8 {
    match status {
        LeaveStatus::Pending => 0,
        LeaveStatus::Approved => 1,
        LeaveStatus::Rejected => 2,
    }
}
