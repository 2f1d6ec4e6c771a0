// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use leavecal_domain::LeaveRequest;
use serde::Serialize;

/// The dialog shown over the calendar page. At most one is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ModalState {
    /// No dialog.
    #[default]
    Closed,
    /// Details of one leave request.
    LeaveDetail {
        /// The request being shown.
        request: LeaveRequest,
    },
    /// The leave application form.
    ApplyLeave,
}

impl ModalState {
    /// Opens the detail view of `request`, replacing any open dialog.
    pub fn open_detail(&mut self, request: LeaveRequest) {
        *self = Self::LeaveDetail { request };
    }

    /// Opens the leave application form, replacing any open dialog.
    pub fn open_apply(&mut self) {
        *self = Self::ApplyLeave;
    }

    /// Closes whatever dialog is open.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Returns whether a dialog is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns the request of an open detail view.
    #[must_use]
    pub const fn detail(&self) -> Option<&LeaveRequest> {
        match self {
            Self::LeaveDetail { request } => Some(request),
            Self::Closed | Self::ApplyLeave => None,
        }
    }
}
