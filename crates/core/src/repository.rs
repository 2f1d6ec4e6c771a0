// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only data sources for the calendar page.
//!
//! Views never own their data directly. They load it through these traits,
//! so the built-in sample data is just one implementation among others.

use crate::error::CoreError;
use crate::store::EventStore;
use leavecal_domain::{Holiday, LeaveBalance, LeaveRequest};

/// Source of calendar events, holidays, and leave balances.
pub trait CalendarRepository {
    /// Loads every calendar event.
    ///
    /// # Errors
    ///
    /// Returns an error if the events cannot be read or are invalid.
    fn load_events(&self) -> Result<EventStore, CoreError>;

    /// Loads the holiday list.
    ///
    /// # Errors
    ///
    /// Returns an error if the holidays cannot be read or are invalid.
    fn load_holidays(&self) -> Result<Vec<Holiday>, CoreError>;

    /// Loads the remaining leave balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance cannot be read.
    fn load_balance(&self) -> Result<LeaveBalance, CoreError>;
}

/// Source of leave requests.
pub trait LeaveRequestRepository {
    /// Loads every leave request, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the requests cannot be read or are invalid.
    fn load_requests(&self) -> Result<Vec<LeaveRequest>, CoreError>;
}
