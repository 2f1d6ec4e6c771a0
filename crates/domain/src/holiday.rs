// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::category::EventCategory;
use crate::event::CalendarEvent;
use crate::leave_application::LeaveType;
use serde::{Deserialize, Serialize};
use time::Date;

/// A named public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday name, e.g. "Republic Day".
    pub name: String,
    /// The day it falls on.
    pub date: Date,
}

impl Holiday {
    /// Creates a new `Holiday`.
    #[must_use]
    pub fn new(name: &str, date: Date) -> Self {
        Self {
            name: name.to_string(),
            date,
        }
    }

    /// Returns the calendar event marking this holiday.
    #[must_use]
    pub fn to_event(&self) -> CalendarEvent {
        CalendarEvent::labelled(EventCategory::Holiday, &self.name)
    }
}

/// Returns holidays on or after `from`, in date order, at most `limit` of them.
#[must_use]
pub fn upcoming_holidays(holidays: &[Holiday], from: Date, limit: usize) -> Vec<&Holiday> {
    let mut upcoming: Vec<&Holiday> = holidays.iter().filter(|h| h.date >= from).collect();
    upcoming.sort_by_key(|h| h.date);
    upcoming.truncate(limit);
    upcoming
}

/// Remaining leave days per leave type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LeaveBalance {
    /// Casual leave days left.
    pub casual_left: u16,
    /// Sick leave days left.
    pub sick_left: u16,
    /// Holiday leave days left.
    pub holiday_left: u16,
}

impl LeaveBalance {
    /// Creates a new `LeaveBalance`.
    #[must_use]
    pub const fn new(casual_left: u16, sick_left: u16, holiday_left: u16) -> Self {
        Self {
            casual_left,
            sick_left,
            holiday_left,
        }
    }

    /// Returns the days left for a leave type.
    ///
    /// Emergency leave is not budgeted and has no balance.
    #[must_use]
    pub const fn remaining(&self, leave_type: LeaveType) -> Option<u16> {
        match leave_type {
            LeaveType::Casual => Some(self.casual_left),
            LeaveType::Sick => Some(self.sick_left),
            LeaveType::Holiday => Some(self.holiday_left),
            LeaveType::Emergency => None,
        }
    }
}
