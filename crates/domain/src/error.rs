// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Event category text is not part of the closed category set.
    #[error("Unknown event category: '{0}'")]
    UnknownCategory(String),
    /// Leave status text is not one of pending, approved, or rejected.
    #[error("Unknown leave status: '{0}'")]
    UnknownLeaveStatus(String),
    /// Leave type text is not one of the offered leave types.
    #[error("Unknown leave type: '{0}'")]
    UnknownLeaveType(String),
    /// A date key string is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date key '{value}': {error}")]
    InvalidDateKey {
        /// The rejected input.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// A leave request must cover at least one day.
    #[error("Invalid leave day count: {0}. Must be greater than 0")]
    InvalidLeaveDays(u16),
    /// A leave period ends before it starts.
    #[error("Invalid leave period: end date {end} is before start date {start}")]
    InvalidLeavePeriod {
        /// The first day of leave.
        start: Date,
        /// The last day of leave.
        end: Date,
    },
    /// A leave application was submitted without a reason.
    #[error("Leave reason cannot be empty")]
    EmptyLeaveReason,
    /// A year/month pair falls outside the supported calendar range.
    #[error("Invalid calendar date: {year}-{month:02}-{day:02}")]
    InvalidCalendarDate {
        /// The year.
        year: i32,
        /// The month number (1-12).
        month: u8,
        /// The day of month.
        day: u8,
    },
}
