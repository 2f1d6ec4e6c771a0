// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave requests and the status taxonomy shared by every view of them.
//!
//! The request table and the request detail view both color a status
//! through [`status_style`]. `LeaveStatus::tone` delegates to the same
//! function, so typed and untyped statuses can never disagree.

use crate::category::{ColorToken, EventCategory};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

const SHORT_DAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none]");

/// The approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LeaveStatus {
    /// Submitted and awaiting a decision.
    #[default]
    Pending,
    /// Approved by a manager.
    Approved,
    /// Declined by a manager.
    Rejected,
}

impl LeaveStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns the color intent of this status.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        status_style(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::UnknownLeaveStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The color intent of a leave status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    Positive,
    Caution,
    Negative,
    Neutral,
}

impl StatusTone {
    /// Returns the color hint for this tone.
    #[must_use]
    pub const fn color_token(&self) -> ColorToken {
        match self {
            Self::Positive => ColorToken::Green,
            Self::Caution => ColorToken::Yellow,
            Self::Negative => ColorToken::Red,
            Self::Neutral => ColorToken::Gray,
        }
    }
}

/// Maps status text to its color intent, ignoring case.
///
/// Total over all inputs: unrecognized text maps to `StatusTone::Neutral`.
#[must_use]
pub fn status_style(status: &str) -> StatusTone {
    match status.trim().to_lowercase().as_str() {
        "approved" => StatusTone::Positive,
        "pending" => StatusTone::Caution,
        "rejected" => StatusTone::Negative,
        _ => StatusTone::Neutral,
    }
}

/// An inclusive range of leave days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LeavePeriodRaw")]
pub struct LeavePeriod {
    /// The first day of leave.
    start: Date,
    /// The last day of leave.
    end: Date,
}

impl LeavePeriod {
    /// Creates a new `LeavePeriod`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLeavePeriod` if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidLeavePeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of leave.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of leave.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of covered days, counting both ends.
    #[must_use]
    pub fn days(&self) -> u16 {
        let span: i64 = (self.end - self.start).whole_days() + 1;
        u16::try_from(span).unwrap_or(u16::MAX)
    }

    /// Iterates over every covered day in order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + use<> {
        let end: Date = self.end;
        let first: Option<Date> = Some(self.start).filter(|start| *start <= end);
        std::iter::successors(first, move |d| {
            d.checked_add(Duration::DAY).filter(|next| *next <= end)
        })
    }

    /// Formats this period the way request tables show it, e.g. "Jan 15 - Jan 17".
    #[must_use]
    pub fn duration_label(&self) -> String {
        let start: String = self
            .start
            .format(SHORT_DAY_FORMAT)
            .unwrap_or_else(|_| self.start.to_string());
        let end: String = self
            .end
            .format(SHORT_DAY_FORMAT)
            .unwrap_or_else(|_| self.end.to_string());
        format!("{start} - {end}")
    }
}

/// Wire form of a `LeavePeriod`, checked by `LeavePeriod::new` on load.
#[derive(Deserialize)]
struct LeavePeriodRaw {
    start: Date,
    end: Date,
}

impl TryFrom<LeavePeriodRaw> for LeavePeriod {
    type Error = DomainError;

    fn try_from(raw: LeavePeriodRaw) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// A request for time off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LeaveRequestRaw")]
pub struct LeaveRequest {
    /// Free-text duration, e.g. "Jan 15 - Jan 17".
    pub duration_label: String,
    /// Free-text leave type, e.g. "Casual Leave".
    pub leave_type: String,
    /// Number of days requested. Always positive.
    days: u16,
    /// The approval state.
    pub status: LeaveStatus,
    /// Short reason shown in the table.
    pub details: String,
    /// Optional long-form description shown in the detail view.
    pub description: Option<String>,
    /// The covered dates, when known.
    pub period: Option<LeavePeriod>,
}

impl LeaveRequest {
    /// Creates a new `LeaveRequest`.
    ///
    /// # Arguments
    ///
    /// * `duration_label` - Free-text duration
    /// * `leave_type` - Free-text leave type
    /// * `days` - Number of days requested
    /// * `status` - The approval state
    /// * `details` - Short reason
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLeaveDays` if `days` is zero.
    pub fn new(
        duration_label: &str,
        leave_type: &str,
        days: u16,
        status: LeaveStatus,
        details: &str,
    ) -> Result<Self, DomainError> {
        if days == 0 {
            return Err(DomainError::InvalidLeaveDays(days));
        }
        Ok(Self {
            duration_label: duration_label.to_string(),
            leave_type: leave_type.to_string(),
            days,
            status,
            details: details.to_string(),
            description: None,
            period: None,
        })
    }

    /// Returns this request with a long-form description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Returns this request with its covered dates.
    #[must_use]
    pub const fn with_period(mut self, period: LeavePeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// Returns the number of days requested.
    #[must_use]
    pub const fn days(&self) -> u16 {
        self.days
    }

    /// Returns the color intent of this request's status.
    #[must_use]
    pub fn tone(&self) -> StatusTone {
        self.status.tone()
    }

    /// Returns the calendar category of this request's leave type, if any.
    ///
    /// The leave type is free text; it maps to a category only when it
    /// names one of the leave categories.
    #[must_use]
    pub fn event_category(&self) -> Option<EventCategory> {
        self.leave_type
            .parse::<EventCategory>()
            .ok()
            .filter(EventCategory::is_leave)
    }
}

/// Wire form of a `LeaveRequest`, checked by `LeaveRequest::new` on load.
#[derive(Deserialize)]
struct LeaveRequestRaw {
    duration_label: String,
    leave_type: String,
    days: u16,
    status: LeaveStatus,
    details: String,
    description: Option<String>,
    period: Option<LeavePeriod>,
}

impl TryFrom<LeaveRequestRaw> for LeaveRequest {
    type Error = DomainError;

    fn try_from(raw: LeaveRequestRaw) -> Result<Self, Self::Error> {
        let mut request: Self = Self::new(
            &raw.duration_label,
            &raw.leave_type,
            raw.days,
            raw.status,
            &raw.details,
        )?;
        request.description = raw.description;
        request.period = raw.period;
        Ok(request)
    }
}
