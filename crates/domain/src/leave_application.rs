// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave application submissions.
//!
//! An application is what the "apply for leave" form produces. Once
//! validated it becomes a pending [`LeaveRequest`].

use crate::category::{ColorToken, EventCategory};
use crate::error::DomainError;
use crate::leave_request::{LeavePeriod, LeaveRequest, LeaveStatus};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The leave types offered by the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    Casual,
    Sick,
    Holiday,
    Emergency,
}

impl LeaveType {
    /// All leave types, in the order the form lists them.
    pub const ALL: [Self; 4] = [Self::Casual, Self::Sick, Self::Holiday, Self::Emergency];

    /// Returns the display label, e.g. "Casual Leave".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Casual => "Casual Leave",
            Self::Sick => "Sick Leave",
            Self::Holiday => "Holiday Leave",
            Self::Emergency => "Emergency Leave",
        }
    }

    /// Returns the color the form uses for this type.
    #[must_use]
    pub const fn color_token(&self) -> ColorToken {
        match self {
            Self::Casual => ColorToken::Blue,
            Self::Sick => ColorToken::Yellow,
            Self::Holiday => ColorToken::Purple,
            Self::Emergency => ColorToken::Red,
        }
    }

    /// Returns the calendar category days of this leave are shown as.
    ///
    /// Emergency leave has no calendar category.
    #[must_use]
    pub const fn event_category(&self) -> Option<EventCategory> {
        match self {
            Self::Casual => Some(EventCategory::CasualLeave),
            Self::Sick => Some(EventCategory::SickLeave),
            Self::Holiday => Some(EventCategory::HolidayLeave),
            Self::Emergency => None,
        }
    }
}

impl FromStr for LeaveType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        let stem: &str = normalized.strip_suffix("leave").unwrap_or(&normalized);

        match stem {
            "casual" => Ok(Self::Casual),
            "sick" => Ok(Self::Sick),
            "holiday" => Ok(Self::Holiday),
            "emergency" => Ok(Self::Emergency),
            _ => Err(DomainError::UnknownLeaveType(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A submitted leave application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// The first day of leave.
    pub start_date: Date,
    /// The last day of leave.
    pub end_date: Date,
    /// The kind of leave requested.
    pub leave_type: LeaveType,
    /// Short reason for the leave.
    pub reason: String,
    /// Optional long-form description.
    pub description: String,
}

impl LeaveApplication {
    /// Validates this application and returns its covered period.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The end date is before the start date
    /// - The reason is empty
    pub fn validate(&self) -> Result<LeavePeriod, DomainError> {
        let period: LeavePeriod = LeavePeriod::new(self.start_date, self.end_date)?;

        if self.reason.trim().is_empty() {
            return Err(DomainError::EmptyLeaveReason);
        }

        Ok(period)
    }

    /// Converts this application into a pending leave request.
    ///
    /// # Errors
    ///
    /// Returns an error if the application fails validation.
    pub fn into_request(self) -> Result<LeaveRequest, DomainError> {
        let period: LeavePeriod = self.validate()?;
        let mut request: LeaveRequest = LeaveRequest::new(
            &period.duration_label(),
            self.leave_type.label(),
            period.days(),
            LeaveStatus::Pending,
            self.reason.trim(),
        )?
        .with_period(period);

        let description: &str = self.description.trim();
        if !description.is_empty() {
            request = request.with_description(description);
        }

        Ok(request)
    }
}
