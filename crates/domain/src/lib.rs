// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod category;
mod date_key;
mod error;
mod event;
mod holiday;
mod leave_application;
mod leave_request;
mod year_month;

#[cfg(test)]
mod tests;

pub use category::{CATEGORY_STYLES, CategoryStyle, ColorToken, EventCategory};
pub use date_key::DateKey;
pub use error::DomainError;
pub use event::CalendarEvent;
pub use holiday::{Holiday, LeaveBalance, upcoming_holidays};
pub use leave_application::{LeaveApplication, LeaveType};
pub use leave_request::{LeavePeriod, LeaveRequest, LeaveStatus, StatusTone, status_style};
pub use year_month::YearMonth;
