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

mod approval;
mod clock;
mod cursor;
mod error;
mod grid;
mod modal;
mod page;
mod query;
mod render;
mod repository;
mod seed;
mod store;
mod table;

#[cfg(test)]
mod tests;

pub use approval::{apply_approved_requests, events_for_request};
pub use clock::{Clock, FixedClock, SystemClock};
pub use cursor::{CursorCommand, MonthCursor};
pub use error::CoreError;
pub use grid::{DAYS_PER_WEEK, GridDay, MonthGrid, WEEKDAY_HEADERS};
pub use modal::ModalState;
pub use page::CalendarPage;
pub use query::EventQuery;
pub use render::{
    DayCell, DayCellRenderer, DisplayBudget, ELLIPSIS, VisibleEvent, truncate_status,
};
pub use repository::{CalendarRepository, LeaveRequestRepository};
pub use seed::SeedData;
pub use store::EventStore;
pub use table::{LeaveRequestTable, LeaveRow, SortKey, TableFilter};
