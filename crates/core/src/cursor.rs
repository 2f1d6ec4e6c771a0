// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar navigation state.
//!
//! A cursor holds the selected day and the displayed month. The two are
//! independent: a selected day may lie outside the displayed month, e.g.
//! after clicking a leading day of the next month.

use crate::clock::Clock;
use leavecal_domain::YearMonth;
use serde::Serialize;
use time::Date;
use tracing::debug;

/// A navigation request, as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    /// Select a specific day. The displayed month is unchanged.
    SelectDate(Date),
    /// Show the following month.
    NextMonth,
    /// Show the preceding month.
    PreviousMonth,
    /// Select today and show its month.
    Today,
}

/// The selected day and displayed month of a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    /// The selected day.
    selected_date: Date,
    /// The month currently shown.
    displayed_month: YearMonth,
}

impl MonthCursor {
    /// Creates a cursor on today's date.
    #[must_use]
    pub fn new(clock: &dyn Clock) -> Self {
        Self::at(clock.today())
    }

    /// Creates a cursor selecting `date` and showing its month.
    #[must_use]
    pub const fn at(date: Date) -> Self {
        Self {
            selected_date: date,
            displayed_month: YearMonth::containing(date),
        }
    }

    /// Creates a cursor with an explicit selected day and month.
    #[must_use]
    pub const fn with_month(selected_date: Date, displayed_month: YearMonth) -> Self {
        Self {
            selected_date,
            displayed_month,
        }
    }

    /// Returns the selected day.
    #[must_use]
    pub const fn selected_date(&self) -> Date {
        self.selected_date
    }

    /// Returns the displayed month.
    #[must_use]
    pub const fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    /// Selects `date` without moving the displayed month.
    pub fn select_date(&mut self, date: Date) {
        self.selected_date = date;
        debug!(selected = %date, "Selected date");
    }

    /// Moves the displayed month forward by one.
    pub fn next_month(&mut self) {
        self.displayed_month = self.displayed_month.next();
        debug!(month = %self.displayed_month, "Moved to next month");
    }

    /// Moves the displayed month back by one.
    pub fn previous_month(&mut self) {
        self.displayed_month = self.displayed_month.previous();
        debug!(month = %self.displayed_month, "Moved to previous month");
    }

    /// Resets both the selected day and the displayed month to today.
    pub fn today(&mut self, clock: &dyn Clock) {
        *self = Self::at(clock.today());
        debug!(selected = %self.selected_date, "Jumped to today");
    }

    /// Applies a navigation command.
    pub fn apply(&mut self, command: CursorCommand, clock: &dyn Clock) {
        match command {
            CursorCommand::SelectDate(date) => self.select_date(date),
            CursorCommand::NextMonth => self.next_month(),
            CursorCommand::PreviousMonth => self.previous_month(),
            CursorCommand::Today => self.today(clock),
        }
    }
}
