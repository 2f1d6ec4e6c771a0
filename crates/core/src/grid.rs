// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month grid layout.
//!
//! The grid covers whole weeks, Sunday first, so the first and last rows
//! usually include days of the adjacent months. Those days are rendered
//! like any other day and flagged as outside the displayed month.

use crate::cursor::MonthCursor;
use crate::error::CoreError;
use crate::query::EventQuery;
use crate::render::{DayCell, DayCellRenderer};
use leavecal_domain::{DateKey, DomainError, YearMonth};
use serde::Serialize;
use time::{Date, Duration};

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One day of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridDay {
    /// The day.
    pub date: Date,
    /// The day's lookup key.
    pub key: DateKey,
    /// Day of month, as printed in the cell corner.
    pub day_number: u8,
    /// Whether the day belongs to the displayed month.
    pub in_displayed_month: bool,
    /// Whether the day is today.
    pub is_today: bool,
    /// Whether the day is the cursor's selected day.
    pub is_selected: bool,
    /// The rendered events.
    pub cell: DayCell,
}

/// A rendered month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// The displayed month.
    pub month: YearMonth,
    /// Caption, e.g. "June 2025".
    pub title: String,
    /// Rows of exactly seven days.
    pub weeks: Vec<Vec<GridDay>>,
}

impl MonthGrid {
    /// Lays out the cursor's displayed month.
    ///
    /// # Arguments
    ///
    /// * `cursor` - Supplies the displayed month and the selected day
    /// * `query` - Event lookup for each day
    /// * `renderer` - Turns each day's events into a cell
    /// * `today` - The current date, for highlighting
    ///
    /// # Errors
    ///
    /// Returns an error if the grid would reach outside the supported date range.
    pub fn build(
        cursor: &MonthCursor,
        query: EventQuery<'_>,
        renderer: &DayCellRenderer,
        today: Date,
    ) -> Result<Self, CoreError> {
        let month: YearMonth = cursor.displayed_month();
        let first: Date = month.first_day()?;
        let last: Date = month.last_day()?;

        let leading: i64 = i64::from(first.weekday().number_days_from_sunday());
        let trailing: i64 = 6 - i64::from(last.weekday().number_days_from_sunday());

        let start: Date = first
            .checked_sub(Duration::days(leading))
            .ok_or_else(|| out_of_range(month, 1))?;
        let end: Date = last
            .checked_add(Duration::days(trailing))
            .ok_or_else(|| out_of_range(month, month.days()))?;

        let days: Vec<GridDay> = std::iter::successors(Some(start), |d| {
            d.checked_add(Duration::DAY).filter(|next| *next <= end)
        })
        .map(|date| GridDay {
            date,
            key: DateKey::of(date),
            day_number: date.day(),
            in_displayed_month: month.contains(date),
            is_today: date == today,
            is_selected: date == cursor.selected_date(),
            cell: renderer.render(query.events_on(date)),
        })
        .collect();

        let weeks: Vec<Vec<GridDay>> = days
            .chunks(DAYS_PER_WEEK)
            .map(<[GridDay]>::to_vec)
            .collect();

        Ok(Self {
            month,
            title: month.to_string(),
            weeks,
        })
    }

    /// Iterates over every day of the grid, row by row.
    pub fn days(&self) -> impl Iterator<Item = &GridDay> {
        self.weeks.iter().flatten()
    }
}

fn out_of_range(month: YearMonth, day: u8) -> DomainError {
    DomainError::InvalidCalendarDate {
        year: month.year(),
        month: u8::from(month.month()),
        day,
    }
}
