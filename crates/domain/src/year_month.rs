// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// A month of a specific year, as shown by a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// The year.
    year: i32,
    /// The month.
    month: Month,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    #[must_use]
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Returns the month that contains `date`.
    #[must_use]
    pub const fn containing(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the following month, rolling December over into January.
    #[must_use]
    pub const fn next(self) -> Self {
        match self.month {
            Month::December => Self {
                year: self.year.saturating_add(1),
                month: Month::January,
            },
            month => Self {
                year: self.year,
                month: month.next(),
            },
        }
    }

    /// Returns the preceding month, rolling January back into December.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self.month {
            Month::January => Self {
                year: self.year.saturating_sub(1),
                month: Month::December,
            },
            month => Self {
                year: self.year,
                month: month.previous(),
            },
        }
    }

    /// Returns the number of days in this month.
    #[must_use]
    pub const fn days(&self) -> u8 {
        match self.month {
            Month::January
            | Month::March
            | Month::May
            | Month::July
            | Month::August
            | Month::October
            | Month::December => 31,
            Month::April | Month::June | Month::September | Month::November => 30,
            Month::February => {
                if time::util::is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    /// Returns the first day of this month.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the range supported by `time::Date`.
    pub fn first_day(&self) -> Result<Date, DomainError> {
        self.day(1)
    }

    /// Returns the last day of this month.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the range supported by `time::Date`.
    pub fn last_day(&self) -> Result<Date, DomainError> {
        self.day(self.days())
    }

    /// Returns whether `date` falls inside this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn day(&self, day: u8) -> Result<Date, DomainError> {
        Date::from_calendar_date(self.year, self.month, day).map_err(|_| {
            DomainError::InvalidCalendarDate {
                year: self.year,
                month: u8::from(self.month),
                day,
            }
        })
    }
}

impl From<Date> for YearMonth {
    fn from(date: Date) -> Self {
        Self::containing(date)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
