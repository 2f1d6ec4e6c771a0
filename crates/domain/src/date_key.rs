// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical lookup keys for calendar days.
//!
//! A `DateKey` is the `YYYY-MM-DD` form of a calendar day. It is derived
//! from the year, month, and day only, so any two values that denote the
//! same day produce the same key no matter what time of day they carry.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const KEY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The canonical key of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey {
    /// The day this key was computed from. Drives ordering.
    date: Date,
    /// The `YYYY-MM-DD` text.
    value: String,
}

impl DateKey {
    /// Computes the key of a calendar day.
    #[must_use]
    pub fn of(date: Date) -> Self {
        let value: String = date
            .format(KEY_FORMAT)
            .unwrap_or_else(|_| date.to_string());
        Self { date, value }
    }

    /// Returns the `YYYY-MM-DD` text of this key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the calendar day this key denotes.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        Self::of(date)
    }
}

impl From<PrimitiveDateTime> for DateKey {
    fn from(datetime: PrimitiveDateTime) -> Self {
        Self::of(datetime.date())
    }
}

// The calendar day in the value's own offset; no conversion to UTC.
impl From<OffsetDateTime> for DateKey {
    fn from(datetime: OffsetDateTime) -> Self {
        Self::of(datetime.date())
    }
}

impl FromStr for DateKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date: Date =
            Date::parse(s.trim(), KEY_FORMAT).map_err(|e| DomainError::InvalidDateKey {
                value: s.to_string(),
                error: e.to_string(),
            })?;
        Ok(Self::of(date))
    }
}

impl TryFrom<String> for DateKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.value
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
