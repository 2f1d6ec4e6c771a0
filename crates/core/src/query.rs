// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::EventStore;
use leavecal_domain::{CalendarEvent, DateKey, YearMonth};
use time::Date;

/// Read access to an [`EventStore`] by calendar day.
///
/// Every day-cell lookup goes through here so the date-to-key derivation
/// is the same everywhere.
#[derive(Debug, Clone, Copy)]
pub struct EventQuery<'a> {
    store: &'a EventStore,
}

impl<'a> EventQuery<'a> {
    /// Creates a query over `store`.
    #[must_use]
    pub const fn new(store: &'a EventStore) -> Self {
        Self { store }
    }

    /// Returns the events on the calendar day of `date`, in display order.
    ///
    /// Accepts anything with a calendar day: `Date`, `PrimitiveDateTime`,
    /// `OffsetDateTime`, or a `DateKey`. Time of day is ignored.
    #[must_use]
    pub fn events_on(&self, date: impl Into<DateKey>) -> &'a [CalendarEvent] {
        let key: DateKey = date.into();
        self.store.get(&key)
    }

    /// Returns every populated day of `month`, in date order.
    ///
    /// # Errors
    ///
    /// Returns an error if the month lies outside the supported date range.
    pub fn events_in_month(
        &self,
        month: YearMonth,
    ) -> Result<Vec<(Date, &'a [CalendarEvent])>, CoreError> {
        let first: DateKey = DateKey::of(month.first_day()?);
        let last: DateKey = DateKey::of(month.last_day()?);

        Ok(self
            .store
            .range(&first, &last)
            .map(|(key, events)| (key.date(), events))
            .collect())
    }
}
