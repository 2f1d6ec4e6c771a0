// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory, date-keyed event storage.
//!
//! The store is sparse: a day with no events has no entry, and looking it
//! up yields an empty slice. Events on one day keep insertion order, which
//! is also their display order.

use leavecal_domain::{CalendarEvent, DateKey};
use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from calendar day to the ordered events on that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventStore {
    /// Events per day. No list is ever empty.
    days: BTreeMap<DateKey, Vec<CalendarEvent>>,
}

impl EventStore {
    /// Creates a new empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Appends `event` to the events of `key`.
    ///
    /// Identical events are stored again; there is no duplicate detection.
    pub fn put(&mut self, key: DateKey, event: CalendarEvent) {
        self.days.entry(key).or_default().push(event);
    }

    /// Returns the events of `key` in insertion order, or an empty slice.
    #[must_use]
    pub fn get(&self, key: &DateKey) -> &[CalendarEvent] {
        match self.days.get(key) {
            Some(events) => events,
            None => &[],
        }
    }

    /// Returns the total number of events across all days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Returns the number of days holding at least one event.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Returns whether the store holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates over populated days in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[CalendarEvent])> {
        self.days.iter().map(|(key, events)| (key, events.as_slice()))
    }

    /// Iterates over populated days from `first` to `last`, both included.
    ///
    /// Yields nothing when `first` is after `last`.
    pub fn range<'a>(
        &'a self,
        first: &DateKey,
        last: &DateKey,
    ) -> impl Iterator<Item = (&'a DateKey, &'a [CalendarEvent])> + use<'a> {
        let bounds: Option<(DateKey, DateKey)> =
            (first <= last).then(|| (first.clone(), last.clone()));
        bounds
            .into_iter()
            .flat_map(move |(first, last)| self.days.range(first..=last))
            .map(|(key, events)| (key, events.as_slice()))
    }
}

impl Extend<(DateKey, CalendarEvent)> for EventStore {
    fn extend<T: IntoIterator<Item = (DateKey, CalendarEvent)>>(&mut self, iter: T) {
        for (key, event) in iter {
            self.put(key, event);
        }
    }
}

impl FromIterator<(DateKey, CalendarEvent)> for EventStore {
    fn from_iter<T: IntoIterator<Item = (DateKey, CalendarEvent)>>(iter: T) -> Self {
        let mut store: Self = Self::new();
        store.extend(iter);
        store
    }
}
