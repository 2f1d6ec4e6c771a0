// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_store;
use crate::{EventQuery, EventStore};
use leavecal_domain::{CalendarEvent, DateKey, EventCategory, YearMonth};
use time::macros::{date, datetime};
use time::{Date, Month};

#[test]
fn test_events_on_returns_seeded_order() {
    let store: EventStore = create_test_store();
    let query: EventQuery<'_> = EventQuery::new(&store);

    let events: &[CalendarEvent] = query.events_on(date!(2025 - 06 - 15));
    let categories: Vec<EventCategory> = events.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        vec![EventCategory::CasualLeave, EventCategory::Meeting]
    );
}

#[test]
fn test_events_on_empty_day_is_empty() {
    let store: EventStore = create_test_store();
    let query: EventQuery<'_> = EventQuery::new(&store);

    assert!(query.events_on(date!(2025 - 06 - 21)).is_empty());
}

#[test]
fn test_time_of_day_does_not_change_the_lookup() {
    let store: EventStore = create_test_store();
    let query: EventQuery<'_> = EventQuery::new(&store);

    let morning: &[CalendarEvent] = query.events_on(datetime!(2025-06-15 00:00:01));
    let evening: &[CalendarEvent] = query.events_on(datetime!(2025-06-15 23:59:59 UTC));
    assert_eq!(morning.len(), 2);
    assert_eq!(morning, evening);
}

#[test]
fn test_events_on_accepts_keys() {
    let store: EventStore = create_test_store();
    let query: EventQuery<'_> = EventQuery::new(&store);
    let key: DateKey = "2025-06-20".parse().unwrap();

    assert_eq!(query.events_on(key).len(), 1);
}

#[test]
fn test_events_in_month_lists_populated_days_in_order() {
    let mut store: EventStore = create_test_store();
    store.put(
        DateKey::of(date!(2025 - 07 - 01)),
        CalendarEvent::labelled(EventCategory::Present, "Present"),
    );
    let query: EventQuery<'_> = EventQuery::new(&store);

    let days: Vec<Date> = query
        .events_in_month(YearMonth::new(2025, Month::June))
        .unwrap()
        .into_iter()
        .map(|(day, _)| day)
        .collect();
    assert_eq!(days, vec![date!(2025 - 06 - 15), date!(2025 - 06 - 20)]);
}

#[test]
fn test_events_in_empty_month() {
    let store: EventStore = create_test_store();
    let query: EventQuery<'_> = EventQuery::new(&store);

    assert!(
        query
            .events_in_month(YearMonth::new(2025, Month::May))
            .unwrap()
            .is_empty()
    );
}
