// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar events derived from approved leave.
//!
//! Leave requests and calendar events are stored separately. Deriving
//! events from requests is an explicit step a caller opts into.

use crate::store::EventStore;
use leavecal_domain::{CalendarEvent, DateKey, EventCategory, LeaveRequest, LeaveStatus};
use tracing::debug;

/// Returns one event per day covered by `request`.
///
/// Only approved requests with a known period and a leave category
/// produce events. Anything else yields an empty list.
#[must_use]
pub fn events_for_request(request: &LeaveRequest) -> Vec<(DateKey, CalendarEvent)> {
    if request.status != LeaveStatus::Approved {
        return Vec::new();
    }
    let (Some(period), Some(category)) = (request.period, request.event_category()) else {
        return Vec::new();
    };

    period
        .dates()
        .map(|date| (DateKey::of(date), leave_event(category)))
        .collect()
}

fn leave_event(category: EventCategory) -> CalendarEvent {
    CalendarEvent::labelled(category, category.label())
}

/// Adds the events of every approved request to `store`.
///
/// Returns the number of events added.
pub fn apply_approved_requests(store: &mut EventStore, requests: &[LeaveRequest]) -> usize {
    let events: Vec<(DateKey, CalendarEvent)> =
        requests.iter().flat_map(events_for_request).collect();
    let added: usize = events.len();
    store.extend(events);

    debug!(
        requests = requests.len(),
        added, "Derived calendar events from approved leave"
    );
    added
}
