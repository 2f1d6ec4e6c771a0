// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in sample data.
//!
//! The tables are plain text and go through the same parsing as any other
//! source would, so a malformed row fails the load instead of slipping in.

use crate::error::CoreError;
use crate::repository::{CalendarRepository, LeaveRequestRepository};
use crate::store::EventStore;
use leavecal_domain::{
    CalendarEvent, DateKey, EventCategory, Holiday, LeaveBalance, LeavePeriod, LeaveRequest,
    LeaveStatus,
};
use tracing::debug;

/// `(date key, category, label, display status)`
const SEED_EVENTS: &[(&str, &str, &str, &str)] = &[
    ("2025-01-02", "holiday", "New Year Holiday", "Holiday"),
    ("2025-01-15", "casual", "Casual Leave", "Casual Leave"),
    ("2025-01-16", "casual", "Casual Leave", "Casual Leave"),
    ("2025-01-17", "casual", "Casual Leave", "Casual Leave"),
    ("2025-01-20", "sick", "Sick Leave", "Sick Leave"),
    ("2025-01-26", "holiday", "Republic Day", "Holiday"),
    ("2025-01-28", "present", "On Time", "Present"),
    ("2025-01-29", "absent", "Absent", "Absent"),
    ("2025-02-05", "sick", "Sick Leave", "Sick Leave"),
    ("2025-02-06", "sick", "Sick Leave", "Sick Leave"),
    ("2025-02-14", "holidayleave", "Holiday Leave", "Holiday Leave"),
    ("2025-03-08", "holiday", "Holi", "Holiday"),
    ("2025-03-10", "casual", "Casual Leave", "Casual Leave"),
    ("2025-03-11", "casual", "Casual Leave", "Casual Leave"),
    ("2025-03-12", "casual", "Casual Leave", "Casual Leave"),
    ("2025-06-15", "casual", "Casual Leave", "Casual Leave"),
    ("2025-06-15", "meeting", "Team Meeting", "Meeting"),
    ("2025-06-20", "sick", "Sick Leave", "Sick Leave"),
    ("2025-06-25", "holidayleave", "Holiday Leave", "Holiday Leave"),
    ("2025-06-30", "present", "Present", "Present"),
];

/// `(date key, name)`
const SEED_HOLIDAYS: &[(&str, &str)] = &[
    ("2025-01-26", "Republic Day"),
    ("2025-03-08", "Holi"),
    ("2025-03-29", "Good Friday"),
    ("2025-04-14", "Baisakhi"),
    ("2025-05-01", "Labour Day"),
    ("2025-08-15", "Independence Day"),
    ("2025-10-02", "Gandhi Jayanti"),
    ("2025-11-12", "Diwali"),
    ("2025-12-25", "Christmas"),
];

/// `(start, end, leave type, status, details)`
const SEED_REQUESTS: &[(&str, &str, &str, &str, &str)] = &[
    ("2025-01-15", "2025-01-17", "Casual Leave", "Approved", "Family function"),
    ("2025-02-05", "2025-02-06", "Sick Leave", "Pending", "Medical checkup"),
    ("2025-03-10", "2025-03-12", "Casual Leave", "Approved", "Personal work"),
    ("2025-04-02", "2025-04-04", "Holiday Leave", "Pending", "Extended weekend"),
];

const SICK_LEAVE_DESCRIPTION: &str = "Subject: Sick leave application for office fever. \
    I am writing to seek leave from work due to a severe fever. After consulting a doctor \
    I have been advised to rest until I recover, and I will rejoin the office the next day.";

/// The sample data shipped with leavecal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedData;

impl CalendarRepository for SeedData {
    fn load_events(&self) -> Result<EventStore, CoreError> {
        let mut store: EventStore = EventStore::new();
        for (key, category, label, status) in SEED_EVENTS {
            let key: DateKey = key.parse()?;
            let event: CalendarEvent = CalendarEvent::from_raw(category, label, status)?;
            store.put(key, event);
        }

        debug!(
            events = store.len(),
            days = store.day_count(),
            "Loaded seed calendar events"
        );
        Ok(store)
    }

    fn load_holidays(&self) -> Result<Vec<Holiday>, CoreError> {
        SEED_HOLIDAYS
            .iter()
            .map(|(key, name)| -> Result<Holiday, CoreError> {
                let key: DateKey = key.parse()?;
                Ok(Holiday::new(name, key.date()))
            })
            .collect()
    }

    fn load_balance(&self) -> Result<LeaveBalance, CoreError> {
        Ok(LeaveBalance::new(10, 8, 5))
    }
}

impl LeaveRequestRepository for SeedData {
    fn load_requests(&self) -> Result<Vec<LeaveRequest>, CoreError> {
        let requests: Vec<LeaveRequest> = SEED_REQUESTS
            .iter()
            .map(|(start, end, leave_type, status, details)| -> Result<LeaveRequest, CoreError> {
                let start: DateKey = start.parse()?;
                let end: DateKey = end.parse()?;
                let period: LeavePeriod = LeavePeriod::new(start.date(), end.date())?;
                let status: LeaveStatus = status.parse()?;

                let mut request: LeaveRequest = LeaveRequest::new(
                    &period.duration_label(),
                    leave_type,
                    period.days(),
                    status,
                    details,
                )?
                .with_period(period);
                if request.event_category() == Some(EventCategory::SickLeave) {
                    request = request.with_description(SICK_LEAVE_DESCRIPTION);
                }
                Ok(request)
            })
            .collect::<Result<_, _>>()?;

        debug!(requests = requests.len(), "Loaded seed leave requests");
        Ok(requests)
    }
}
