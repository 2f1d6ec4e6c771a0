// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EventStore, FixedClock, LeaveRequestTable};
use leavecal_domain::{
    CalendarEvent, DateKey, EventCategory, LeaveApplication, LeavePeriod, LeaveRequest,
    LeaveStatus, LeaveType,
};
use time::Date;
use time::macros::date;

pub fn create_test_clock() -> FixedClock {
    FixedClock(date!(2025 - 06 - 15))
}

/// Two events on 2025-06-15 and one on 2025-06-20.
pub fn create_test_store() -> EventStore {
    let mut store: EventStore = EventStore::new();
    store.put(
        DateKey::of(date!(2025 - 06 - 15)),
        CalendarEvent::labelled(EventCategory::CasualLeave, "Casual Leave"),
    );
    store.put(
        DateKey::of(date!(2025 - 06 - 15)),
        CalendarEvent::new(EventCategory::Meeting, "Team Meeting", "Meeting"),
    );
    store.put(
        DateKey::of(date!(2025 - 06 - 20)),
        CalendarEvent::labelled(EventCategory::SickLeave, "Sick Leave"),
    );
    store
}

pub fn create_test_events(count: usize) -> Vec<CalendarEvent> {
    (0..count)
        .map(|i| CalendarEvent::new(EventCategory::Meeting, &format!("Meeting {i}"), "Meeting"))
        .collect()
}

pub fn create_test_request(
    start: Date,
    end: Date,
    leave_type: &str,
    status: LeaveStatus,
    details: &str,
) -> LeaveRequest {
    let period: LeavePeriod = LeavePeriod::new(start, end).unwrap();
    LeaveRequest::new(
        &period.duration_label(),
        leave_type,
        period.days(),
        status,
        details,
    )
    .unwrap()
    .with_period(period)
}

pub fn create_test_table() -> LeaveRequestTable {
    LeaveRequestTable::new(vec![
        create_test_request(
            date!(2025 - 01 - 15),
            date!(2025 - 01 - 17),
            "Casual Leave",
            LeaveStatus::Approved,
            "Family function",
        ),
        create_test_request(
            date!(2025 - 02 - 05),
            date!(2025 - 02 - 06),
            "Sick Leave",
            LeaveStatus::Pending,
            "Medical checkup",
        ),
        create_test_request(
            date!(2025 - 03 - 10),
            date!(2025 - 03 - 12),
            "Casual Leave",
            LeaveStatus::Rejected,
            "Personal work",
        ),
        create_test_request(
            date!(2025 - 04 - 02),
            date!(2025 - 04 - 02),
            "Holiday Leave",
            LeaveStatus::Pending,
            "Extended weekend",
        ),
    ])
}

pub fn create_test_application() -> LeaveApplication {
    LeaveApplication {
        start_date: date!(2025 - 07 - 07),
        end_date: date!(2025 - 07 - 09),
        leave_type: LeaveType::Sick,
        reason: String::from("Fever"),
        description: String::new(),
    }
}
