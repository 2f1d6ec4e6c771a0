// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CATEGORY_STYLES, CalendarEvent, ColorToken, DomainError, EventCategory};
use std::collections::HashSet;

#[test]
fn test_parses_short_tokens() {
    let cases: [(&str, EventCategory); 7] = [
        ("holiday", EventCategory::Holiday),
        ("casual", EventCategory::CasualLeave),
        ("sick", EventCategory::SickLeave),
        ("holidayleave", EventCategory::HolidayLeave),
        ("present", EventCategory::Present),
        ("absent", EventCategory::Absent),
        ("meeting", EventCategory::Meeting),
    ];
    for (input, expected) in cases {
        let parsed: EventCategory = input.parse().unwrap();
        assert_eq!(parsed, expected, "parsing {input:?}");
    }
}

#[test]
fn test_parses_display_names_ignoring_case() {
    assert_eq!(
        "Casual Leave".parse::<EventCategory>().unwrap(),
        EventCategory::CasualLeave
    );
    assert_eq!(
        "HOLIDAY LEAVE".parse::<EventCategory>().unwrap(),
        EventCategory::HolidayLeave
    );
    assert_eq!(
        "sick-leave".parse::<EventCategory>().unwrap(),
        EventCategory::SickLeave
    );
}

#[test]
fn test_rejects_unknown_category() {
    let result: Result<EventCategory, DomainError> = "vacation".parse();
    assert_eq!(
        result,
        Err(DomainError::UnknownCategory(String::from("vacation")))
    );
}

#[test]
fn test_from_raw_rejects_unknown_category() {
    let result: Result<CalendarEvent, DomainError> =
        CalendarEvent::from_raw("birthday", "Cake", "Party");
    assert!(matches!(result, Err(DomainError::UnknownCategory(_))));
}

#[test]
fn test_from_raw_takes_color_from_style_table() {
    let event: CalendarEvent =
        CalendarEvent::from_raw("meeting", "Team Meeting", "Meeting").unwrap();
    assert_eq!(event.category, EventCategory::Meeting);
    assert_eq!(event.color_token, ColorToken::Orange);
    assert_eq!(event.label, "Team Meeting");
    assert_eq!(event.display_status, "Meeting");
}

#[test]
fn test_color_override_keeps_category() {
    let event: CalendarEvent = CalendarEvent::labelled(EventCategory::Present, "On Time")
        .with_color_token(ColorToken::Gray);
    assert_eq!(event.category, EventCategory::Present);
    assert_eq!(event.display_status, "Present");
    assert_eq!(event.color_token, ColorToken::Gray);
}

#[test]
fn test_style_table_covers_every_category_once() {
    let categories: HashSet<EventCategory> =
        CATEGORY_STYLES.iter().map(|style| style.category).collect();
    assert_eq!(categories.len(), CATEGORY_STYLES.len());

    for style in CATEGORY_STYLES {
        assert_eq!(style.category.style(), style);
    }
}

#[test]
fn test_style_table_colors() {
    assert_eq!(EventCategory::Present.color_token(), ColorToken::Green);
    assert_eq!(EventCategory::Absent.color_token(), ColorToken::Red);
    assert_eq!(EventCategory::SickLeave.color_token(), ColorToken::Yellow);
    assert_eq!(EventCategory::CasualLeave.color_token(), ColorToken::Blue);
    assert_eq!(EventCategory::HolidayLeave.color_token(), ColorToken::Indigo);
    assert_eq!(EventCategory::Holiday.color_token(), ColorToken::Purple);
    assert_eq!(EventCategory::Meeting.color_token(), ColorToken::Orange);
}

#[test]
fn test_only_leave_categories_are_leave() {
    let leave: Vec<EventCategory> = CATEGORY_STYLES
        .iter()
        .map(|style| style.category)
        .filter(EventCategory::is_leave)
        .collect();
    assert_eq!(
        leave,
        vec![
            EventCategory::SickLeave,
            EventCategory::CasualLeave,
            EventCategory::HolidayLeave
        ]
    );
}
