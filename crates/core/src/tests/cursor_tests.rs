// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_clock;
use crate::{CursorCommand, FixedClock, MonthCursor};
use leavecal_domain::YearMonth;
use time::Month;
use time::macros::date;

#[test]
fn test_new_cursor_starts_on_today() {
    let clock: FixedClock = create_test_clock();
    let cursor: MonthCursor = MonthCursor::new(&clock);

    assert_eq!(cursor.selected_date(), date!(2025 - 06 - 15));
    assert_eq!(cursor.displayed_month(), YearMonth::new(2025, Month::June));
}

#[test]
fn test_next_month_rolls_into_new_year() {
    let mut cursor: MonthCursor = MonthCursor::at(date!(2025 - 12 - 10));
    cursor.next_month();

    assert_eq!(cursor.displayed_month(), YearMonth::new(2026, Month::January));
}

#[test]
fn test_previous_month_rolls_into_old_year() {
    let mut cursor: MonthCursor = MonthCursor::at(date!(2025 - 01 - 10));
    cursor.previous_month();

    assert_eq!(cursor.displayed_month(), YearMonth::new(2024, Month::December));
}

#[test]
fn test_next_then_previous_returns_to_start() {
    for month in 1..=12u8 {
        let month: Month = Month::try_from(month).unwrap();
        let start: YearMonth = YearMonth::new(2025, month);
        let mut cursor: MonthCursor = MonthCursor::with_month(date!(2025 - 06 - 15), start);

        cursor.next_month();
        cursor.previous_month();

        assert_eq!(cursor.displayed_month(), start);
    }
}

#[test]
fn test_month_navigation_keeps_selected_date() {
    let mut cursor: MonthCursor = MonthCursor::at(date!(2025 - 06 - 15));
    cursor.next_month();
    cursor.next_month();

    assert_eq!(cursor.selected_date(), date!(2025 - 06 - 15));
    assert_eq!(cursor.displayed_month(), YearMonth::new(2025, Month::August));
}

#[test]
fn test_select_date_keeps_displayed_month() {
    let mut cursor: MonthCursor = MonthCursor::at(date!(2025 - 06 - 15));
    cursor.select_date(date!(2025 - 07 - 03));

    assert_eq!(cursor.selected_date(), date!(2025 - 07 - 03));
    assert_eq!(cursor.displayed_month(), YearMonth::new(2025, Month::June));
}

#[test]
fn test_today_is_idempotent() {
    let clock: FixedClock = create_test_clock();
    let mut cursor: MonthCursor = MonthCursor::at(date!(2024 - 02 - 29));

    cursor.today(&clock);
    let first: MonthCursor = cursor;
    cursor.today(&clock);

    assert_eq!(cursor, first);
    assert_eq!(cursor.selected_date(), date!(2025 - 06 - 15));
    assert_eq!(cursor.displayed_month(), YearMonth::new(2025, Month::June));
}

#[test]
fn test_apply_dispatches_commands() {
    let clock: FixedClock = create_test_clock();
    let mut cursor: MonthCursor = MonthCursor::at(date!(2025 - 01 - 01));

    cursor.apply(CursorCommand::PreviousMonth, &clock);
    assert_eq!(cursor.displayed_month(), YearMonth::new(2024, Month::December));

    cursor.apply(CursorCommand::NextMonth, &clock);
    cursor.apply(CursorCommand::NextMonth, &clock);
    assert_eq!(cursor.displayed_month(), YearMonth::new(2025, Month::February));

    cursor.apply(CursorCommand::SelectDate(date!(2025 - 02 - 14)), &clock);
    assert_eq!(cursor.selected_date(), date!(2025 - 02 - 14));

    cursor.apply(CursorCommand::Today, &clock);
    assert_eq!(cursor, MonthCursor::at(date!(2025 - 06 - 15)));
}
