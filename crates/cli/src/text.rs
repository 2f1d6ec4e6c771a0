// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering for the terminal.

use leavecal::{GridDay, LeaveRow, MonthGrid, WEEKDAY_HEADERS};
use leavecal_domain::{CategoryStyle, Holiday, LeaveBalance, LeaveType};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday repr:short] [month repr:short] [day padding:none]");

/// Renders a month grid followed by an agenda of its busy days.
pub fn month(grid: &MonthGrid, legend: &[CategoryStyle]) -> String {
    let mut lines: Vec<String> = vec![
        grid.title.clone(),
        WEEKDAY_HEADERS.map(|h| format!("{h:>4}")).concat(),
    ];
    lines.extend(grid.weeks.iter().map(|week| week.iter().map(day_number).collect()));

    let busy: Vec<&GridDay> = grid
        .days()
        .filter(|day| day.in_displayed_month && !day.cell.is_empty())
        .collect();
    if !busy.is_empty() {
        lines.push(String::new());
    }
    lines.extend(busy.iter().map(|day| {
        let chips: Vec<String> = day
            .cell
            .visible
            .iter()
            .map(|event| format!("[{}] {}", event.color_token, event.text))
            .chain(day.cell.overflow_indicator())
            .collect();
        format!("{:>4}  {}", day.day_number, chips.join("  "))
    }));

    let swatches: Vec<String> = legend
        .iter()
        .map(|style| format!("[{}] {}", style.color_token, style.legend_label))
        .collect();
    lines.push(String::new());
    lines.push(swatches.join("  "));

    lines.join("\n") + "\n"
}

/// Day number padded to a four-column cell.
///
/// Today is bracketed, the selected day is parenthesized, and days of
/// adjacent months are dotted out.
fn day_number(day: &GridDay) -> String {
    if !day.in_displayed_month {
        return String::from("   .");
    }
    if day.is_today {
        format!("[{:>2}]", day.day_number)
    } else if day.is_selected {
        format!("({:>2})", day.day_number)
    } else {
        format!("{:>4}", day.day_number)
    }
}

/// Renders leave request rows as a table.
pub fn requests(rows: &[LeaveRow<'_>]) -> String {
    if rows.is_empty() {
        return format!("{}No leave requests match.\n", requests_header());
    }

    std::iter::once(requests_header())
        .chain(rows.iter().map(|row| {
            format!(
                "{:<3} {:<17} {:<14} {:>4}  {:<9} {}\n",
                row.index,
                row.request.duration_label,
                row.request.leave_type,
                row.request.days(),
                row.request.status.as_str(),
                row.request.details
            )
        }))
        .collect()
}

fn requests_header() -> String {
    format!(
        "{:<3} {:<17} {:<14} {:>4}  {:<9} Details\n",
        "#", "Duration", "Type", "Days", "Status"
    )
}

/// Renders a holiday list, one per line.
pub fn holidays(holidays: &[&Holiday]) -> String {
    if holidays.is_empty() {
        return String::from("No upcoming holidays.\n");
    }

    holidays
        .iter()
        .map(|holiday| {
            let date: String = holiday
                .date
                .format(SHORT_DATE)
                .unwrap_or_else(|_| holiday.date.to_string());
            format!("{date:<12} {}\n", holiday.name)
        })
        .collect()
}

/// Renders the days left per budgeted leave type.
pub fn balance(balance: &LeaveBalance) -> String {
    LeaveType::ALL
        .iter()
        .filter_map(|leave_type| {
            balance.remaining(*leave_type).map(|left| {
                let swatch: String = format!("[{}]", leave_type.color_token());
                format!("{swatch:<9} {:<14} {left:>3} days left\n", leave_type.label())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leavecal::{
        DayCellRenderer, DisplayBudget, EventQuery, EventStore, LeaveRequestTable, MonthCursor,
    };
    use leavecal_domain::{
        CATEGORY_STYLES, CalendarEvent, DateKey, EventCategory, LeaveRequest, LeaveStatus,
    };
    use time::macros::date;

    #[test]
    fn test_month_text_marks_days_and_lists_events() {
        let mut store: EventStore = EventStore::new();
        for event in [
            CalendarEvent::labelled(EventCategory::CasualLeave, "Casual Leave"),
            CalendarEvent::new(EventCategory::Meeting, "Team Meeting", "Meeting"),
        ] {
            store.put(DateKey::of(date!(2025 - 06 - 15)), event);
        }
        let cursor: MonthCursor = MonthCursor::at(date!(2025 - 06 - 20));
        let renderer: DayCellRenderer = DayCellRenderer::new(DisplayBudget::narrow());
        let grid: MonthGrid = MonthGrid::build(
            &cursor,
            EventQuery::new(&store),
            &renderer,
            date!(2025 - 06 - 15),
        )
        .unwrap();

        let text: String = month(&grid, &CATEGORY_STYLES);

        assert!(text.starts_with("June 2025\n  Su  Mo  Tu  We  Th  Fr  Sa\n"));
        assert!(text.contains("[15]"));
        assert!(text.contains("(20)"));
        assert!(text.contains("  15  [blue] Casu...  +1\n"));
        assert!(text.contains("[green] Present"));
    }

    #[test]
    fn test_month_text_layout_without_events() {
        let store: EventStore = EventStore::new();
        let cursor: MonthCursor = MonthCursor::at(date!(2025 - 02 - 10));
        let renderer: DayCellRenderer = DayCellRenderer::new(DisplayBudget::wide());
        let grid: MonthGrid = MonthGrid::build(
            &cursor,
            EventQuery::new(&store),
            &renderer,
            date!(2025 - 06 - 15),
        )
        .unwrap();
        let legend: Vec<String> = CATEGORY_STYLES
            .iter()
            .map(|style| format!("[{}] {}", style.color_token, style.legend_label))
            .collect();

        let text: String = month(&grid, &CATEGORY_STYLES);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + grid.weeks.len() + 2);
        assert_eq!(lines[lines.len() - 2], "");
        assert_eq!(lines[lines.len() - 1], legend.join("  "));
        assert!(text.ends_with('\n'));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn test_requests_text_lists_rows() {
        let table: LeaveRequestTable = LeaveRequestTable::new(vec![
            LeaveRequest::new(
                "Jan 15 - Jan 17",
                "Casual Leave",
                3,
                LeaveStatus::Approved,
                "Family function",
            )
            .unwrap(),
        ]);

        let text: String = requests(&table.rows());

        assert!(text.lines().nth(1).unwrap().starts_with("0   Jan 15 - Jan 17"));
        assert!(text.contains("Approved"));
        assert!(text.contains("Family function"));
        assert_eq!(requests(&[]).lines().last(), Some("No leave requests match."));
    }

    #[test]
    fn test_balance_text_skips_unbudgeted_types() {
        let text: String = balance(&LeaveBalance::new(10, 8, 5));

        assert_eq!(
            text,
            "[blue]    Casual Leave    10 days left\n\
             [yellow]  Sick Leave       8 days left\n\
             [purple]  Holiday Leave    5 days left\n"
        );
    }

    #[test]
    fn test_holidays_text() {
        let diwali: Holiday = Holiday::new("Diwali", date!(2025 - 11 - 12));

        assert_eq!(holidays(&[&diwali]), "Wed Nov 12   Diwali\n");
        assert_eq!(holidays(&[]), "No upcoming holidays.\n");
    }
}
