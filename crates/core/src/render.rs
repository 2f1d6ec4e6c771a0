// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-cell rendering.
//!
//! A day cell shows at most `max_visible` events inline, each status text
//! cut to `label_chars` characters, and a "+N" marker for the rest.
//!
//! ## Invariants
//!
//! - Visible events keep store order
//! - `visible.len() + overflow_count` equals the number of input events
//! - A budget of zero shows nothing and counts every event as overflow

use leavecal_domain::{CalendarEvent, ColorToken, EventCategory};
use serde::{Deserialize, Serialize};

/// Appended to status text that was cut short.
pub const ELLIPSIS: &str = "...";

/// How much of a day's events a cell may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayBudget {
    /// Maximum number of events shown inline.
    pub max_visible: usize,
    /// Maximum characters of status text before it is cut.
    pub label_chars: usize,
}

impl DisplayBudget {
    /// Creates a new `DisplayBudget`.
    #[must_use]
    pub const fn new(max_visible: usize, label_chars: usize) -> Self {
        Self {
            max_visible,
            label_chars,
        }
    }

    /// Budget for narrow layouts: one event, four characters.
    #[must_use]
    pub const fn narrow() -> Self {
        Self::new(1, 4)
    }

    /// Budget for wide layouts: two events, six characters.
    #[must_use]
    pub const fn wide() -> Self {
        Self::new(2, 6)
    }
}

impl Default for DisplayBudget {
    fn default() -> Self {
        Self::wide()
    }
}

/// One event as shown inside a day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleEvent {
    /// The possibly truncated status text.
    pub text: String,
    /// The full event label, for tooltips.
    pub label: String,
    /// The event category.
    pub category: EventCategory,
    /// The chip color.
    pub color_token: ColorToken,
}

/// The rendered contents of a day cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Events shown inline, in order.
    pub visible: Vec<VisibleEvent>,
    /// Number of events not shown.
    pub overflow_count: usize,
}

impl DayCell {
    /// Returns whether the cell shows only its day number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.overflow_count == 0
    }

    /// Returns the "+N" marker when events overflow.
    #[must_use]
    pub fn overflow_indicator(&self) -> Option<String> {
        (self.overflow_count > 0).then(|| format!("+{}", self.overflow_count))
    }
}

/// Cuts `text` to `label_chars` characters, appending [`ELLIPSIS`] if cut.
#[must_use]
pub fn truncate_status(text: &str, label_chars: usize) -> String {
    match text.char_indices().nth(label_chars) {
        Some((byte_index, _)) => format!("{}{ELLIPSIS}", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Turns a day's events into a [`DayCell`] under a fixed budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCellRenderer {
    budget: DisplayBudget,
}

impl DayCellRenderer {
    /// Creates a renderer with `budget`.
    #[must_use]
    pub const fn new(budget: DisplayBudget) -> Self {
        Self { budget }
    }

    /// Returns the budget.
    #[must_use]
    pub const fn budget(&self) -> DisplayBudget {
        self.budget
    }

    /// Renders the events of one day.
    #[must_use]
    pub fn render(&self, events: &[CalendarEvent]) -> DayCell {
        let visible: Vec<VisibleEvent> = events
            .iter()
            .take(self.budget.max_visible)
            .map(|event| VisibleEvent {
                text: truncate_status(&event.display_status, self.budget.label_chars),
                label: event.label.clone(),
                category: event.category,
                color_token: event.color_token,
            })
            .collect();

        DayCell {
            visible,
            overflow_count: events.len().saturating_sub(self.budget.max_visible),
        }
    }
}
