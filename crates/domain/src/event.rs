// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::category::{ColorToken, EventCategory};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// One categorized occurrence attached to a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The kind of occurrence.
    pub category: EventCategory,
    /// Short human-readable text, e.g. "Republic Day".
    pub label: String,
    /// Status text shown inside a day cell.
    pub display_status: String,
    /// The color used when rendering this event.
    pub color_token: ColorToken,
}

impl CalendarEvent {
    /// Creates a new `CalendarEvent` colored from the category style table.
    ///
    /// # Arguments
    ///
    /// * `category` - The kind of occurrence
    /// * `label` - Short human-readable text
    /// * `display_status` - Status text for the day cell
    #[must_use]
    pub fn new(category: EventCategory, label: &str, display_status: &str) -> Self {
        Self {
            category,
            label: label.to_string(),
            display_status: display_status.to_string(),
            color_token: category.color_token(),
        }
    }

    /// Creates a `CalendarEvent` whose status text is the category name.
    #[must_use]
    pub fn labelled(category: EventCategory, label: &str) -> Self {
        Self::new(category, label, category.label())
    }

    /// Creates a `CalendarEvent` from untyped text, as found in seed files.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCategory` if `category` does not name
    /// one of the known event categories.
    pub fn from_raw(
        category: &str,
        label: &str,
        display_status: &str,
    ) -> Result<Self, DomainError> {
        let category: EventCategory = category.parse()?;
        Ok(Self::new(category, label, display_status))
    }

    /// Returns this event with a different color.
    #[must_use]
    pub const fn with_color_token(mut self, color_token: ColorToken) -> Self {
        self.color_token = color_token;
        self
    }
}
