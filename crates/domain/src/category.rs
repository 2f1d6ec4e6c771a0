// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event categories and their shared presentation styles.
//!
//! Every view that colors a calendar event or draws a legend reads the
//! same table, [`CATEGORY_STYLES`]. Categories form a closed set; text
//! that does not name one of them is rejected when parsed.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of occurrence a calendar event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// A public or company holiday.
    Holiday,
    /// Casual leave taken by the employee.
    CasualLeave,
    /// Sick leave taken by the employee.
    SickLeave,
    /// Holiday leave taken by the employee.
    HolidayLeave,
    /// Attendance mark: present.
    Present,
    /// Attendance mark: absent.
    Absent,
    /// A scheduled meeting.
    Meeting,
}

/// A symbolic color used when rendering events and statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    Green,
    Red,
    Yellow,
    Blue,
    Indigo,
    Purple,
    Orange,
    Gray,
}

impl ColorToken {
    /// Converts this token to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Gray => "gray",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a category is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// The category this style belongs to.
    pub category: EventCategory,
    /// The color of event chips and legend swatches.
    pub color_token: ColorToken,
    /// The text shown next to the legend swatch.
    pub legend_label: &'static str,
}

/// The category style table, in legend order.
pub const CATEGORY_STYLES: [CategoryStyle; 7] = [
    CategoryStyle {
        category: EventCategory::Present,
        color_token: ColorToken::Green,
        legend_label: "Present",
    },
    CategoryStyle {
        category: EventCategory::Absent,
        color_token: ColorToken::Red,
        legend_label: "Absent",
    },
    CategoryStyle {
        category: EventCategory::SickLeave,
        color_token: ColorToken::Yellow,
        legend_label: "Sick Leave",
    },
    CategoryStyle {
        category: EventCategory::CasualLeave,
        color_token: ColorToken::Blue,
        legend_label: "Casual Leave",
    },
    CategoryStyle {
        category: EventCategory::HolidayLeave,
        color_token: ColorToken::Indigo,
        legend_label: "Holiday Leave",
    },
    CategoryStyle {
        category: EventCategory::Holiday,
        color_token: ColorToken::Purple,
        legend_label: "Holiday",
    },
    CategoryStyle {
        category: EventCategory::Meeting,
        color_token: ColorToken::Orange,
        legend_label: "Meeting",
    },
];

impl EventCategory {
    /// Returns this category's entry in the style table.
    #[must_use]
    pub const fn style(&self) -> CategoryStyle {
        // Table rows are listed in legend order, not declaration order.
        match self {
            Self::Present => CATEGORY_STYLES[0],
            Self::Absent => CATEGORY_STYLES[1],
            Self::SickLeave => CATEGORY_STYLES[2],
            Self::CasualLeave => CATEGORY_STYLES[3],
            Self::HolidayLeave => CATEGORY_STYLES[4],
            Self::Holiday => CATEGORY_STYLES[5],
            Self::Meeting => CATEGORY_STYLES[6],
        }
    }

    /// Returns the color used for this category.
    #[must_use]
    pub const fn color_token(&self) -> ColorToken {
        self.style().color_token
    }

    /// Returns the human-readable name of this category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.style().legend_label
    }

    /// Returns whether this category records leave taken by the employee.
    #[must_use]
    pub const fn is_leave(&self) -> bool {
        matches!(self, Self::CasualLeave | Self::SickLeave | Self::HolidayLeave)
    }
}

impl FromStr for EventCategory {
    type Err = DomainError;

    /// Parses the short tokens (`casual`, `holidayleave`, ...) as well as
    /// display names (`Casual Leave`), ignoring case and separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "holiday" => Ok(Self::Holiday),
            "casual" | "casualleave" => Ok(Self::CasualLeave),
            "sick" | "sickleave" => Ok(Self::SickLeave),
            "holidayleave" => Ok(Self::HolidayLeave),
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "meeting" => Ok(Self::Meeting),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
