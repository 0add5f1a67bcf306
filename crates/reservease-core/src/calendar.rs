//! # Calendar Month Grid
//!
//! View model for the booking date picker.
//!
//! ## Grid Layout (April 2025)
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ◄            April 2025               ►   │
//! │  Sun  Mon  Tue  Wed  Thu  Fri  Sat         │
//! │   ·    ·    1    2    3    4    5          │  ← 2 leading blanks
//! │   6    7    8    9   10   11   12          │
//! │  ...                                        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Weeks start on Sunday. Days outside `[min, max]` are disabled and cannot
//! be selected.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// =============================================================================
// Bounds
// =============================================================================

/// Selectable date window. Both ends inclusive; `None` is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DateBounds {
    #[ts(as = "Option<String>")]
    pub min: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    /// From `today` onwards, with an optional horizon in days.
    pub fn from_today(today: NaiveDate, horizon_days: Option<u32>) -> Self {
        DateBounds {
            min: Some(today),
            max: horizon_days
                .and_then(|days| today.checked_add_days(chrono::Days::new(u64::from(days)))),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |m| date >= m) && self.max.map_or(true, |m| date <= m)
    }
}

// =============================================================================
// Month
// =============================================================================

/// A displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1 = January.
    pub month: u32,
}

impl CalendarMonth {
    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        CalendarMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month <= 1 {
            CalendarMonth {
                year: self.year - 1,
                month: 12,
            }
        } else {
            CalendarMonth {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month >= 12 {
            CalendarMonth {
                year: self.year + 1,
                month: 1,
            }
        } else {
            CalendarMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Heading text, e.g. "April 2025".
    pub fn title(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("");
        format!("{} {}", name, self.year)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let Some(first) = self.first_day() else {
            return 0;
        };
        let next = self.next();
        match next.first_day() {
            Some(next_first) => (next_first - first).num_days() as u32,
            None => 31,
        }
    }

    /// Blank cells before day 1 (Sunday-first week).
    pub fn leading_blanks(&self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Builds the grid cells for this month.
    pub fn grid(
        &self,
        selected: Option<NaiveDate>,
        today: NaiveDate,
        bounds: DateBounds,
    ) -> Vec<CalendarCell> {
        let blanks = (0..self.leading_blanks()).map(|_| CalendarCell::Blank);

        let days = (1..=self.days_in_month()).filter_map(|day| {
            let date = NaiveDate::from_ymd_opt(self.year, self.month, day)?;
            Some(CalendarCell::Day(CalendarDay {
                day,
                date,
                selected: selected == Some(date),
                today: today == date,
                disabled: !bounds.contains(date),
            }))
        });

        blanks.chain(days).collect()
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    Blank,
    Day(CalendarDay),
}

impl CalendarCell {
    pub fn as_day(&self) -> Option<&CalendarDay> {
        match self {
            CalendarCell::Day(d) => Some(d),
            CalendarCell::Blank => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub day: u32,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub selected: bool,
    pub today: bool,
    pub disabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_april_2025_layout() {
        let month = CalendarMonth { year: 2025, month: 4 };
        assert_eq!(month.title(), "April 2025");
        assert_eq!(month.days_in_month(), 30);
        // 1 April 2025 is a Tuesday
        assert_eq!(month.leading_blanks(), 2);

        let cells = month.grid(None, d(2025, 4, 10), DateBounds::default());
        assert_eq!(cells.len(), 32);
        assert_eq!(cells[0], CalendarCell::Blank);
        assert_eq!(cells[2].as_day().unwrap().day, 1);
    }

    #[test]
    fn test_flags() {
        let month = CalendarMonth { year: 2025, month: 4 };
        let today = d(2025, 4, 10);
        let bounds = DateBounds::from_today(today, Some(7));
        let cells = month.grid(Some(d(2025, 4, 15)), today, bounds);
        let day = |n: u32| cells.iter().filter_map(|c| c.as_day()).find(|c| c.day == n).unwrap();

        assert!(day(9).disabled);
        assert!(!day(10).disabled);
        assert!(day(10).today);
        assert!(day(15).selected);
        assert!(!day(17).disabled);
        assert!(day(18).disabled);
    }

    #[test]
    fn test_month_navigation_wraps_years() {
        let jan = CalendarMonth { year: 2025, month: 1 };
        assert_eq!(jan.previous(), CalendarMonth { year: 2024, month: 12 });
        let dec = CalendarMonth { year: 2024, month: 12 };
        assert_eq!(dec.next(), jan);
        assert_eq!(dec.days_in_month(), 31);
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(CalendarMonth { year: 2024, month: 2 }.days_in_month(), 29);
        assert_eq!(CalendarMonth { year: 2025, month: 2 }.days_in_month(), 28);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = DateBounds {
            min: Some(d(2025, 4, 1)),
            max: None,
        };
        assert!(bounds.contains(d(2030, 1, 1)));
        assert!(!bounds.contains(d(2025, 3, 31)));
        assert!(DateBounds::default().contains(d(1999, 1, 1)));
    }
}
