//! Calendar month grid
//!
//! Layout model for the picker's calendar: a fixed 6 × 7 grid of days,
//! weeks starting on Sunday, with leading and trailing days borrowed from
//! the neighbouring months.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const WEEK_LEN: usize = 7;
pub const GRID_ROWS: usize = 6;

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; WEEK_LEN] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// One cell of the month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for days spilling over from the previous or next month
    pub in_month: bool,
}

/// A year and month shown by the calendar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Creates a year/month pair if the month is 1-12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Heading such as `October 2026`.
    pub fn title(&self) -> String {
        let name = MONTH_NAMES[(self.month as usize).saturating_sub(1) % 12];
        format!("{name} {}", self.year)
    }

    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map_or(*self, Self::containing)
    }

    pub fn previous(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map_or(*self, Self::containing)
    }

    /// Six weeks of days covering this month.
    pub fn weeks(&self) -> Vec<[CalendarDay; WEEK_LEN]> {
        let first = self.first_day();
        let lead = u64::from(first.weekday().num_days_from_sunday());
        let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);

        start
            .iter_days()
            .take(GRID_ROWS * WEEK_LEN)
            .map(|date| CalendarDay {
                date,
                in_month: date.month() == self.month && date.year() == self.year,
            })
            .collect::<Vec<_>>()
            .chunks_exact(WEEK_LEN)
            .filter_map(|week| <[CalendarDay; WEEK_LEN]>::try_from(week).ok())
            .collect()
    }
}

/// What a click on `clicked` reports, given the current selection.
///
/// Clicking the selected day again clears the selection.
pub fn toggle_selection(selected: Option<NaiveDate>, clicked: NaiveDate) -> Option<NaiveDate> {
    if selected == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}
