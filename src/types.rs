//! Type definitions and constants for the range-picker engine.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

/// A calendar date identified by (year, month, day) only.
///
/// Equality and ordering follow calendar identity; there is no time-of-day
/// component. Field order gives the derived `Ord` year-then-month-then-day
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }

    pub fn from_naive(date: chrono::NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    /// ISO `YYYY-MM-DD`, the serialization used by the output callback.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(format!("Invalid date: {} (expected YYYY-MM-DD)", s));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| format!("Invalid year in date: {}", s))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid month in date: {}", s))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|_| format!("Invalid day in date: {}", s))?;
        if !(1..=12).contains(&month) {
            return Err(format!("Invalid month: {} (must be 1-12)", month));
        }
        let max_day = crate::calendar::month_length(year, month);
        if day == 0 || day > max_day {
            return Err(format!(
                "Invalid day: {} (must be 1-{} for {:04}-{:02})",
                day, max_day, year, month
            ));
        }
        Ok(CalendarDate { year, month, day })
    }
}

/// The (year, month) a calendar view currently displays, independent of any
/// selection. Derived `Ord` is year-then-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        MonthCursor { year, month }
    }

    /// The month containing the given date.
    pub fn of(date: CalendarDate) -> Self {
        MonthCursor {
            year: date.year,
            month: date.month,
        }
    }
}

/// Committed selection of the picker.
///
/// A tagged variant rather than two nullable fields, so an end date without a
/// start date is unrepresentable. `Closed` maintains `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No start, no end.
    #[default]
    Empty,
    /// Start committed, awaiting the end click.
    PendingEnd { start: CalendarDate },
    /// Both endpoints committed, `start <= end`.
    Closed {
        start: CalendarDate,
        end: CalendarDate,
    },
}

/// Which of the two side-by-side calendar views an event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Start,
    End,
}

/// Caller-defined named range offered as a one-click shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetRange {
    pub label: String,
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl PresetRange {
    /// Build a preset, normalizing reversed endpoints by swapping so the range
    /// invariant `start <= end` always holds.
    pub fn new(label: impl Into<String>, start: CalendarDate, end: CalendarDate) -> Self {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        PresetRange {
            label: label.into(),
            start,
            end,
        }
    }
}

/// One cell of a rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Alignment placeholder before the 1st or after the last day; carries no
    /// date.
    Blank,
    Day {
        date: CalendarDate,
        /// Saturday or Sunday; never selectable by click.
        weekend_disabled: bool,
        /// Inside the committed range (or the single pending start day).
        in_range: bool,
        /// Start or end of the committed range.
        endpoint: bool,
    },
}

/// The finalized output triple produced when the selection closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
    /// Every Saturday/Sunday inside the inclusive range, ascending.
    pub weekend_dates: Vec<CalendarDate>,
}

impl FinalizedRange {
    /// Both endpoints as ISO `YYYY-MM-DD` strings.
    pub fn iso_range(&self) -> [String; 2] {
        [self.start.to_string(), self.end.to_string()]
    }

    /// Weekend dates as ISO strings, ascending.
    pub fn iso_weekend_dates(&self) -> Vec<String> {
        self.weekend_dates.iter().map(ToString::to_string).collect()
    }
}

// Constants for grid geometry and terminal output
pub const CELLS_PER_MONTH: usize = 42; // 6 weeks × 7 days
pub const MONTH_WIDTH: usize = 20; // 7 two-char cells + 6 separators
pub const GUTTER_WIDTH: usize = 2;

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
