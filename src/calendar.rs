//! Calendar arithmetic for the proleptic Gregorian calendar, using Zeller's
//! congruence for weekday computation.

use chrono::Weekday;

use crate::types::{CalendarDate, MonthCursor};

/// Gregorian leap year: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in the given month (28/29/30/31).
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

impl CalendarDate {
    /// Weekday via Zeller's congruence.
    ///
    /// Euclidean division keeps the congruence correct for years before the
    /// common era as well; the year range is unconstrained.
    pub fn weekday(self) -> Weekday {
        let m = if self.month < 3 {
            self.month + 12
        } else {
            self.month
        };
        let year = if self.month < 3 {
            self.year - 1
        } else {
            self.year
        };
        let q = self.day as i32;
        let k: i32 = year.rem_euclid(100);
        let j: i32 = year.div_euclid(100);

        let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
        // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
        match h {
            0 => Weekday::Sat,
            1 => Weekday::Sun,
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            4 => Weekday::Wed,
            5 => Weekday::Thu,
            6 => Weekday::Fri,
            _ => unreachable!(),
        }
    }

    /// True iff the date falls on Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Every date of the cursor's month, day 1 to the last day, ascending.
pub fn days_in_month(cursor: MonthCursor) -> Vec<CalendarDate> {
    (1..=month_length(cursor.year, cursor.month))
        .map(|day| CalendarDate::new(cursor.year, cursor.month, day))
        .collect()
}

/// Number of placeholder cells before the 1st in a Sunday-first 7-column grid.
///
/// Equals the weekday index of the 1st counted from Sunday, so always in [0, 6].
pub fn leading_blank_count(cursor: MonthCursor) -> usize {
    CalendarDate::new(cursor.year, cursor.month, 1)
        .weekday()
        .num_days_from_sunday() as usize
}

/// Add `delta` months to the cursor, rolling the year as needed (month 0
/// becomes December of the previous year, month 13 January of the next).
pub fn shift_month(cursor: MonthCursor, delta: i32) -> MonthCursor {
    let total = cursor.year * 12 + cursor.month as i32 - 1 + delta;
    MonthCursor {
        year: total.div_euclid(12),
        month: (total.rem_euclid(12) + 1) as u32,
    }
}

/// The calendar date immediately after `date`, rolling month and year.
pub fn next_day(date: CalendarDate) -> CalendarDate {
    if date.day < month_length(date.year, date.month) {
        CalendarDate::new(date.year, date.month, date.day + 1)
    } else {
        let next = shift_month(MonthCursor::of(date), 1);
        CalendarDate::new(next.year, next.month, 1)
    }
}

/// Get today's date, respecting PICKER_TEST_TIME environment variable for testing.
pub fn today() -> CalendarDate {
    if let Ok(test_time) = std::env::var("PICKER_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return CalendarDate::from_naive(date);
    }
    CalendarDate::from_naive(chrono::Local::now().date_naive())
}
