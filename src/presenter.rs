//! Derives the renderable view model and the finalized output triple from the
//! selection state and calendar math.

use crate::calendar::{days_in_month, leading_blank_count, next_day};
use crate::types::{
    CELLS_PER_MONTH, CalendarDate, DayCell, FinalizedRange, MonthCursor, SelectionState,
};

/// Build the grid for one month view: leading blanks for Sunday-first
/// alignment, then every day with its selection flags, padded to 42 cells.
///
/// With only a start committed, that single day counts as a degenerate
/// one-day range.
pub fn visible_grid(cursor: MonthCursor, selection: SelectionState) -> Vec<DayCell> {
    let mut cells = Vec::with_capacity(CELLS_PER_MONTH);

    for _ in 0..leading_blank_count(cursor) {
        cells.push(DayCell::Blank);
    }

    for date in days_in_month(cursor) {
        let (in_range, endpoint) = match selection {
            SelectionState::Empty => (false, false),
            SelectionState::PendingEnd { start } => (date == start, date == start),
            SelectionState::Closed { start, end } => {
                (start <= date && date <= end, date == start || date == end)
            }
        };
        cells.push(DayCell::Day {
            date,
            weekend_disabled: date.is_weekend(),
            in_range,
            endpoint,
        });
    }

    // Pad to 42 cells (6 weeks)
    while cells.len() < CELLS_PER_MONTH {
        cells.push(DayCell::Blank);
    }

    cells
}

/// The output triple, present only when the selection is closed.
pub fn finalized_range(selection: SelectionState) -> Option<FinalizedRange> {
    let SelectionState::Closed { start, end } = selection else {
        return None;
    };
    Some(FinalizedRange {
        start,
        end,
        weekend_dates: weekend_dates_between(start, end),
    })
}

/// Every Saturday/Sunday in the inclusive interval, ascending.
///
/// Walks every day of the interval rather than only the displayed months; the
/// range may span months or years beyond what is visible.
pub fn weekend_dates_between(start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        if current.is_weekend() {
            dates.push(current);
        }
        current = next_day(current);
    }
    dates
}
