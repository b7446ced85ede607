//! The pair of displayed months backing the two calendar views.

use crate::calendar::shift_month;
use crate::types::{CalendarDate, MonthCursor};

/// `(start, end)` month cursors with the invariant that `end` is never
/// chronologically before `start` after start-side navigation.
///
/// The coupling is deliberately asymmetric: moving the start view forward
/// pulls the end view along, but the end view may be navigated independently
/// without pulling the start view back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPair {
    start: MonthCursor,
    end: MonthCursor,
}

impl CursorPair {
    /// New pair with the end view one month after the start view.
    pub fn new(start: MonthCursor) -> Self {
        CursorPair {
            start,
            end: shift_month(start, 1),
        }
    }

    pub fn start(&self) -> MonthCursor {
        self.start
    }

    pub fn end(&self) -> MonthCursor {
        self.end
    }

    /// Move the start view. If the new month reaches or passes the end view,
    /// the end view is forced one month ahead so the two views never collapse
    /// onto the same or an inverted month pair.
    pub fn set_start_cursor(&mut self, new: MonthCursor) {
        self.start = new;
        if new >= self.end {
            self.end = shift_month(new, 1);
        }
    }

    /// Move the end view unconditionally.
    pub fn set_end_cursor(&mut self, new: MonthCursor) {
        self.end = new;
    }

    /// Point both views at the months of a preset's endpoints, bypassing the
    /// one-month-ahead rule (a preset may span zero or many months).
    pub fn apply_preset(&mut self, start: CalendarDate, end: CalendarDate) {
        self.start = MonthCursor::of(start);
        self.end = MonthCursor::of(end);
    }
}
