//! Click-driven selection state machine: `Empty` → `PendingEnd` → `Closed`.

use crate::types::{CalendarDate, SelectionState};

/// Result of applying one date click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Weekend click; no state change.
    Ignored,
    /// A new start was committed (`Empty`/`Closed` → `PendingEnd`).
    RangeStarted,
    /// Both endpoints are now committed (`PendingEnd` → `Closed`).
    RangeClosed,
}

impl SelectionState {
    /// Apply a date click.
    ///
    /// Weekend dates are rejected silently. From `Empty` or `Closed` the click
    /// starts a new range; a click while a closed range exists never extends
    /// it. From `PendingEnd`, re-clicking the pending start is idempotent,
    /// and a date before the pending start swaps into the start position so
    /// the machine is order-independent. Each call either fully applies one
    /// transition or is a no-op.
    pub fn on_date_click(&mut self, date: CalendarDate) -> ClickOutcome {
        if date.is_weekend() {
            return ClickOutcome::Ignored;
        }
        match *self {
            SelectionState::Empty | SelectionState::Closed { .. } => {
                *self = SelectionState::PendingEnd { start: date };
                ClickOutcome::RangeStarted
            }
            SelectionState::PendingEnd { start } if date == start => ClickOutcome::RangeStarted,
            SelectionState::PendingEnd { start } => {
                let (start, end) = if date < start {
                    (date, start)
                } else {
                    (start, date)
                };
                *self = SelectionState::Closed { start, end };
                ClickOutcome::RangeClosed
            }
        }
    }

    /// Commit a preset range directly, entering `Closed` regardless of the
    /// current state. No weekend rejection applies; presets are not clicks.
    pub fn apply_preset(&mut self, start: CalendarDate, end: CalendarDate) {
        *self = SelectionState::Closed { start, end };
    }

    /// The committed endpoints when the selection is closed.
    pub fn range(&self) -> Option<(CalendarDate, CalendarDate)> {
        match *self {
            SelectionState::Closed { start, end } => Some((start, end)),
            _ => None,
        }
    }
}
