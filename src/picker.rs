//! The picker engine: owns the selection, the month cursor pair, and the
//! preset list, and dispatches raw UI events to them.

use crate::calendar::today;
use crate::cursor::CursorPair;
use crate::presenter;
use crate::selection::ClickOutcome;
use crate::types::{
    CalendarDate, CalendarView, DayCell, FinalizedRange, MonthCursor, PresetRange, SelectionState,
};

type ChangeCallback = Box<dyn FnMut(&FinalizedRange)>;

/// Dual-calendar date-range picker.
///
/// Single-threaded and synchronous: every event entry point is one atomic
/// state transition. The output callback fires exactly once per transition
/// into `Closed`, before the entry point returns.
pub struct RangePicker {
    selection: SelectionState,
    cursors: CursorPair,
    presets: Vec<PresetRange>,
    on_change: Option<ChangeCallback>,
}

impl RangePicker {
    /// New picker showing the current month and the next, with an empty
    /// selection.
    pub fn new(presets: Vec<PresetRange>) -> Self {
        Self::with_start_cursor(presets, MonthCursor::of(today()))
    }

    /// New picker with the start view on a given month (the end view follows
    /// one month after).
    pub fn with_start_cursor(presets: Vec<PresetRange>, start: MonthCursor) -> Self {
        RangePicker {
            selection: SelectionState::Empty,
            cursors: CursorPair::new(start),
            presets,
            on_change: None,
        }
    }

    /// Register the output callback, invoked with the finalized triple each
    /// time the selection closes.
    pub fn set_on_change(&mut self, callback: impl FnMut(&FinalizedRange) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// A day cell was clicked in either view.
    pub fn date_clicked(&mut self, date: CalendarDate) {
        if self.selection.on_date_click(date) == ClickOutcome::RangeClosed {
            self.emit_change();
        }
    }

    /// A month was chosen from a view's month dropdown. Months outside 1-12
    /// are ignored.
    pub fn month_selected(&mut self, view: CalendarView, month: u32) {
        if !(1..=12).contains(&month) {
            return;
        }
        let current = self.cursor(view);
        self.set_cursor(view, MonthCursor::new(current.year, month));
    }

    /// A year was chosen from a view's year dropdown.
    pub fn year_selected(&mut self, view: CalendarView, year: i32) {
        let current = self.cursor(view);
        self.set_cursor(view, MonthCursor::new(year, current.month));
    }

    /// A preset shortcut was clicked. The range is committed as-is, weekend
    /// endpoints included, and both views jump to the endpoint months. An
    /// out-of-bounds index is a no-op.
    pub fn preset_clicked(&mut self, index: usize) {
        let (start, end) = match self.presets.get(index) {
            Some(preset) => (preset.start, preset.end),
            None => return,
        };
        self.selection.apply_preset(start, end);
        self.cursors.apply_preset(start, end);
        self.emit_change();
    }

    pub fn cursor(&self, view: CalendarView) -> MonthCursor {
        match view {
            CalendarView::Start => self.cursors.start(),
            CalendarView::End => self.cursors.end(),
        }
    }

    /// Header label for a view, e.g. "March 2024".
    pub fn cursor_label(&self, view: CalendarView) -> String {
        let cursor = self.cursor(view);
        format!("{} {}", crate::formatter::month_name(cursor.month), cursor.year)
    }

    /// The renderable grid for a view.
    pub fn visible_grid(&self, view: CalendarView) -> Vec<DayCell> {
        presenter::visible_grid(self.cursor(view), self.selection)
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn presets(&self) -> &[PresetRange] {
        &self.presets
    }

    /// The output triple if a full range is currently committed.
    pub fn finalized_range(&self) -> Option<FinalizedRange> {
        presenter::finalized_range(self.selection)
    }

    fn set_cursor(&mut self, view: CalendarView, new: MonthCursor) {
        match view {
            CalendarView::Start => self.cursors.set_start_cursor(new),
            CalendarView::End => self.cursors.set_end_cursor(new),
        }
    }

    fn emit_change(&mut self) {
        if let Some(range) = presenter::finalized_range(self.selection)
            && let Some(callback) = self.on_change.as_mut()
        {
            callback(&range);
        }
    }
}
