//! Terminal rendering of the picker's view model with color support.
//!
//! Strictly a consumer of the engine: it reads grids, cursor labels, the
//! selection and the preset list, and never mutates picker state.

use unicode_width::UnicodeWidthStr;

use crate::picker::RangePicker;
use crate::types::{
    COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarView, DayCell,
    GUTTER_WIDTH, MONTH_WIDTH, MonthCursor, SelectionState,
};

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

/// English month name for month 1-12.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Parse month from string (numeric 1-12, English name or short form).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == s_lower || (s_lower.len() == 3 && name.starts_with(&s_lower))
        })
        .map(|idx| idx as u32 + 1)
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format month header ("March 2024"), centered, with optional color.
pub fn format_month_header(cursor: MonthCursor, width: usize, color: bool) -> String {
    let header = format!("{} {}", month_name(cursor.month), cursor.year);
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Weekday header row, Sunday-first, with optional color.
pub fn format_weekday_headers(color: bool) -> String {
    let row = "Su Mo Tu We Th Fr Sa";
    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row.to_string()
    }
}

/// Format one grid cell.
///
/// Color priority: range endpoint > in-range > weekend-disabled > regular.
fn format_day_cell(cell: &DayCell, color: bool, is_last: bool) -> String {
    let formatted = match cell {
        DayCell::Blank => "  ".to_string(),
        DayCell::Day {
            date,
            weekend_disabled,
            in_range,
            endpoint,
        } => {
            let day_str = format!("{:>2}", date.day);
            if !color {
                day_str
            } else if *endpoint {
                format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
            } else if *in_range {
                format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
            } else if *weekend_disabled {
                format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
            } else {
                day_str
            }
        }
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format one month view as grid lines: header, weekday row, six week rows.
pub fn format_month_view(cursor: MonthCursor, cells: &[DayCell], color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);
    lines.push(format_month_header(cursor, MONTH_WIDTH, color));
    lines.push(format_weekday_headers(color));

    for week in cells.chunks(7) {
        let mut line = String::new();
        for (day_in_week, cell) in week.iter().enumerate() {
            let is_last = day_in_week == week.len() - 1;
            line.push_str(&format_day_cell(cell, color, is_last));
        }
        lines.push(line);
    }

    lines
}

/// Print multiple month grids side by side with a gutter between them.
pub fn print_grids_side_by_side(grids: &[Vec<String>], gutter_width: usize) {
    let max_height = grids.iter().map(|g| g.len()).max().unwrap_or(0);

    for row in 0..max_height {
        let mut line = String::new();
        for (i, grid) in grids.iter().enumerate() {
            if row < grid.len() {
                let text = &grid[row];
                line.push_str(text);
                let padding = MONTH_WIDTH.saturating_sub(visible_width(text));
                line.push_str(&" ".repeat(padding));
            } else {
                line.push_str(&" ".repeat(MONTH_WIDTH));
            }
            if i < grids.len() - 1 {
                line.push_str(&" ".repeat(gutter_width));
            }
        }
        println!("{}", line.trim_end());
    }
}

/// Display width of a line ignoring ANSI color escapes.
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            width += ch.to_string().width();
        }
    }
    width
}

/// One-line summary of the committed selection.
pub fn format_selection_summary(selection: SelectionState) -> String {
    match selection {
        SelectionState::Empty => "selection: empty".to_string(),
        SelectionState::PendingEnd { start } => {
            format!("selection: {} (awaiting end date)", start)
        }
        SelectionState::Closed { start, end } => format!("selection: {}..{}", start, end),
    }
}

/// Print the whole picker: both month grids, the selection summary, and the
/// preset list with clickable indices.
pub fn print_picker(picker: &RangePicker, color: bool) {
    let views = [CalendarView::Start, CalendarView::End];
    let grids: Vec<Vec<String>> = views
        .iter()
        .map(|&view| format_month_view(picker.cursor(view), &picker.visible_grid(view), color))
        .collect();

    if fits_side_by_side(grids.len()) {
        print_grids_side_by_side(&grids, GUTTER_WIDTH);
    } else {
        for grid in &grids {
            for line in grid {
                println!("{}", line.trim_end());
            }
            println!();
        }
    }

    println!();
    println!("{}", format_selection_summary(picker.selection()));

    if !picker.presets().is_empty() {
        println!("presets:");
        for (index, preset) in picker.presets().iter().enumerate() {
            println!(
                "  [{}] {}  {}..{}",
                index, preset.label, preset.start, preset.end
            );
        }
    }
}

/// Whether the terminal is wide enough for the given number of grids; assume
/// it is when no terminal is attached (piped output).
fn fits_side_by_side(grid_count: usize) -> bool {
    let needed = grid_count * MONTH_WIDTH + (grid_count - 1) * GUTTER_WIDTH;
    match terminal_size::terminal_size() {
        Some((w, _)) => w.0 as usize >= needed,
        None => true,
    }
}
