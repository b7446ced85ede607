//! Command-line argument and event-script parsing using clap.
//!
//! Events use a compact `kind:...` grammar so a whole interaction can be
//! replayed from the command line: `click:2024-03-11 click:2024-03-15`.

use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::formatter::parse_month;
use crate::types::{
    COLOR_ENABLED_BY_DEFAULT, CalendarDate, CalendarView, MonthCursor, PresetRange,
};

#[derive(Parser, Debug)]
#[command(name = "rangepicker")]
#[command(about = "Replays date-range picker events and prints the resulting views", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Initial start-view month as YYYY-MM (default: current month).
    #[arg(long, help_heading = "Picker options", value_name = "month")]
    pub start: Option<String>,

    /// Preset range definition "label=YYYY-MM-DD..YYYY-MM-DD" (repeatable).
    #[arg(
        short = 'p',
        long = "preset",
        help_heading = "Picker options",
        value_name = "def"
    )]
    pub presets: Vec<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Events to replay, in order.
    #[arg(index = 1, value_name = "event", value_hint = ValueHint::Other)]
    pub events: Vec<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Replay picker events and inspect the selection they produce.

Events:
  click:YYYY-MM-DD       Click a day cell (weekend clicks are ignored)
  preset:IDX             Click the preset with the given index
  month:VIEW:MONTH       Pick a month in a view (VIEW is start or end)
  year:VIEW:YYYY         Pick a year in a view

Examples:
  rangepicker click:2024-03-11 click:2024-03-15
  rangepicker -p 'January=2024-01-01..2024-01-31' preset:0
  rangepicker --start 2024-03 month:end:5 year:end:2025
  rangepicker --no-color click:2024-03-08 click:2024-03-18";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Whether to emit ANSI colors: on by default, off when requested or when
    /// stdout is not a terminal.
    pub fn use_color(&self) -> bool {
        !self.no_color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal()
    }
}

/// One replayable picker event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Click(CalendarDate),
    Preset(usize),
    Month(CalendarView, u32),
    Year(CalendarView, i32),
}

/// Parse an event string in the `kind:...` grammar.
pub fn parse_event(s: &str) -> Result<Event, String> {
    let (kind, rest) = s
        .split_once(':')
        .ok_or_else(|| format!("Invalid event: {} (expected kind:...)", s))?;

    match kind {
        "click" => Ok(Event::Click(rest.parse()?)),
        "preset" => {
            let index = rest
                .parse::<usize>()
                .map_err(|_| format!("Invalid preset index: {}", rest))?;
            Ok(Event::Preset(index))
        }
        "month" => {
            let (view, month) = rest
                .split_once(':')
                .ok_or_else(|| format!("Invalid month event: {} (expected month:view:m)", s))?;
            let month =
                parse_month(month).ok_or_else(|| format!("Invalid month: {}", month))?;
            Ok(Event::Month(parse_view(view)?, month))
        }
        "year" => {
            let (view, year) = rest
                .split_once(':')
                .ok_or_else(|| format!("Invalid year event: {} (expected year:view:yyyy)", s))?;
            let year = year
                .parse::<i32>()
                .map_err(|_| format!("Invalid year: {}", year))?;
            Ok(Event::Year(parse_view(view)?, year))
        }
        _ => Err(format!("Unknown event kind: {}", kind)),
    }
}

/// Parse a view name ("start" or "end").
pub fn parse_view(s: &str) -> Result<CalendarView, String> {
    match s {
        "start" => Ok(CalendarView::Start),
        "end" => Ok(CalendarView::End),
        _ => Err(format!("Invalid view: {} (expected start or end)", s)),
    }
}

/// Parse a preset definition "label=YYYY-MM-DD..YYYY-MM-DD".
pub fn parse_preset_def(s: &str) -> Result<PresetRange, String> {
    let (label, range) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid preset: {} (expected label=start..end)", s))?;
    if label.is_empty() {
        return Err(format!("Invalid preset: {} (empty label)", s));
    }
    let (start, end) = range
        .split_once("..")
        .ok_or_else(|| format!("Invalid preset range: {} (expected start..end)", range))?;
    Ok(PresetRange::new(label, start.parse()?, end.parse()?))
}

/// Parse an initial cursor month "YYYY-MM".
pub fn parse_month_cursor(s: &str) -> Result<MonthCursor, String> {
    let (year, month) = s
        .split_once('-')
        .ok_or_else(|| format!("Invalid month: {} (expected YYYY-MM)", s))?;
    let year = year
        .parse::<i32>()
        .map_err(|_| format!("Invalid year: {}", year))?;
    let month = month
        .parse::<u32>()
        .map_err(|_| format!("Invalid month: {}", month))?;
    if !(1..=12).contains(&month) {
        return Err(format!("Invalid month: {} (must be 1-12)", month));
    }
    Ok(MonthCursor::new(year, month))
}
