//! Date-range picker CLI driver.
//!
//! # Usage
//! ```ignore
//! rangepicker                                  // Empty picker, current month
//! rangepicker click:2024-03-11 click:2024-03-15
//! rangepicker -p 'Q1=2024-01-01..2024-03-31' preset:0
//! rangepicker --start 2024-03 month:end:5
//! ```

use rangepicker::args::{Args, Event, parse_event, parse_month_cursor, parse_preset_def};
use rangepicker::formatter::print_picker;
use rangepicker::picker::RangePicker;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("rangepicker: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let presets = args
        .presets
        .iter()
        .map(|def| parse_preset_def(def))
        .collect::<Result<Vec<_>, _>>()?;

    let mut picker = match &args.start {
        Some(start) => RangePicker::with_start_cursor(presets, parse_month_cursor(start)?),
        None => RangePicker::new(presets),
    };

    // Selection-closed output, printed as the callback fires
    picker.set_on_change(|range| {
        println!("selected: {}..{}", range.start, range.end);
        if range.weekend_dates.is_empty() {
            println!("weekends: none");
        } else {
            println!("weekends: {}", range.iso_weekend_dates().join(" "));
        }
    });

    for event in &args.events {
        match parse_event(event)? {
            Event::Click(date) => picker.date_clicked(date),
            Event::Preset(index) => picker.preset_clicked(index),
            Event::Month(view, month) => picker.month_selected(view, month),
            Event::Year(view, year) => picker.year_selected(view, year),
        }
    }

    print_picker(&picker, args.use_color());

    Ok(())
}
