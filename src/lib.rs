//! Dual-calendar date-range selection engine.
//!
//! Features:
//! - Click-driven start/end selection across two side-by-side month views
//! - Weekend days excluded from click selection
//! - Caller-supplied preset ranges applied in one click
//! - Terminal rendering of the derived view model

pub mod args;
pub mod calendar;
pub mod cursor;
pub mod formatter;
pub mod picker;
pub mod presenter;
pub mod selection;
pub mod types;
