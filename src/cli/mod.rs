//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_entries_json, format_entry, format_month_calendar, format_month_list, format_streak,
    format_summary,
};
