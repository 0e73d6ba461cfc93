//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// First day of the week for weekly stats (monday, sunday)
        #[arg(short, long, default_value = "monday")]
        week_start: String,
    },

    /// Record the entry for a day, replacing that day's text and mood if present
    Write {
        /// Entry text (1-50 characters)
        content: String,

        /// Mood score from 1 (worst) to 10 (best)
        #[arg(short, long, allow_negative_numbers = true)]
        mood: i64,

        /// Day to record (e.g., yesterday, last friday, 2025-03-15; default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Edit an existing entry
    Edit {
        /// Day of the entry to edit
        #[arg(value_name = "TIME_REF")]
        date: String,

        /// New entry text (1-50 characters)
        content: String,

        /// New mood score from 1 to 10
        #[arg(short, long, allow_negative_numbers = true)]
        mood: i64,
    },

    /// Show the entry for a day (default: today)
    Show {
        #[arg(value_name = "TIME_REF")]
        date: Option<String>,
    },

    /// List a month's entries (YYYY-MM, this, last; default: this)
    Month {
        #[arg(value_name = "MONTH")]
        month: Option<String>,

        /// Render as a calendar grid
        #[arg(short, long, conflicts_with = "json")]
        calendar: bool,

        /// Print entries as JSON, with mood labels and colors
        #[arg(long)]
        json: bool,
    },

    /// Show the current run of consecutive days
    Streak,

    /// Show averages and completion rates
    Stats {
        /// Print daily, weekly and monthly figures as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
