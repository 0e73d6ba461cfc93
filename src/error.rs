//! Error types for moodlog

use crate::domain::ValidationError;
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("No entry for {0}")]
    EntryNotFound(NaiveDate),

    #[error("Invalid entry: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidTimeReference(_) => 3,
            MoodlogError::EntryNotFound(_) => 4,
            MoodlogError::Validation(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-03-15)\n\
                    • Months: YYYY-MM, this, last\n\n\
                    Examples:\n\
                    moodlog show yesterday\n\
                    moodlog write \"Long walk\" --mood 7 --date 2025-03-15\n\
                    moodlog month 2025-03",
                    ref_str
                )
            }
            MoodlogError::EntryNotFound(date) => {
                format!(
                    "No entry for {}\n\n\
                    Suggestions:\n\
                    • Use 'moodlog write' to record a new entry for that day\n\
                    • Use 'moodlog month' to see which days have entries",
                    date.format("%Y-%m-%d")
                )
            }
            MoodlogError::Validation(err) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Entries need 1 to 50 characters of text and a mood from 1 to 10.\n\
                    Example: moodlog write \"Quiet day\" --mood 6",
                    err
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("week_start") {
                    format!(
                        "{}\n\n\
                        Valid week starts: monday, sunday\n\
                        Example: moodlog config week_start sunday",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
