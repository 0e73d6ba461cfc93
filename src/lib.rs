//! moodlog - Terminal mood journal
//!
//! Records one short entry and a 1-10 mood score per calendar day, and derives
//! streaks, averages and completion rates from the stored history.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
