//! Domain layer - Entry model and pure derivations

pub mod entry;
pub mod mood;
pub mod queries;
pub mod stats;
pub mod time_ref;
pub mod validation;
pub mod week;

pub use entry::{Entry, EntryId, EntryMap, MoodScore};
pub use stats::{MoodStats, PeriodSummary, Summary};
pub use time_ref::{MonthReference, TimeReference};
pub use validation::{EntryDraft, ValidationError};
pub use week::WeekStart;
