//! Application layer - Use cases and orchestration

pub mod diary_store;
pub mod init;
pub mod manage_config;
pub mod record_entry;
pub mod review;

pub use diary_store::{DiaryStore, FileDiaryStore, SaveOutcome};
pub use manage_config::ConfigService;
pub use record_entry::{edit_entry, write_entry, WriteReport};
pub use review::{month_view, mood_stats, show_day, summary, MonthView};
