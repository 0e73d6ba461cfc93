//! Infrastructure layer - External I/O and persistence

pub mod clock;
pub mod config;
pub mod persistence;
pub mod repository;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use persistence::{EntryPersistence, KeyValuePersistence, DEFAULT_STORAGE_KEY};
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{validate_key, FileBackend, KeyValueBackend, MemoryBackend};
