//! Initialize journal use case

use crate::domain::WeekStart;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, week_start: WeekStart) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Creates .moodlog/ and .moodlog/store/
    repo.initialize()?;

    let config = Config::new(week_start);
    repo.save_config(&config)?;

    info!(path = %path.display(), "initialized journal");
    println!("Initialized moodlog journal at {}", path.display());
    println!("Week starts on: {}", week_start);

    Ok(())
}
