//! The entry store: sole owner of the date-keyed entry map

use crate::domain::{queries, Entry, EntryDraft, EntryMap, MoodScore};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{
    Clock, Config, EntryPersistence, FileBackend, FileSystemRepository, JournalRepository,
    KeyValuePersistence, SystemClock,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Store backed by the journal directory's files and the wall clock
pub type FileDiaryStore = DiaryStore<KeyValuePersistence<FileBackend>, SystemClock>;

/// Result of a mutation's write-back.
///
/// A failed save does not undo the mutation: the in-memory map stays
/// authoritative for the rest of the session.
#[must_use]
#[derive(Debug)]
pub enum SaveOutcome {
    /// The map changed and was persisted
    Saved,
    /// Nothing changed, nothing was written
    Skipped,
    /// The map changed but could not be persisted
    Failed(MoodlogError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    /// Whether the mutation took effect in memory
    pub fn changed(&self) -> bool {
        !matches!(self, SaveOutcome::Skipped)
    }

    pub fn warning(&self) -> Option<&MoodlogError> {
        match self {
            SaveOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Date-keyed journal entries with an injected persistence adapter and clock
#[derive(Debug)]
pub struct DiaryStore<P, C> {
    entries: EntryMap,
    persistence: P,
    clock: C,
}

impl FileDiaryStore {
    /// Open the store of a discovered journal
    pub fn open(repository: &FileSystemRepository) -> Result<(Self, Config)> {
        let config = repository.load_config()?;
        let persistence = repository.entry_persistence(&config);
        Ok((DiaryStore::new(persistence, SystemClock), config))
    }
}

impl<P: EntryPersistence, C: Clock> DiaryStore<P, C> {
    /// Create a store, loading whatever the persistence adapter holds
    pub fn new(persistence: P, clock: C) -> Self {
        let entries = persistence.load();
        debug!(count = entries.len(), "loaded entries");
        DiaryStore {
            entries,
            persistence,
            clock,
        }
    }

    /// Create or replace the entry for `date` (default: today).
    ///
    /// Replacing discards the previous entry's id and creation time; use
    /// [`DiaryStore::record_entry`] to keep them.
    pub fn add_entry(
        &mut self,
        content: impl Into<String>,
        mood_score: MoodScore,
        date: Option<NaiveDate>,
    ) -> SaveOutcome {
        let date = date.unwrap_or_else(|| self.clock.today());
        let entry = Entry::new(date, content.into(), mood_score, self.clock.now());

        if let Some(previous) = self.entries.insert(date, entry) {
            debug!(%date, previous_id = %previous.id, "replaced existing entry");
        } else {
            debug!(%date, "added entry");
        }

        self.persist()
    }

    /// Change content and score of the entry at `date`, keeping its id and
    /// creation time. Does nothing if there is no entry for that date.
    pub fn update_entry(
        &mut self,
        date: NaiveDate,
        content: impl Into<String>,
        mood_score: MoodScore,
    ) -> SaveOutcome {
        let now = self.clock.now();
        let Some(entry) = self.entries.get_mut(&date) else {
            debug!(%date, "no entry to update");
            return SaveOutcome::Skipped;
        };

        entry.revise(content.into(), mood_score, now);
        debug!(%date, id = %entry.id, "updated entry");

        self.persist()
    }

    /// Save a validated draft for `date` (default: today): updates the
    /// existing entry if there is one, otherwise adds a new entry
    pub fn record_entry(&mut self, date: Option<NaiveDate>, draft: EntryDraft) -> SaveOutcome {
        let date = date.unwrap_or_else(|| self.clock.today());

        if self.entries.contains_key(&date) {
            self.update_entry(date, draft.content, draft.mood_score)
        } else {
            self.add_entry(draft.content, draft.mood_score, Some(date))
        }
    }

    pub fn get_entry_by_date(&self, date: NaiveDate) -> Option<&Entry> {
        queries::entry_by_date(&self.entries, date)
    }

    /// Entries in the given month, oldest first. `month0` is zero-based.
    pub fn get_entries_by_month(&self, year: i32, month0: u32) -> Vec<&Entry> {
        queries::entries_by_month(&self.entries, year, month0)
    }

    /// Current run of consecutive days, ending today or yesterday
    pub fn get_streak(&self) -> u32 {
        queries::streak(&self.entries, self.clock.today())
    }

    /// Snapshot of all entries
    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut P {
        &mut self.persistence
    }

    fn persist(&mut self) -> SaveOutcome {
        match self.persistence.save(&self.entries) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                warn!(error = %err, "failed to persist entries; keeping changes in memory");
                SaveOutcome::Failed(err)
            }
        }
    }
}
