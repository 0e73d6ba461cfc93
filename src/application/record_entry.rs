//! Write and edit entry use cases

use crate::application::{DiaryStore, SaveOutcome};
use crate::domain::{EntryDraft, TimeReference};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Clock, EntryPersistence};
use chrono::NaiveDate;

/// What a write did
#[derive(Debug)]
pub struct WriteReport {
    pub date: NaiveDate,
    /// True when no entry existed for the date beforehand
    pub created: bool,
    pub outcome: SaveOutcome,
}

/// Resolve a day reference for writing (default: today). Future days are rejected.
pub fn resolve_writable_day(when: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    let date = match when {
        Some(reference) => TimeReference::parse(reference)?.resolve(today),
        None => today,
    };

    if date > today {
        return Err(MoodlogError::InvalidTimeReference(format!(
            "{} is in the future",
            date.format("%Y-%m-%d")
        )));
    }

    Ok(date)
}

/// Validate and record an entry, updating the day's entry if it already exists
pub fn write_entry<P: EntryPersistence, C: Clock>(
    store: &mut DiaryStore<P, C>,
    content: &str,
    mood: i64,
    when: Option<&str>,
) -> Result<WriteReport> {
    let date = resolve_writable_day(when, store.today())?;
    let draft = EntryDraft::new(content, mood)?;

    let created = store.get_entry_by_date(date).is_none();
    let outcome = store.record_entry(Some(date), draft);

    Ok(WriteReport {
        date,
        created,
        outcome,
    })
}

/// Validate and apply an edit to an existing entry
pub fn edit_entry<P: EntryPersistence, C: Clock>(
    store: &mut DiaryStore<P, C>,
    when: &str,
    content: &str,
    mood: i64,
) -> Result<(NaiveDate, SaveOutcome)> {
    let date = TimeReference::parse(when)?.resolve(store.today());
    let draft = EntryDraft::new(content, mood)?;

    match store.update_entry(date, draft.content, draft.mood_score) {
        SaveOutcome::Skipped => Err(MoodlogError::EntryNotFound(date)),
        outcome => Ok((date, outcome)),
    }
}
