//! Read-only views: a single day, a month, and statistics

use crate::application::DiaryStore;
use crate::domain::{Entry, MonthReference, MoodStats, Summary, TimeReference, WeekStart};
use crate::error::Result;
use crate::infrastructure::{Clock, EntryPersistence};
use chrono::NaiveDate;

/// Entries of one calendar month
#[derive(Debug)]
pub struct MonthView<'a> {
    pub year: i32,
    /// Zero-based month
    pub month0: u32,
    pub entries: Vec<&'a Entry>,
}

/// Resolve a day reference (default: today) and look up its entry
pub fn show_day<'a, P: EntryPersistence, C: Clock>(
    store: &'a DiaryStore<P, C>,
    when: Option<&str>,
) -> Result<(NaiveDate, Option<&'a Entry>)> {
    let date = match when {
        Some(reference) => TimeReference::parse(reference)?.resolve(store.today()),
        None => store.today(),
    };
    Ok((date, store.get_entry_by_date(date)))
}

/// Entries for a month reference (default: the current month)
pub fn month_view<'a, P: EntryPersistence, C: Clock>(
    store: &'a DiaryStore<P, C>,
    month: Option<&str>,
) -> Result<MonthView<'a>> {
    let reference = match month {
        Some(reference) => MonthReference::parse(reference)?,
        None => MonthReference::This,
    };
    let (year, month0) = reference.resolve(store.today());

    Ok(MonthView {
        year,
        month0,
        entries: store.get_entries_by_month(year, month0),
    })
}

pub fn summary<P: EntryPersistence, C: Clock>(
    store: &DiaryStore<P, C>,
    week_start: WeekStart,
) -> Summary {
    Summary::compute(store.entries(), store.today(), week_start)
}

pub fn mood_stats<P: EntryPersistence, C: Clock>(store: &DiaryStore<P, C>) -> MoodStats {
    MoodStats::compute(store.entries(), store.today())
}
