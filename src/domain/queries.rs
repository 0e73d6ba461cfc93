//! Derived reads over a snapshot of the entry map

use crate::domain::{Entry, EntryMap};
use chrono::{Duration, NaiveDate};

/// Look up the entry recorded for `date`
pub fn entry_by_date(entries: &EntryMap, date: NaiveDate) -> Option<&Entry> {
    entries.get(&date)
}

/// All entries in the given month, oldest first.
///
/// `month0` is zero-based (0 = January). Months past 11 match nothing.
pub fn entries_by_month(entries: &EntryMap, year: i32, month0: u32) -> Vec<&Entry> {
    let Some(first) = month0
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, 1))
    else {
        return Vec::new();
    };
    let next = first
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(NaiveDate::MAX);

    entries.range(first..next).map(|(_, entry)| entry).collect()
}

/// Number of consecutive days with an entry, ending today or yesterday.
///
/// A streak whose most recent entry is older than yesterday is broken and
/// counts as zero, regardless of how long it used to be.
pub fn streak(entries: &EntryMap, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);

    if !entries.contains_key(&today) && !entries.contains_key(&yesterday) {
        return 0;
    }

    let mut dates = entries.keys().rev();
    let Some(&latest) = dates.next() else {
        return 0;
    };
    if latest != today && latest != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut later = latest;
    for &earlier in dates {
        if later - earlier != Duration::days(1) {
            break;
        }
        streak += 1;
        later = earlier;
    }

    streak
}
