//! Aggregate statistics over a snapshot of the entry map

use crate::domain::{queries, Entry, EntryMap, WeekStart};
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Entries recorded within one calendar period (a week or a month)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub recorded: usize,
    pub average_mood: f64,
}

impl PeriodSummary {
    fn collect(entries: &EntryMap, start: NaiveDate, end: NaiveDate) -> Self {
        let in_period: Vec<&Entry> = entries.range(start..=end).map(|(_, e)| e).collect();
        PeriodSummary {
            start,
            end,
            recorded: in_period.len(),
            average_mood: average(in_period.iter().copied()),
        }
    }

    /// Number of calendar days in the period
    pub fn days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1) as u32
    }

    /// Share of days in the period with an entry, as a percentage
    pub fn completion_rate(&self) -> f64 {
        self.recorded as f64 / self.days() as f64 * 100.0
    }
}

/// Headline numbers for the stats view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_entries: usize,
    pub streak: u32,
    pub average_mood: f64,
    pub week: PeriodSummary,
    pub month: PeriodSummary,
}

impl Summary {
    pub fn compute(entries: &EntryMap, today: NaiveDate, week_start: WeekStart) -> Self {
        let week_first = week_start.week_start_for(today);
        let week_last = week_first + Duration::days(6);

        let month_first = today.with_day(1).unwrap_or(today);
        let month_last = month_first
            .checked_add_months(Months::new(1))
            .map(|next| next - Duration::days(1))
            .unwrap_or(NaiveDate::MAX);

        Summary {
            total_entries: entries.len(),
            streak: queries::streak(entries, today),
            average_mood: average(entries.values()),
            week: PeriodSummary::collect(entries, week_first, week_last),
            month: PeriodSummary::collect(entries, month_first, month_last),
        }
    }
}

/// Per-day scores with weekly and monthly averages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    pub daily: BTreeMap<NaiveDate, u8>,
    /// Keyed by ISO week id, e.g. `2025-W03`
    pub weekly: BTreeMap<String, f64>,
    /// Keyed by month id, e.g. `2025-03`
    pub monthly: BTreeMap<String, f64>,
    pub streak: u32,
}

impl MoodStats {
    pub fn compute(entries: &EntryMap, today: NaiveDate) -> Self {
        let daily = entries
            .iter()
            .map(|(date, entry)| (*date, entry.mood_score.value()))
            .collect();

        let mut weeks: BTreeMap<String, Vec<&Entry>> = BTreeMap::new();
        let mut months: BTreeMap<String, Vec<&Entry>> = BTreeMap::new();
        for entry in entries.values() {
            weeks.entry(week_id(entry.date)).or_default().push(entry);
            months
                .entry(entry.date.format("%Y-%m").to_string())
                .or_default()
                .push(entry);
        }

        MoodStats {
            daily,
            weekly: averages_by_key(weeks),
            monthly: averages_by_key(months),
            streak: queries::streak(entries, today),
        }
    }
}

/// ISO week id for a date, e.g. `2025-W03`
pub fn week_id(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

fn averages_by_key(groups: BTreeMap<String, Vec<&Entry>>) -> BTreeMap<String, f64> {
    groups
        .into_iter()
        .map(|(key, group)| (key, average(group)))
        .collect()
}

/// Mean mood score, or 0.0 for no entries
fn average<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> f64 {
    let (sum, count) = entries.into_iter().fold((0u32, 0u32), |(sum, count), e| {
        (sum + u32::from(e.mood_score.value()), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        f64::from(sum) / f64::from(count)
    }
}
