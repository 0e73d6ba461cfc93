//! Diary entry model

use crate::domain::mood;
use crate::domain::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Entries keyed by their calendar date. Iteration order is chronological.
pub type EntryMap = BTreeMap<NaiveDate, Entry>;

/// Opaque entry identifier, generated once when an entry is created
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh identifier for an entry on `date`
    pub fn generate(date: NaiveDate) -> Self {
        EntryId(format!(
            "diary-{}-{}",
            date.format("%Y-%m-%d"),
            Uuid::new_v4().simple()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mood score, always an integer in 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Validate a raw score
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(MoodScore(value as u8))
        } else {
            Err(ValidationError::MoodOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        mood::mood_label(f64::from(self.0))
    }

    pub fn color(self) -> &'static str {
        mood::mood_color(f64::from(self.0))
    }
}

impl TryFrom<i64> for MoodScore {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MoodScore::new(value)
    }
}

impl From<MoodScore> for u8 {
    fn from(score: MoodScore) -> u8 {
        score.0
    }
}

impl fmt::Display for MoodScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One day's journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub content: String,
    pub mood_score: MoodScore,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new entry with a fresh id; both timestamps are set to `now`
    pub fn new(
        date: NaiveDate,
        content: String,
        mood_score: MoodScore,
        now: DateTime<Utc>,
    ) -> Self {
        Entry {
            id: EntryId::generate(date),
            date,
            content,
            mood_score,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace content and score in place, keeping id and creation time.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock does.
    pub fn revise(&mut self, content: String, mood_score: MoodScore, now: DateTime<Utc>) {
        self.content = content;
        self.mood_score = mood_score;
        self.updated_at = now.max(self.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mood_score_bounds() {
        assert!(MoodScore::new(1).is_ok());
        assert!(MoodScore::new(10).is_ok());
        assert_eq!(
            MoodScore::new(0).unwrap_err(),
            ValidationError::MoodOutOfRange(0)
        );
        assert_eq!(
            MoodScore::new(11).unwrap_err(),
            ValidationError::MoodOutOfRange(11)
        );
        assert!(MoodScore::new(-3).is_err());
    }

    #[test]
    fn test_mood_score_label_and_color() {
        let score = MoodScore::new(5).unwrap();
        assert_eq!(score.label(), "normal");
        assert_eq!(score.color(), "#90be6d");
    }

    #[test]
    fn test_entry_id_contains_date() {
        let id = EntryId::generate(date(2025, 1, 1));
        assert!(id.as_str().starts_with("diary-2025-01-01-"));
        assert_ne!(id, EntryId::generate(date(2025, 1, 1)));
    }

    #[test]
    fn test_new_entry_timestamps_match() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let entry = Entry::new(date(2025, 1, 1), "hi".into(), MoodScore::new(7).unwrap(), now);
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.updated_at, now);
    }

    #[test]
    fn test_revise_keeps_identity() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let mut entry = Entry::new(
            date(2025, 1, 1),
            "before".into(),
            MoodScore::new(5).unwrap(),
            now,
        );
        let id = entry.id.clone();

        entry.revise("after".into(), MoodScore::new(8).unwrap(), now + Duration::seconds(1));

        assert_eq!(entry.id, id);
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.updated_at, now + Duration::seconds(1));
        assert_eq!(entry.content, "after");
        assert_eq!(entry.mood_score.value(), 8);
    }

    #[test]
    fn test_revise_clamps_backwards_clock() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let mut entry = Entry::new(date(2025, 1, 1), "x".into(), MoodScore::new(5).unwrap(), now);

        entry.revise("y".into(), MoodScore::new(6).unwrap(), now - Duration::hours(1));

        assert_eq!(entry.updated_at, entry.created_at);
    }

    #[test]
    fn test_json_field_names() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        let entry = Entry::new(date(2025, 1, 1), "x".into(), MoodScore::new(3).unwrap(), now);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["date"], "2025-01-01");
        assert_eq!(json["moodScore"], 3);
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_score() {
        let raw = r#"{
            "id": "diary-2025-01-01-1",
            "date": "2025-01-01",
            "content": "x",
            "moodScore": 42,
            "createdAt": "2025-01-01T00:00:00.000Z",
            "updatedAt": "2025-01-01T00:00:00.000Z"
        }"#;
        assert!(serde_json::from_str::<Entry>(raw).is_err());
    }
}
