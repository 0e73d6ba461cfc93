//! Input boundary checks for new and edited entries

use crate::domain::MoodScore;
use thiserror::Error;

/// Maximum entry length, in characters
pub const MAX_CONTENT_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("content is required")]
    EmptyContent,

    #[error("content must be at most 50 characters (got {len})")]
    ContentTooLong { len: usize },

    #[error("mood score must be between 1 and 10 (got {0})")]
    MoodOutOfRange(i64),
}

/// A validated entry, ready to hand to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub content: String,
    pub mood_score: MoodScore,
}

impl EntryDraft {
    pub fn new(content: impl Into<String>, mood: i64) -> Result<Self, ValidationError> {
        let content = content.into();
        let len = content.chars().count();

        if len == 0 {
            return Err(ValidationError::EmptyContent);
        }
        if len > MAX_CONTENT_CHARS {
            return Err(ValidationError::ContentTooLong { len });
        }

        Ok(EntryDraft {
            content,
            mood_score: MoodScore::new(mood)?,
        })
    }
}
