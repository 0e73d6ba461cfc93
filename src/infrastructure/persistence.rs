//! Serialization of the entry map into a key-value backend

use crate::domain::{Entry, EntryMap};
use crate::error::Result;
use crate::infrastructure::storage::KeyValueBackend;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Key the entry blob lives under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "diary-storage";

const STATE_VERSION: u32 = 0;

/// Loads and saves the whole entry map
pub trait EntryPersistence {
    /// Load the persisted map. Missing or unreadable state yields an empty map.
    fn load(&self) -> EntryMap;

    fn save(&mut self, entries: &EntryMap) -> Result<()>;
}

#[derive(Serialize)]
struct PersistedState<'a> {
    entries: &'a EntryMap,
    version: u32,
}

/// Entries are kept as raw JSON so one bad record doesn't sink the rest
#[derive(Deserialize)]
struct StoredState {
    #[serde(default)]
    entries: BTreeMap<String, serde_json::Value>,
}

/// JSON blob `{ "entries": { "<date>": Entry }, "version": 0 }` under one key
#[derive(Debug, Clone)]
pub struct KeyValuePersistence<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> KeyValuePersistence<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        KeyValuePersistence {
            backend,
            key: key.into(),
        }
    }

    pub fn with_default_key(backend: B) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: KeyValueBackend> EntryPersistence for KeyValuePersistence<B> {
    fn load(&self) -> EntryMap {
        match self.backend.get(&self.key) {
            Ok(Some(raw)) => decode_entries(&raw),
            Ok(None) => {
                debug!(key = %self.key, "no stored entries, starting empty");
                EntryMap::new()
            }
            Err(err) => {
                warn!(
                    key = %self.key,
                    error = %err,
                    "failed to read stored entries, starting empty"
                );
                EntryMap::new()
            }
        }
    }

    fn save(&mut self, entries: &EntryMap) -> Result<()> {
        let state = PersistedState {
            entries,
            version: STATE_VERSION,
        };
        let serialized = serde_json::to_string(&state)?;
        self.backend.set(&self.key, &serialized)?;
        debug!(key = %self.key, count = entries.len(), "saved entries");
        Ok(())
    }
}

/// Decode a stored blob, dropping records that don't parse or whose date
/// disagrees with their key
fn decode_entries(raw: &str) -> EntryMap {
    let state: StoredState = match serde_json::from_str(raw) {
        Ok(state) => state,
        Err(err) => {
            warn!(error = %err, "stored entries are unparsable, starting empty");
            return EntryMap::new();
        }
    };

    let mut entries = EntryMap::new();
    for (key, value) in state.entries {
        let Ok(date) = NaiveDate::parse_from_str(&key, "%Y-%m-%d") else {
            warn!(key = %key, "skipping stored entry with invalid date key");
            continue;
        };
        let entry: Entry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(date = %date, error = %err, "skipping unreadable stored entry");
                continue;
            }
        };
        if entry.date != date {
            warn!(
                key = %date,
                date = %entry.date,
                "skipping stored entry filed under the wrong date"
            );
            continue;
        }
        entries.insert(date, entry);
    }

    entries
}
