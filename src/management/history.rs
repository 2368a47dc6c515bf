use std::sync::Arc;

use tracing::{debug, warn};

use super::store::{KeyValueStore, StoreError};
use crate::types::HistoryEntry;

pub const HISTORY_KEY: &str = "history";

/// Persisted list of past mood queries, most recent first.
///
/// The whole list lives in one slot and is rewritten on every append.
/// There is no locking: concurrent writers race and the last one wins.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns every entry. Missing, unreadable or corrupt data reads as empty.
    pub async fn read_all(&self) -> Vec<HistoryEntry> {
        let raw = match self.store.get(HISTORY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                debug!("history unreadable, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            // the next append overwrites whatever is stored
            Err(e) => {
                warn!("history corrupt, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Prepends `entry` and writes the full list back.
    pub async fn append_entry(&self, entry: &HistoryEntry) -> Result<(), StoreError> {
        let mut entries = self.read_all().await;
        entries.insert(0, entry.clone());

        let json = serde_json::to_string(&entries)?;
        self.store.set(HISTORY_KEY, &json).await
    }

    /// Returns the entry at `index` (0 = most recent).
    pub async fn get(&self, index: usize) -> Option<HistoryEntry> {
        self.read_all().await.into_iter().nth(index)
    }
}
