//! Per-learner practice progress.
//!
//! The scoring core reports accuracy through a callback and persists
//! nothing; this module is the collaborator side of that seam, kept behind
//! the injected [`Storage`](crate::storage::Storage) interface.

use crate::storage::{Storage, StorageResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Latest result for one practice character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Accuracy of the most recent scored attempt.
    pub accuracy: u8,
    /// Stars awarded for that attempt (1..=3).
    pub stars: u8,
}

/// Stars awarded for an accuracy value: 3 above 90, 2 above 70, else 1.
pub fn stars_for(accuracy: u8) -> u8 {
    if accuracy > 90 {
        3
    } else if accuracy > 70 {
        2
    } else {
        1
    }
}

/// All progress records for one learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressBook {
    /// Unique book identifier.
    pub id: String,
    /// Learner display name.
    pub learner: String,
    /// Records keyed by practiced glyph.
    pub records: HashMap<String, ProgressRecord>,
}

impl ProgressBook {
    /// Create an empty book for a learner.
    pub fn new(learner: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            learner: learner.to_string(),
            records: HashMap::new(),
        }
    }

    /// Record a completed attempt, replacing any earlier record for the
    /// glyph.
    pub fn record_attempt(&mut self, glyph: &str, accuracy: u8) -> ProgressRecord {
        let record = ProgressRecord {
            accuracy,
            stars: stars_for(accuracy),
        };
        self.records.insert(glyph.to_string(), record);
        record
    }

    /// The record for a glyph, if it has been practiced.
    pub fn record(&self, glyph: &str) -> Option<&ProgressRecord> {
        self.records.get(glyph)
    }

    /// Percentage of a catalog of `total_items` with at least one attempt.
    pub fn completion(&self, total_items: usize) -> u8 {
        if total_items == 0 {
            return 0;
        }
        let practiced = self.records.len().min(total_items);
        (practiced as f64 / total_items as f64 * 100.0).round() as u8
    }

    /// Total stars earned across all practiced glyphs.
    pub fn total_stars(&self) -> u32 {
        self.records.values().map(|r| u32::from(r.stars)).sum()
    }

    /// Serialize the book to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a book from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Applies completed attempts to a [`ProgressBook`] and persists it through
/// an injected storage backend.
pub struct ProgressTracker<S: Storage> {
    storage: Arc<S>,
    book: ProgressBook,
    dirty: bool,
}

impl<S: Storage> ProgressTracker<S> {
    /// Track an existing book.
    pub fn new(storage: Arc<S>, book: ProgressBook) -> Self {
        Self {
            storage,
            book,
            dirty: false,
        }
    }

    /// Load the learner's book from storage, or start a fresh one.
    pub async fn load_or_new(storage: Arc<S>, learner: &str) -> Self {
        let book = match storage.load(learner).await {
            Ok(book) => book,
            Err(_) => ProgressBook::new(learner),
        };
        Self::new(storage, book)
    }

    /// Apply a completed attempt. The change is held in memory until
    /// [`save`](Self::save) is called.
    pub fn record_completion(&mut self, glyph: &str, accuracy: u8) -> ProgressRecord {
        self.dirty = true;
        self.book.record_attempt(glyph, accuracy)
    }

    /// Whether there are unpersisted records.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist the book under the learner's key.
    pub async fn save(&mut self) -> StorageResult<()> {
        let key = self.book.learner.clone();
        self.storage.save(&key, &self.book).await?;
        self.dirty = false;
        Ok(())
    }

    /// The tracked book.
    pub fn book(&self) -> &ProgressBook {
        &self.book
    }
}
