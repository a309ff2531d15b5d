//! Preference Store
//!
//! Per-article `saved` flag and star rating, persisted through an injected
//! [`KeyValueStore`]. Each article owns one JSON record under
//! `{namespace}:{article_id}`.
//!
//! Storage failures never reach the caller. The reader's changes land in a
//! session overlay first, so the UI keeps reflecting the last action even
//! when the backend is full or disabled; the choice is simply not remembered
//! after a restart.
//!
//! A write merges the changed fields into a fresh read of the stored record.
//! When that read fails nothing is written, so a field that was never loaded
//! (an earlier rating, say) can not be overwritten with a default.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::StorageError;
use crate::storage::SharedStore;
use crate::types::{ArticleId, PreferenceRecord, Rating};

/// What the session knows about one article
#[derive(Debug, Clone, Copy, Default)]
struct SessionEntry {
    /// Last record read from or written to the backend
    stored: Option<PreferenceRecord>,
    /// Changes not yet persisted
    saved: Option<bool>,
    rating: Option<Rating>,
}

impl SessionEntry {
    fn merged(&self, base: PreferenceRecord) -> PreferenceRecord {
        PreferenceRecord {
            saved: self.saved.unwrap_or(base.saved),
            rating: self.rating.or(base.rating),
        }
    }

    fn has_changes(&self) -> bool {
        self.saved.is_some() || self.rating.is_some()
    }
}

/// Namespaced, failure-tolerant preference persistence
pub struct PreferenceStore {
    backend: SharedStore,
    namespace: String,
    session: RwLock<HashMap<ArticleId, SessionEntry>>,
}

impl PreferenceStore {
    pub fn new(backend: SharedStore, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
            session: RwLock::new(HashMap::new()),
        }
    }

    /// Storage key for an article's record
    pub fn key_for(&self, article: &ArticleId) -> String {
        format!("{}:{}", self.namespace, article)
    }

    /// Current record; defaults when nothing was ever recorded or storage
    /// cannot be read.
    ///
    /// Only successful reads are cached, so the stored record shows up again
    /// once the backend recovers.
    pub fn record(&self, article: &ArticleId) -> PreferenceRecord {
        let entry = self.session.read().get(article).copied().unwrap_or_default();
        if let Some(stored) = entry.stored {
            return entry.merged(stored);
        }

        match self.load(article) {
            Ok(stored) => {
                self.session.write().entry(article.clone()).or_default().stored = Some(stored);
                entry.merged(stored)
            }
            Err(e) => {
                tracing::warn!(article = %article, error = %e, "preference read failed");
                entry.merged(PreferenceRecord::default())
            }
        }
    }

    pub fn get_saved(&self, article: &ArticleId) -> bool {
        self.record(article).saved
    }

    pub fn set_saved(&self, article: &ArticleId, saved: bool) {
        self.update(article, |entry| entry.saved = Some(saved));
    }

    /// Flip the saved flag, returning the new value
    pub fn toggle_saved(&self, article: &ArticleId) -> bool {
        let saved = !self.get_saved(article);
        self.set_saved(article, saved);
        saved
    }

    pub fn get_rating(&self, article: &ArticleId) -> Option<Rating> {
        self.record(article).rating
    }

    pub fn set_rating(&self, article: &ArticleId, rating: Rating) {
        self.update(article, |entry| entry.rating = Some(rating));
    }

    /// Articles the reader has saved, as known to the backend
    pub fn saved_articles(&self) -> Vec<ArticleId> {
        let prefix = format!("{}:", self.namespace);
        let entries = match self.backend.scan_prefix(&prefix) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "preference storage unavailable, listing session only");
                Vec::new()
            }
        };

        let mut saved: Vec<ArticleId> = entries
            .into_iter()
            .filter_map(|(key, json)| {
                let article = ArticleId::new(key.strip_prefix(&prefix)?);
                let record: PreferenceRecord = serde_json::from_str(&json).ok()?;
                record.saved.then_some(article)
            })
            .collect();

        // Unpersisted session changes win over what the backend holds
        let session = self.session.read();
        for (article, entry) in session.iter() {
            match entry.saved {
                Some(true) if !saved.contains(article) => saved.push(article.clone()),
                Some(false) => saved.retain(|a| a != article),
                _ => {}
            }
        }
        saved.sort();
        saved
    }

    /// Stored record; absent and corrupt records read as the default
    fn load(&self, article: &ArticleId) -> Result<PreferenceRecord, StorageError> {
        let Some(json) = self.backend.get(&self.key_for(article))? else {
            return Ok(PreferenceRecord::default());
        };

        match serde_json::from_str(&json) {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::warn!(article = %article, error = %e, "discarding corrupt preference record");
                Ok(PreferenceRecord::default())
            }
        }
    }

    /// Record a change in the session, then persist it merged into the
    /// stored record
    fn update(&self, article: &ArticleId, change: impl FnOnce(&mut SessionEntry)) {
        let mut session = self.session.write();
        let entry = session.entry(article.clone()).or_default();
        change(entry);

        let stored = match self.load(article) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(
                    article = %article,
                    error = %e,
                    "stored preference unreadable, keeping the change for this session"
                );
                return;
            }
        };
        entry.stored = Some(stored);

        let record = entry.merged(stored);
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(article = %article, error = %e, "preference record not serializable");
                return;
            }
        };

        match self.backend.set(&self.key_for(article), &json) {
            Ok(()) => {
                *entry = SessionEntry {
                    stored: Some(record),
                    ..SessionEntry::default()
                };
            }
            Err(e) => {
                tracing::warn!(
                    article = %article,
                    error = %e,
                    pending = entry.has_changes(),
                    "preference not persisted, keeping it for this session"
                );
            }
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
