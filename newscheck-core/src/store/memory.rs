//! In-memory verification store.
//!
//! Data lives for the lifetime of the process. Used for tests, the CLI,
//! and as the server fallback when `DATABASE_URL` is not set.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use super::{NewLogEntry, VerificationStore, VerifiedArticleRecord};
use crate::error::StoreError;
use crate::fingerprint::Fingerprint;

/// A log entry as kept by the memory store.
#[derive(Debug, Clone)]
pub struct LoggedEntry {
    pub id: Uuid,
    pub entry: NewLogEntry,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct MemoryStore {
    /// Curated articles keyed by fingerprint
    articles: DashMap<Fingerprint, VerifiedArticleRecord>,
    /// Request log keyed by entry id
    log: DashMap<Uuid, LoggedEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with curated articles.
    ///
    /// Later records replace earlier ones with the same fingerprint.
    pub fn with_articles(records: impl IntoIterator<Item = VerifiedArticleRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert_article(record);
        }
        store
    }

    /// Insert or replace a curated article, returning the replaced record.
    pub fn insert_article(&self, record: VerifiedArticleRecord) -> Option<VerifiedArticleRecord> {
        self.articles.insert(record.fingerprint.clone(), record)
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    pub fn log_entry(&self, id: &Uuid) -> Option<LoggedEntry> {
        self.log.get(id).map(|entry| entry.value().clone())
    }

    /// All log entries, oldest first.
    pub fn log_entries(&self) -> Vec<LoggedEntry> {
        let mut entries: Vec<_> = self.log.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| e.created_at);
        entries
    }
}

#[async_trait]
impl VerificationStore for MemoryStore {
    async fn lookup_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<VerifiedArticleRecord>, StoreError> {
        Ok(self
            .articles
            .get(fingerprint)
            .map(|entry| entry.value().clone()))
    }

    async fn append_log_entry(&self, entry: &NewLogEntry) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.log.insert(
            id,
            LoggedEntry {
                id,
                entry: entry.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("articles", &self.articles.len())
            .field("log_entries", &self.log.len())
            .finish()
    }
}
