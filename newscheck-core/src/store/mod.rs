//! Storage port for the verification engine.
//!
//! The engine reads curated articles and appends request log entries
//! through [`VerificationStore`]. It never writes to the article table.
//!
//! Backends:
//! - [`MemoryStore`]: in-process, used by tests, the CLI and as the server
//!   fallback when no database is configured.
//! - PostgreSQL: provided by the server crate.

mod memory;

pub use memory::{LoggedEntry, MemoryStore};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::fingerprint::Fingerprint;
use crate::submission::{ContentSubmission, ContentType};
use crate::verdict::{Classification, Verdict, VerdictDetails, VerificationResult};

/// A curated article known to be genuine. At most one per fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedArticleRecord {
    pub fingerprint: Fingerprint,
    pub title_en: String,
    pub title_ta: String,
    pub source_name_en: String,
    pub source_name_ta: String,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub original_url: Option<String>,
}

/// One request log row, before the store assigns its identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLogEntry {
    pub content_type: ContentType,
    /// Submitted text, for text submissions only.
    pub content_text: Option<String>,
    /// Compact reference for media submissions; the blob itself is not kept.
    pub content_ref: Option<String>,
    pub content_fingerprint: Fingerprint,
    pub result: VerificationResult,
    pub classification: Classification,
    pub confidence: f64,
    pub details: VerdictDetails,
}

impl NewLogEntry {
    pub fn new(
        submission: &ContentSubmission,
        fingerprint: &Fingerprint,
        verdict: &Verdict,
    ) -> Self {
        let (content_text, content_ref) = if submission.content_type.is_media() {
            (None, Some(submission.media_reference(fingerprint)))
        } else {
            (Some(submission.content.clone()), None)
        };

        Self {
            content_type: submission.content_type,
            content_text,
            content_ref,
            content_fingerprint: fingerprint.clone(),
            result: verdict.result(),
            classification: verdict.classification(),
            confidence: verdict.confidence(),
            details: verdict.details(),
        }
    }
}

/// Narrow port between the engine and persisted storage.
///
/// Implementations must be thread-safe; one store instance is shared by
/// every in-flight request.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    /// Find the curated article with this fingerprint.
    async fn lookup_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<VerifiedArticleRecord>, StoreError>;

    /// Append a request log entry and return its store-assigned identifier.
    async fn append_log_entry(&self, entry: &NewLogEntry) -> Result<Uuid, StoreError>;

    /// Check that the backend is reachable.
    async fn check_health(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Short backend name for health reports and logs.
    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_text_entry_keeps_text() {
        let submission = ContentSubmission::text("Breaking!! aliens landed");
        let fp = Fingerprint::of(&submission.content);
        let verdict = classify(&submission.content);
        let entry = NewLogEntry::new(&submission, &fp, &verdict);

        assert_eq!(entry.content_type, ContentType::Text);
        assert_eq!(entry.content_text.as_deref(), Some("Breaking!! aliens landed"));
        assert!(entry.content_ref.is_none());
        assert_eq!(entry.result, VerificationResult::Fake);
        assert_eq!(entry.details, verdict.details());
    }

    #[test]
    fn test_media_entry_keeps_reference_only() {
        let blob = format!("data:video/mp4;base64,{}", "AAAA".repeat(1024));
        let submission = ContentSubmission::new(ContentType::Video, blob.clone());
        let fp = Fingerprint::of(&blob);
        let verdict = classify(&blob);
        let entry = NewLogEntry::new(&submission, &fp, &verdict);

        assert!(entry.content_text.is_none());
        let reference = entry.content_ref.unwrap();
        assert!(reference.starts_with("video/mp4;sha256="));
        assert!(reference.len() < 100);
    }

    #[test]
    fn test_article_record_from_json() {
        let fp = Fingerprint::of("article");
        let json = format!(
            r#"{{"fingerprint":"{fp}","title_en":"T","title_ta":"த","source_name_en":"S","source_name_ta":"ச","published_date":"2024-05-01"}}"#
        );
        let record: VerifiedArticleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.fingerprint, fp);
        assert_eq!(record.published_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(record.original_url.is_none());
    }
}
