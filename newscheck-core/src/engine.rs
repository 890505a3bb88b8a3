//! Verification engine: assembles verdicts and records requests.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::classifier::classify;
use crate::error::{EngineError, Result};
use crate::fingerprint::Fingerprint;
use crate::store::{NewLogEntry, VerificationStore, VerifiedArticleRecord};
use crate::submission::ContentSubmission;
use crate::verdict::{Verdict, VerifiedVerdict};

/// What to do when the verified-article lookup itself fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupFailurePolicy {
    /// Log the failure and classify heuristically, as if there was no match.
    #[default]
    DegradeToMiss,
    /// Abort the request with [`EngineError::StoreUnavailable`].
    FailRequest,
}

impl FromStr for LookupFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrade" | "degrade_to_miss" => Ok(Self::DegradeToMiss),
            "fail" | "fail_request" => Ok(Self::FailRequest),
            other => Err(format!(
                "unknown lookup failure policy '{other}' (expected degrade or fail)"
            )),
        }
    }
}

/// Single entry point for content verification.
///
/// Cheap to share: clone the `Arc` or wrap the engine itself in one.
#[derive(Clone)]
pub struct VerificationEngine {
    store: Arc<dyn VerificationStore>,
    lookup_failure_policy: LookupFailurePolicy,
}

impl VerificationEngine {
    pub fn new(store: Arc<dyn VerificationStore>) -> Self {
        Self {
            store,
            lookup_failure_policy: LookupFailurePolicy::default(),
        }
    }

    pub fn with_lookup_failure_policy(mut self, policy: LookupFailurePolicy) -> Self {
        self.lookup_failure_policy = policy;
        self
    }

    pub fn store(&self) -> &Arc<dyn VerificationStore> {
        &self.store
    }

    pub fn lookup_failure_policy(&self) -> LookupFailurePolicy {
        self.lookup_failure_policy
    }

    /// Verify one submission.
    ///
    /// A cache hit wins over the heuristic. The request is logged on a
    /// best-effort basis: if the append fails the verdict is still returned,
    /// with no `id`.
    #[instrument(
        skip_all,
        fields(content_type = %submission.content_type, content_len = submission.content.len())
    )]
    pub async fn verify(&self, submission: &ContentSubmission) -> Result<VerifiedVerdict> {
        let fingerprint = Fingerprint::of(&submission.content);
        debug!(fingerprint = fingerprint.short(), "Computed fingerprint");

        let verdict = match self.lookup(&fingerprint).await? {
            Some(record) => {
                info!(
                    fingerprint = fingerprint.short(),
                    source = %record.source_name_en,
                    "Matched verified article"
                );
                Verdict::from_cache(record)
            }
            None => classify(&submission.content),
        };

        let entry = NewLogEntry::new(submission, &fingerprint, &verdict);
        let id = match self.store.append_log_entry(&entry).await {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(
                    error = %e,
                    backend = self.store.backend_name(),
                    "Failed to log verification request; returning verdict without id"
                );
                None
            }
        };

        info!(
            fingerprint = fingerprint.short(),
            result = %verdict.result(),
            classification = %verdict.classification(),
            confidence = verdict.confidence(),
            cached = verdict.is_cached(),
            "Verification complete"
        );

        Ok(VerifiedVerdict {
            id,
            fingerprint,
            verdict,
        })
    }

    /// Look up a curated article, applying the configured failure policy.
    async fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<VerifiedArticleRecord>> {
        match self.store.lookup_by_fingerprint(fingerprint).await {
            Ok(record) => Ok(record),
            Err(e) => match self.lookup_failure_policy {
                LookupFailurePolicy::DegradeToMiss => {
                    warn!(
                        error = %e,
                        backend = self.store.backend_name(),
                        "Verified-article lookup failed; falling back to heuristic classification"
                    );
                    Ok(None)
                }
                LookupFailurePolicy::FailRequest => Err(EngineError::StoreUnavailable(e)),
            },
        }
    }
}

impl fmt::Debug for VerificationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationEngine")
            .field("store", &self.store.backend_name())
            .field("lookup_failure_policy", &self.lookup_failure_policy)
            .finish()
    }
}
