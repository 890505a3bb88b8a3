//! NewsCheck Core - content verification engine
//!
//! Decides whether a piece of content (free text, or a data-URL image/video
//! treated as an opaque string) looks like genuine news.
//!
//! # Pipeline
//!
//! 1. **Fingerprint** the content (case- and whitespace-insensitive SHA-256).
//! 2. **Look up** the fingerprint in the store of curated, verified articles.
//! 3. On a miss, **classify** the raw content with a fixed-weight lexical
//!    heuristic.
//! 4. **Log** the request through the storage port and return the verdict.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use newscheck_core::{ContentSubmission, MemoryStore, VerificationEngine, VerdictResponse};
//!
//! # async fn example() -> newscheck_core::Result<()> {
//! let engine = VerificationEngine::new(Arc::new(MemoryStore::new()));
//! let verified = engine
//!     .verify(&ContentSubmission::text("BREAKING!! You won't believe this"))
//!     .await?;
//!
//! let response = VerdictResponse::from(&verified);
//! assert_eq!(response.result.as_str(), "fake");
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod store;
pub mod submission;
pub mod verdict;

// Re-export main types for convenience
pub use classifier::{analyze, classify, Signals};
pub use engine::{LookupFailurePolicy, VerificationEngine};
pub use error::{EngineError, FingerprintError, Result, StoreError};
pub use fingerprint::{fingerprint, Fingerprint, FINGERPRINT_HEX_LEN};
pub use store::{MemoryStore, NewLogEntry, VerificationStore, VerifiedArticleRecord};
pub use submission::{ContentSubmission, ContentType};
pub use verdict::{
    Classification, FakeOrigin, Locale, Verdict, VerdictDetails, VerdictResponse,
    VerificationResult, VerifiedVerdict, CACHED_CONFIDENCE,
};
