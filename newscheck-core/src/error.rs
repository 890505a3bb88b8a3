use thiserror::Error;

/// Errors raised by a [`VerificationStore`](crate::store::VerificationStore) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store query failed: {0}")]
    Query(String),

    #[error("Store integrity violation: {0}")]
    Integrity(String),
}

/// Errors surfaced by the verification engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Malformed submission: {0}")]
    MalformedSubmission(String),

    #[error("Verified-article store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),
}

/// Rejected fingerprint text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("Fingerprint must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Fingerprint contains non-hex characters")]
    NotHex,
}

pub type Result<T> = std::result::Result<T, EngineError>;
