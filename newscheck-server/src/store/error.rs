//! Error types for the PostgreSQL verification store.

use newscheck_core::StoreError;
use thiserror::Error;

/// Errors that can occur when setting up or querying the PostgreSQL store.
#[derive(Debug, Error)]
pub enum PgStoreError {
    /// Database connection failed
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration execution failed
    #[error("Migration error: {0}")]
    Migration(String),

    /// SQL query execution failed
    #[error("Query error: {0}")]
    Query(String),

    /// Stored data could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<sqlx::Error> for PgStoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection(e.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::Serialization(e.to_string())
            }
            _ => Self::Query(e.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for PgStoreError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(e.to_string())
    }
}

impl From<PgStoreError> for StoreError {
    fn from(e: PgStoreError) -> Self {
        match e {
            PgStoreError::Connection(msg) => StoreError::Unavailable(msg),
            PgStoreError::Serialization(msg) => StoreError::Integrity(msg),
            PgStoreError::Migration(msg) | PgStoreError::Query(msg) => StoreError::Query(msg),
        }
    }
}
