//! Storage backends for the verification engine.
//!
//! The server talks to PostgreSQL when `DATABASE_URL` is set and falls back
//! to the in-memory store otherwise.

mod error;
mod postgres;

use std::sync::Arc;

use newscheck_core::{MemoryStore, VerificationStore};

use crate::config::Config;

pub use error::PgStoreError;
pub use postgres::PostgresVerificationStore;

/// Build the store selected by the configuration.
///
/// Connection or migration failures are returned so `main` can refuse to
/// start rather than silently serving from an empty store.
pub async fn build_store(config: &Config) -> Result<Arc<dyn VerificationStore>, PgStoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresVerificationStore::new(
                url,
                config.database_max_connections,
                config.database_min_connections,
            )
            .await?;
            tracing::info!(
                max_connections = config.database_max_connections,
                "Using PostgreSQL verification store"
            );
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set: using in-memory store (no curated articles, log is not persisted)"
            );
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
