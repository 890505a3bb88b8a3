//! Application state module
//!
//! Defines shared state accessible across all request handlers.

use std::sync::Arc;

use newscheck_core::{MemoryStore, VerificationEngine, VerificationStore};

use crate::config::Config;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Verification engine (owns a handle to the store)
    pub engine: Arc<VerificationEngine>,
    /// Maximum accepted `content` length in bytes
    pub max_content_size: usize,
    /// Maximum request body length in bytes
    pub body_limit: usize,
}

impl AppState {
    /// Build state around an existing store.
    pub fn new(store: Arc<dyn VerificationStore>, config: &Config) -> Self {
        let engine =
            VerificationEngine::new(store).with_lookup_failure_policy(config.lookup_failure_policy);
        Self {
            engine: Arc::new(engine),
            max_content_size: config.max_content_size(),
            body_limit: config.body_limit(),
        }
    }

    /// State backed by an empty in-memory store.
    pub fn in_memory(config: &Config) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }

    /// The store behind the engine.
    pub fn store(&self) -> &Arc<dyn VerificationStore> {
        self.engine.store()
    }
}
