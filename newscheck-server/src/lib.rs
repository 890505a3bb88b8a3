//! NewsCheck Server Library - REST API components for news content verification
//!
//! This library exposes the server components for use in integration tests.
//! The main binary uses these same components.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::{ApiError, CLIENT_ERROR_MESSAGE};
pub use openapi::ApiDoc;
pub use routes::{create_router, create_router_with_state};
pub use state::AppState;
pub use store::{build_store, PgStoreError, PostgresVerificationStore};
