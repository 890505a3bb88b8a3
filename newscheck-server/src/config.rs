//! Server configuration module
//!
//! Handles loading configuration from environment variables with sensible defaults.

use std::net::SocketAddr;

use newscheck_core::LookupFailurePolicy;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port (default: 3000)
    pub port: u16,
    /// Server host (default: 127.0.0.1)
    pub host: [u8; 4],
    /// Allowed CORS origins, comma-separated (default: allow all in dev)
    pub allowed_origins: Option<Vec<String>>,
    /// Request body limit in MB (default: 50)
    pub body_limit_mb: usize,
    /// Maximum size of the `content` field in MB (default: 25)
    pub max_content_size_mb: usize,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Enable rate limiting (default: false for tests, true when loaded from env)
    pub rate_limit_enabled: bool,
    /// Rate limit: requests per second (default: 10)
    pub rate_limit_per_sec: u64,
    /// Rate limit: burst size (default: 20)
    pub rate_limit_burst: u32,
    /// PostgreSQL URL; the in-memory store is used when unset
    pub database_url: Option<String>,
    /// Database connection pool maximum connections (default: 20)
    pub database_max_connections: u32,
    /// Database connection pool minimum connections (default: 2)
    pub database_min_connections: u32,
    /// What to do when the verified-article lookup fails (default: degrade)
    pub lookup_failure_policy: LookupFailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            host: [127, 0, 0, 1],
            allowed_origins: None, // None = allow all (dev mode)
            body_limit_mb: 50,
            max_content_size_mb: 25,
            timeout_secs: 30,
            rate_limit_enabled: false, // Disabled by default (for tests)
            rate_limit_per_sec: 10,
            rate_limit_burst: 20,
            database_url: None,
            database_max_connections: 20,
            database_min_connections: 2,
            lookup_failure_policy: LookupFailurePolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let host = var("HOST")
            .map(|h| {
                if h == "0.0.0.0" {
                    [0, 0, 0, 0]
                } else {
                    [127, 0, 0, 1]
                }
            })
            .unwrap_or(defaults.host);

        let allowed_origins = var("ALLOWED_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let body_limit_mb = var("BODY_LIMIT_MB")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.body_limit_mb);

        let max_content_size_mb = var("MAX_CONTENT_SIZE_MB")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_content_size_mb);

        let timeout_secs = var("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs);

        let rate_limit_per_sec = var("RATE_LIMIT_PER_SEC")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_per_sec);

        let rate_limit_burst = var("RATE_LIMIT_BURST")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_burst);

        // Rate limiting enabled by default in production, can be disabled with RATE_LIMIT_ENABLED=false
        let rate_limit_enabled = var("RATE_LIMIT_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let database_url = var("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let database_max_connections = var("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.database_max_connections);

        let database_min_connections = var("DATABASE_MIN_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.database_min_connections);

        let lookup_failure_policy = match var("LOOKUP_FAILURE_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "Ignoring invalid LOOKUP_FAILURE_POLICY");
                defaults.lookup_failure_policy
            }),
            None => defaults.lookup_failure_policy,
        };

        Self {
            port,
            host,
            allowed_origins,
            body_limit_mb,
            max_content_size_mb,
            timeout_secs,
            rate_limit_enabled,
            rate_limit_per_sec,
            rate_limit_burst,
            database_url,
            database_max_connections,
            database_min_connections,
            lookup_failure_policy,
        }
    }

    /// Get socket address from config
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }

    /// Maximum accepted `content` length in bytes
    pub fn max_content_size(&self) -> usize {
        self.max_content_size_mb * 1024 * 1024
    }

    /// Maximum request body length in bytes
    pub fn body_limit(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert!(config.database_url.is_none());
        assert!(!config.rate_limit_enabled);
        assert_eq!(
            config.lookup_failure_policy,
            LookupFailurePolicy::DegradeToMiss
        );
    }

    #[test]
    fn test_empty_environment_enables_rate_limiting() {
        let config = config_from(&[]);
        assert!(config.rate_limit_enabled);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_environment_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("HOST", "0.0.0.0"),
            ("ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("MAX_CONTENT_SIZE_MB", "2"),
            ("RATE_LIMIT_ENABLED", "FALSE"),
            ("DATABASE_URL", "postgres://localhost/newscheck"),
            ("LOOKUP_FAILURE_POLICY", "fail"),
        ]);

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(
            config.allowed_origins,
            Some(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
        assert_eq!(config.max_content_size(), 2 * 1024 * 1024);
        assert!(!config.rate_limit_enabled);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/newscheck")
        );
        assert_eq!(
            config.lookup_failure_policy,
            LookupFailurePolicy::FailRequest
        );
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("DATABASE_URL", "   "),
            ("LOOKUP_FAILURE_POLICY", "panic"),
        ]);
        assert_eq!(config.port, 3000);
        assert!(config.database_url.is_none());
        assert_eq!(
            config.lookup_failure_policy,
            LookupFailurePolicy::DegradeToMiss
        );
    }
}
