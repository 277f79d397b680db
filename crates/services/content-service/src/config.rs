//! Content service configuration.

use std::env;

use common::{DatabaseConfig, GenerationConfig, StorageConfig};

/// Content service configuration.
#[derive(Debug, Clone)]
pub struct ContentServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Object storage for uploaded images
    pub storage: StorageConfig,
    /// AI content generation
    pub generation: GenerationConfig,
    /// Timeout for outbound HTTP requests
    pub http_timeout_seconds: u64,
    /// Origin allowed by CORS; any origin when unset
    pub cors_allowed_origin: Option<String>,
    /// Buffered change events per subscriber
    pub realtime_capacity: usize,
    /// Largest accepted upload body
    pub max_upload_bytes: usize,
}

impl ContentServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let generation_defaults = defaults.generation.clone();

        Self {
            database: DatabaseConfig {
                url: env::var("CONTENT_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            storage: StorageConfig {
                endpoint: non_empty_var("STORAGE_ENDPOINT"),
                token: non_empty_var("STORAGE_TOKEN"),
                public_url: non_empty_var("STORAGE_PUBLIC_URL"),
            },
            generation: GenerationConfig {
                endpoint: env::var("AI_ENDPOINT").unwrap_or(generation_defaults.endpoint),
                model: env::var("AI_MODEL").unwrap_or(generation_defaults.model),
                api_key: non_empty_var("AI_API_KEY").or_else(|| non_empty_var("GEMINI_API_KEY")),
                ..generation_defaults
            },
            http_timeout_seconds: env::var("HTTP_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.http_timeout_seconds),
            cors_allowed_origin: non_empty_var("CORS_ALLOWED_ORIGIN"),
            realtime_capacity: env::var("REALTIME_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .filter(|c| *c > 0)
                .unwrap_or(defaults.realtime_capacity),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Default for ContentServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            storage: StorageConfig::default(),
            generation: GenerationConfig::default(),
            http_timeout_seconds: 30,
            cors_allowed_origin: None,
            realtime_capacity: 128,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}
