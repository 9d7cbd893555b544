//! Directory Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DIRECTORY_BASE_URL` - Base URL of the Directory Service (e.g., `https://directory.example.com`)
//!
//! ## Optional
//! - `DIRECTORY_PAGE_SIZE` - Default list page size (default: 10)
//! - `DIRECTORY_SEARCH_DEBOUNCE_MS` - Search debounce window in milliseconds (default: 500)
//! - `DIRECTORY_HTTP_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 30)

use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_PAGE_SIZE: &str = "10";
const DEFAULT_SEARCH_DEBOUNCE_MS: &str = "500";
const DEFAULT_HTTP_TIMEOUT_SECS: &str = "30";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Directory Service configuration.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL of the Directory Service
    pub base_url: Url,
    /// Default page size for customer lists
    pub page_size: u32,
    /// How long to wait after the last keystroke before fetching
    pub debounce: Duration,
    /// HTTP request timeout
    pub http_timeout: Duration,
}

impl DirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DIRECTORY_BASE_URL` is missing or any
    /// variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("DIRECTORY_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("DIRECTORY_BASE_URL".to_string(), e.to_string())
            })?;

        let page_size = get_env_or_default("DIRECTORY_PAGE_SIZE", DEFAULT_PAGE_SIZE)
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("DIRECTORY_PAGE_SIZE".to_string(), e.to_string())
            })?;
        if page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "DIRECTORY_PAGE_SIZE".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let debounce_ms =
            get_env_or_default("DIRECTORY_SEARCH_DEBOUNCE_MS", DEFAULT_SEARCH_DEBOUNCE_MS)
                .parse::<u64>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "DIRECTORY_SEARCH_DEBOUNCE_MS".to_string(),
                        e.to_string(),
                    )
                })?;

        let timeout_secs =
            get_env_or_default("DIRECTORY_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)
                .parse::<u64>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar(
                        "DIRECTORY_HTTP_TIMEOUT_SECS".to_string(),
                        e.to_string(),
                    )
                })?;

        Ok(Self {
            base_url,
            page_size,
            debounce: Duration::from_millis(debounce_ms),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Build a configuration directly, for tests and embedding callers.
    ///
    /// Uses the documented defaults for everything but the base URL.
    #[must_use]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            page_size: 10,
            debounce: Duration::from_millis(500),
            http_timeout: Duration::from_secs(30),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
