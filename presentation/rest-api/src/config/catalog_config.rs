use std::env;
use std::time::Duration;

use catalog::client::DEFAULT_BASE_URL;

use super::env::var_or;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the external catalog API.
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_BASE_URL (default: the public sandbox provider)
    /// - CATALOG_TIMEOUT_SECS: request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CATALOG_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(var_or("CATALOG_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS).max(1)),
        }
    }
}
