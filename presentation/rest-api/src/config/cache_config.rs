use std::env;
use std::time::Duration;

use cache::connection::RedisConfig;
use tracing::warn;

use super::env::var_or;

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl CacheBackend {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("redis") => CacheBackend::Redis,
            Some("memory") => CacheBackend::Memory,
            Some(other) => {
                warn!(config_key = "CACHE_BACKEND", config_value = other, "Unknown cache backend, using redis");
                CacheBackend::Redis
            }
        }
    }
}

/// Cart snapshot store configuration
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub redis: RedisConfig,
    /// `None` keeps carts until they are deleted.
    pub cart_ttl: Option<Duration>,
}

impl CacheConfig {
    /// Environment variables:
    /// - CACHE_BACKEND: "redis" (default) or "memory"
    /// - REDIS_URL: connection string (default: "redis://127.0.0.1:6379")
    /// - REDIS_PASSWORD: optional, overrides the one in the URL
    /// - CACHE_TIMEOUT_MS: per-command timeout (default: 2000)
    /// - CART_TTL_SECONDS: cart expiry, 0 disables it (default: 0)
    pub fn from_env() -> Self {
        let backend = CacheBackend::parse(env::var("CACHE_BACKEND").ok().as_deref());

        let mut redis = RedisConfig::new(
            env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string()),
        );
        redis.password = env::var("REDIS_PASSWORD").ok().filter(|p| !p.is_empty());
        redis.command_timeout =
            Duration::from_millis(var_or("CACHE_TIMEOUT_MS", DEFAULT_TIMEOUT_MS).max(1));

        Self {
            backend,
            redis,
            cart_ttl: ttl_from_seconds(var_or("CART_TTL_SECONDS", 0)),
        }
    }
}

fn ttl_from_seconds(seconds: u64) -> Option<Duration> {
    (seconds > 0).then(|| Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_redis_backend() {
        assert_eq!(CacheBackend::parse(None), CacheBackend::Redis);
        assert_eq!(CacheBackend::parse(Some("unknown")), CacheBackend::Redis);
    }

    #[test]
    fn should_select_memory_backend_case_insensitively() {
        assert_eq!(CacheBackend::parse(Some(" Memory ")), CacheBackend::Memory);
    }

    #[test]
    fn should_treat_zero_ttl_as_no_expiry() {
        assert_eq!(ttl_from_seconds(0), None);
        assert_eq!(ttl_from_seconds(90), Some(Duration::from_secs(90)));
    }
}
