use redis::{Client, IntoConnectionInfo};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("cache.invalid_url")]
    InvalidUrl,
}

/// Configuration for the Redis connection
pub struct RedisConfig {
    pub url: String,
    pub password: Option<String>,
    /// Upper bound for every single cache command.
    pub command_timeout: Duration,
}

impl RedisConfig {
    /// Creates a new Redis configuration with default values
    pub fn new(url: String) -> Self {
        Self {
            url,
            password: None,
            command_timeout: Duration::from_secs(2),
        }
    }
}

/// Builds a Redis client from the configuration.
///
/// Only the URL is validated here; no connection is opened.
pub fn create_redis_client(config: &RedisConfig) -> Result<Client, ConnectionError> {
    let mut info = config
        .url
        .as_str()
        .into_connection_info()
        .map_err(|_| ConnectionError::InvalidUrl)?;

    // An explicit password wins over one embedded in the URL
    if let Some(password) = &config.password {
        info.redis.password = Some(password.clone());
    }

    Client::open(info).map_err(|_| ConnectionError::InvalidUrl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_malformed_url() {
        let result = create_redis_client(&RedisConfig::new("not a url".to_string()));

        assert!(matches!(result.unwrap_err(), ConnectionError::InvalidUrl));
    }

    #[test]
    fn should_build_client_without_reaching_server() {
        let mut config = RedisConfig::new("redis://127.0.0.1:1".to_string());
        config.password = Some("secret".to_string());

        let client = create_redis_client(&config).unwrap();

        assert_eq!(
            client.get_connection_info().redis.password.as_deref(),
            Some("secret")
        );
    }
}
