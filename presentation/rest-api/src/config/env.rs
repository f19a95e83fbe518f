use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Reads `key` from the environment, falling back to `default` when unset
/// or unparsable.
pub fn var_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    parse_or(key, env::var(key).ok(), default)
}

pub fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
{
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(config_key = key, config_value = %raw, fallback = %default, "Invalid configuration value");
            default
        }
    }
}
