/// Cache errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache.not_found")]
    NotFound,
    #[error("cache.serialization")]
    Serialization,
    #[error("cache.connection")]
    Connection,
    #[error("cache.timeout")]
    Timeout,
}

impl CacheError {
    /// Missing keys and undecodable snapshots both mean there is no usable value.
    pub fn is_missing_value(&self) -> bool {
        matches!(self, CacheError::NotFound | CacheError::Serialization)
    }
}
