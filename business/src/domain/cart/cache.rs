use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::CacheError;
use crate::domain::shared::value_objects::CartId;

use super::model::Cart;

/// Key-value store holding cart snapshots under their cart id.
///
/// The cache is the only source of truth for carts. Implementations must
/// report a missing key as [`CacheError::NotFound`] and an undecodable
/// snapshot as [`CacheError::Serialization`].
#[async_trait]
pub trait CartCache: Send + Sync {
    /// Stores the snapshot. `ttl: None` keeps it without expiry.
    async fn save(&self, cart: &Cart, ttl: Option<Duration>) -> Result<(), CacheError>;
    async fn get(&self, id: &CartId) -> Result<Cart, CacheError>;
    async fn delete(&self, id: &CartId) -> Result<(), CacheError>;
    /// Lightweight reachability probe.
    async fn alive(&self) -> bool;
}
