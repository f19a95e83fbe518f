use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use business::domain::cart::cache::CartCache;
use business::domain::cart::model::Cart;
use business::domain::errors::CacheError;
use business::domain::shared::value_objects::CartId;

use super::entity::CartEntity;

/// Process-local cart cache for single-instance runs and tests.
///
/// Snapshots go through the same JSON encoding as the Redis store and
/// expire lazily on access.
#[derive(Default)]
pub struct InMemoryCartCache {
    entries: DashMap<String, (String, Option<Instant>)>,
}

impl InMemoryCartCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw payload if present and not expired.
    fn live_entry(&self, key: &str) -> Option<String> {
        let entry = self.entries.get(key)?;
        let (payload, expires_at) = entry.value();
        if expires_at.is_some_and(|at| at <= Instant::now()) {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(payload.clone())
    }

    /// Overwrites the raw payload under `key`, bypassing encoding.
    pub fn insert_raw(&self, key: &str, payload: &str) {
        self.entries
            .insert(key.to_string(), (payload.to_string(), None));
    }
}

#[async_trait]
impl CartCache for InMemoryCartCache {
    async fn save(&self, cart: &Cart, ttl: Option<Duration>) -> Result<(), CacheError> {
        let payload = CartEntity::encode(cart)?;
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.entries
            .insert(cart.id.to_string(), (payload, expires_at));
        Ok(())
    }

    async fn get(&self, id: &CartId) -> Result<Cart, CacheError> {
        let raw = self.live_entry(id.as_str()).ok_or(CacheError::NotFound)?;
        CartEntity::decode(raw.as_bytes())
    }

    async fn delete(&self, id: &CartId) -> Result<(), CacheError> {
        self.live_entry(id.as_str()).ok_or(CacheError::NotFound)?;
        self.entries.remove(id.as_str());
        Ok(())
    }

    async fn alive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartItem;
    use business::domain::shared::value_objects::ItemId;

    fn sample_cart() -> Cart {
        Cart::from_repository(
            CartId::new("cart-1"),
            vec![CartItem::new(ItemId::new("1"), 2)],
        )
    }

    #[tokio::test]
    async fn should_return_saved_cart() {
        let cache = InMemoryCartCache::new();
        cache.save(&sample_cart(), None).await.unwrap();

        let cart = cache.get(&CartId::new("cart-1")).await.unwrap();

        assert_eq!(cart, sample_cart());
    }

    #[tokio::test]
    async fn should_report_missing_key() {
        let cache = InMemoryCartCache::new();

        let result = cache.get(&CartId::new("nope")).await;

        assert!(matches!(result.unwrap_err(), CacheError::NotFound));
    }

    #[tokio::test]
    async fn should_expire_entries_after_ttl() {
        let cache = InMemoryCartCache::new();
        cache
            .save(&sample_cart(), Some(Duration::from_millis(10)))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;

        let result = cache.get(&CartId::new("cart-1")).await;
        assert!(matches!(result.unwrap_err(), CacheError::NotFound));
    }

    #[tokio::test]
    async fn should_fail_delete_when_key_absent() {
        let cache = InMemoryCartCache::new();
        cache.save(&sample_cart(), None).await.unwrap();

        assert!(cache.delete(&CartId::new("cart-1")).await.is_ok());
        let second = cache.delete(&CartId::new("cart-1")).await;

        assert!(matches!(second.unwrap_err(), CacheError::NotFound));
    }

    #[tokio::test]
    async fn should_report_garbled_payload_as_serialization_error() {
        let cache = InMemoryCartCache::new();
        cache.insert_raw("cart-1", "garbage");

        let result = cache.get(&CartId::new("cart-1")).await;

        assert!(matches!(result.unwrap_err(), CacheError::Serialization));
    }
}
