use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::cart::cache::CartCache;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::service::{
    AddItemParams, CartService, DeleteItemParams, ModifyItemParams,
};
use crate::domain::catalog::model::Item;
use crate::domain::catalog::services::CatalogService;
use crate::domain::health::model::HealthReport;
use crate::domain::logger::Logger;
use crate::domain::shared::context::RequestContext;
use crate::domain::shared::value_objects::{CartId, ItemId};

/// Cart service backed by the cart cache and the external catalog.
///
/// Holds no cart state of its own. Mutations are read-modify-write against
/// the cache without locking, so concurrent writers on one cart can lose
/// updates.
pub struct CartServiceImpl {
    pub cache: Arc<dyn CartCache>,
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
    /// Lifetime of stored snapshots; `None` keeps them forever.
    pub ttl: Option<Duration>,
}

impl CartServiceImpl {
    async fn load(&self, cart_id: &CartId) -> Result<Cart, CartError> {
        self.cache
            .get(cart_id)
            .await
            .map_err(CartError::from_cache_read)
    }

    async fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        self.cache.save(cart, self.ttl).await?;
        Ok(())
    }

    /// One catalog lookup per line, in order. Any failure fails the whole read.
    async fn enrich(&self, mut cart: Cart) -> Result<Cart, CartError> {
        for item in cart.items.iter_mut() {
            let details = self
                .catalog
                .get_item(&item.id)
                .await
                .map_err(CartError::ExternalApi)?;
            item.enrich(details);
        }
        Ok(cart)
    }

    /// Enrichment after a committed write; the write stays in the cache on failure.
    async fn enrich_persisted(&self, cart: Cart) -> Result<Cart, CartError> {
        let cart_id = cart.id.clone();
        self.enrich(cart).await.inspect_err(|e| {
            self.logger.warn(&format!(
                "Cart {} was saved but could not be enriched: {}",
                cart_id, e
            ));
        })
    }
}

#[async_trait]
impl CartService for CartServiceImpl {
    async fn create_cart(&self, _ctx: &RequestContext) -> Result<Cart, CartError> {
        let cart = Cart::new();
        self.persist(&cart).await?;

        self.logger.info(&format!("Cart created: {}", cart.id));
        Ok(cart)
    }

    async fn get_cart(&self, _ctx: &RequestContext, cart_id: &CartId) -> Result<Cart, CartError> {
        let cart = self.load(cart_id).await?;
        self.enrich(cart).await
    }

    async fn add_item_to_cart(
        &self,
        _ctx: &RequestContext,
        params: AddItemParams,
    ) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding item {} to cart {}",
            params.item_id, params.cart_id
        ));

        let mut cart = self.load(&params.cart_id).await?;
        cart.add_item(params.item_id, params.quantity)?;
        self.persist(&cart).await?;

        self.enrich_persisted(cart).await
    }

    async fn modify_item_in_cart(
        &self,
        _ctx: &RequestContext,
        params: ModifyItemParams,
    ) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of item {} in cart {} to {}",
            params.item_id, params.cart_id, params.quantity
        ));

        let mut cart = self.load(&params.cart_id).await?;
        cart.modify_item(&params.item_id, params.quantity)?;
        self.persist(&cart).await?;

        self.enrich_persisted(cart).await
    }

    async fn delete_item_in_cart(
        &self,
        _ctx: &RequestContext,
        params: DeleteItemParams,
    ) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing item {} from cart {}",
            params.item_id, params.cart_id
        ));

        let mut cart = self.load(&params.cart_id).await?;
        cart.remove_item(&params.item_id)?;
        self.persist(&cart).await?;

        self.enrich_persisted(cart).await
    }

    async fn delete_all_items_in_cart(
        &self,
        _ctx: &RequestContext,
        cart_id: &CartId,
    ) -> Result<Cart, CartError> {
        let mut cart = self.load(cart_id).await?;
        cart.clear();
        self.persist(&cart).await?;

        self.logger.info(&format!("Cart emptied: {}", cart.id));
        Ok(cart)
    }

    async fn delete_cart(&self, _ctx: &RequestContext, cart_id: &CartId) -> Result<(), CartError> {
        self.cache
            .delete(cart_id)
            .await
            .map_err(CartError::from_cache_delete)?;

        self.logger.info(&format!("Cart deleted: {}", cart_id));
        Ok(())
    }

    async fn get_available_items(&self, _ctx: &RequestContext) -> Result<Vec<Item>, CartError> {
        self.catalog
            .get_all_items()
            .await
            .map_err(CartError::ExternalApi)
    }

    async fn get_item(&self, _ctx: &RequestContext, item_id: &ItemId) -> Result<Item, CartError> {
        self.catalog
            .get_item(item_id)
            .await
            .map_err(CartError::from_catalog_lookup)
    }

    async fn health(&self, _ctx: &RequestContext) -> HealthReport {
        let catalog = match self.catalog.health().await {
            Ok(()) => true,
            Err(e) => {
                self.logger.error(&format!("Catalog health check failed: {}", e));
                false
            }
        };
        let cache = self.cache.alive().await;
        if !cache {
            self.logger.error("Cache did not answer the health probe");
        }

        HealthReport {
            service: true,
            catalog,
            cache,
        }
    }
}
