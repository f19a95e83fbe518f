use async_trait::async_trait;

use crate::domain::catalog::model::Item;
use crate::domain::health::model::HealthReport;
use crate::domain::shared::context::RequestContext;
use crate::domain::shared::value_objects::{CartId, ItemId};

use super::errors::CartError;
use super::model::Cart;

#[derive(Debug, Clone)]
pub struct AddItemParams {
    pub cart_id: CartId,
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct ModifyItemParams {
    pub cart_id: CartId,
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct DeleteItemParams {
    pub cart_id: CartId,
    pub item_id: ItemId,
}

/// Cart lifecycle and catalog lookups exposed to transports.
///
/// Carts returned by item operations and by `get_cart` are enriched with
/// catalog names and prices.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn create_cart(&self, ctx: &RequestContext) -> Result<Cart, CartError>;
    async fn get_cart(&self, ctx: &RequestContext, cart_id: &CartId) -> Result<Cart, CartError>;
    async fn add_item_to_cart(
        &self,
        ctx: &RequestContext,
        params: AddItemParams,
    ) -> Result<Cart, CartError>;
    async fn modify_item_in_cart(
        &self,
        ctx: &RequestContext,
        params: ModifyItemParams,
    ) -> Result<Cart, CartError>;
    async fn delete_item_in_cart(
        &self,
        ctx: &RequestContext,
        params: DeleteItemParams,
    ) -> Result<Cart, CartError>;
    async fn delete_all_items_in_cart(
        &self,
        ctx: &RequestContext,
        cart_id: &CartId,
    ) -> Result<Cart, CartError>;
    async fn delete_cart(&self, ctx: &RequestContext, cart_id: &CartId) -> Result<(), CartError>;
    async fn get_available_items(&self, ctx: &RequestContext) -> Result<Vec<Item>, CartError>;
    async fn get_item(&self, ctx: &RequestContext, item_id: &ItemId) -> Result<Item, CartError>;
    /// Never fails: unreachable collaborators show up as `false` flags.
    async fn health(&self, ctx: &RequestContext) -> HealthReport;
}
