use async_trait::async_trait;

use crate::domain::shared::value_objects::ItemId;

use super::errors::CatalogError;
use super::model::Item;

/// Service port for the external item catalog.
///
/// The catalog owns item names and prices; carts only reference items by id.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// `Ok(())` when the provider is reachable and reports itself healthy.
    async fn health(&self) -> Result<(), CatalogError>;
    async fn get_item(&self, id: &ItemId) -> Result<Item, CatalogError>;
    async fn get_all_items(&self) -> Result<Vec<Item>, CatalogError>;
}
