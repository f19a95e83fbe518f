use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::shared::value_objects::ItemId;

use super::errors::CatalogError;

/// An item as described by the external catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: BigDecimal,
}

impl Item {
    pub fn new(id: ItemId, name: String, price: BigDecimal) -> Result<Self, CatalogError> {
        if price < BigDecimal::zero() {
            return Err(CatalogError::InvalidPrice);
        }

        Ok(Self { id, name, price })
    }
}
