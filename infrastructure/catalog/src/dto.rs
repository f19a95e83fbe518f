use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Item;
use business::domain::shared::value_objects::ItemId;

pub const HEALTH_STATUS_OK: &str = "OK";

/// Provider response envelope: `{"meta": {...}, "data": ...}`.
#[derive(Debug, Deserialize)]
pub struct ExternalResponse<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct ExternalHealth {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExternalItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Decimal encoded as a string, e.g. `"12.50"`.
    #[serde(default)]
    pub price: String,
}

impl ExternalItem {
    pub fn into_domain(self) -> Result<Item, CatalogError> {
        if self.id.is_empty() {
            return Err(CatalogError::DecodeFailed);
        }
        let price =
            BigDecimal::from_str(self.price.trim()).map_err(|_| CatalogError::InvalidPrice)?;

        Item::new(ItemId::new(self.id), self.name, price)
    }
}
