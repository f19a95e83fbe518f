use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartItem};
use business::domain::errors::CacheError;
use business::domain::shared::value_objects::{CartId, ItemId};

/// Stored snapshot of a cart. Catalog fields are never persisted.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CartEntity {
    pub id: String,
    #[serde(default)]
    pub items: Vec<CartItemEntity>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItemEntity {
    pub id: String,
    pub quantity: u32,
}

impl CartEntity {
    pub fn from_domain(cart: &Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            items: cart
                .items
                .iter()
                .map(|item| CartItemEntity {
                    id: item.id.to_string(),
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            CartId::new(self.id),
            self.items
                .into_iter()
                .map(|item| CartItem::new(ItemId::new(item.id), item.quantity))
                .collect(),
        )
    }

    pub fn encode(cart: &Cart) -> Result<String, CacheError> {
        serde_json::to_string(&Self::from_domain(cart)).map_err(|_| CacheError::Serialization)
    }

    pub fn decode(raw: &[u8]) -> Result<Cart, CacheError> {
        serde_json::from_slice::<Self>(raw)
            .map(Self::into_domain)
            .map_err(|_| CacheError::Serialization)
    }
}
