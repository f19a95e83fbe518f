use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Catalog item identifier
    pub id: String,
    /// Requested quantity
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct ModifyItemRequest {
    /// New quantity for the item
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub id: String,
    /// Catalog name, present once the cart has been enriched
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    pub quantity: u32,
    /// Catalog unit price
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            quantity: item.quantity,
            price: item.price.and_then(|price| price.to_f64()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartView {
    pub id: String,
    pub items: Vec<CartItemResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub cart: CartView,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            cart: CartView {
                id: cart.id.to_string(),
                items: cart.items.into_iter().map(Into::into).collect(),
            },
        }
    }
}
