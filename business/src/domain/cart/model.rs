use bigdecimal::BigDecimal;

use crate::domain::catalog::model::Item;
use crate::domain::shared::value_objects::{CartId, ItemId};

use super::errors::CartError;

/// A line of a cart.
///
/// Only `id` and `quantity` are persisted. `name` and `price` are filled in
/// from the catalog each time the cart is read.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: ItemId,
    pub quantity: u32,
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
}

impl CartItem {
    pub fn new(id: ItemId, quantity: u32) -> Self {
        Self {
            id,
            quantity,
            name: None,
            price: None,
        }
    }

    /// Copies the display fields of the matching catalog item.
    pub fn enrich(&mut self, item: Item) {
        self.name = Some(item.name);
        self.price = Some(item.price);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<CartItem>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// A new empty cart with a freshly generated id.
    pub fn new() -> Self {
        Self {
            id: CartId::generate(),
            items: Vec::new(),
        }
    }

    /// Constructor for data already persisted in the cache (no validation).
    pub fn from_repository(id: CartId, items: Vec<CartItem>) -> Self {
        Self { id, items }
    }

    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == item_id)
    }

    /// Appends a new line. Item ids are unique within a cart.
    pub fn add_item(&mut self, item_id: ItemId, quantity: u32) -> Result<(), CartError> {
        if self.contains(&item_id) {
            return Err(CartError::ItemAlreadyInCart);
        }

        self.items.push(CartItem::new(item_id, quantity));
        Ok(())
    }

    /// Overwrites the quantity of the first line matching `item_id`.
    pub fn modify_item(&mut self, item_id: &ItemId, quantity: u32) -> Result<(), CartError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == item_id)
            .ok_or(CartError::ItemNotFound)?;

        item.quantity = quantity;
        Ok(())
    }

    /// Removes the first line matching `item_id`, keeping the order of the rest.
    pub fn remove_item(&mut self, item_id: &ItemId) -> Result<CartItem, CartError> {
        let idx = self
            .items
            .iter()
            .position(|item| &item.id == item_id)
            .ok_or(CartError::ItemNotFound)?;

        Ok(self.items.remove(idx))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
