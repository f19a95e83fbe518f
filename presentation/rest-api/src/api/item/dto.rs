use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::catalog::model::Item;

#[derive(Debug, Clone, Object)]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            price: item.price.to_f64().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    pub item: ItemView,
}

#[derive(Debug, Clone, Object)]
pub struct ItemsResponse {
    pub items: Vec<ItemView>,
}
