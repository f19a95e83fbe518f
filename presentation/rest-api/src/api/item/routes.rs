use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Header, Path},
    payload::Json,
};

use business::domain::cart::service::CartService;
use business::domain::shared::value_objects::ItemId;

use crate::api::context::request_context;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ItemResponse, ItemsResponse};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    service: Arc<dyn CartService>,
}

impl ItemApi {
    pub fn new(service: Arc<dyn CartService>) -> Self {
        Self { service }
    }
}

/// Catalog lookup API
#[OpenApi]
impl ItemApi {
    /// List available items
    ///
    /// Returns the full catalog from the external provider.
    #[oai(path = "/items/available", method = "get", tag = "ApiTags::Items")]
    async fn get_available_items(
        &self,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> GetAvailableItemsResult {
        let ctx = request_context(request_id.0);
        match self.service.get_available_items(&ctx).await {
            Ok(items) => GetAvailableItemsResult::Ok(Json(ItemsResponse {
                items: items.into_iter().map(Into::into).collect(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => GetAvailableItemsResult::BadGateway(json),
                    _ => GetAvailableItemsResult::InternalError(json),
                }
            }
        }
    }

    /// Get a catalog item
    #[oai(path = "/items/:item_id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(
        &self,
        item_id: Path<String>,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> GetItemResult {
        let ctx = request_context(request_id.0);
        match self.service.get_item(&ctx, &ItemId::new(item_id.0)).await {
            Ok(item) => GetItemResult::Ok(Json(ItemResponse { item: item.into() })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemResult::NotFound(json),
                    502 => GetItemResult::BadGateway(json),
                    _ => GetItemResult::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAvailableItemsResult {
    #[oai(status = 200)]
    Ok(Json<ItemsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetItemResult {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
