use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Header, Path},
    payload::Json,
};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::service::{
    AddItemParams, CartService, DeleteItemParams, ModifyItemParams,
};
use business::domain::shared::value_objects::{CartId, ItemId};

use crate::api::cart::dto::{AddItemRequest, CartResponse, ModifyItemRequest};
use crate::api::context::request_context;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    service: Arc<dyn CartService>,
}

impl CartApi {
    pub fn new(service: Arc<dyn CartService>) -> Self {
        Self { service }
    }
}

/// Cart management API
#[OpenApi]
impl CartApi {
    /// Create a cart
    ///
    /// Creates an empty cart with a freshly generated identifier.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Carts")]
    async fn create_cart(
        &self,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> CreateCartResult {
        let ctx = request_context(request_id.0);
        match self.service.create_cart(&ctx).await {
            Ok(cart) => CreateCartResult::Created(Json(cart.into())),
            Err(err) => CreateCartResult::InternalError(err.into_error_response().1),
        }
    }

    /// Get a cart
    ///
    /// Returns the cart with catalog names and prices for every item.
    #[oai(path = "/cart/:cart_id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart(
        &self,
        cart_id: Path<String>,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> CartResult {
        let ctx = request_context(request_id.0);
        self.service
            .get_cart(&ctx, &CartId::new(cart_id.0))
            .await
            .into()
    }

    /// Delete a cart
    #[oai(path = "/cart/:cart_id", method = "delete", tag = "ApiTags::Carts")]
    async fn delete_cart(
        &self,
        cart_id: Path<String>,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> DeleteCartResult {
        let ctx = request_context(request_id.0);
        match self.service.delete_cart(&ctx, &CartId::new(cart_id.0)).await {
            Ok(()) => DeleteCartResult::Accepted,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCartResult::NotFound(json),
                    _ => DeleteCartResult::InternalError(json),
                }
            }
        }
    }

    /// Add an item to a cart
    ///
    /// Fails with 422 when the item is already in the cart.
    #[oai(path = "/cart/:cart_id/item", method = "post", tag = "ApiTags::Carts")]
    async fn add_item(
        &self,
        cart_id: Path<String>,
        body: Json<AddItemRequest>,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> CartResult {
        let ctx = request_context(request_id.0);
        let params = AddItemParams {
            cart_id: CartId::new(cart_id.0),
            item_id: ItemId::new(body.0.id),
            quantity: body.0.quantity,
        };

        self.service.add_item_to_cart(&ctx, params).await.into()
    }

    /// Change the quantity of an item
    #[oai(
        path = "/cart/:cart_id/item/:item_id",
        method = "put",
        tag = "ApiTags::Carts"
    )]
    async fn modify_item(
        &self,
        cart_id: Path<String>,
        item_id: Path<String>,
        body: Json<ModifyItemRequest>,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> CartResult {
        let ctx = request_context(request_id.0);
        let params = ModifyItemParams {
            cart_id: CartId::new(cart_id.0),
            item_id: ItemId::new(item_id.0),
            quantity: body.0.quantity,
        };

        self.service.modify_item_in_cart(&ctx, params).await.into()
    }

    /// Remove every item from a cart
    #[oai(
        path = "/cart/:cart_id/item/all",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn delete_all_items(
        &self,
        cart_id: Path<String>,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> CartResult {
        let ctx = request_context(request_id.0);
        self.service
            .delete_all_items_in_cart(&ctx, &CartId::new(cart_id.0))
            .await
            .into()
    }

    /// Remove one item from a cart
    ///
    /// The remaining items keep their order.
    #[oai(
        path = "/cart/:cart_id/item/:item_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn delete_item(
        &self,
        cart_id: Path<String>,
        item_id: Path<String>,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> CartResult {
        let ctx = request_context(request_id.0);
        let params = DeleteItemParams {
            cart_id: CartId::new(cart_id.0),
            item_id: ItemId::new(item_id.0),
        };

        self.service.delete_item_in_cart(&ctx, params).await.into()
    }
}

#[derive(ApiResponse)]
pub enum CreateCartResult {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteCartResult {
    #[oai(status = 202)]
    Accepted,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "cart_bad_request")]
pub enum CartResult {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

fn cart_bad_request(err: poem::Error) -> CartResult {
    CartResult::BadRequest(ErrorResponse::bad_request(&err))
}

impl From<Result<Cart, CartError>> for CartResult {
    fn from(result: Result<Cart, CartError>) -> Self {
        match result {
            Ok(cart) => CartResult::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CartResult::NotFound(json),
                    422 => CartResult::UnprocessableEntity(json),
                    502 => CartResult::BadGateway(json),
                    _ => CartResult::InternalError(json),
                }
            }
        }
    }
}
