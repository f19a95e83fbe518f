use std::fmt::Debug;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::service::{
    AddItemParams, CartService, DeleteItemParams, ModifyItemParams,
};
use business::domain::catalog::model::Item;
use business::domain::health::model::HealthReport;
use business::domain::shared::context::RequestContext;
use business::domain::shared::value_objects::{CartId, ItemId};

use crate::tracing_logger::TARGET;

/// Wraps a [`CartService`] and emits one structured event per call.
///
/// Results are forwarded untouched.
pub struct TracingCartService {
    inner: Arc<dyn CartService>,
}

impl TracingCartService {
    pub fn new(inner: Arc<dyn CartService>) -> Self {
        Self { inner }
    }

    fn record<T: Debug>(
        method: &'static str,
        ctx: &RequestContext,
        inputs: &dyn Debug,
        started: Instant,
        result: &Result<T, CartError>,
    ) {
        let took_ms = started.elapsed().as_millis() as u64;
        match result {
            Ok(output) => info!(
                target: TARGET,
                service = "cart_service",
                service_method = method,
                service_inputs = ?inputs,
                service_output = ?output,
                service_took_ms = took_ms,
                correlation_id = ctx.correlation_id()
            ),
            Err(err) => warn!(
                target: TARGET,
                service = "cart_service",
                service_method = method,
                service_inputs = ?inputs,
                service_err = %err,
                service_err_code = err.code(),
                service_took_ms = took_ms,
                correlation_id = ctx.correlation_id()
            ),
        }
    }
}

#[async_trait]
impl CartService for TracingCartService {
    async fn create_cart(&self, ctx: &RequestContext) -> Result<Cart, CartError> {
        let started = Instant::now();
        let result = self.inner.create_cart(ctx).await;
        Self::record("create_cart", ctx, &(), started, &result);
        result
    }

    async fn get_cart(&self, ctx: &RequestContext, cart_id: &CartId) -> Result<Cart, CartError> {
        let started = Instant::now();
        let result = self.inner.get_cart(ctx, cart_id).await;
        Self::record("get_cart", ctx, cart_id, started, &result);
        result
    }

    async fn add_item_to_cart(
        &self,
        ctx: &RequestContext,
        params: AddItemParams,
    ) -> Result<Cart, CartError> {
        let started = Instant::now();
        let inputs = params.clone();
        let result = self.inner.add_item_to_cart(ctx, params).await;
        Self::record("add_item_to_cart", ctx, &inputs, started, &result);
        result
    }

    async fn modify_item_in_cart(
        &self,
        ctx: &RequestContext,
        params: ModifyItemParams,
    ) -> Result<Cart, CartError> {
        let started = Instant::now();
        let inputs = params.clone();
        let result = self.inner.modify_item_in_cart(ctx, params).await;
        Self::record("modify_item_in_cart", ctx, &inputs, started, &result);
        result
    }

    async fn delete_item_in_cart(
        &self,
        ctx: &RequestContext,
        params: DeleteItemParams,
    ) -> Result<Cart, CartError> {
        let started = Instant::now();
        let inputs = params.clone();
        let result = self.inner.delete_item_in_cart(ctx, params).await;
        Self::record("delete_item_in_cart", ctx, &inputs, started, &result);
        result
    }

    async fn delete_all_items_in_cart(
        &self,
        ctx: &RequestContext,
        cart_id: &CartId,
    ) -> Result<Cart, CartError> {
        let started = Instant::now();
        let result = self.inner.delete_all_items_in_cart(ctx, cart_id).await;
        Self::record("delete_all_items_in_cart", ctx, cart_id, started, &result);
        result
    }

    async fn delete_cart(&self, ctx: &RequestContext, cart_id: &CartId) -> Result<(), CartError> {
        let started = Instant::now();
        let result = self.inner.delete_cart(ctx, cart_id).await;
        Self::record("delete_cart", ctx, cart_id, started, &result);
        result
    }

    async fn get_available_items(&self, ctx: &RequestContext) -> Result<Vec<Item>, CartError> {
        let started = Instant::now();
        let result = self.inner.get_available_items(ctx).await;
        Self::record("get_available_items", ctx, &(), started, &result);
        result
    }

    async fn get_item(&self, ctx: &RequestContext, item_id: &ItemId) -> Result<Item, CartError> {
        let started = Instant::now();
        let result = self.inner.get_item(ctx, item_id).await;
        Self::record("get_item", ctx, item_id, started, &result);
        result
    }

    async fn health(&self, ctx: &RequestContext) -> HealthReport {
        let started = Instant::now();
        let report = self.inner.health(ctx).await;
        let took_ms = started.elapsed().as_millis() as u64;
        if report.all_alive() {
            info!(
                target: TARGET,
                service = "cart_service",
                service_method = "health",
                service_output = ?report,
                service_took_ms = took_ms,
                correlation_id = ctx.correlation_id()
            );
        } else {
            warn!(
                target: TARGET,
                service = "cart_service",
                service_method = "health",
                service_output = ?report,
                service_took_ms = took_ms,
                correlation_id = ctx.correlation_id()
            );
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Inner {}

        #[async_trait]
        impl CartService for Inner {
            async fn create_cart(&self, ctx: &RequestContext) -> Result<Cart, CartError>;
            async fn get_cart(&self, ctx: &RequestContext, cart_id: &CartId) -> Result<Cart, CartError>;
            async fn add_item_to_cart(&self, ctx: &RequestContext, params: AddItemParams) -> Result<Cart, CartError>;
            async fn modify_item_in_cart(&self, ctx: &RequestContext, params: ModifyItemParams) -> Result<Cart, CartError>;
            async fn delete_item_in_cart(&self, ctx: &RequestContext, params: DeleteItemParams) -> Result<Cart, CartError>;
            async fn delete_all_items_in_cart(&self, ctx: &RequestContext, cart_id: &CartId) -> Result<Cart, CartError>;
            async fn delete_cart(&self, ctx: &RequestContext, cart_id: &CartId) -> Result<(), CartError>;
            async fn get_available_items(&self, ctx: &RequestContext) -> Result<Vec<Item>, CartError>;
            async fn get_item(&self, ctx: &RequestContext, item_id: &ItemId) -> Result<Item, CartError>;
            async fn health(&self, ctx: &RequestContext) -> HealthReport;
        }
    }

    #[tokio::test]
    async fn should_forward_successful_result() {
        let mut inner = MockInner::new();
        inner
            .expect_get_cart()
            .withf(|_, cart_id| cart_id.as_str() == "cart-1")
            .times(1)
            .returning(|_, id| Ok(Cart::from_repository(id.clone(), Vec::new())));

        let svc = TracingCartService::new(Arc::new(inner));
        let cart = svc
            .get_cart(&RequestContext::new("cid"), &CartId::new("cart-1"))
            .await
            .unwrap();

        assert_eq!(cart.id.as_str(), "cart-1");
    }

    #[tokio::test]
    async fn should_forward_error_unchanged() {
        let mut inner = MockInner::new();
        inner
            .expect_add_item_to_cart()
            .times(1)
            .returning(|_, _| Err(CartError::ItemAlreadyInCart));

        let svc = TracingCartService::new(Arc::new(inner));
        let result = svc
            .add_item_to_cart(
                &RequestContext::new("cid"),
                AddItemParams {
                    cart_id: CartId::new("cart-1"),
                    item_id: ItemId::new("1"),
                    quantity: 1,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemAlreadyInCart));
    }

    #[tokio::test]
    async fn should_forward_health_report() {
        let expected = HealthReport {
            service: true,
            catalog: false,
            cache: true,
        };
        let mut inner = MockInner::new();
        inner.expect_health().returning(move |_| expected);

        let svc = TracingCartService::new(Arc::new(inner));

        assert_eq!(svc.health(&RequestContext::new("cid")).await, expected);
    }
}
