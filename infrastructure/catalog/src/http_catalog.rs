use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::error;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Item;
use business::domain::catalog::services::CatalogService;
use business::domain::shared::value_objects::ItemId;

use crate::client::CatalogClient;
use crate::dto::{ExternalHealth, ExternalItem, ExternalResponse, HEALTH_STATUS_OK};

pub struct HttpCatalog {
    client: CatalogClient,
}

impl HttpCatalog {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: impl reqwest::IntoUrl,
    ) -> Result<Option<T>, CatalogError> {
        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                error!(catalog_error = %e, "Catalog request failed");
                CatalogError::RequestFailed
            })?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<Option<T>, CatalogError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus(status.as_u16()));
        }

        let body: ExternalResponse<T> = response
            .json()
            .await
            .map_err(|_| CatalogError::DecodeFailed)?;
        Ok(body.data)
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn health(&self) -> Result<(), CatalogError> {
        let health: Option<ExternalHealth> = self.fetch(self.client.health_url()).await?;
        let status = health.map(|h| h.status).unwrap_or_default();

        if status != HEALTH_STATUS_OK {
            error!(external_api_status = %status, "Catalog reports unhealthy");
            return Err(CatalogError::Unhealthy(status));
        }
        Ok(())
    }

    async fn get_item(&self, id: &ItemId) -> Result<Item, CatalogError> {
        let item: Option<ExternalItem> = self.fetch(self.client.product_url(id)?).await?;

        match item {
            Some(item) if !item.id.is_empty() => item.into_domain(),
            _ => Err(CatalogError::NotFound),
        }
    }

    async fn get_all_items(&self) -> Result<Vec<Item>, CatalogError> {
        let items: Option<Vec<ExternalItem>> = self.fetch(self.client.products_url()).await?;

        items
            .unwrap_or_default()
            .into_iter()
            .map(ExternalItem::into_domain)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::str::FromStr;
    use std::time::Duration;

    fn catalog(server: &MockServer) -> HttpCatalog {
        HttpCatalog::new(CatalogClient::new(server.base_url(), Duration::from_secs(2)).unwrap())
    }

    #[tokio::test]
    async fn should_report_healthy_when_status_ok() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(200)
                    .json_body(json!({"meta": {"version": "1"}, "data": {"status": "OK"}}));
            })
            .await;

        assert!(catalog(&server).health().await.is_ok());
    }

    #[tokio::test]
    async fn should_report_unhealthy_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/health");
                then.status(200)
                    .json_body(json!({"meta": {"version": "1"}, "data": {"status": "DEGRADED"}}));
            })
            .await;

        let result = catalog(&server).health().await;

        assert!(matches!(result.unwrap_err(), CatalogError::Unhealthy(s) if s == "DEGRADED"));
    }

    #[tokio::test]
    async fn should_fetch_single_item() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/7");
                then.status(200).json_body(json!({
                    "meta": {"version": "1"},
                    "data": {"id": "7", "name": "Olive Oil", "price": "8.40"}
                }));
            })
            .await;

        let item = catalog(&server).get_item(&ItemId::new("7")).await.unwrap();

        assert_eq!(item.id.as_str(), "7");
        assert_eq!(item.name, "Olive Oil");
        assert_eq!(item.price, BigDecimal::from_str("8.40").unwrap());
    }

    #[tokio::test]
    async fn should_map_404_to_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/999");
                then.status(404);
            })
            .await;

        let result = catalog(&server).get_item(&ItemId::new("999")).await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }

    #[tokio::test]
    async fn should_map_empty_data_to_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/5");
                then.status(200)
                    .json_body(json!({"meta": {"version": "1"}, "data": {}}));
            })
            .await;

        let result = catalog(&server).get_item(&ItemId::new("5")).await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_server_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(503);
            })
            .await;

        let result = catalog(&server).get_all_items().await;

        assert!(matches!(
            result.unwrap_err(),
            CatalogError::UnexpectedStatus(503)
        ));
    }

    #[tokio::test]
    async fn should_list_all_items() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200).json_body(json!({
                    "meta": {"version": "1"},
                    "data": [
                        {"id": "1", "name": "Apple", "price": "0.50"},
                        {"id": "2", "name": "Bread", "price": "2.10"}
                    ]
                }));
            })
            .await;

        let items = catalog(&server).get_all_items().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Bread");
    }

    #[tokio::test]
    async fn should_fail_listing_when_a_price_is_invalid() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200).json_body(json!({
                    "meta": {"version": "1"},
                    "data": [{"id": "1", "name": "Apple", "price": "n/a"}]
                }));
            })
            .await;

        let result = catalog(&server).get_all_items().await;

        assert!(matches!(result.unwrap_err(), CatalogError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_fail_when_provider_unreachable() {
        let client = CatalogClient::new(
            "http://127.0.0.1:9".to_string(),
            Duration::from_millis(200),
        )
        .unwrap();

        let result = HttpCatalog::new(client).health().await;

        assert!(matches!(result.unwrap_err(), CatalogError::RequestFailed));
    }
}
