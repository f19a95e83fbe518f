use std::time::Duration;

use reqwest::{Client, Url};

use business::domain::catalog::errors::CatalogError;
use business::domain::shared::value_objects::ItemId;

pub const DEFAULT_BASE_URL: &str = "https://bootcamp-products.getsandbox.com";

/// Shared catalog HTTP client configuration.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogClient {
    /// Every request made through this client is bounded by `timeout`.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the provider health endpoint URL.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Returns the product listing endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Returns the single product endpoint URL, with the id escaped as one path segment.
    pub fn product_url(&self, id: &ItemId) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.products_url()).map_err(|_| CatalogError::RequestFailed)?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::RequestFailed)?
            .push(id.as_str());
        Ok(url)
    }
}
