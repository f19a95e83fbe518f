use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use business::application::cart::service::CartServiceImpl;
use business::domain::cart::cache::CartCache;
use business::domain::cart::service::CartService;
use cache::cart::memory::InMemoryCartCache;
use cache::cart::redis_cache::RedisCartCache;
use cache::connection::create_redis_client;
use catalog::client::CatalogClient;
use catalog::http_catalog::HttpCatalog;
use logger::{TracingCartService, TracingLogger};

use crate::api::cart::routes::CartApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::item::routes::ItemApi;
use crate::config::cache_config::{CacheBackend, CacheConfig};
use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
    pub item_api: ItemApi,
}

impl DependencyContainer {
    pub async fn new(
        cache_config: &CacheConfig,
        catalog_config: &CatalogConfig,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cache = build_cache(cache_config).await?;
        let catalog_client =
            CatalogClient::new(catalog_config.base_url.clone(), catalog_config.timeout)
                .context("failed to build catalog HTTP client")?;
        let catalog = Arc::new(HttpCatalog::new(catalog_client));

        let core: Arc<dyn CartService> = Arc::new(CartServiceImpl {
            cache,
            catalog,
            logger,
            ttl: cache_config.cart_ttl,
        });
        let service: Arc<dyn CartService> = Arc::new(TracingCartService::new(core));

        Ok(Self {
            health_api: HealthApi::new(service.clone()),
            cart_api: CartApi::new(service.clone()),
            item_api: ItemApi::new(service),
        })
    }
}

async fn build_cache(config: &CacheConfig) -> anyhow::Result<Arc<dyn CartCache>> {
    match config.backend {
        CacheBackend::Memory => {
            info!(cache_backend = "memory", "Using in-process cart cache");
            Ok(Arc::new(InMemoryCartCache::new()))
        }
        CacheBackend::Redis => {
            let client = create_redis_client(&config.redis)
                .with_context(|| format!("invalid redis url {}", config.redis.url))?;
            let cache = RedisCartCache::new(client, config.redis.command_timeout);

            // Startup proceeds without redis; the cache reconnects on demand
            match cache.connect().await {
                Ok(_) => info!(cache_backend = "redis", "Connected to cart cache"),
                Err(_) => warn!(
                    cache_backend = "redis",
                    "Cart cache unreachable at startup, serving degraded"
                ),
            }
            Ok(Arc::new(cache))
        }
    }
}
