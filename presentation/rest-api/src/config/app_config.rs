use super::{
    cache_config::CacheConfig, catalog_config::CatalogConfig, cors_config,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub cache: CacheConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            cache: CacheConfig::from_env(),
            catalog: CatalogConfig::from_env(),
        }
    }
}
