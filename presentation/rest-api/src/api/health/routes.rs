use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, param::Header, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::cart::service::CartService;
use business::domain::health::model::HealthReport;

use crate::api::context::request_context;
use crate::api::tags::ApiTags;

/// Liveness of one dependency
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ServiceHealth {
    pub name: String,
    pub alive: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// The service itself, the catalog provider and the cart cache
    pub services: Vec<ServiceHealth>,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

impl HealthCheckResponse {
    fn from_report(report: HealthReport) -> Self {
        let service = |name: &str, alive: bool| ServiceHealth {
            name: name.to_string(),
            alive,
        };

        Self {
            services: vec![
                service("service", report.service),
                service("external api", report.catalog),
                service("cache", report.cache),
            ],
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    service: Arc<dyn CartService>,
}

impl Api {
    pub fn new(service: Arc<dyn CartService>) -> Self {
        Self { service }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Always answers 200 while the process is up. Dependency outages show
    /// up as `alive: false` entries rather than as an error status.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(
        &self,
        #[oai(name = "X-Request-ID")] request_id: Header<Option<String>>,
    ) -> Json<HealthCheckResponse> {
        let ctx = request_context(request_id.0);
        let report = self.service.health(&ctx).await;
        Json(HealthCheckResponse::from_report(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_each_dependency_independently() {
        let report = HealthReport {
            service: true,
            catalog: false,
            cache: true,
        };

        let response = HealthCheckResponse::from_report(report);

        let flags: Vec<(&str, bool)> = response
            .services
            .iter()
            .map(|s| (s.name.as_str(), s.alive))
            .collect();
        assert_eq!(
            flags,
            vec![("service", true), ("external api", false), ("cache", true)]
        );
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
