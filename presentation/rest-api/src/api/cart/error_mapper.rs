use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, description) = match &self {
            CartError::CartNotFound => (StatusCode::NOT_FOUND, "Cart was not found"),
            CartError::ItemNotFound => (StatusCode::NOT_FOUND, "Item is not in the cart"),
            CartError::ItemNotFoundOnProvider => (
                StatusCode::NOT_FOUND,
                "Item does not exist in the catalog",
            ),
            CartError::ItemAlreadyInCart => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Item is already in the cart",
            ),
            CartError::ExternalApi(_) => {
                (StatusCode::BAD_GATEWAY, "Catalog provider is unavailable")
            }
            CartError::Cache(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ),
        };

        (status, Json(ErrorResponse::new(self.code(), description)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::errors::CatalogError;
    use business::domain::errors::CacheError;

    #[test]
    fn should_map_not_found_codes_to_404() {
        for err in [
            CartError::CartNotFound,
            CartError::ItemNotFound,
            CartError::ItemNotFoundOnProvider,
        ] {
            let (status, _) = err.into_error_response();
            assert_eq!(status, StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn should_map_duplicate_item_to_422() {
        let (status, body) = CartError::ItemAlreadyInCart.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.0.code, "err_item_already_in_cart");
    }

    #[test]
    fn should_map_provider_failure_to_502() {
        let (status, body) =
            CartError::ExternalApi(CatalogError::RequestFailed).into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.0.code, "err_external_api_error");
    }

    #[test]
    fn should_hide_cache_details_behind_500() {
        let (status, body) = CartError::Cache(CacheError::Timeout).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.code, "err_cache");
        assert_eq!(body.0.description, "Internal server error");
    }
}
