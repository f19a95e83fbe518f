use crate::domain::catalog::errors::CatalogError;
use crate::domain::errors::CacheError;

pub const CART_NOT_FOUND_CODE: &str = "err_cart_not_found";
pub const ITEM_NOT_FOUND_CODE: &str = "err_item_not_found";
pub const ITEM_NOT_FOUND_ON_PROVIDER_CODE: &str = "err_provider_item_not_found";
pub const ITEM_ALREADY_IN_CART_CODE: &str = "err_item_already_in_cart";
pub const EXTERNAL_API_ERROR_CODE: &str = "err_external_api_error";
pub const CACHE_ERROR_CODE: &str = "err_cache";

/// Outcome of a failed cart operation.
///
/// Transports render these through [`CartError::code`]; the variants carry
/// the collaborator failure as a source where there is one.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    CartNotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.item_not_found_on_provider")]
    ItemNotFoundOnProvider,
    #[error("cart.item_already_in_cart")]
    ItemAlreadyInCart,
    #[error("cart.external_api_error")]
    ExternalApi(#[source] CatalogError),
    #[error("cart.cache_error")]
    Cache(#[from] CacheError),
}

impl CartError {
    /// Machine-readable code from the closed taxonomy.
    pub fn code(&self) -> &'static str {
        match self {
            CartError::CartNotFound => CART_NOT_FOUND_CODE,
            CartError::ItemNotFound => ITEM_NOT_FOUND_CODE,
            CartError::ItemNotFoundOnProvider => ITEM_NOT_FOUND_ON_PROVIDER_CODE,
            CartError::ItemAlreadyInCart => ITEM_ALREADY_IN_CART_CODE,
            CartError::ExternalApi(_) => EXTERNAL_API_ERROR_CODE,
            CartError::Cache(_) => CACHE_ERROR_CODE,
        }
    }

    /// Classifies a failed snapshot read: an absent or unreadable cart is not found.
    pub fn from_cache_read(err: CacheError) -> Self {
        if err.is_missing_value() {
            CartError::CartNotFound
        } else {
            CartError::Cache(err)
        }
    }

    /// Classifies a failed key removal.
    pub fn from_cache_delete(err: CacheError) -> Self {
        match err {
            CacheError::NotFound => CartError::CartNotFound,
            other => CartError::Cache(other),
        }
    }

    /// Classifies a failed single-item lookup made on the caller's behalf.
    pub fn from_catalog_lookup(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound => CartError::ItemNotFoundOnProvider,
            other => CartError::ExternalApi(other),
        }
    }
}
