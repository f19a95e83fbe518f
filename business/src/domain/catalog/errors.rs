#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.item_not_found")]
    NotFound,
    #[error("catalog.invalid_price")]
    InvalidPrice,
    #[error("catalog.request_failed")]
    RequestFailed,
    #[error("catalog.unexpected_status: {0}")]
    UnexpectedStatus(u16),
    #[error("catalog.decode_failed")]
    DecodeFailed,
    #[error("catalog.unhealthy: {0}")]
    Unhealthy(String),
}
