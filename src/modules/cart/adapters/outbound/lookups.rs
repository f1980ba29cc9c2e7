use crate::modules::cart::core::errors::CartError;
use crate::modules::cart::core::product::{CatalogProduct, ProductId, Stock};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<LookupError> for CartError {
    fn from(err: LookupError) -> Self {
        CartError::RemoteLookupFailed(err.to_string())
    }
}

#[async_trait]
pub trait StockLookup: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, LookupError>;
}

#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, LookupError>;
}
