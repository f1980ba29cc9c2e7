// reqwest client for the storefront REST API.
//
// Endpoints
// - GET {base}/stock/{id}    -> {"id": n, "amount": n}
// - GET {base}/products/{id} -> {"id": n, ...} (other fields kept as-is)
//
// Any transport failure, non 2xx status, or undecodable body is a LookupError.
// No retries.

use crate::modules::cart::adapters::outbound::lookups::{CatalogLookup, LookupError, StockLookup};
use crate::modules::cart::core::product::{CatalogProduct, ProductId, Stock};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: Client,
    base_url: String,
}

impl HttpStorefrontApi {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LookupError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| LookupError::Backend(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LookupError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| LookupError::Transport(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| LookupError::Malformed(err.to_string()))
    }
}

#[async_trait::async_trait]
impl StockLookup for HttpStorefrontApi {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, LookupError> {
        self.get_json(&format!("/stock/{product_id}")).await
    }
}

#[async_trait::async_trait]
impl CatalogLookup for HttpStorefrontApi {
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, LookupError> {
        self.get_json(&format!("/products/{product_id}")).await
    }
}
