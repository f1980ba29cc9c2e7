//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_BIND_ADDR` - Listen address (default: 0.0.0.0:8080)
//! - `CART_API_BASE_URL` - Storefront API serving `/stock/{id}` and `/products/{id}` (default: http://localhost:3333)
//! - `CART_STORAGE_DIR` - Directory holding the persisted cart (default: ./.cart-data)
//! - `CART_STORAGE_KEY` - Key of the cart snapshot (default: @RocketShoes:cart)
//! - `CART_API_TIMEOUT_MS` - Per request timeout for the storefront API (default: none)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::modules::cart::store::DEFAULT_STORAGE_KEY;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_STORAGE_DIR: &str = "./.cart-data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    Invalid(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub api_base_url: String,
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub api_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr = var("CART_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid("CART_BIND_ADDR".into(), e.to_string()))?;

        let api_base_url = var("CART_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "CART_API_BASE_URL".into(),
                "must start with http:// or https://".into(),
            ));
        }

        let api_timeout = var("CART_API_TIMEOUT_MS")
            .map(|raw| {
                raw.parse::<u64>()
                    .map(Duration::from_millis)
                    .map_err(|e| ConfigError::Invalid("CART_API_TIMEOUT_MS".into(), e.to_string()))
            })
            .transpose()?;

        Ok(Self {
            bind_addr,
            api_base_url,
            storage_dir: var("CART_STORAGE_DIR")
                .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string())
                .into(),
            storage_key: var("CART_STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            api_timeout,
        })
    }
}
