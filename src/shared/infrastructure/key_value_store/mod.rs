use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Byte-oriented storage addressed by string keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KeyValueStoreError>;
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), KeyValueStoreError>;
}

pub mod file;
pub mod in_memory;
