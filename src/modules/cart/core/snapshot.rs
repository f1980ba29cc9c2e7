// Persisted cart layout.
//
// Current layout: {"version": 1, "saved_at": <unix millis>, "items": [Product, ...]}
// Legacy layout:  [Product, ...] (read only, rewritten on the next commit)

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::product::Product;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed cart snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported cart snapshot version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Serialize)]
struct CartSnapshotRef<'a> {
    version: u32,
    saved_at: i64,
    items: &'a Cart,
}

#[derive(Deserialize)]
struct CartSnapshot {
    version: u32,
    items: Vec<Product>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCart {
    Versioned(CartSnapshot),
    Legacy(Vec<Product>),
}

pub fn encode(cart: &Cart, saved_at: i64) -> Result<Vec<u8>, SnapshotError> {
    let snapshot = CartSnapshotRef {
        version: SNAPSHOT_VERSION,
        saved_at,
        items: cart,
    };
    Ok(serde_json::to_vec(&snapshot)?)
}

/// Decodes either layout. Items are sanitized through `Cart::from_items`.
pub fn decode(bytes: &[u8]) -> Result<Cart, SnapshotError> {
    match serde_json::from_slice::<StoredCart>(bytes)? {
        StoredCart::Versioned(snapshot) if snapshot.version == SNAPSHOT_VERSION => {
            Ok(Cart::from_items(snapshot.items))
        }
        StoredCart::Versioned(snapshot) => Err(SnapshotError::UnsupportedVersion(snapshot.version)),
        StoredCart::Legacy(items) => Ok(Cart::from_items(items)),
    }
}
