// In memory storefront serving both stock and catalog lookups.
//
// Unknown identifiers answer like the remote API would: a 404 status error.
// `toggle_offline` and `set_delay_ms` let tests simulate outages and slow
// responses.

use crate::modules::cart::adapters::outbound::lookups::{CatalogLookup, LookupError, StockLookup};
use crate::modules::cart::core::product::{CatalogProduct, ProductId, Stock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStorefront {
    stock: RwLock<HashMap<ProductId, Stock>>,
    products: RwLock<HashMap<ProductId, CatalogProduct>>,
    is_offline: AtomicBool,
    delay_ms: AtomicU64,
    stock_lookups: AtomicUsize,
    catalog_lookups: AtomicUsize,
}

impl InMemoryStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, product: CatalogProduct, available: i64) -> Self {
        let stock = Stock {
            id: product.id,
            amount: available,
        };
        self.with_stock(stock).with_catalog(product)
    }

    pub fn with_catalog(mut self, product: CatalogProduct) -> Self {
        self.products.get_mut().insert(product.id, product);
        self
    }

    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock.get_mut().insert(stock.id, stock);
        self
    }

    pub async fn set_stock(&self, product_id: ProductId, available: i64) {
        self.stock.write().await.insert(
            product_id,
            Stock {
                id: product_id,
                amount: available,
            },
        );
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::SeqCst);
    }

    pub fn stock_lookups(&self) -> usize {
        self.stock_lookups.load(Ordering::SeqCst)
    }

    pub fn catalog_lookups(&self) -> usize {
        self.catalog_lookups.load(Ordering::SeqCst)
    }

    async fn simulate_network(&self) -> Result<(), LookupError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(LookupError::Transport("Storefront API offline".into()));
        }
        Ok(())
    }
}

fn not_found(path: String) -> LookupError {
    LookupError::Status {
        status: 404,
        url: path,
    }
}

#[async_trait::async_trait]
impl StockLookup for InMemoryStorefront {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, LookupError> {
        self.stock_lookups.fetch_add(1, Ordering::SeqCst);
        self.simulate_network().await?;
        self.stock
            .read()
            .await
            .get(&product_id)
            .copied()
            .ok_or_else(|| not_found(format!("/stock/{product_id}")))
    }
}

#[async_trait::async_trait]
impl CatalogLookup for InMemoryStorefront {
    async fn product(&self, product_id: ProductId) -> Result<CatalogProduct, LookupError> {
        self.catalog_lookups.fetch_add(1, Ordering::SeqCst);
        self.simulate_network().await?;
        self.products
            .read()
            .await
            .get(&product_id)
            .cloned()
            .ok_or_else(|| not_found(format!("/products/{product_id}")))
    }
}
