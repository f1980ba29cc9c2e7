// Cart state container.
//
// Responsibilities
// - Own the last committed cart and hand out snapshots to readers.
// - Run each mutation as one validate-then-commit transaction. A mutex is
//   held from the first read of the cart until the commit, so overlapping
//   callers queue up instead of computing from the same stale amounts.
// - Commit storage first, memory second. A failed write leaves memory at the
//   last committed cart.
// - Turn every failure into exactly one user notification.

use crate::modules::cart::adapters::outbound::lookups::{CatalogLookup, StockLookup};
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::errors::{CartError, CartOperation};
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::core::snapshot;
use crate::modules::cart::use_cases::add_product::decide::{
    AddDecision, append_from_catalog, decide_add,
};
use crate::modules::cart::use_cases::remove_product::decide::decide_remove;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::update_product_amount::decide::{
    UpdateDecision, decide_before_lookup, decide_update,
};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use crate::shared::infrastructure::notifier::Notifier;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

impl From<KeyValueStoreError> for CartError {
    fn from(err: KeyValueStoreError) -> Self {
        CartError::StorageFailed(err.to_string())
    }
}

impl From<snapshot::SnapshotError> for CartError {
    fn from(err: snapshot::SnapshotError) -> Self {
        CartError::StorageFailed(err.to_string())
    }
}

/// Collaborators the store talks to.
#[derive(Clone)]
pub struct CartPorts {
    pub stock: Arc<dyn StockLookup>,
    pub catalog: Arc<dyn CatalogLookup>,
    pub storage: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn Notifier>,
}

pub struct CartStore {
    storage_key: String,
    ports: CartPorts,
    write_lock: Mutex<()>,
    committed: watch::Sender<Arc<Cart>>,
}

impl CartStore {
    /// Reads the persisted cart once. A missing key gives an empty cart and
    /// an undecodable snapshot is logged and discarded; only a storage
    /// backend failure is an error.
    pub async fn load(ports: CartPorts, storage_key: impl Into<String>) -> Result<Self, CartError> {
        let storage_key = storage_key.into();
        let cart = match ports.storage.get(&storage_key).await? {
            None => Cart::new(),
            Some(bytes) => match snapshot::decode(&bytes) {
                Ok(cart) => cart,
                Err(err) => {
                    warn!(key = %storage_key, error = %err, "discarding unreadable cart snapshot");
                    Cart::new()
                }
            },
        };
        info!(key = %storage_key, items = cart.len(), "cart loaded");

        let (committed, _) = watch::channel(Arc::new(cart));
        Ok(Self {
            storage_key,
            ports,
            write_lock: Mutex::new(()),
            committed,
        })
    }

    /// Last committed cart. Never waits on an in-flight mutation.
    pub fn cart(&self) -> Arc<Cart> {
        self.committed.borrow().clone()
    }

    /// Observes every commit.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.committed.subscribe()
    }

    pub async fn add_product(&self, product_id: ProductId) -> Result<Arc<Cart>, CartError> {
        let result = self.try_add_product(product_id).await;
        self.settle(CartOperation::AddProduct, product_id, result)
    }

    pub async fn remove_product(&self, product_id: ProductId) -> Result<Arc<Cart>, CartError> {
        let result = self.try_remove_product(product_id).await;
        self.settle(CartOperation::RemoveProduct, product_id, result)
    }

    pub async fn update_product_amount(
        &self,
        command: UpdateProductAmount,
    ) -> Result<Arc<Cart>, CartError> {
        let result = self.try_update_product_amount(command).await;
        self.settle(
            CartOperation::UpdateProductAmount,
            command.product_id,
            result,
        )
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<Arc<Cart>, CartError> {
        let _guard = self.write_lock.lock().await;
        let current = self.cart();

        let stock = self.ports.stock.stock(product_id).await?;
        let next = match decide_add(&current, product_id, &stock)? {
            AddDecision::Increment(next) => next,
            AddDecision::FetchCatalog => {
                let product = self.ports.catalog.product(product_id).await?;
                append_from_catalog(&current, product_id, product)?
            }
        };
        self.commit(next).await
    }

    async fn try_remove_product(&self, product_id: ProductId) -> Result<Arc<Cart>, CartError> {
        let _guard = self.write_lock.lock().await;
        let next = decide_remove(&self.cart(), product_id)?;
        self.commit(next).await
    }

    async fn try_update_product_amount(
        &self,
        command: UpdateProductAmount,
    ) -> Result<Arc<Cart>, CartError> {
        let _guard = self.write_lock.lock().await;
        let current = self.cart();

        let decision = match decide_before_lookup(&command) {
            Some(decision) => decision,
            None => {
                let stock = self.ports.stock.stock(command.product_id).await?;
                decide_update(&current, &command, &stock)?
            }
        };
        match decision {
            UpdateDecision::Apply(next) => self.commit(next).await,
            UpdateDecision::Ignore(reason) => {
                debug!(product_id = command.product_id, amount = command.amount, ?reason, "amount update ignored");
                Ok(current)
            }
        }
    }

    async fn commit(&self, next: Cart) -> Result<Arc<Cart>, CartError> {
        let bytes = snapshot::encode(&next, Utc::now().timestamp_millis())?;
        self.ports.storage.set(&self.storage_key, bytes).await?;

        let next = Arc::new(next);
        self.committed.send_replace(next.clone());
        info!(items = next.len(), total_quantity = next.total_quantity(), "cart committed");
        Ok(next)
    }

    fn settle(
        &self,
        operation: CartOperation,
        product_id: ProductId,
        result: Result<Arc<Cart>, CartError>,
    ) -> Result<Arc<Cart>, CartError> {
        if let Err(err) = &result {
            warn!(?operation, product_id, error = %err, "cart mutation rejected");
            self.ports.notifier.notify(err.notification(operation));
        }
        result
    }
}
