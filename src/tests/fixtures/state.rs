// AppState wired to in memory adapters, for inbound adapter tests.

use crate::modules::cart::adapters::outbound::lookups_in_memory::InMemoryStorefront;
use crate::modules::cart::store::{CartPorts, CartStore, DEFAULT_STORAGE_KEY};
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shared::infrastructure::notifier::in_memory::RecordingNotifier;
use crate::shell::state::AppState;
use std::sync::Arc;

pub struct TestApp {
    pub state: AppState,
    pub storefront: Arc<InMemoryStorefront>,
    pub storage: Arc<InMemoryKeyValueStore>,
    pub notifier: Arc<RecordingNotifier>,
}

pub async fn make_test_app(
    storefront: InMemoryStorefront,
    storage: InMemoryKeyValueStore,
) -> TestApp {
    let storefront = Arc::new(storefront);
    let storage = Arc::new(storage);
    let notifier = Arc::new(RecordingNotifier::new());
    let ports = CartPorts {
        stock: storefront.clone(),
        catalog: storefront.clone(),
        storage: storage.clone(),
        notifier: notifier.clone(),
    };
    let cart = CartStore::load(ports, DEFAULT_STORAGE_KEY)
        .await
        .expect("cart store failed to load");
    TestApp {
        state: AppState {
            cart: Arc::new(cart),
        },
        storefront,
        storage,
        notifier,
    }
}
