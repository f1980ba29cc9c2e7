use crate::modules::cart::adapters::outbound::lookups_in_memory::InMemoryStorefront;
use crate::modules::cart::core::errors::{CartError, OUT_OF_STOCK_MESSAGE};
use crate::modules::cart::store::{CartPorts, CartStore, DEFAULT_STORAGE_KEY};
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use crate::shared::infrastructure::notifier::in_memory::RecordingNotifier;
use crate::tests::fixtures::products::seeded_storefront;
use std::sync::Arc;

fn ports(storefront: Arc<InMemoryStorefront>, storage: FileKeyValueStore) -> CartPorts {
    CartPorts {
        stock: storefront.clone(),
        catalog: storefront,
        storage: Arc::new(storage),
        notifier: Arc::new(RecordingNotifier::new()),
    }
}

#[tokio::test]
async fn cart_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = Arc::new(seeded_storefront());

    let store = CartStore::load(
        ports(storefront.clone(), FileKeyValueStore::new(dir.path())),
        DEFAULT_STORAGE_KEY,
    )
    .await
    .unwrap();
    store.add_product(1).await.unwrap();
    store.add_product(2).await.unwrap();
    store.add_product(1).await.unwrap();
    store
        .update_product_amount(UpdateProductAmount {
            product_id: 2,
            amount: 4,
        })
        .await
        .unwrap();
    store.remove_product(1).await.unwrap();
    let before_reload = store.cart();
    drop(store);

    let reloaded = CartStore::load(
        ports(storefront, FileKeyValueStore::new(dir.path())),
        DEFAULT_STORAGE_KEY,
    )
    .await
    .unwrap();

    assert_eq!(reloaded.cart(), before_reload);
    assert_eq!(reloaded.cart().len(), 1);
    assert_eq!(reloaded.cart().get(2).map(|product| product.amount), Some(4));
    assert_eq!(
        reloaded
            .cart()
            .get(2)
            .and_then(|product| product.attribute("title"))
            .and_then(|title| title.as_str()),
        Some("Tênis VR Caminhada Confortável Detalhes Couro Masculino")
    );
}

#[tokio::test]
async fn stock_limits_hold_across_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let storefront = Arc::new(seeded_storefront());

    let store = CartStore::load(
        ports(storefront.clone(), FileKeyValueStore::new(dir.path())),
        DEFAULT_STORAGE_KEY,
    )
    .await
    .unwrap();
    // product 3 has two units in stock
    store.add_product(3).await.unwrap();
    store.add_product(3).await.unwrap();
    drop(store);

    let notifier = Arc::new(RecordingNotifier::new());
    let reloaded = CartStore::load(
        CartPorts {
            stock: storefront.clone(),
            catalog: storefront,
            storage: Arc::new(FileKeyValueStore::new(dir.path())),
            notifier: notifier.clone(),
        },
        DEFAULT_STORAGE_KEY,
    )
    .await
    .unwrap();
    let result = reloaded.add_product(3).await;

    assert!(matches!(result, Err(CartError::OutOfStock { .. })));
    assert_eq!(reloaded.cart().get(3).map(|product| product.amount), Some(2));
    assert_eq!(notifier.messages(), vec![OUT_OF_STOCK_MESSAGE]);
}
