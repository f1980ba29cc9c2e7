use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use cart_store::modules::cart::adapters::outbound::storefront_api_http::HttpStorefrontApi;
use cart_store::modules::cart::store::{CartPorts, CartStore};
use cart_store::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use cart_store::shared::infrastructure::notifier::tracing_notifier::TracingNotifier;
use cart_store::shell::config::AppConfig;
use cart_store::shell::graphql::build_schema;
use cart_store::shell::http::app;
use cart_store::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let api = Arc::new(
        HttpStorefrontApi::new(&config.api_base_url, config.api_timeout)
            .context("failed to build storefront API client")?,
    );
    let ports = CartPorts {
        stock: api.clone(),
        catalog: api,
        storage: Arc::new(FileKeyValueStore::new(&config.storage_dir)),
        notifier: Arc::new(TracingNotifier),
    };
    let cart = CartStore::load(ports, config.storage_key.clone())
        .await
        .context("failed to load the persisted cart")?;

    let state = AppState {
        cart: Arc::new(cart),
    };
    let schema = build_schema(state.clone());
    let router = app(state, schema);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Cart API: http://{}/cart", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
