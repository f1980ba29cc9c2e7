use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::cart::use_cases::add_product::inbound::http as add_http;
use crate::modules::cart::use_cases::remove_product::inbound::http as remove_http;
use crate::modules::cart::use_cases::update_product_amount::inbound::http as update_http;
use crate::modules::cart::use_cases::view_cart::inbound::http as view_http;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cart", get(view_http::handle))
        .route(
            "/cart/products/{product_id}",
            post(add_http::handle)
                .delete(remove_http::handle)
                .patch(update_http::handle),
        )
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, with tracing and CORS.
pub fn app(state: AppState, schema: AppSchema) -> Router {
    router(state)
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
