use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::cart::adapters::inbound::http::{cart_response, error_response};
use crate::modules::cart::core::errors::CartOperation;
use crate::modules::cart::core::product::ProductId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    match state.cart.remove_product(product_id).await {
        Ok(cart) => cart_response(&cart),
        Err(err) => error_response(CartOperation::RemoveProduct, &err),
    }
}
