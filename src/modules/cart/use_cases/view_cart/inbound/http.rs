use axum::{extract::State, response::IntoResponse};

use crate::modules::cart::adapters::inbound::http::cart_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    cart_response(&state.cart.cart())
}
