// Response shapes shared by the cart HTTP handlers.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::errors::{CartError, CartOperation};
use crate::modules::cart::core::product::Product;

#[derive(Debug, Serialize)]
pub struct CartBody<'a> {
    pub items: &'a [Product],
    pub total_quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

pub fn cart_response(cart: &Cart) -> Response {
    (
        StatusCode::OK,
        Json(CartBody {
            items: cart.items(),
            total_quantity: cart.total_quantity(),
        }),
    )
        .into_response()
}

pub fn status_for(err: &CartError) -> StatusCode {
    match err {
        CartError::OutOfStock { .. } => StatusCode::CONFLICT,
        CartError::ProductNotInCart(_) => StatusCode::NOT_FOUND,
        CartError::RemoteLookupFailed(_) => StatusCode::BAD_GATEWAY,
        CartError::StorageFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(operation: CartOperation, err: &CartError) -> Response {
    (
        status_for(err),
        Json(ErrorBody {
            error: err.notification(operation),
        }),
    )
        .into_response()
}
