use async_graphql::{ErrorExtensions, Json, SimpleObject};

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::errors::{CartError, CartOperation};
use crate::modules::cart::core::product::{Attributes, Product};

#[derive(SimpleObject, Clone)]
pub struct GqlProduct {
    pub id: i64,
    pub amount: i64,
    /// Catalog fields as served by the storefront.
    pub attributes: Json<Attributes>,
}

#[derive(SimpleObject, Clone)]
pub struct GqlCart {
    pub items: Vec<GqlProduct>,
    pub total_quantity: i64,
}

impl From<&Product> for GqlProduct {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            amount: p.amount,
            attributes: Json(p.attributes.clone()),
        }
    }
}

impl From<&Cart> for GqlCart {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(Into::into).collect(),
            total_quantity: cart.total_quantity(),
        }
    }
}

fn error_code(err: &CartError) -> &'static str {
    match err {
        CartError::OutOfStock { .. } => "OUT_OF_STOCK",
        CartError::ProductNotInCart(_) => "PRODUCT_NOT_IN_CART",
        CartError::RemoteLookupFailed(_) => "REMOTE_LOOKUP_FAILED",
        CartError::StorageFailed(_) => "STORAGE_FAILED",
    }
}

/// GraphQL error carrying the user notification as message and a stable code.
pub fn graphql_error(operation: CartOperation, err: &CartError) -> async_graphql::Error {
    let code = error_code(err);
    async_graphql::Error::new(err.notification(operation)).extend_with(|_, e| e.set("code", code))
}
