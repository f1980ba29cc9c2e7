use crate::modules::cart::core::product::ProductId;
use serde::Deserialize;

/// Target quantity for a line item. `amount` is whatever the caller sent;
/// values below 1 are ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}
