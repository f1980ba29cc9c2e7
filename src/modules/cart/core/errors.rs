use crate::modules::cart::core::product::ProductId;
use thiserror::Error;

pub const OUT_OF_STOCK_MESSAGE: &str = "Quantidade solicitada fora de estoque";
pub const ADD_PRODUCT_FAILED_MESSAGE: &str = "Erro na adição do produto";
pub const REMOVE_PRODUCT_FAILED_MESSAGE: &str = "Erro na remoção do produto";
pub const UPDATE_AMOUNT_FAILED_MESSAGE: &str = "Erro na alteração de quantidade do produto";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("requested amount {requested} of product {product_id} exceeds stock of {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("product {0} is not in the cart")]
    ProductNotInCart(ProductId),

    #[error("remote lookup failed: {0}")]
    RemoteLookupFailed(String),

    #[error("cart storage failed: {0}")]
    StorageFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl CartError {
    /// The fixed message shown to the user when `operation` fails with this error.
    pub fn notification(&self, operation: CartOperation) -> &'static str {
        match (operation, self) {
            (CartOperation::AddProduct | CartOperation::UpdateProductAmount, Self::OutOfStock { .. }) => {
                OUT_OF_STOCK_MESSAGE
            }
            (CartOperation::AddProduct, _) => ADD_PRODUCT_FAILED_MESSAGE,
            (CartOperation::RemoveProduct, _) => REMOVE_PRODUCT_FAILED_MESSAGE,
            (CartOperation::UpdateProductAmount, _) => UPDATE_AMOUNT_FAILED_MESSAGE,
        }
    }
}
