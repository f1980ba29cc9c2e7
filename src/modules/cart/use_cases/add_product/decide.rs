// Pure decisions for adding one unit of a product.
//
// The stock check always runs first. An existing line item is bumped in
// place; a new product needs a catalog lookup before it can be appended.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::errors::CartError;
use crate::modules::cart::core::product::{CatalogProduct, Product, ProductId, Stock};

#[derive(Debug, Clone, PartialEq)]
pub enum AddDecision {
    Increment(Cart),
    FetchCatalog,
}

pub fn requested_amount(cart: &Cart, product_id: ProductId) -> i64 {
    cart.get(product_id).map_or(0, |product| product.amount) + 1
}

pub fn decide_add(
    cart: &Cart,
    product_id: ProductId,
    stock: &Stock,
) -> Result<AddDecision, CartError> {
    if stock.id != product_id {
        return Err(CartError::RemoteLookupFailed(format!(
            "stock record {} returned for product {product_id}",
            stock.id
        )));
    }
    let requested = requested_amount(cart, product_id);
    if requested > stock.amount {
        return Err(CartError::OutOfStock {
            product_id,
            requested,
            available: stock.amount,
        });
    }
    Ok(cart
        .with_amount(product_id, requested)
        .map_or(AddDecision::FetchCatalog, AddDecision::Increment))
}

pub fn append_from_catalog(
    cart: &Cart,
    product_id: ProductId,
    product: CatalogProduct,
) -> Result<Cart, CartError> {
    if product.id != product_id {
        return Err(CartError::RemoteLookupFailed(format!(
            "catalog product {} returned for product {product_id}",
            product.id
        )));
    }
    cart.with_product(Product::from_catalog(product, 1))
        .ok_or_else(|| CartError::RemoteLookupFailed(format!("product {product_id} already in cart")))
}
