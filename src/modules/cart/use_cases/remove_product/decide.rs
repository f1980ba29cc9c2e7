use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::errors::CartError;
use crate::modules::cart::core::product::ProductId;

pub fn decide_remove(cart: &Cart, product_id: ProductId) -> Result<Cart, CartError> {
    cart.without(product_id)
        .ok_or(CartError::ProductNotInCart(product_id))
}
