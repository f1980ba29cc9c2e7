// Pure decisions for setting a line item's amount.
//
// Order of checks
// 1. amount below 1: ignored, nothing shown to the user.
// 2. stock depleted (amount <= 0): ignored, nothing shown to the user.
// 3. amount above stock: OutOfStock.
// 4. product absent from the cart: ProductNotInCart.
// 5. otherwise the amount is replaced, all other items untouched.
//
// Only check 1 runs before the stock lookup.

use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::errors::CartError;
use crate::modules::cart::core::product::Stock;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    AmountBelowOne,
    StockDepleted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateDecision {
    Ignore(Ignored),
    Apply(Cart),
}

/// `None` means the stock record is needed to decide.
pub fn decide_before_lookup(command: &UpdateProductAmount) -> Option<UpdateDecision> {
    (command.amount < 1).then_some(UpdateDecision::Ignore(Ignored::AmountBelowOne))
}

pub fn decide_update(
    cart: &Cart,
    command: &UpdateProductAmount,
    stock: &Stock,
) -> Result<UpdateDecision, CartError> {
    if let Some(decision) = decide_before_lookup(command) {
        return Ok(decision);
    }
    if stock.id != command.product_id {
        return Err(CartError::RemoteLookupFailed(format!(
            "stock record {} returned for product {}",
            stock.id, command.product_id
        )));
    }
    if stock.amount <= 0 {
        return Ok(UpdateDecision::Ignore(Ignored::StockDepleted));
    }
    if command.amount > stock.amount {
        return Err(CartError::OutOfStock {
            product_id: command.product_id,
            requested: command.amount,
            available: stock.amount,
        });
    }
    cart.with_amount(command.product_id, command.amount)
        .map(UpdateDecision::Apply)
        .ok_or(CartError::ProductNotInCart(command.product_id))
}
