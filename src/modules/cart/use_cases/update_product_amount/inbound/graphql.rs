use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::adapters::inbound::graphql::{GqlCart, graphql_error};
use crate::modules::cart::core::errors::CartOperation;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateProductAmountMutation;

#[Object]
impl UpdateProductAmountMutation {
    async fn update_product_amount(
        &self,
        context: &Context<'_>,
        product_id: i64,
        amount: i64,
    ) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        state
            .cart
            .update_product_amount(UpdateProductAmount { product_id, amount })
            .await
            .map(|cart| GqlCart::from(cart.as_ref()))
            .map_err(|err| graphql_error(CartOperation::UpdateProductAmount, &err))
    }
}
