use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::adapters::inbound::graphql::{GqlCart, graphql_error};
use crate::modules::cart::core::errors::CartOperation;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddProductMutation;

#[Object]
impl AddProductMutation {
    async fn add_product(&self, context: &Context<'_>, product_id: i64) -> GqlResult<GqlCart> {
        let state = context.data_unchecked::<AppState>();
        state
            .cart
            .add_product(product_id)
            .await
            .map(|cart| GqlCart::from(cart.as_ref()))
            .map_err(|err| graphql_error(CartOperation::AddProduct, &err))
    }
}
