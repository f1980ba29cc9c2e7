use async_graphql::{Context, Object};

use crate::modules::cart::adapters::inbound::graphql::GqlCart;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CartQuery;

#[Object]
impl CartQuery {
    async fn cart(&self, context: &Context<'_>) -> GqlCart {
        let state = context.data_unchecked::<AppState>();
        GqlCart::from(state.cart.cart().as_ref())
    }
}
