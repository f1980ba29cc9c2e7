use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::cart::use_cases::view_cart::inbound::graphql::CartQuery as QueryRoot;
use crate::modules::cart::use_cases::add_product::inbound::graphql::AddProductMutation;
use crate::modules::cart::use_cases::remove_product::inbound::graphql::RemoveProductMutation;
use crate::modules::cart::use_cases::update_product_amount::inbound::graphql::UpdateProductAmountMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AddProductMutation,
    RemoveProductMutation,
    UpdateProductAmountMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
