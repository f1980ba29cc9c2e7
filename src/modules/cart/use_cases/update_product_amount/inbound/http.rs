use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cart::adapters::inbound::http::{cart_response, error_response};
use crate::modules::cart::core::errors::CartOperation;
use crate::modules::cart::core::product::ProductId;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProductAmountBody {
    pub amount: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<UpdateProductAmountBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateProductAmount {
        product_id,
        amount: body.amount,
    };

    match state.cart.update_product_amount(command).await {
        Ok(cart) => cart_response(&cart),
        Err(err) => error_response(CartOperation::UpdateProductAmount, &err),
    }
}

#[cfg(test)]
mod update_product_amount_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::patch,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::cart::core::cart::Cart;
    use crate::modules::cart::core::snapshot;
    use crate::modules::cart::store::DEFAULT_STORAGE_KEY;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::products::{ProductBuilder, seeded_storefront};
    use crate::tests::fixtures::state::make_test_app;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/cart/products/{product_id}", patch(handle))
            .with_state(state)
    }

    fn storage_with_product_one() -> InMemoryKeyValueStore {
        let cart = Cart::from_items(vec![ProductBuilder::new(1).build()]);
        InMemoryKeyValueStore::new().with_entry(
            DEFAULT_STORAGE_KEY,
            snapshot::encode(&cart, 0).unwrap(),
        )
    }

    async fn send(state: AppState, uri: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(
                Request::patch(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_new_amount() {
        // seeded stock for product 1 is 3
        let test_app = make_test_app(seeded_storefront(), storage_with_product_one()).await;

        let (status, json) = send(test_app.state, "/cart/products/1", r#"{"amount":3}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"][0]["amount"], 3);
    }

    #[tokio::test]
    async fn it_should_return_200_unchanged_for_an_amount_below_one() {
        let test_app = make_test_app(seeded_storefront(), storage_with_product_one()).await;

        let (status, json) = send(test_app.state, "/cart/products/1", r#"{"amount":0}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"][0]["amount"], 1);
        assert!(test_app.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn it_should_return_409_above_the_stock() {
        let test_app = make_test_app(seeded_storefront(), storage_with_product_one()).await;

        let (status, json) = send(test_app.state, "/cart/products/1", r#"{"amount":4}"#).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"], "Quantidade solicitada fora de estoque");
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_product_not_in_the_cart() {
        let test_app = make_test_app(seeded_storefront(), storage_with_product_one()).await;

        let (status, json) = send(test_app.state, "/cart/products/2", r#"{"amount":1}"#).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Erro na alteração de quantidade do produto");
    }

    #[tokio::test]
    async fn it_should_return_502_when_the_stock_service_is_down() {
        let test_app = make_test_app(seeded_storefront(), storage_with_product_one()).await;
        test_app.storefront.toggle_offline();

        let (status, _) = send(test_app.state, "/cart/products/1", r#"{"amount":2}"#).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let test_app = make_test_app(seeded_storefront(), storage_with_product_one()).await;

        let (status, _) = send(test_app.state, "/cart/products/1", "not-json").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
