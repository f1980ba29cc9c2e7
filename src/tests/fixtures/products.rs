// Shared test fixtures for products, stock, and a seeded storefront.

use crate::modules::cart::adapters::outbound::lookups_in_memory::InMemoryStorefront;
use crate::modules::cart::core::product::{CatalogProduct, Product, ProductId, Stock};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    products: Vec<CatalogProduct>,
    stock: Vec<Stock>,
}

pub fn catalog_product(id: ProductId, title: &str) -> CatalogProduct {
    CatalogProduct::new(id)
        .with_attribute("title", title)
        .with_attribute("price", 99.9)
        .with_attribute("image", format!("https://cdn.example.com/products/{id}.jpg"))
}

/// Storefront seeded from `json/catalog.json`: products 1, 2, 3 with stock 3, 5, 2.
pub fn seeded_storefront() -> InMemoryStorefront {
    let fixture: CatalogFixture =
        serde_json::from_str(include_str!("json/catalog.json")).unwrap();
    let storefront = fixture
        .stock
        .into_iter()
        .fold(InMemoryStorefront::new(), InMemoryStorefront::with_stock);
    fixture
        .products
        .into_iter()
        .fold(storefront, InMemoryStorefront::with_catalog)
}

pub struct ProductBuilder {
    inner: Product,
}

impl ProductBuilder {
    pub fn new(id: ProductId) -> Self {
        Self {
            inner: Product::from_catalog(catalog_product(id, &format!("Product {id}")), 1),
        }
    }

    pub fn attribute(mut self, name: &str, v: impl Into<Value>) -> Self {
        self.inner.attributes.insert(name.to_string(), v.into());
        self
    }

    pub fn amount(mut self, v: i64) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn build(self) -> Product {
        self.inner
    }
}

#[cfg(test)]
mod product_fixtures_tests {
    use super::*;
    use crate::modules::cart::adapters::outbound::lookups::{CatalogLookup, StockLookup};
    use rstest::rstest;

    #[rstest]
    fn builder_defaults_to_one_unit() {
        let product = ProductBuilder::new(4).build();
        assert_eq!(product.id, 4);
        assert_eq!(product.attribute("title"), Some(&Value::from("Product 4")));
        assert_eq!(product.amount, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn seeded_storefront_serves_the_json_catalog() {
        let storefront = seeded_storefront();
        assert_eq!(storefront.stock(2).await.unwrap().amount, 5);
        let product = storefront.product(3).await.unwrap();
        assert_eq!(product.attributes["price"], 219.9);
    }
}
