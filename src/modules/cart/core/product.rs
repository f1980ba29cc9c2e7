use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type ProductId = i64;

/// Catalog fields the cart carries without interpreting (title, price, image...).
pub type Attributes = Map<String, Value>;

/// A line item in the cart. Catalog fields are carried as-is; only `id` and
/// `amount` mean anything to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Attributes,
    pub amount: i64,
}

/// Product record as served by the remote catalog. Everything except `id` is
/// kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Units available for a product, as served by the remote stock service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i64,
}

impl Product {
    /// Line item carrying every catalog attribute. A catalog `amount` field is
    /// overridden by `amount`.
    pub fn from_catalog(product: CatalogProduct, amount: i64) -> Self {
        let mut attributes = product.attributes;
        attributes.remove("amount");
        Self {
            id: product.id,
            attributes,
            amount,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

impl CatalogProduct {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}
