// Cart value object.
//
// Invariants
// - Every line item has an amount of at least 1.
// - No two line items share an identifier.
// - Insertion order is preserved.
//
// Every operation returns a new Cart; the receiver is never mutated, so a
// committed cart can be shared with readers while the next one is built.

use crate::modules::cart::core::product::{Product, ProductId};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from untrusted items, dropping entries that would break
    /// the invariants. The first entry wins when identifiers repeat.
    pub fn from_items(items: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|product| product.amount >= 1 && seen.insert(product.id))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|product| product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|product| product.amount).sum()
    }

    /// Cart with the matching line item's amount replaced. `None` when the
    /// product is absent or the amount is below 1.
    pub fn with_amount(&self, product_id: ProductId, amount: i64) -> Option<Self> {
        if amount < 1 || !self.contains(product_id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .map(|product| {
                if product.id == product_id {
                    Product {
                        amount,
                        ..product.clone()
                    }
                } else {
                    product.clone()
                }
            })
            .collect();
        Some(Self { items })
    }

    /// Cart with `product` appended. `None` when its identifier is already
    /// present or its amount is below 1.
    pub fn with_product(&self, product: Product) -> Option<Self> {
        if product.amount < 1 || self.contains(product.id) {
            return None;
        }
        let mut items = self.items.clone();
        items.push(product);
        Some(Self { items })
    }

    /// Cart without the matching line item. `None` when the product is absent.
    pub fn without(&self, product_id: ProductId) -> Option<Self> {
        let index = self
            .items
            .iter()
            .position(|product| product.id == product_id)?;
        let mut items = self.items.clone();
        items.remove(index);
        Some(Self { items })
    }
}
