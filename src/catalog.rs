//! Catalog

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Product, ProductKey};

/// Catalog Errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No unit price is registered for a product that is being priced
    #[error("Missing unit price for product")]
    MissingUnitPrice(ProductKey),
}

/// Unit price lookup for products at the till
pub trait Catalog {
    /// Get the unit price for a product, if the catalog knows it.
    fn unit_price(&self, product: ProductKey) -> Option<f64>;
}

/// In-memory catalog holding product definitions and their unit prices
#[derive(Debug)]
pub struct InMemoryCatalog {
    /// Product definitions with generated keys
    products: SlotMap<ProductKey, Product>,

    /// Unit prices keyed by product
    unit_prices: FxHashMap<ProductKey, f64>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: SlotMap::with_key(),
            unit_prices: FxHashMap::default(),
        }
    }

    /// Add a product with its unit price, returning the generated key.
    pub fn add_product(&mut self, product: Product, unit_price: f64) -> ProductKey {
        let key = self.products.insert(product);

        self.unit_prices.insert(key, unit_price);

        key
    }

    /// Get a product definition by key.
    #[must_use]
    pub fn product(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn unit_price(&self, product: ProductKey) -> Option<f64> {
        self.unit_prices.get(&product).copied()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}
