//! Products

use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// How quantities of a product are measured at the till
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductUnit {
    /// Sold by the piece
    Each,

    /// Sold by weight
    Kilo,
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Product unit
    pub unit: ProductUnit,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }
}
