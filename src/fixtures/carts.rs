//! Cart Fixtures

use serde::Deserialize;

/// Wrapper for cart additions in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Additions in the order they are made
    pub items: Vec<CartItemFixture>,
}

/// A single cart addition in YAML
#[derive(Debug, Deserialize)]
pub struct CartItemFixture {
    /// Fixture key of the added product
    pub product: String,

    /// Quantity added
    pub quantity: f64,
}
