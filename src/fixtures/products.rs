//! Product Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Product, ProductUnit},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Product definitions keyed by fixture name
    pub products: FxHashMap<String, ProductFixture>,
}

/// A product definition in YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Display name
    pub name: String,

    /// Unit the product is sold in (`each` or `kilo`)
    pub unit: String,

    /// Unit price
    pub price: f64,
}

/// Parse a fixture unit string into a [`ProductUnit`].
///
/// # Errors
///
/// Returns an error for units other than `each` and `kilo`.
pub fn parse_unit(unit: &str) -> Result<ProductUnit, FixtureError> {
    match unit {
        "each" => Ok(ProductUnit::Each),
        "kilo" => Ok(ProductUnit::Kilo),
        other => Err(FixtureError::UnknownUnit(other.to_string())),
    }
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        Ok(Self {
            name: fixture.name,
            unit: parse_unit(&fixture.unit)?,
        })
    }
}
