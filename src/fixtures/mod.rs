//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    cart::ShoppingCart,
    catalog::InMemoryCatalog,
    fixtures::{carts::CartFixture, offers::OffersFixture, products::ProductsFixture},
    offers::Offer,
    products::ProductKey,
    teller::Teller,
};

pub mod carts;
pub mod offers;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown product unit
    #[error("Unknown product unit: {0}")]
    UnknownUnit(String),

    /// Unknown offer type
    #[error("Unknown offer type: {0}")]
    UnknownOfferType(String),

    /// Offer type needs an argument that was not given
    #[error("Missing argument for offer on product: {0}")]
    MissingArgument(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog built from the products fixture
    catalog: InMemoryCatalog,

    /// String key -> catalog key mappings for lookups
    product_keys: FxHashMap<String, ProductKey>,

    /// Loaded offers keyed by product
    offers: FxHashMap<ProductKey, Offer>,

    /// Loaded cart additions in fixture order
    cart_items: Vec<(ProductKey, f64)>,
}

impl Fixture {
    /// Create a new empty fixture with the default base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with a custom base path.
    #[must_use]
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: InMemoryCatalog::new(),
            product_keys: FxHashMap::default(),
            offers: FxHashMap::default(),
            cart_items: Vec::new(),
        }
    }

    /// Load products from a YAML fixture file into the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if a product unit is unknown.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (key, product_fixture) in fixture.products {
            let unit_price = product_fixture.price;
            let product = product_fixture.try_into()?;
            let product_key = self.catalog.add_product(product, unit_price);

            self.product_keys.insert(key, product_key);
        }

        Ok(self)
    }

    /// Load offers from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if an offer cannot be resolved.
    pub fn load_offers(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("offers").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OffersFixture = serde_norway::from_str(&contents)?;

        for offer_fixture in fixture.offers {
            let product_key = self.product_key(&offer_fixture.product)?;
            let offer = offer_fixture.try_into_offer()?;

            self.offers.insert(product_key, offer);
        }

        Ok(self)
    }

    /// Load cart additions from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if a product is unknown.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        for item in fixture.items {
            let product_key = self.product_key(&item.product)?;

            self.cart_items.push((product_key, item.quantity));
        }

        Ok(self)
    }

    /// Load a complete fixture set (products, offers, and a cart with the same name).
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture
            .load_products(name)?
            .load_offers(name)?
            .load_cart(name)?;

        Ok(fixture)
    }

    /// The catalog built from the loaded products.
    #[must_use]
    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }

    /// Get a product key by its fixture key.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product_key(&self, key: &str) -> Result<ProductKey, FixtureError> {
        self.product_keys
            .get(key)
            .copied()
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// A teller over the fixture catalog with the loaded offers registered.
    #[must_use]
    pub fn teller(&self) -> Teller<'_, InMemoryCatalog> {
        let mut teller = Teller::new(&self.catalog);

        for (&product, offer) in &self.offers {
            teller.add_special_offer(offer.offer_type, product, offer.argument);
        }

        teller
    }

    /// A cart built from the loaded additions, in fixture order.
    #[must_use]
    pub fn cart(&self) -> ShoppingCart {
        let mut cart = ShoppingCart::new();

        for &(product, quantity) in &self.cart_items {
            cart.add_item_quantity(product, quantity);
        }

        cart
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
