//! Shopping Carts

use rustc_hash::FxHashMap;

use crate::{
    catalog::{Catalog, CatalogError},
    discounts::discount_for_offer,
    offers::Offer,
    products::ProductKey,
    receipt::Receipt,
};

/// One addition of a product to a cart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductQuantity {
    /// The added product
    pub product: ProductKey,

    /// Quantity added, fractional for weighed products
    pub quantity: f64,
}

/// A shopping cart accumulating quantities per product
///
/// The cart keeps two views of its contents in sync: the append log of
/// individual additions, which receipt lines are priced from, and the
/// cumulative quantity per product, which offers are computed from.
#[derive(Debug, Default)]
pub struct ShoppingCart {
    /// Additions in the order they were made
    items: Vec<ProductQuantity>,

    /// Cumulative quantity per product
    product_quantities: FxHashMap<ProductKey, f64>,
}

impl ShoppingCart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single item of a product.
    pub fn add_item(&mut self, product: ProductKey) {
        self.add_item_quantity(product, 1.0);
    }

    /// Add a quantity of a product.
    ///
    /// Quantities are not validated: a zero or negative quantity is allowed
    /// and simply accumulates arithmetically.
    pub fn add_item_quantity(&mut self, product: ProductKey, quantity: f64) {
        self.items.push(ProductQuantity { product, quantity });

        *self.product_quantities.entry(product).or_insert(0.0) += quantity;
    }

    /// The individual additions in the order they were made.
    #[must_use]
    pub fn items(&self) -> &[ProductQuantity] {
        &self.items
    }

    /// The cumulative quantity per product.
    ///
    /// Iteration order is unspecified; nothing may rely on it.
    #[must_use]
    pub fn product_quantities(&self) -> &FxHashMap<ProductKey, f64> {
        &self.product_quantities
    }

    /// Compute the discounts the registered offers yield for this cart and
    /// append them to the receipt.
    ///
    /// Products without an offer are skipped; products whose offer has not
    /// reached its bundle size contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingUnitPrice`] if the catalog cannot price
    /// a product that has an offer.
    pub fn handle_offers(
        &self,
        receipt: &mut Receipt,
        offers: &FxHashMap<ProductKey, Offer>,
        catalog: &impl Catalog,
    ) -> Result<(), CatalogError> {
        for (&product, &quantity) in &self.product_quantities {
            let Some(offer) = offers.get(&product) else {
                continue;
            };

            let unit_price = catalog
                .unit_price(product)
                .ok_or(CatalogError::MissingUnitPrice(product))?;

            if let Some(discount) = discount_for_offer(product, offer, quantity, unit_price) {
                receipt.add_discount(discount);
            }
        }

        Ok(())
    }
}
