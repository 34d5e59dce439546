//! Tellers

use rustc_hash::FxHashMap;

use crate::{
    cart::ShoppingCart,
    catalog::{Catalog, CatalogError},
    offers::{Offer, SpecialOfferType},
    products::ProductKey,
    receipt::Receipt,
};

/// A teller pricing carts against a catalog and its registered offers
#[derive(Debug)]
pub struct Teller<'a, C: Catalog> {
    /// The catalog consulted for unit prices
    catalog: &'a C,

    /// Active offer per product
    offers: FxHashMap<ProductKey, Offer>,
}

impl<'a, C: Catalog> Teller<'a, C> {
    /// Create a teller for a catalog, with no offers registered.
    #[must_use]
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            offers: FxHashMap::default(),
        }
    }

    /// Register a special offer for a product, replacing any existing one.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: ProductKey,
        argument: f64,
    ) {
        self.offers.insert(product, Offer::new(offer_type, argument));
    }

    /// The active offer for a product, if one is registered.
    #[must_use]
    pub fn offer_for(&self, product: ProductKey) -> Option<&Offer> {
        self.offers.get(&product)
    }

    /// Price a cart into a receipt: one line per addition, in order, followed
    /// by the discounts the registered offers yield.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingUnitPrice`] if the catalog cannot price
    /// a product in the cart.
    pub fn checkout(&self, cart: &ShoppingCart) -> Result<Receipt, CatalogError> {
        let mut receipt = Receipt::new();

        for item in cart.items() {
            let unit_price = self
                .catalog
                .unit_price(item.product)
                .ok_or(CatalogError::MissingUnitPrice(item.product))?;

            let total_price = item.quantity * unit_price;

            receipt.add_product(item.product, item.quantity, unit_price, total_price);
        }

        cart.handle_offers(&mut receipt, &self.offers, self.catalog)?;

        Ok(receipt)
    }
}
