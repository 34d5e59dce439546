//! Receipts

use smallvec::SmallVec;

use crate::{discounts::Discount, products::ProductKey};

/// A priced line on a receipt
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    /// The purchased product
    pub product: ProductKey,

    /// Quantity purchased, fractional for weighed products
    pub quantity: f64,

    /// Unit price at the time of purchase
    pub unit_price: f64,

    /// Undiscounted line total
    pub total_price: f64,
}

/// A receipt of priced lines and the discounts applied to them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Receipt {
    /// Priced lines in the order they were rung up
    items: Vec<ReceiptItem>,

    /// Discounts in the order they were applied
    discounts: SmallVec<[Discount; 4]>,
}

impl Receipt {
    /// Create a new empty receipt.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a priced line.
    pub fn add_product(
        &mut self,
        product: ProductKey,
        quantity: f64,
        unit_price: f64,
        total_price: f64,
    ) {
        self.items.push(ReceiptItem {
            product,
            quantity,
            unit_price,
            total_price,
        });
    }

    /// Append a discount.
    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    /// The priced lines in ring-up order.
    #[must_use]
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    /// The discounts in application order.
    #[must_use]
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// The amount due: the sum of line totals minus the sum of discounts.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        let items: f64 = self.items.iter().map(|item| item.total_price).sum();
        let discounts: f64 = self.discounts.iter().map(|discount| discount.amount).sum();

        items - discounts
    }
}
