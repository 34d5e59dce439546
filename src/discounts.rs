//! Discounts

use crate::{
    offers::{Offer, SpecialOfferType},
    products::ProductKey,
};

/// A discount applied to one product on a receipt
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    /// The product the discount applies to
    pub product: ProductKey,

    /// Human-readable description of the offer, e.g. `"3 for 2"`
    pub description: String,

    /// Amount saved, subtracted from the receipt total. Negative when the
    /// offer charges more than the undiscounted price.
    pub amount: f64,
}

/// Calculates the discount an offer yields for an accumulated quantity.
///
/// Returns `None` while the quantity is below the offer's bundle size.
/// [`SpecialOfferType::TenPercentDiscount`] has no threshold and always
/// yields a discount, including a zero-amount one for a zero quantity.
#[must_use]
pub fn discount_for_offer(
    product: ProductKey,
    offer: &Offer,
    quantity: f64,
    unit_price: f64,
) -> Option<Discount> {
    let whole = whole_quantity(quantity);

    match offer.offer_type {
        SpecialOfferType::ThreeForTwo => three_for_two(product, quantity, whole, unit_price),
        SpecialOfferType::TwoForAmount => {
            two_for_amount(product, offer.argument, quantity, whole, unit_price)
        }
        SpecialOfferType::FiveForAmount => {
            five_for_amount(product, offer.argument, quantity, whole, unit_price)
        }
        SpecialOfferType::TenPercentDiscount => {
            Some(percent_off(product, offer.argument, quantity, unit_price))
        }
    }
}

/// Whole units in a possibly fractional quantity, truncated toward zero.
///
/// Bundle eligibility counts whole units only; the fractional remainder of a
/// weighed product still contributes to the undiscounted price baseline.
#[expect(
    clippy::cast_possible_truncation,
    reason = "bundle counting discards the fractional part on purpose"
)]
fn whole_quantity(quantity: f64) -> i32 {
    quantity as i32
}

/// Three items for the price of two.
fn three_for_two(
    product: ProductKey,
    quantity: f64,
    whole: i32,
    unit_price: f64,
) -> Option<Discount> {
    if whole <= 2 {
        return None;
    }

    let bundles = whole / 3;
    let charged = f64::from(bundles) * 2.0 * unit_price + f64::from(whole % 3) * unit_price;

    Some(Discount {
        product,
        description: "3 for 2".to_string(),
        amount: quantity * unit_price - charged,
    })
}

/// Two items for a fixed amount.
///
/// The charged total spreads the offer amount over the whole units, so an odd
/// quantity pays for half a pair and full unit price for the odd unit.
fn two_for_amount(
    product: ProductKey,
    argument: f64,
    quantity: f64,
    whole: i32,
    unit_price: f64,
) -> Option<Discount> {
    if whole < 2 {
        return None;
    }

    let charged = argument * f64::from(whole) / 2.0 + f64::from(whole % 2) * unit_price;

    Some(Discount {
        product,
        description: format!("2 for {}", format_argument(argument)),
        amount: unit_price * quantity - charged,
    })
}

/// Five items for a fixed amount.
///
/// Whole bundles are charged the offer amount; leftover units are charged at
/// full unit price.
fn five_for_amount(
    product: ProductKey,
    argument: f64,
    quantity: f64,
    whole: i32,
    unit_price: f64,
) -> Option<Discount> {
    if whole < 5 {
        return None;
    }

    let bundles = whole / 5;
    let charged = argument * f64::from(bundles) + f64::from(whole % 5) * unit_price;

    Some(Discount {
        product,
        description: format!("5 for {}", format_argument(argument)),
        amount: unit_price * quantity - charged,
    })
}

/// A percentage off the undiscounted price, whatever the quantity.
fn percent_off(product: ProductKey, argument: f64, quantity: f64, unit_price: f64) -> Discount {
    Discount {
        product,
        description: format!("{}% off", format_argument(argument)),
        amount: quantity * unit_price * argument / 100.0,
    }
}

/// Render an offer argument for a discount description.
///
/// Whole-number arguments keep a trailing decimal, so descriptions read
/// `"2 for 10.0"` rather than `"2 for 10"`.
fn format_argument(argument: f64) -> String {
    format!("{argument:?}")
}
