//! Special Offers

/// The kinds of special offer a product can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialOfferType {
    /// Three items for the price of two
    ThreeForTwo,

    /// Two items for a fixed amount
    TwoForAmount,

    /// Five items for a fixed amount
    FiveForAmount,

    /// A percentage off the undiscounted price
    TenPercentDiscount,
}

/// A special offer attached to a single product
///
/// The meaning of `argument` depends on the offer type: the percentage for
/// [`SpecialOfferType::TenPercentDiscount`], the bundle price for
/// [`SpecialOfferType::TwoForAmount`] and [`SpecialOfferType::FiveForAmount`],
/// and unused for [`SpecialOfferType::ThreeForTwo`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    /// The kind of offer
    pub offer_type: SpecialOfferType,

    /// Numeric parameter whose meaning depends on the offer type
    pub argument: f64,
}

impl Offer {
    /// Create a new offer.
    #[must_use]
    pub fn new(offer_type: SpecialOfferType, argument: f64) -> Self {
        Self {
            offer_type,
            argument,
        }
    }
}
