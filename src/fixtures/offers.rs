//! Offer Fixtures

use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    offers::{Offer, SpecialOfferType},
};

/// Wrapper for offers in YAML
#[derive(Debug, Deserialize)]
pub struct OffersFixture {
    /// Offer definitions in declaration order
    pub offers: Vec<OfferFixture>,
}

/// An offer definition in YAML
#[derive(Debug, Deserialize)]
pub struct OfferFixture {
    /// Fixture key of the product the offer applies to
    pub product: String,

    /// Offer type (`three_for_two`, `two_for_amount`, `five_for_amount` or
    /// `ten_percent_discount`)
    #[serde(rename = "type")]
    pub offer_type: String,

    /// Bundle price or percentage, depending on the offer type
    pub argument: Option<f64>,
}

/// Parse a fixture offer type string into a [`SpecialOfferType`].
///
/// # Errors
///
/// Returns an error for unknown offer types.
pub fn parse_offer_type(offer_type: &str) -> Result<SpecialOfferType, FixtureError> {
    match offer_type {
        "three_for_two" => Ok(SpecialOfferType::ThreeForTwo),
        "two_for_amount" => Ok(SpecialOfferType::TwoForAmount),
        "five_for_amount" => Ok(SpecialOfferType::FiveForAmount),
        "ten_percent_discount" => Ok(SpecialOfferType::TenPercentDiscount),
        other => Err(FixtureError::UnknownOfferType(other.to_string())),
    }
}

impl OfferFixture {
    /// Convert the fixture into an [`Offer`].
    ///
    /// # Errors
    ///
    /// Returns an error if the offer type is unknown, or a type that needs an
    /// argument was declared without one. `three_for_two` is the only type
    /// that does not need one.
    pub fn try_into_offer(&self) -> Result<Offer, FixtureError> {
        let offer_type = parse_offer_type(&self.offer_type)?;

        let argument = match offer_type {
            SpecialOfferType::ThreeForTwo => self.argument.unwrap_or(0.0),
            SpecialOfferType::TwoForAmount
            | SpecialOfferType::FiveForAmount
            | SpecialOfferType::TenPercentDiscount => self
                .argument
                .ok_or_else(|| FixtureError::MissingArgument(self.product.clone()))?,
        };

        Ok(Offer::new(offer_type, argument))
    }
}
