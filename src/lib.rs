//! Till
//!
//! Till is a supermarket checkout pricing engine that prices shopping carts against a catalog and per-product special offers.

pub mod cart;
pub mod catalog;
pub mod discounts;
pub mod fixtures;
pub mod offers;
pub mod products;
pub mod receipt;
pub mod teller;
