//! End-to-end checkout tests: carts priced against a catalog, with and
//! without special offers in play.

use testresult::TestResult;

use till::{
    cart::ShoppingCart,
    catalog::{CatalogError, InMemoryCatalog},
    offers::SpecialOfferType,
    products::{Product, ProductKey, ProductUnit},
    teller::Teller,
};

#[test]
fn an_empty_cart_checks_out_to_an_empty_receipt() -> TestResult {
    let catalog = InMemoryCatalog::new();
    let teller = Teller::new(&catalog);

    let receipt = teller.checkout(&ShoppingCart::new())?;

    assert!(receipt.items().is_empty());
    assert!(receipt.discounts().is_empty());
    assert_eq!(receipt.total_price(), 0.0);

    Ok(())
}

#[test]
fn unit_products_total_their_line_prices() -> TestResult {
    let mut catalog = InMemoryCatalog::new();
    let kettle = catalog.add_product(Product::new("Kettle", ProductUnit::Each), 100.0);
    let mug = catalog.add_product(Product::new("Mug", ProductUnit::Each), 50.0);

    let teller = Teller::new(&catalog);

    let mut cart = ShoppingCart::new();
    cart.add_item_quantity(kettle, 2.0);
    cart.add_item_quantity(mug, 3.0);

    let receipt = teller.checkout(&cart)?;

    assert_eq!(receipt.items().len(), 2);
    assert_eq!(receipt.total_price(), 350.0);

    Ok(())
}

#[test]
fn weighed_products_total_their_line_prices() -> TestResult {
    let mut catalog = InMemoryCatalog::new();
    let cherries = catalog.add_product(Product::new("Cherries", ProductUnit::Kilo), 5.0);
    let carrots = catalog.add_product(Product::new("Carrots", ProductUnit::Kilo), 0.75);

    let teller = Teller::new(&catalog);

    let mut cart = ShoppingCart::new();
    cart.add_item_quantity(cherries, 2.0);
    cart.add_item_quantity(carrots, 3.0);

    let receipt = teller.checkout(&cart)?;

    assert_eq!(receipt.total_price(), 12.25);

    Ok(())
}

#[test]
fn units_and_weights_mix_on_one_receipt() -> TestResult {
    let mut catalog = InMemoryCatalog::new();
    let grapes = catalog.add_product(Product::new("Grapes", ProductUnit::Kilo), 10.0);
    let stock_cube = catalog.add_product(Product::new("Stock Cube", ProductUnit::Each), 0.5);

    let teller = Teller::new(&catalog);

    let mut cart = ShoppingCart::new();
    cart.add_item_quantity(grapes, 0.5);
    cart.add_item_quantity(stock_cube, 3.0);

    let receipt = teller.checkout(&cart)?;

    assert_eq!(receipt.total_price(), 6.5);

    Ok(())
}

#[test]
fn checkout_fails_when_a_cart_product_is_not_in_the_catalog() {
    let mut catalog = InMemoryCatalog::new();
    let kettle = catalog.add_product(Product::new("Kettle", ProductUnit::Each), 100.0);

    let teller = Teller::new(&catalog);

    let stranger = ProductKey::default();

    let mut cart = ShoppingCart::new();
    cart.add_item(kettle);
    cart.add_item(stranger);

    let result = teller.checkout(&cart);

    assert!(matches!(result, Err(CatalogError::MissingUnitPrice(key)) if key == stranger));
}

#[test]
fn a_percentage_offer_discounts_a_single_item() -> TestResult {
    let mut catalog = InMemoryCatalog::new();
    let rice = catalog.add_product(Product::new("Rice", ProductUnit::Each), 5.0);

    let mut teller = Teller::new(&catalog);
    teller.add_special_offer(SpecialOfferType::TenPercentDiscount, rice, 10.0);

    let mut cart = ShoppingCart::new();
    cart.add_item(rice);

    let receipt = teller.checkout(&cart)?;

    assert_eq!(receipt.total_price(), 4.5);

    Ok(())
}

#[test]
fn a_percentage_offer_leaves_other_products_alone() -> TestResult {
    let mut catalog = InMemoryCatalog::new();
    let flour = catalog.add_product(Product::new("Flour", ProductUnit::Each), 10.0);
    let sugar = catalog.add_product(Product::new("Sugar", ProductUnit::Each), 15.0);

    let mut teller = Teller::new(&catalog);
    teller.add_special_offer(SpecialOfferType::TenPercentDiscount, flour, 10.0);

    let mut cart = ShoppingCart::new();
    cart.add_item_quantity(sugar, 5.0);
    cart.add_item_quantity(flour, 5.0);

    let receipt = teller.checkout(&cart)?;

    // 75.0 + 50.0 gross, 5.0 off the flour only.
    assert_eq!(receipt.total_price(), 120.0);
    assert_eq!(receipt.discounts().len(), 1);

    Ok(())
}

#[test]
fn percentage_offers_stack_across_distinct_products() -> TestResult {
    let mut catalog = InMemoryCatalog::new();
    let flour = catalog.add_product(Product::new("Flour", ProductUnit::Each), 10.0);
    let sugar = catalog.add_product(Product::new("Sugar", ProductUnit::Each), 15.0);

    let mut teller = Teller::new(&catalog);
    teller.add_special_offer(SpecialOfferType::TenPercentDiscount, flour, 10.0);
    teller.add_special_offer(SpecialOfferType::TenPercentDiscount, sugar, 10.0);

    let mut cart = ShoppingCart::new();
    cart.add_item_quantity(sugar, 5.0);
    cart.add_item_quantity(flour, 5.0);

    let receipt = teller.checkout(&cart)?;

    assert_eq!(receipt.total_price(), 112.5);
    assert_eq!(receipt.discounts().len(), 2);

    Ok(())
}

/// A full till roll: five products, four offer types, repeated additions.
///
/// Gross lines, in ring-up order:
///
/// 1. Soap, 2 x 5.0 = 10.0
/// 2. Washing powder, 7.5 x 20.0 = 150.0
/// 3. Juice, 3 x 10.0 = 30.0
/// 4. Soap again, 2 x 5.0 = 10.0
/// 5. Shampoo, 2 x 15.0 = 30.0
/// 6. Salmon, 3.5 x 25.0 = 87.5
/// 7. Shampoo again, 1 x 15.0 = 15.0
///
/// Gross 332.5. Discounts on accumulated quantities:
///
/// - Soap, 4 x 5.0 with "2 for 18.5": charged 37.0, discount -17.0 (the
///   offer is dearer than the shelf price and the difference is kept)
/// - Washing powder, 7.5 x 20.0 with "5 for 95.0": one bundle plus two
///   full-price units charge 135.0, discount 15.0
/// - Shampoo, 3 x 15.0 with "3 for 2": charged 30.0, discount 15.0
/// - Salmon, 3.5 x 25.0 with "10.0% off": discount 8.75
///
/// Total 332.5 - 21.75 = 310.75.
#[test]
fn a_full_cart_applies_every_offer_type_at_once() -> TestResult {
    let mut catalog = InMemoryCatalog::new();
    let soap = catalog.add_product(Product::new("Soap", ProductUnit::Each), 5.0);
    let juice = catalog.add_product(Product::new("Juice", ProductUnit::Each), 10.0);
    let shampoo = catalog.add_product(Product::new("Shampoo", ProductUnit::Each), 15.0);
    let powder = catalog.add_product(Product::new("Washing Powder", ProductUnit::Each), 20.0);
    let salmon = catalog.add_product(Product::new("Salmon", ProductUnit::Kilo), 25.0);

    let mut teller = Teller::new(&catalog);
    teller.add_special_offer(SpecialOfferType::TwoForAmount, soap, 18.5);
    teller.add_special_offer(SpecialOfferType::FiveForAmount, powder, 95.0);
    teller.add_special_offer(SpecialOfferType::ThreeForTwo, shampoo, 0.0);
    teller.add_special_offer(SpecialOfferType::TenPercentDiscount, salmon, 10.0);

    let mut cart = ShoppingCart::new();
    cart.add_item_quantity(soap, 2.0);
    cart.add_item_quantity(powder, 7.5);
    cart.add_item_quantity(juice, 3.0);
    cart.add_item_quantity(soap, 2.0);
    cart.add_item_quantity(shampoo, 2.0);
    cart.add_item_quantity(salmon, 3.5);
    cart.add_item(shampoo);

    let receipt = teller.checkout(&cart)?;

    assert_eq!(receipt.items().len(), 7);
    assert_eq!(receipt.discounts().len(), 4);

    let amount_for = |product: ProductKey| {
        receipt
            .discounts()
            .iter()
            .find(|discount| discount.product == product)
            .map(|discount| discount.amount)
    };

    assert_eq!(amount_for(soap), Some(-17.0));
    assert_eq!(amount_for(powder), Some(15.0));
    assert_eq!(amount_for(shampoo), Some(15.0));
    assert_eq!(amount_for(salmon), Some(8.75));
    assert_eq!(amount_for(juice), None);

    assert_eq!(receipt.total_price(), 310.75);

    Ok(())
}
