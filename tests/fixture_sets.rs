//! Integration tests for the fixture sets shipped in `fixtures/`.

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use cart_promotions::{fixtures::Fixture, receipt::Receipt};

#[test]
fn test_checkout_fixture_prices_reference_cart() -> TestResult {
    let fixture = Fixture::from_set("checkout")?;

    let cart = fixture.cart()?;
    let result = fixture.engine().process_discount(&cart);

    assert_eq!(cart.promo_code(), Some("VIP20"));
    assert_eq!(result.total, Money::from_minor(25_000, GBP));
    assert_eq!(result.discount, Money::from_minor(8_250, GBP));
    assert_eq!(result.final_total, Money::from_minor(16_750, GBP));

    Ok(())
}

#[test]
fn test_checkout_fixture_with_blank_code() -> TestResult {
    let fixture = Fixture::from_set("checkout")?;

    let cart = fixture.cart()?.with_promo_code("");
    let result = fixture.engine().process_discount(&cart);

    assert_eq!(result.discount, Money::from_minor(3_250, GBP));
    assert_eq!(result.final_total, Money::from_minor(21_750, GBP));

    Ok(())
}

#[test]
fn test_checkout_fixture_receipt_lists_promotions() -> TestResult {
    let fixture = Fixture::from_set("checkout")?;
    let cart = fixture.cart()?;

    let receipt = Receipt::from_engine(&fixture.engine(), &cart);

    let names: Vec<&str> = receipt
        .applications()
        .iter()
        .map(|app| app.name.as_str())
        .collect();

    assert_eq!(
        names,
        [
            "Spend £150, save 5%",
            "£10 off each pair of headphones",
            "Promo codes",
        ]
    );

    let mut out = Vec::new();
    receipt.write_to(&mut out, &cart)?;

    let rendered = String::from_utf8(out)?;

    assert!(
        rendered.contains("Wireless Headphones"),
        "missing item: {rendered}"
    );
    assert!(rendered.contains("Promo codes"), "missing promotion: {rendered}");

    Ok(())
}
