//! Property tests for cart totals and discount aggregation.

use decimal_percentage::Percentage;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::GBP};

use cart_promotions::prelude::*;

fn line_items() -> impl Strategy<Value = Vec<(i64, u32)>> {
    prop::collection::vec((0_i64..1_000_000, 0_u32..100), 0..12)
}

fn cart_from(lines: &[(i64, u32)]) -> Result<Cart<'static>, CartError> {
    let items: Vec<CartItem<'static>> = lines
        .iter()
        .enumerate()
        .map(|(i, &(price, quantity))| {
            CartItem::new(
                format!("P{i}"),
                format!("Product {i}"),
                Money::from_minor(price, GBP),
                quantity,
            )
        })
        .collect();

    Cart::with_items(items, GBP)
}

proptest! {
    #[test]
    fn total_is_sum_of_line_totals(lines in line_items()) {
        let expected: i64 = lines
            .iter()
            .map(|&(price, quantity)| price * i64::from(quantity))
            .sum();

        let result = PromotionEngine::default().process_discount(&cart_from(&lines)?);

        prop_assert_eq!(result.total.to_minor_units(), expected);
        prop_assert_eq!(result.discount.to_minor_units(), 0);
        prop_assert_eq!(result.final_total, result.total);
    }

    #[test]
    fn total_ignores_item_order(lines in line_items()) {
        let mut reversed = lines.clone();
        reversed.reverse();

        prop_assert_eq!(cart_from(&lines)?.subtotal(), cart_from(&reversed)?.subtotal());
    }

    #[test]
    fn discount_is_sum_of_rule_contributions(
        lines in line_items(),
        threshold in 0_i64..10_000_000,
        threshold_points in 0_i64..=100,
        amount_off in 0_i64..10_000,
        code_points in 0_i64..=100,
    ) {
        let cart = cart_from(&lines)?.with_promo_code("CODE");

        let threshold = ThresholdPromotion::new(
            Money::from_minor(threshold, GBP),
            Percentage::from(Decimal::new(threshold_points, 2)),
        );
        let product = ProductDiscountPromotion::new("P0", Money::from_minor(amount_off, GBP));
        let codes = PromoCodePromotion::from_codes([
            ("CODE", Percentage::from(Decimal::new(code_points, 2))),
        ]);

        let expected = threshold.process(&cart).to_minor_units()
            + product.process(&cart).to_minor_units()
            + codes.process(&cart).to_minor_units();

        let engine = PromotionEngine::default()
            .with_rule(threshold)
            .with_rule(product)
            .with_rule(codes);

        let result = engine.process_discount(&cart);

        prop_assert_eq!(result.discount.to_minor_units(), expected);
        prop_assert_eq!(
            result.final_total.to_minor_units(),
            result.total.to_minor_units() - expected
        );
    }
}
