//! Promotions
//!
//! A promotion is one independent discount computation evaluated against a
//! cart. Every promotion sees the same, unmodified cart and returns the amount
//! it takes off; promotions never fail and never see each other's results.

use std::fmt;

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::Cart,
    promotions::{
        product_discount::ProductDiscountPromotion, promo_code::PromoCodePromotion,
        threshold::ThresholdPromotion,
    },
};

pub mod product_discount;
pub mod promo_code;
pub mod threshold;

/// A pluggable discount rule.
///
/// Implementations must be pure functions of their own configuration and the
/// cart. When the rule's condition is not met the contribution is zero in the
/// cart currency, never an error.
pub trait PromotionRule: fmt::Debug + Send + Sync {
    /// Calculate this rule's discount for `cart`, in the cart currency.
    fn process<'c>(&self, cart: &Cart<'c>) -> Money<'c, Currency>;

    /// Human-readable summary of the rule's configuration.
    fn describe(&self) -> String;
}

/// Promotion metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionMeta {
    /// Promotion name
    pub name: String,
}

/// Promotion enum
#[derive(Debug, Clone)]
pub enum Promotion<'a> {
    /// Spend-threshold percentage discount
    Threshold(ThresholdPromotion<'a>),

    /// Fixed per-unit discount on a single product
    ProductDiscount(ProductDiscountPromotion<'a>),

    /// Percentage discount unlocked by a promo code
    PromoCode(PromoCodePromotion),
}

impl PromotionRule for Promotion<'_> {
    fn process<'c>(&self, cart: &Cart<'c>) -> Money<'c, Currency> {
        match self {
            Promotion::Threshold(threshold) => threshold.process(cart),
            Promotion::ProductDiscount(product_discount) => product_discount.process(cart),
            Promotion::PromoCode(promo_code) => promo_code.process(cart),
        }
    }

    fn describe(&self) -> String {
        match self {
            Promotion::Threshold(threshold) => threshold.describe(),
            Promotion::ProductDiscount(product_discount) => product_discount.describe(),
            Promotion::PromoCode(promo_code) => promo_code.describe(),
        }
    }
}

impl<'a> Promotion<'a> {
    /// Currency of the promotion's configured amounts, if it has any.
    pub fn currency(&self) -> Option<&'a Currency> {
        match self {
            Promotion::Threshold(threshold) => Some(threshold.threshold().currency()),
            Promotion::ProductDiscount(product_discount) => {
                Some(product_discount.amount_off().currency())
            }
            Promotion::PromoCode(_) => None,
        }
    }
}

impl<'a> From<ThresholdPromotion<'a>> for Promotion<'a> {
    fn from(promotion: ThresholdPromotion<'a>) -> Self {
        Promotion::Threshold(promotion)
    }
}

impl<'a> From<ProductDiscountPromotion<'a>> for Promotion<'a> {
    fn from(promotion: ProductDiscountPromotion<'a>) -> Self {
        Promotion::ProductDiscount(promotion)
    }
}

impl From<PromoCodePromotion> for Promotion<'_> {
    fn from(promotion: PromoCodePromotion) -> Self {
        Promotion::PromoCode(promotion)
    }
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use rust_decimal::Decimal;
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use crate::{cart::Cart, items::CartItem};

    use super::*;

    fn test_cart<'a>() -> Result<Cart<'a>, crate::cart::CartError> {
        Ok(Cart::with_items(
            [
                CartItem::new("A1", "Widget", Money::from_minor(10_000, GBP), 2),
                CartItem::new("B2", "Gadget", Money::from_minor(5_000, GBP), 1),
            ],
            GBP,
        )?
        .with_promo_code("VIP20"))
    }

    #[test]
    fn process_delegates_to_inner_promotion() -> TestResult {
        let cart = test_cart()?;

        let inner = ThresholdPromotion::new(
            Money::from_minor(15_000, GBP),
            Percentage::from(Decimal::new(5, 2)),
        );
        let expected = inner.process(&cart);

        let promo = Promotion::from(inner);

        assert_eq!(promo.process(&cart), expected);
        assert_eq!(promo.process(&cart), Money::from_minor(1_250, GBP));

        Ok(())
    }

    #[test]
    fn describe_delegates_to_inner_promotion() {
        let inner = ProductDiscountPromotion::new("A1", Money::from_minor(1_000, GBP));
        let expected = inner.describe();

        let promo = Promotion::from(inner);

        assert_eq!(promo.describe(), expected);
    }

    #[test]
    fn promo_code_variant_delegates() -> TestResult {
        let cart = test_cart()?;

        let promo = Promotion::from(PromoCodePromotion::from_codes([(
            "VIP20",
            Percentage::from(Decimal::new(20, 2)),
        )]));

        assert_eq!(promo.process(&cart), Money::from_minor(5_000, GBP));

        Ok(())
    }

    #[test]
    fn currency_comes_from_configured_amounts() {
        let threshold = Promotion::from(ThresholdPromotion::new(
            Money::from_minor(15_000, GBP),
            Percentage::from(Decimal::new(5, 2)),
        ));
        let product = Promotion::from(ProductDiscountPromotion::new(
            "A1",
            Money::from_minor(1_000, USD),
        ));
        let codes = Promotion::from(PromoCodePromotion::default());

        assert_eq!(threshold.currency(), Some(GBP));
        assert_eq!(product.currency(), Some(USD));
        assert_eq!(codes.currency(), None);
    }
}
