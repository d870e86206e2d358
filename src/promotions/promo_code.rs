//! Promo Code
//!
//! A percentage off the whole cart unlocked by entering a known code

use decimal_percentage::Percentage;
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};

use crate::{
    cart::Cart,
    discounts::{percent_of, percent_points},
    promotions::PromotionRule,
};

/// Percentage off the cart subtotal, looked up from the cart's promo code
///
/// Codes are matched exactly, including case. A cart without a code is looked
/// up as the empty string.
#[derive(Debug, Clone, Default)]
pub struct PromoCodePromotion {
    codes: FxHashMap<String, Percentage>,
}

impl PromoCodePromotion {
    /// Create a new promo code promotion from a code table.
    pub fn new(codes: FxHashMap<String, Percentage>) -> Self {
        Self { codes }
    }

    /// Create a new promo code promotion from `(code, percentage)` pairs.
    pub fn from_codes<K: Into<String>>(codes: impl IntoIterator<Item = (K, Percentage)>) -> Self {
        Self {
            codes: codes
                .into_iter()
                .map(|(code, percent)| (code.into(), percent))
                .collect(),
        }
    }

    /// Add or replace a single code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>, percent: Percentage) -> Self {
        self.codes.insert(code.into(), percent);
        self
    }

    /// Return the percentage configured for `code`, if any
    pub fn percent_for(&self, code: &str) -> Option<Percentage> {
        self.codes.get(code).copied()
    }

    /// Return the number of configured codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if no codes are configured
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl PromotionRule for PromoCodePromotion {
    fn process<'c>(&self, cart: &Cart<'c>) -> Money<'c, Currency> {
        match self.percent_for(cart.promo_code().unwrap_or_default()) {
            Some(percent) => percent_of(&cart.subtotal(), &percent),
            None => cart.zero(),
        }
    }

    fn describe(&self) -> String {
        let mut codes: Vec<_> = self.codes.iter().collect();
        codes.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        let listed = codes
            .into_iter()
            .map(|(code, percent)| format!("{code} ({}%)", percent_points(percent)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("Promo codes: {listed}")
    }
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use crate::items::CartItem;

    use super::*;

    fn seasonal_codes() -> PromoCodePromotion {
        PromoCodePromotion::from_codes([
            ("SUMMER10", Percentage::from(Decimal::new(10, 2))),
            ("VIP20", Percentage::from(Decimal::new(20, 2))),
        ])
    }

    fn test_cart<'a>() -> Result<Cart<'a>, crate::cart::CartError> {
        Cart::with_items(
            [
                CartItem::new("A1", "Widget", Money::from_minor(10_000, GBP), 2),
                CartItem::new("B2", "Gadget", Money::from_minor(5_000, GBP), 1),
            ],
            GBP,
        )
    }

    #[test]
    fn known_code_discounts_subtotal() -> TestResult {
        let cart = test_cart()?.with_promo_code("VIP20");

        assert_eq!(seasonal_codes().process(&cart), Money::from_minor(5_000, GBP));

        Ok(())
    }

    #[test]
    fn other_known_code_uses_its_own_percentage() -> TestResult {
        let cart = test_cart()?.with_promo_code("SUMMER10");

        assert_eq!(seasonal_codes().process(&cart), Money::from_minor(2_500, GBP));

        Ok(())
    }

    #[test]
    fn unknown_code_returns_zero() -> TestResult {
        let cart = test_cart()?.with_promo_code("WINTER50");

        assert_eq!(seasonal_codes().process(&cart), Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn absent_code_returns_zero() -> TestResult {
        let cart = test_cart()?;

        assert_eq!(seasonal_codes().process(&cart), Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn absent_code_is_looked_up_as_empty_string() -> TestResult {
        let cart = test_cart()?;
        let promo = seasonal_codes().with_code("", Percentage::from(Decimal::new(1, 2)));

        assert_eq!(promo.process(&cart), Money::from_minor(250, GBP));

        Ok(())
    }

    #[test]
    fn codes_are_case_sensitive() -> TestResult {
        let cart = test_cart()?.with_promo_code("vip20");

        assert_eq!(seasonal_codes().process(&cart), Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn empty_cart_returns_zero() {
        let cart = Cart::new(GBP).with_promo_code("VIP20");

        assert_eq!(seasonal_codes().process(&cart), Money::from_minor(0, GBP));
    }

    #[test]
    fn with_code_replaces_existing_percentage() {
        let promo = seasonal_codes().with_code("VIP20", Percentage::from(Decimal::new(30, 2)));

        assert_eq!(promo.len(), 2);
        assert_eq!(
            promo.percent_for("VIP20"),
            Some(Percentage::from(Decimal::new(30, 2)))
        );
    }

    #[test]
    fn describe_lists_codes_in_order() {
        assert_eq!(
            seasonal_codes().describe(),
            "Promo codes: SUMMER10 (10%), VIP20 (20%)"
        );
    }
}
