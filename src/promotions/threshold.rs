//! Threshold Promotion
//!
//! A percentage off the whole cart once its subtotal reaches a spend threshold

use decimal_percentage::Percentage;
use rusty_money::{Money, iso::Currency};

use crate::{
    cart::Cart,
    discounts::{percent_of, percent_points},
    promotions::PromotionRule,
};

/// Percentage off the cart subtotal when the subtotal is at least `threshold`
#[derive(Debug, Clone, Copy)]
pub struct ThresholdPromotion<'a> {
    threshold: Money<'a, Currency>,
    percent: Percentage,
}

impl<'a> ThresholdPromotion<'a> {
    /// Create a new threshold promotion.
    pub fn new(threshold: Money<'a, Currency>, percent: Percentage) -> Self {
        Self { threshold, percent }
    }

    /// Return the spend threshold
    pub fn threshold(&self) -> &Money<'a, Currency> {
        &self.threshold
    }

    /// Return the discount percentage
    pub fn percent(&self) -> Percentage {
        self.percent
    }
}

impl PromotionRule for ThresholdPromotion<'_> {
    fn process<'c>(&self, cart: &Cart<'c>) -> Money<'c, Currency> {
        let subtotal = cart.subtotal();

        // Inclusive: spending exactly the threshold qualifies
        if subtotal.to_minor_units() >= self.threshold.to_minor_units() {
            percent_of(&subtotal, &self.percent)
        } else {
            cart.zero()
        }
    }

    fn describe(&self) -> String {
        format!(
            "Spend {}, save {}%",
            self.threshold,
            percent_points(&self.percent)
        )
    }
}
