//! Product Discount
//!
//! A fixed amount off every unit of one product

use rusty_money::{Money, iso::Currency};

use crate::{cart::Cart, items::find_product, promotions::PromotionRule};

/// Fixed per-unit discount on the line matching `product_id`
///
/// When the same product appears on several lines only the first line is
/// discounted.
#[derive(Debug, Clone)]
pub struct ProductDiscountPromotion<'a> {
    product_id: String,
    amount_off: Money<'a, Currency>,
}

impl<'a> ProductDiscountPromotion<'a> {
    /// Create a new product discount promotion.
    pub fn new(product_id: impl Into<String>, amount_off: Money<'a, Currency>) -> Self {
        Self {
            product_id: product_id.into(),
            amount_off,
        }
    }

    /// Return the targeted product identifier
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Return the per-unit discount
    pub fn amount_off(&self) -> &Money<'a, Currency> {
        &self.amount_off
    }
}

impl PromotionRule for ProductDiscountPromotion<'_> {
    fn process<'c>(&self, cart: &Cart<'c>) -> Money<'c, Currency> {
        find_product(cart.items(), &self.product_id).map_or_else(
            || cart.zero(),
            |item| {
                Money::from_minor(
                    self.amount_off
                        .to_minor_units()
                        .saturating_mul(i64::from(item.quantity())),
                    cart.currency(),
                )
            },
        )
    }

    fn describe(&self) -> String {
        format!("{} off each {}", self.amount_off, self.product_id)
    }
}
