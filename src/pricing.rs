//! Prices

use rusty_money::{Money, iso::Currency};

use crate::items::CartItem;

/// Calculates the total price of a list of items in the given currency.
///
/// Sums `price × quantity` over every item in minor units. An empty list totals
/// zero. Item currencies are not consulted; callers wanting that guarantee build
/// the list through [`crate::cart::Cart::with_items`].
pub fn total_price<'a>(items: &[CartItem<'_>], currency: &'a Currency) -> Money<'a, Currency> {
    Money::from_minor(total_minor(items), currency)
}

/// Sum of all line totals in minor units, saturating at the `i64` bounds.
pub fn total_minor(items: &[CartItem<'_>]) -> i64 {
    items
        .iter()
        .map(CartItem::line_total_minor)
        .fold(0_i64, i64::saturating_add)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn test_total_price() {
        let items = [
            CartItem::new("A1", "Widget", Money::from_minor(10_000, iso::GBP), 2),
            CartItem::new("B2", "Gadget", Money::from_minor(5_000, iso::GBP), 1),
        ];

        assert_eq!(
            total_price(&items, iso::GBP),
            Money::from_minor(25_000, iso::GBP)
        );
    }

    #[test]
    fn test_total_price_empty() {
        let items: [CartItem<'static>; 0] = [];

        assert_eq!(total_price(&items, iso::GBP), Money::from_minor(0, iso::GBP));
    }

    #[test]
    fn negative_prices_reduce_the_total() {
        let items = [
            CartItem::new("A1", "Widget", Money::from_minor(1_000, iso::GBP), 1),
            CartItem::new("R1", "Refund", Money::from_minor(-300, iso::GBP), 2),
        ];

        assert_eq!(total_minor(&items), 400);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let items = [
            CartItem::new("A1", "Widget", Money::from_minor(i64::MAX, iso::GBP), 1),
            CartItem::new("B2", "Gadget", Money::from_minor(1, iso::GBP), 1),
        ];

        assert_eq!(total_minor(&items), i64::MAX);
    }
}
