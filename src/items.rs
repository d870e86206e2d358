//! Items

use rusty_money::{Money, iso::Currency};

/// A single line in a cart: one product at a unit price, bought `quantity` times.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem<'a> {
    product_id: String,
    name: String,
    price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> CartItem<'a> {
    /// Creates a new line item
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns the product identifier
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns the number of units
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity, in minor units.
    ///
    /// Saturates at the `i64` bounds rather than overflowing.
    pub fn line_total_minor(&self) -> i64 {
        self.price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity))
    }
}

/// Returns the first item in `items` with the given product identifier
pub fn find_product<'i, 'a>(
    items: &'i [CartItem<'a>],
    product_id: &str,
) -> Option<&'i CartItem<'a>> {
    items.iter().find(|item| item.product_id() == product_id)
}
