//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{items::CartItem, pricing::total_price};

/// Errors related to cart construction or validation.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// An item's currency differs from the cart currency (index, item currency, cart currency).
    #[error("Item {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// An item has a unit price below zero (index).
    #[error("Item {0} has a negative price")]
    NegativePrice(usize),
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    items: Vec<CartItem<'a>>,
    promo_code: Option<String>,
    currency: &'a Currency,
}

impl<'a> Cart<'a> {
    /// Create a new empty cart.
    pub fn new(currency: &'a Currency) -> Self {
        Cart {
            items: Vec::new(),
            promo_code: None,
            currency,
        }
    }

    /// Create a new cart with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `CartError::CurrencyMismatch` if an item is priced in another currency.
    pub fn with_items(
        items: impl Into<Vec<CartItem<'a>>>,
        currency: &'a Currency,
    ) -> Result<Self, CartError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            let item_currency = item.price().currency();
            if item_currency == currency {
                Ok(())
            } else {
                Err(CartError::CurrencyMismatch(
                    i,
                    item_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        Ok(Cart {
            items,
            promo_code: None,
            currency,
        })
    }

    /// Attach a promo code to the cart.
    #[must_use]
    pub fn with_promo_code(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }

    /// Check item prices are not negative.
    ///
    /// Promotions never call this; negative prices flow through the arithmetic
    /// unchanged unless the caller opts in here.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NegativePrice` for the first item priced below zero.
    pub fn validate(&self) -> Result<(), CartError> {
        match self
            .items
            .iter()
            .position(|item| item.price().to_minor_units() < 0)
        {
            Some(idx) => Err(CartError::NegativePrice(idx)),
            None => Ok(()),
        }
    }

    /// Calculate the subtotal of the cart: `price × quantity` summed over all items.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        total_price(&self.items, self.currency)
    }

    /// A zero amount in the cart currency.
    pub fn zero(&self) -> Money<'a, Currency> {
        Money::from_minor(0, self.currency)
    }

    /// Get the line items.
    pub fn items(&self) -> &[CartItem<'a>] {
        &self.items
    }

    /// Iterate over the line items.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem<'a>> {
        self.items.iter()
    }

    /// Get the promo code, if any.
    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    /// Get the number of line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}
