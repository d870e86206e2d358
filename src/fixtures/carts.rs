//! Cart Fixtures

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::{
        FixtureError,
        parsing::{parse_currency, parse_price},
    },
    items::CartItem,
};

/// Cart fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Cart currency code (e.g., "GBP")
    pub currency: String,

    /// Optional promo code entered at checkout
    #[serde(default)]
    pub promo_code: Option<String>,

    /// Line items, in cart order
    #[serde(default)]
    pub items: Vec<CartItemFixture>,
}

/// Line item fixture
#[derive(Debug, Deserialize)]
pub struct CartItemFixture {
    /// Product identifier
    pub product_id: String,

    /// Display name
    pub name: String,

    /// Unit price (e.g., "100.00 GBP")
    pub price: String,

    /// Number of units
    pub quantity: u32,
}

impl CartFixture {
    /// Resolve the cart currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency code is not supported.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        parse_currency(&self.currency)
    }
}

impl TryFrom<CartItemFixture> for CartItem<'static> {
    type Error = FixtureError;

    fn try_from(fixture: CartItemFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(CartItem::new(
            fixture.product_id,
            fixture.name,
            Money::from_minor(minor_units, currency),
            fixture.quantity,
        ))
    }
}
