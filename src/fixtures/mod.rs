//! Fixtures
//!
//! Carts and promotion lists loaded from YAML. A fixture set `name` is made of
//! `carts/{name}.yml` and `promotions/{name}.yml` under a base directory.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    engine::PromotionEngine,
    fixtures::{carts::CartFixture, promotions::PromotionsFixture},
    items::CartItem,
    promotions::{Promotion, PromotionMeta},
};

pub mod carts;
pub mod parsing;
pub mod promotions;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between the cart and an amount
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No cart loaded yet
    #[error("No cart loaded yet; currency unknown")]
    NoCurrency,

    /// Cart creation error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Cart line items, in file order
    items: Vec<CartItem<'static>>,

    /// Promo code entered on the cart
    promo_code: Option<String>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,

    /// Promotions with their metadata, in file order
    promotions: Vec<(PromotionMeta, Promotion<'static>)>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            items: Vec::new(),
            promo_code: None,
            currency: None,
            promotions: Vec::new(),
        }
    }

    /// Load a cart from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an item or
    /// an already loaded promotion is priced in a different currency to the cart.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        let currency = fixture.currency()?;

        let items = fixture
            .items
            .into_iter()
            .map(CartItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mismatch = items
            .iter()
            .map(|item| item.price().currency())
            .chain(
                self.promotions
                    .iter()
                    .filter_map(|(_, promotion)| promotion.currency()),
            )
            .find(|found| *found != currency);

        if let Some(found) = mismatch {
            return Err(FixtureError::CurrencyMismatch(
                currency.iso_alpha_code.to_string(),
                found.iso_alpha_code.to_string(),
            ));
        }

        self.items = items;
        self.promo_code = fixture.promo_code;
        self.currency = Some(currency);

        Ok(self)
    }

    /// Load promotions from a YAML fixture file
    ///
    /// When a cart is already loaded, promotion amounts must use its currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// promotion's configuration is invalid.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("promotions")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: PromotionsFixture = serde_norway::from_str(&contents)?;

        for promotion_fixture in fixture.promotions {
            let promotion = promotion_fixture.try_into_promotion(self.currency)?;

            self.promotions.push(promotion);
        }

        Ok(self)
    }

    /// Load a complete fixture set (cart and promotions with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_at("./fixtures", name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_at(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_cart(name)?.load_promotions(name)?;

        Ok(fixture)
    }

    /// Get all promotions with their metadata
    pub fn promotions(&self) -> &[(PromotionMeta, Promotion<'static>)] {
        &self.promotions
    }

    /// Create a cart from the loaded items and promo code
    ///
    /// # Errors
    ///
    /// Returns an error if no cart has been loaded.
    pub fn cart(&self) -> Result<Cart<'static>, FixtureError> {
        let currency = self.currency.ok_or(FixtureError::NoCurrency)?;

        let cart = Cart::with_items(self.items.clone(), currency)?;

        Ok(match &self.promo_code {
            Some(code) => cart.with_promo_code(code.clone()),
            None => cart,
        })
    }

    /// Create an engine from the loaded promotions, named from their metadata
    pub fn engine(&self) -> PromotionEngine<'static> {
        self.promotions
            .iter()
            .fold(PromotionEngine::default(), |engine, (meta, promotion)| {
                engine.with_named_rule(meta.name.clone(), promotion.clone())
            })
    }
}
