//! Promotion Fixtures

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::{
        FixtureError,
        parsing::{parse_percentage, parse_price},
    },
    promotions::{
        Promotion, PromotionMeta, product_discount::ProductDiscountPromotion,
        promo_code::PromoCodePromotion, threshold::ThresholdPromotion,
    },
};

/// Wrapper for promotions in YAML
#[derive(Debug, Deserialize)]
pub struct PromotionsFixture {
    /// Promotions, in evaluation order
    pub promotions: Vec<PromotionFixture>,
}

/// Promotion fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionFixture {
    /// Spend-threshold promotion
    Threshold {
        /// Promotion name
        name: String,

        /// Minimum subtotal (e.g., "150.00 GBP")
        threshold: String,

        /// Discount percentage (e.g., "5%")
        discount: String,
    },

    /// Per-unit product discount
    ProductDiscount {
        /// Promotion name
        name: String,

        /// Targeted product identifier
        product_id: String,

        /// Amount off each unit (e.g., "10.00 GBP")
        amount_off: String,
    },

    /// Promo code table
    PromoCode {
        /// Promotion name
        name: String,

        /// Code -> percentage (e.g., `VIP20: "20%"`)
        codes: FxHashMap<String, String>,
    },
}

impl PromotionFixture {
    /// Convert to `PromotionMeta` and `Promotion`
    ///
    /// Amounts must be in `currency` when one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if an amount or percentage is invalid, or an amount is
    /// in a different currency.
    pub fn try_into_promotion(
        self,
        currency: Option<&'static Currency>,
    ) -> Result<(PromotionMeta, Promotion<'static>), FixtureError> {
        match self {
            PromotionFixture::Threshold {
                name,
                threshold,
                discount,
            } => {
                let threshold = parse_amount(&threshold, currency)?;
                let percent = parse_percentage(&discount)?;

                Ok((
                    PromotionMeta { name },
                    ThresholdPromotion::new(threshold, percent).into(),
                ))
            }
            PromotionFixture::ProductDiscount {
                name,
                product_id,
                amount_off,
            } => {
                let amount_off = parse_amount(&amount_off, currency)?;

                Ok((
                    PromotionMeta { name },
                    ProductDiscountPromotion::new(product_id, amount_off).into(),
                ))
            }
            PromotionFixture::PromoCode { name, codes } => {
                let codes = codes
                    .into_iter()
                    .map(|(code, percent)| {
                        parse_percentage(&percent).map(|percent| (code, percent))
                    })
                    .collect::<Result<FxHashMap<_, _>, FixtureError>>()?;

                Ok((
                    PromotionMeta { name },
                    PromoCodePromotion::new(codes).into(),
                ))
            }
        }
    }
}

fn parse_amount(
    s: &str,
    expected: Option<&'static Currency>,
) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, currency) = parse_price(s)?;

    match expected {
        Some(expected) if expected != currency => Err(FixtureError::CurrencyMismatch(
            expected.iso_alpha_code.to_string(),
            currency.iso_alpha_code.to_string(),
        )),
        _ => Ok(Money::from_minor(minor_units, currency)),
    }
}
