//! Receipt

use std::io;

use rusty_money::Money;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    engine::{DiscountResult, PromotionEngine, RuleApplication},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// A priced cart: totals plus each promotion's contribution.
#[derive(Debug, Clone)]
pub struct Receipt<'c> {
    result: DiscountResult<'c>,
    applications: Vec<RuleApplication<'c>>,
}

impl<'c> Receipt<'c> {
    /// Price `cart` with `engine`.
    pub fn from_engine(engine: &PromotionEngine<'_>, cart: &Cart<'c>) -> Self {
        let applications = engine.breakdown(cart);

        Self {
            result: DiscountResult::from_applications(cart, &applications),
            applications,
        }
    }

    /// Totals for the cart
    pub fn result(&self) -> &DiscountResult<'c> {
        &self.result
    }

    /// Each promotion's contribution, in engine order
    pub fn applications(&self) -> &[RuleApplication<'c>] {
        &self.applications
    }

    /// Writes the receipt as tables: line items, promotions, then totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write, cart: &Cart<'_>) -> Result<(), ReceiptError> {
        let mut items = Builder::default();

        items.push_record(["Product", "Item", "Unit Price", "Qty", "Line Total"]);

        for item in cart.iter() {
            items.push_record([
                item.product_id().to_string(),
                item.name().to_string(),
                item.price().to_string(),
                item.quantity().to_string(),
                Money::from_minor(item.line_total_minor(), cart.currency()).to_string(),
            ]);
        }

        let mut items = items.build();
        items
            .with(Style::modern_rounded())
            .modify(Rows::first(), Alignment::center())
            .modify(Columns::new(2..), Alignment::right());

        writeln!(out, "{items}")?;

        if let Some(code) = cart.promo_code() {
            writeln!(out, "Promo code: {code}")?;
        }

        if !self.applications.is_empty() {
            let mut promotions = Builder::default();

            promotions.push_record(["Promotion", "Discount"]);

            for app in &self.applications {
                promotions.push_record([app.name.clone(), format!("-{}", app.discount)]);
            }

            let mut promotions = promotions.build();
            promotions
                .with(Style::modern_rounded())
                .modify(Columns::new(1..), Alignment::right());

            writeln!(out, "{promotions}")?;
        }

        let mut totals = Builder::default();

        totals.push_record(["Total".to_string(), self.result.total.to_string()]);
        totals.push_record(["Discount".to_string(), self.result.discount.to_string()]);
        totals.push_record(["Final".to_string(), self.result.final_total.to_string()]);

        let mut totals = totals.build();
        totals
            .with(Style::modern_rounded())
            .modify(Columns::new(1..), Alignment::right());

        writeln!(out, "{totals}")?;

        Ok(())
    }
}
