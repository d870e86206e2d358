//! Checkout Example
//!
//! Prices a cart from a fixture set and prints the receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-p` to try a different promo code
//! Use `--log-level debug` to see each promotion's contribution

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cart_promotions::{
    fixtures::Fixture, logging::init_subscriber, receipt::Receipt, utils::CheckoutArgs,
};

/// Checkout Example
pub fn main() -> Result<()> {
    let args = CheckoutArgs::parse();

    init_subscriber(&args.logging)?;

    let fixture = Fixture::from_set_at(&args.fixtures_dir, &args.fixture)?;

    let cart = match args.promo_code {
        Some(code) => fixture.cart()?.with_promo_code(code),
        None => fixture.cart()?,
    };

    let engine = fixture.engine();

    info!(
        fixture = %args.fixture,
        items = cart.len(),
        promotions = engine.len(),
        "pricing cart"
    );

    let receipt = Receipt::from_engine(&engine, &cart);

    let stdout = io::stdout();
    let handle = stdout.lock();

    receipt.write_to(handle, &cart)?;

    Ok(())
}
