//! Cart Promotions
//!
//! A small promotion engine: price a shopping cart against a list of
//! independent, pluggable promotion rules and get back the total, the
//! aggregated discount and the final price.
//!
//! ```
//! use cart_promotions::prelude::*;
//! use decimal_percentage::Percentage;
//! use rust_decimal::Decimal;
//! use rusty_money::{Money, iso::GBP};
//!
//! # fn main() -> Result<(), CartError> {
//! let cart = Cart::with_items(
//!     [
//!         CartItem::new("A1", "Widget", Money::from_minor(10_000, GBP), 2),
//!         CartItem::new("B2", "Gadget", Money::from_minor(5_000, GBP), 1),
//!     ],
//!     GBP,
//! )?
//! .with_promo_code("VIP20");
//!
//! let engine = PromotionEngine::default()
//!     .with_rule(ThresholdPromotion::new(
//!         Money::from_minor(15_000, GBP),
//!         Percentage::from(Decimal::new(5, 2)),
//!     ))
//!     .with_rule(ProductDiscountPromotion::new("A1", Money::from_minor(1_000, GBP)))
//!     .with_rule(PromoCodePromotion::from_codes([
//!         ("SUMMER10", Percentage::from(Decimal::new(10, 2))),
//!         ("VIP20", Percentage::from(Decimal::new(20, 2))),
//!     ]));
//!
//! let result = engine.process_discount(&cart);
//!
//! assert_eq!(result.total, Money::from_minor(25_000, GBP));
//! assert_eq!(result.discount, Money::from_minor(8_250, GBP));
//! assert_eq!(result.final_total, Money::from_minor(16_750, GBP));
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod discounts;
pub mod engine;
pub mod fixtures;
pub mod items;
pub mod logging;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod receipt;
pub mod utils;
