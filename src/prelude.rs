//! Cart Promotions prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    engine::{DiscountResult, PromotionEngine, RuleApplication},
    fixtures::{Fixture, FixtureError},
    items::CartItem,
    promotions::{
        Promotion, PromotionMeta, PromotionRule, product_discount::ProductDiscountPromotion,
        promo_code::PromoCodePromotion, threshold::ThresholdPromotion,
    },
    receipt::{Receipt, ReceiptError},
};
