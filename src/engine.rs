//! Promotion Engine
//!
//! Evaluates every configured promotion against the same cart and aggregates
//! their contributions. Promotions are independent: there is no stacking
//! order, exclusivity or capping, so the discount can exceed the subtotal and
//! the final total can go negative.

use rusty_money::{Money, iso::Currency};
use tracing::{debug, instrument};

use crate::{cart::Cart, promotions::PromotionRule};

/// Totals produced by [`PromotionEngine::process_discount`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountResult<'a> {
    /// Sum of `price × quantity` over all items
    pub total: Money<'a, Currency>,

    /// Sum of every promotion's contribution
    pub discount: Money<'a, Currency>,

    /// `total - discount`, unclamped
    pub final_total: Money<'a, Currency>,
}

/// One promotion's contribution to a cart's discount.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleApplication<'a> {
    /// Display name of the promotion
    pub name: String,

    /// Amount taken off by the promotion
    pub discount: Money<'a, Currency>,
}

impl<'a> DiscountResult<'a> {
    /// Totals for `cart` given each promotion's contribution.
    pub fn from_applications(cart: &Cart<'a>, applications: &[RuleApplication<'a>]) -> Self {
        let discount_minor = applications
            .iter()
            .map(|application| application.discount.to_minor_units())
            .fold(0_i64, i64::saturating_add);

        Self::with_discount(cart, Money::from_minor(discount_minor, cart.currency()))
    }

    fn with_discount(cart: &Cart<'a>, discount: Money<'a, Currency>) -> Self {
        let total = cart.subtotal();

        let final_total = Money::from_minor(
            total
                .to_minor_units()
                .saturating_sub(discount.to_minor_units()),
            cart.currency(),
        );

        Self {
            total,
            discount,
            final_total,
        }
    }
}

#[derive(Debug)]
struct ConfiguredRule<'r> {
    name: String,
    rule: Box<dyn PromotionRule + 'r>,
}

/// Promotion engine
///
/// Holds an ordered list of promotions. The list is fixed once the engine is
/// built; the engine itself is stateless between calls and may be shared
/// across threads.
#[derive(Debug, Default)]
pub struct PromotionEngine<'r> {
    rules: Vec<ConfiguredRule<'r>>,
}

impl<'r> PromotionEngine<'r> {
    /// Create an engine from boxed promotions, evaluated in the given order.
    pub fn new(rules: Vec<Box<dyn PromotionRule + 'r>>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| ConfiguredRule {
                    name: rule.describe(),
                    rule,
                })
                .collect(),
        }
    }

    /// Append a promotion, named by its own description.
    #[must_use]
    pub fn with_rule(self, rule: impl PromotionRule + 'r) -> Self {
        let name = rule.describe();

        self.with_named_rule(name, rule)
    }

    /// Append a promotion with an explicit display name.
    #[must_use]
    pub fn with_named_rule(
        mut self,
        name: impl Into<String>,
        rule: impl PromotionRule + 'r,
    ) -> Self {
        self.rules.push(ConfiguredRule {
            name: name.into(),
            rule: Box::new(rule),
        });

        self
    }

    /// Number of configured promotions
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no promotions are configured
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Sum of every promotion's discount for `cart`, added in configured order.
    #[instrument(skip_all, fields(items = cart.len(), rules = self.rules.len()))]
    pub fn discount_calculation<'c>(&self, cart: &Cart<'c>) -> Money<'c, Currency> {
        let discount_minor = self
            .rules
            .iter()
            .map(|configured| {
                let discount = configured.rule.process(cart);

                debug!(rule = %configured.name, discount = %discount, "promotion evaluated");

                discount.to_minor_units()
            })
            .fold(0_i64, i64::saturating_add);

        Money::from_minor(discount_minor, cart.currency())
    }

    /// Price `cart`: subtotal, aggregated discount and the resulting total.
    #[instrument(skip_all, fields(items = cart.len(), promo_code = cart.promo_code()))]
    pub fn process_discount<'c>(&self, cart: &Cart<'c>) -> DiscountResult<'c> {
        let result = DiscountResult::with_discount(cart, self.discount_calculation(cart));

        debug!(
            total = %result.total,
            discount = %result.discount,
            final_total = %result.final_total,
            "cart priced"
        );

        result
    }

    /// Each promotion's contribution for `cart`, in configured order.
    ///
    /// Every promotion runs once; pair with [`DiscountResult::from_applications`]
    /// for totals that match the rows.
    #[instrument(skip_all, fields(items = cart.len(), rules = self.rules.len()))]
    pub fn breakdown<'c>(&self, cart: &Cart<'c>) -> Vec<RuleApplication<'c>> {
        self.rules
            .iter()
            .map(|configured| {
                let discount = configured.rule.process(cart);

                debug!(rule = %configured.name, discount = %discount, "promotion evaluated");

                RuleApplication {
                    name: configured.name.clone(),
                    discount,
                }
            })
            .collect()
    }
}
