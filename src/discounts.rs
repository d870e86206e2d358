//! Discounts

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

/// Calculate `percent` of an amount in minor units.
///
/// The result is rounded to the nearest minor unit, midpoint away from zero.
/// Values outside the `i64` range saturate at the bound matching the sign of
/// the product.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> i64 {
    // decimal_percentage doesn't expose the underlying Decimal
    let fraction = (*percent) * Decimal::ONE;

    fraction
        .checked_mul(Decimal::from(minor))
        .map(|applied| applied.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .unwrap_or_else(|| {
            if fraction.is_sign_negative() == (minor < 0) {
                i64::MAX
            } else {
                i64::MIN
            }
        })
}

/// Calculate `percent` of a money amount, in the same currency.
pub fn percent_of<'a>(amount: &Money<'a, Currency>, percent: &Percentage) -> Money<'a, Currency> {
    Money::from_minor(
        percent_of_minor(percent, amount.to_minor_units()),
        amount.currency(),
    )
}

/// Express a fractional percentage in points (`0.05` becomes `5`).
pub fn percent_points(percent: &Percentage) -> Decimal {
    ((*percent) * Decimal::ONE_HUNDRED).normalize()
}
