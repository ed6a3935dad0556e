//! Cent-precision arithmetic for cart amounts.
//!
//! Every amount shown to the customer is rounded to two decimal places,
//! half away from zero. Line totals are rounded before they are summed.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by displayed amounts.
pub const CENT_SCALE: u32 = 2;

/// Round an amount to whole cents, half away from zero.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Extended price of `quantity` units at `unit_price`, rounded to cents.
///
/// Returns `None` if the product does not fit in a `Decimal`.
#[must_use]
pub fn extended_price(unit_price: Decimal, quantity: u32) -> Option<Decimal> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .map(round_cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_cents(dec!(1.005)), dec!(1.01));
        assert_eq!(round_cents(dec!(1.004)), dec!(1.00));
        assert_eq!(round_cents(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn test_round_keeps_two_places() {
        assert_eq!(round_cents(dec!(3)).to_string(), "3");
        assert_eq!(round_cents(dec!(3.10)).to_string(), "3.10");
    }

    #[test]
    fn test_extended_price() {
        assert_eq!(extended_price(dec!(10.00), 3), Some(dec!(30.00)));
        assert_eq!(extended_price(dec!(0.335), 3), Some(dec!(1.01)));
        assert_eq!(extended_price(dec!(19.99), 0), Some(Decimal::ZERO));
    }

    #[test]
    fn test_extended_price_overflow() {
        let huge = dec!(100000000000000000000);
        assert_eq!(extended_price(huge, 4_000_000_000), None);
        assert_eq!(extended_price(huge, 0), Some(Decimal::ZERO));
    }
}
