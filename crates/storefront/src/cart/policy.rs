//! Limits applied to every cart edit.

use rust_decimal::Decimal;

use crate::config::StorefrontConfig;

/// Highest cart total the storefront accepts, `9999.99`.
pub const DEFAULT_PRICE_CEILING: Decimal = Decimal::from_parts(999_999, 0, 0, false, 2);

/// Cart-wide limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartPolicy {
    /// Inclusive upper bound for the cart total.
    pub price_ceiling: Decimal,
}

impl CartPolicy {
    #[must_use]
    pub const fn new(price_ceiling: Decimal) -> Self {
        Self { price_ceiling }
    }

    /// Whether `total` is within the ceiling. A total equal to the ceiling is allowed.
    #[must_use]
    pub fn allows(&self, total: Decimal) -> bool {
        total <= self.price_ceiling
    }
}

impl Default for CartPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_CEILING)
    }
}

impl From<&StorefrontConfig> for CartPolicy {
    fn from(config: &StorefrontConfig) -> Self {
        Self::new(config.price_ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_ceiling() {
        assert_eq!(CartPolicy::default().price_ceiling, dec!(9999.99));
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let policy = CartPolicy::default();
        assert!(policy.allows(dec!(9999.99)));
        assert!(!policy.allows(dec!(10000.00)));
    }
}
