//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GLYKE_PRICE_CEILING` - Highest accepted cart total (default: 9999.99)
//! - `GLYKE_CURRENCY` - Currency for displayed amounts (default: USD)

use std::str::FromStr;

use glyke_core::CurrencyCode;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::cart::DEFAULT_PRICE_CEILING;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Inclusive upper bound for a cart total
    pub price_ceiling: Decimal,
    /// Currency used when formatting totals
    pub currency: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            price_ceiling: DEFAULT_PRICE_CEILING,
            currency: CurrencyCode::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid, or the
    /// ceiling is not positive.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let price_ceiling: Decimal =
            parse_optional(&lookup, "GLYKE_PRICE_CEILING")?.unwrap_or(DEFAULT_PRICE_CEILING);
        if price_ceiling <= Decimal::ZERO {
            return Err(ConfigError::InvalidEnvVar(
                "GLYKE_PRICE_CEILING".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let currency = parse_optional(&lookup, "GLYKE_CURRENCY")?.unwrap_or_default();

        Ok(Self {
            price_ceiling,
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, treating blank values as unset.
fn parse_optional<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use rust_decimal_macros::dec;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.price_ceiling, dec!(9999.99));
        assert_eq!(config.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("GLYKE_PRICE_CEILING", "500.00"),
            ("GLYKE_CURRENCY", "gbp"),
        ]))
        .unwrap();
        assert_eq!(config.price_ceiling, dec!(500.00));
        assert_eq!(config.currency, CurrencyCode::GBP);
    }

    #[test]
    fn test_blank_is_unset() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("GLYKE_PRICE_CEILING", "  ")])).unwrap();
        assert_eq!(config.price_ceiling, DEFAULT_PRICE_CEILING);
    }

    #[test]
    fn test_invalid_values() {
        let err = StorefrontConfig::from_lookup(lookup(&[("GLYKE_PRICE_CEILING", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "GLYKE_PRICE_CEILING"));

        assert!(StorefrontConfig::from_lookup(lookup(&[("GLYKE_PRICE_CEILING", "0")])).is_err());
        assert!(StorefrontConfig::from_lookup(lookup(&[("GLYKE_CURRENCY", "XYZ")])).is_err());
    }
}
