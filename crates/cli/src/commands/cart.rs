//! Cart replay command.
//!
//! Loads a rendered cart payload and runs editor commands against it, the
//! same way the cart page does on user input.
//!
//! # Usage
//!
//! ```bash
//! # Type 3 into line 1, click + on line 2, then remove line 1
//! glyke cart cart.json set:1:3 inc:2 remove:1
//! ```
//!
//! # Operations
//!
//! - `set:<product_id>:<raw input>` - set a quantity from raw input
//! - `inc:<product_id>` / `dec:<product_id>` - stepper clicks
//! - `remove:<product_id>` - remove a line
//!
//! # Environment Variables
//!
//! - `GLYKE_PRICE_CEILING` - Highest accepted cart total
//! - `GLYKE_CURRENCY` - Currency when the payload names none

use std::path::Path;
use std::str::FromStr;

use glyke_core::ProductId;
use glyke_storefront::cart::{Cart, CartEditor, CartPayload, CartPolicy, Step, TracingNotifier};
use glyke_storefront::{CartError, ConfigError, StorefrontConfig, TotalsView, UpdateResult};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while replaying cart operations.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// The payload file could not be read.
    #[error("Failed to read payload {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The payload or an operation was rejected by the cart.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// An operation string could not be parsed.
    #[error("Invalid operation '{0}'. Expected set:<id>:<qty>, inc:<id>, dec:<id> or remove:<id>")]
    InvalidOp(String),
}

/// One editor command given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Set(ProductId, String),
    Step(ProductId, Step),
    Remove(ProductId),
}

impl FromStr for CartOp {
    type Err = CartCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CartCommandError::InvalidOp(s.to_string());
        let mut parts = s.splitn(3, ':');
        let verb = parts.next().ok_or_else(invalid)?;
        let id: ProductId = parts
            .next()
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;
        let rest = parts.next();

        match (verb, rest) {
            ("set", Some(raw)) => Ok(Self::Set(id, raw.to_string())),
            ("inc", None) => Ok(Self::Step(id, Step::Increment)),
            ("dec", None) => Ok(Self::Step(id, Step::Decrement)),
            ("remove", None) => Ok(Self::Remove(id)),
            _ => Err(invalid()),
        }
    }
}

/// Output line for one replayed operation.
#[derive(Debug, Serialize)]
pub struct ReplayLine {
    pub result: UpdateResult,
    pub view: TotalsView,
}

/// Replay operations against a payload file.
///
/// # Errors
///
/// Returns an error if the configuration, the payload, or an operation is invalid.
pub fn replay(payload_path: &Path, ops: &[String]) -> Result<Vec<ReplayLine>, CartCommandError> {
    let config = StorefrontConfig::from_env()?;
    let json = std::fs::read_to_string(payload_path).map_err(|source| CartCommandError::Io {
        path: payload_path.display().to_string(),
        source,
    })?;
    let ops = ops
        .iter()
        .map(|op| op.parse::<CartOp>())
        .collect::<Result<Vec<_>, _>>()?;

    replay_json(&json, &ops, &config)
}

/// Replay parsed operations against a JSON payload.
///
/// # Errors
///
/// Returns an error if the payload is invalid or an operation names an unknown line.
pub fn replay_json(
    json: &str,
    ops: &[CartOp],
    config: &StorefrontConfig,
) -> Result<Vec<ReplayLine>, CartCommandError> {
    let mut payload = CartPayload::from_json(json)?;
    payload.currency.get_or_insert(config.currency);

    let policy = CartPolicy::from(config);
    let cart = Cart::from_payload(payload, &policy)?;
    tracing::info!(lines = cart.len(), "Replaying {} operation(s)", ops.len());

    let mut editor = CartEditor::new(cart, policy, TracingNotifier);
    let mut output = Vec::with_capacity(ops.len());
    for op in ops {
        let result = match op {
            CartOp::Set(id, raw) => editor.set_quantity(*id, raw)?,
            CartOp::Step(id, step) => editor.step_quantity(*id, *step)?,
            CartOp::Remove(id) => editor.remove_line(*id)?,
        };
        let view = TotalsView::new(&result, editor.cart().currency());
        output.push(ReplayLine { result, view });
    }
    Ok(output)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use glyke_storefront::Outcome;

    use super::*;

    const PAYLOAD: &str = r#"{"lines": [
        {"product_id": 1, "end_user_price": "10.00", "quantity": 2, "stock": 5, "max_quantity": 10},
        {"product_id": 2, "end_user_price": "5.00", "quantity": 1, "stock": 5, "max_quantity": 10}
    ]}"#;

    #[test]
    fn test_parse_ops() {
        assert_eq!(
            "set:1:3".parse::<CartOp>().unwrap(),
            CartOp::Set(ProductId::new(1), "3".to_string())
        );
        assert_eq!(
            "set:1:".parse::<CartOp>().unwrap(),
            CartOp::Set(ProductId::new(1), String::new())
        );
        assert_eq!(
            "dec:4".parse::<CartOp>().unwrap(),
            CartOp::Step(ProductId::new(4), Step::Decrement)
        );
        assert_eq!(
            "remove:2".parse::<CartOp>().unwrap(),
            CartOp::Remove(ProductId::new(2))
        );
        assert!("inc".parse::<CartOp>().is_err());
        assert!("inc:x".parse::<CartOp>().is_err());
        assert!("inc:1:2".parse::<CartOp>().is_err());
        assert!("buy:1".parse::<CartOp>().is_err());
    }

    #[test]
    fn test_replay_json() {
        let ops: Vec<CartOp> = ["set:1:3", "set:1:6", "remove:1", "remove:2"]
            .iter()
            .map(|op| op.parse().unwrap())
            .collect();
        let lines = replay_json(PAYLOAD, &ops, &StorefrontConfig::default()).unwrap();

        let outcomes: Vec<Outcome> = lines.iter().map(|line| line.result.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Committed,
                Outcome::RejectedStock,
                Outcome::Removed,
                Outcome::Removed
            ]
        );
        assert_eq!(lines.first().unwrap().view.cart_total, "$35.00");
        assert!(lines.last().unwrap().view.show_empty_placeholder);
    }

    #[test]
    fn test_replay_unknown_line() {
        let ops = vec!["inc:9".parse::<CartOp>().unwrap()];
        assert!(matches!(
            replay_json(PAYLOAD, &ops, &StorefrontConfig::default()),
            Err(CartCommandError::Cart(CartError::UnknownLine(_)))
        ));
    }
}
