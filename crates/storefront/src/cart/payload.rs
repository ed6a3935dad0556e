//! Initial cart state as rendered by the server.
//!
//! The page embeds the cart as JSON next to the table it renders. Decimals
//! may be given as strings (`"10.00"`) or numbers.

use std::collections::HashSet;

use glyke_core::{CurrencyCode, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::{Cart, CartLine};
use super::policy::CartPolicy;
use crate::error::{CartError, Result};

/// Cart payload handed over by the server render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartPayload {
    /// Display currency; the storefront default applies when absent.
    #[serde(default)]
    pub currency: Option<CurrencyCode>,
    pub lines: Vec<LinePayload>,
}

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePayload {
    pub product_id: ProductId,
    pub end_user_price: Decimal,
    #[serde(default)]
    pub selling_price: Option<Decimal>,
    pub quantity: u32,
    pub stock: u32,
    pub max_quantity: u32,
}

impl CartPayload {
    /// Decode a payload from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Payload` if the JSON does not match the payload shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Cart {
    /// Build a cart from the server payload, checking every line and the cart total.
    ///
    /// # Errors
    ///
    /// Returns an error if a product appears twice, a price is negative, a
    /// quantity is above its stock or maximum, an amount overflows, or the
    /// total is over the policy's ceiling.
    pub fn from_payload(payload: CartPayload, policy: &CartPolicy) -> Result<Self> {
        let mut seen = HashSet::with_capacity(payload.lines.len());
        let mut lines = Vec::with_capacity(payload.lines.len());

        for row in payload.lines {
            let product_id = row.product_id;
            if !seen.insert(product_id) {
                return Err(CartError::DuplicateLine(product_id));
            }
            if row.end_user_price.is_sign_negative()
                || row.selling_price.is_some_and(|p| p.is_sign_negative())
            {
                return Err(CartError::NegativePrice(product_id));
            }
            if row.quantity > row.stock {
                return Err(CartError::QuantityExceedsStock {
                    product_id,
                    quantity: row.quantity,
                    stock: row.stock,
                });
            }
            if row.quantity > row.max_quantity {
                return Err(CartError::QuantityExceedsMaximum {
                    product_id,
                    quantity: row.quantity,
                    max: row.max_quantity,
                });
            }

            lines.push(CartLine::new(
                product_id,
                row.end_user_price,
                row.selling_price,
                row.quantity,
                row.stock,
                row.max_quantity,
            )?);
        }

        let cart = Self::from_lines(payload.currency.unwrap_or_default(), lines)?;
        if !policy.allows(cart.total_end_user_price()) {
            return Err(CartError::CeilingExceeded {
                total: cart.total_end_user_price(),
                ceiling: policy.price_ceiling,
            });
        }

        tracing::debug!(
            lines = cart.len(),
            total = %cart.total_end_user_price(),
            "Cart loaded from payload"
        );
        Ok(cart)
    }
}
