//! Cart line editor.
//!
//! Every quantity change goes through [`CartEditor::apply_quantity`]:
//!
//! 1. clamp the request to `[0, max_allowed_quantity]`
//! 2. reject if the clamped value is above the line's stock
//! 3. price the line and the cart with the new value
//! 4. reject if the cart total would pass the price ceiling, or is too large
//!    to represent at all
//! 5. otherwise commit and recompute all totals
//!
//! A rejected change leaves the cart exactly as it was. The result then
//! reports the unchanged totals so the page can restore the quantity field.

use glyke_core::{ProductId, extended_price, parse_quantity};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use super::model::{Cart, CartLine};
use super::notify::{Notifier, Rejection};
use super::policy::CartPolicy;
use crate::error::{CartError, Result};

/// Direction of a +/- stepper click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Increment,
    Decrement,
}

/// How an edit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The new quantity was committed.
    Committed,
    /// Nothing to do, e.g. decrementing a line that is already at 1.
    Unchanged,
    /// The line was zeroed and removed from the cart.
    Removed,
    /// Rejected: not enough stock.
    RejectedStock,
    /// Rejected: the cart total would pass the ceiling.
    RejectedCeiling,
}

/// Whether the cart still has lines after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CartState {
    Populated,
    /// No lines left; the page shows its empty-cart placeholder.
    Empty,
}

/// Values recomputed by one editor command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateResult {
    pub product_id: ProductId,
    /// Quantity to display in the line's input after the command.
    pub quantity: u32,
    pub line_total: Decimal,
    pub cart_total: Decimal,
    pub item_count: u64,
    pub selling_total: Option<Decimal>,
    pub outcome: Outcome,
    pub error: Option<Rejection>,
    pub cart_state: CartState,
}

impl UpdateResult {
    /// Whether the requested change was refused.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the cart has no lines left.
    #[must_use]
    pub fn is_cart_empty(&self) -> bool {
        self.cart_state == CartState::Empty
    }
}

/// Applies quantity commands to a cart.
///
/// The editor owns the cart; all mutation needs `&mut self`, so callers
/// sharing an editor must serialize access themselves.
#[derive(Debug)]
pub struct CartEditor<N> {
    cart: Cart,
    policy: CartPolicy,
    notifier: N,
}

impl<N: Notifier> CartEditor<N> {
    #[must_use]
    pub const fn new(cart: Cart, policy: CartPolicy, notifier: N) -> Self {
        Self {
            cart,
            policy,
            notifier,
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn policy(&self) -> &CartPolicy {
        &self.policy
    }

    /// Give the cart back, e.g. to serialize it.
    #[must_use]
    pub fn into_cart(self) -> Cart {
        self.cart
    }

    /// Set a line's quantity from raw user input.
    ///
    /// Input that is not a number counts as `0`; see [`parse_quantity`].
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownLine` if the cart has no line for `product_id`.
    pub fn set_quantity(&mut self, product_id: ProductId, raw: &str) -> Result<UpdateResult> {
        self.apply_quantity(product_id, parse_quantity(raw))
    }

    /// Set a line's quantity to an already parsed value.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownLine` if the cart has no line for `product_id`.
    #[instrument(skip(self))]
    pub fn apply_quantity(&mut self, product_id: ProductId, requested: u32) -> Result<UpdateResult> {
        let line = self
            .cart
            .line(product_id)
            .ok_or(CartError::UnknownLine(product_id))?;

        let clamped = requested.min(line.max_allowed_quantity());
        if clamped > line.stock_available() {
            let rejection = Rejection::OutOfStock {
                available: line.stock_available(),
            };
            tracing::warn!(
                requested = clamped,
                available = line.stock_available(),
                "Quantity exceeds stock"
            );
            let result = self.current(line, Outcome::RejectedStock, Some(rejection));
            self.notifier.notify(product_id, &rejection);
            return Ok(result);
        }

        // An amount too large to represent is necessarily over the ceiling.
        let candidate = extended_price(line.unit_end_user_price(), clamped)
            .zip(self.cart.totals_with(product_id, clamped).ok());
        let Some((candidate_line_total, totals)) =
            candidate.filter(|(_, totals)| self.policy.allows(totals.cart_total))
        else {
            let rejection = Rejection::PriceCeilingExceeded {
                ceiling: self.policy.price_ceiling,
            };
            tracing::warn!(
                requested = clamped,
                candidate_total = ?candidate.map(|(_, totals)| totals.cart_total),
                ceiling = %self.policy.price_ceiling,
                "Cart total would exceed ceiling"
            );
            let result = self.current(line, Outcome::RejectedCeiling, Some(rejection));
            self.notifier.notify(product_id, &rejection);
            return Ok(result);
        };

        self.cart.commit(product_id, clamped, candidate_line_total, totals);

        let result = self.snapshot(product_id, clamped, candidate_line_total, Outcome::Committed);
        tracing::debug!(
            quantity = clamped,
            line_total = %result.line_total,
            cart_total = %result.cart_total,
            item_count = result.item_count,
            "Quantity committed"
        );
        Ok(result)
    }

    /// Move a line's quantity one step up or down.
    ///
    /// Decrementing a line at 1 (or 0) does nothing; removal is explicit via
    /// [`CartEditor::remove_line`].
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownLine` if the cart has no line for `product_id`.
    #[instrument(skip(self))]
    pub fn step_quantity(&mut self, product_id: ProductId, step: Step) -> Result<UpdateResult> {
        let line = self
            .cart
            .line(product_id)
            .ok_or(CartError::UnknownLine(product_id))?;

        let requested = match step {
            Step::Increment => line.quantity().saturating_add(1),
            Step::Decrement if line.quantity() <= 1 => {
                return Ok(self.current(line, Outcome::Unchanged, None));
            }
            Step::Decrement => line.quantity() - 1,
        };

        self.apply_quantity(product_id, requested)
    }

    /// Zero a line through the regular recompute path, then drop it from the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UnknownLine` if the cart has no line for `product_id`.
    #[instrument(skip(self))]
    pub fn remove_line(&mut self, product_id: ProductId) -> Result<UpdateResult> {
        let zeroed = self.apply_quantity(product_id, 0)?;
        if zeroed.is_rejected() {
            return Ok(zeroed);
        }

        self.cart.remove(product_id);
        let mut result = self.snapshot(product_id, 0, Decimal::ZERO, Outcome::Removed);
        if self.cart.is_empty() {
            result.cart_state = CartState::Empty;
            tracing::info!("Last line removed, cart is empty");
        } else {
            tracing::info!(remaining = self.cart.len(), "Cart line removed");
        }
        Ok(result)
    }

    /// Result describing the cart as it stands, for a line that was not changed.
    fn current(&self, line: &CartLine, outcome: Outcome, error: Option<Rejection>) -> UpdateResult {
        let mut result = self.snapshot(
            line.product_id(),
            line.quantity(),
            line.extended_end_user_price(),
            outcome,
        );
        result.error = error;
        result
    }

    fn snapshot(
        &self,
        product_id: ProductId,
        quantity: u32,
        line_total: Decimal,
        outcome: Outcome,
    ) -> UpdateResult {
        let totals = self.cart.totals();
        UpdateResult {
            product_id,
            quantity,
            line_total,
            cart_total: totals.cart_total,
            item_count: totals.item_count,
            selling_total: totals.selling_total,
            outcome,
            error: None,
            cart_state: if self.cart.is_empty() {
                CartState::Empty
            } else {
                CartState::Populated
            },
        }
    }
}
