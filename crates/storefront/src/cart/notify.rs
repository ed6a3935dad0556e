//! Rejection notices raised by the cart editor.
//!
//! The editor never renders dialogs itself. It hands each [`Rejection`] to a
//! [`Notifier`], and the presentation layer decides how to show it.

use glyke_core::ProductId;
use rust_decimal::Decimal;
use serde::Serialize;

/// A recoverable reason a quantity change was not committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// The requested quantity is more than the warehouse holds.
    #[error("Only {available} items available in stock")]
    OutOfStock {
        /// Units in stock for the line.
        available: u32,
    },
    /// Committing the change would push the cart total past the ceiling.
    #[error("Total price exceeds {ceiling}")]
    PriceCeilingExceeded {
        /// The ceiling that was hit.
        ceiling: Decimal,
    },
}

/// Capability for surfacing rejections to the user.
pub trait Notifier {
    /// Report that a change to `product_id` was rejected.
    fn notify(&self, product_id: ProductId, rejection: &Rejection);
}

impl<F> Notifier for F
where
    F: Fn(ProductId, &Rejection),
{
    fn notify(&self, product_id: ProductId, rejection: &Rejection) {
        self(product_id, rejection);
    }
}

/// Notifier that records rejections as `warn` events.
///
/// Used when there is no modal to show, such as in the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, product_id: ProductId, rejection: &Rejection) {
        tracing::warn!(product_id = %product_id, notice = %rejection, "Cart change rejected");
    }
}
