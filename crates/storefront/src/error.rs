//! Errors raised while loading or addressing a cart.
//!
//! These are caller mistakes (a malformed render payload, an id that is not in
//! the cart). The two recoverable editing outcomes, out of stock and price
//! ceiling, are not errors; see [`crate::cart::Rejection`].

use glyke_core::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Cart-level error type for the storefront.
#[derive(Debug, Error)]
pub enum CartError {
    /// The render payload could not be decoded.
    #[error("Invalid cart payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// No line with this product id exists in the cart.
    #[error("Unknown cart line: product {0}")]
    UnknownLine(ProductId),

    /// The payload lists the same product twice.
    #[error("Duplicate cart line: product {0}")]
    DuplicateLine(ProductId),

    /// A unit price in the payload is below zero.
    #[error("Negative price for product {0}")]
    NegativePrice(ProductId),

    /// A rendered quantity is larger than the stock the server reported.
    #[error("Quantity {quantity} for product {product_id} exceeds stock {stock}")]
    QuantityExceedsStock {
        product_id: ProductId,
        quantity: u32,
        stock: u32,
    },

    /// A rendered quantity is larger than the per-line maximum.
    #[error("Quantity {quantity} for product {product_id} exceeds maximum {max}")]
    QuantityExceedsMaximum {
        product_id: ProductId,
        quantity: u32,
        max: u32,
    },

    /// A line or cart amount is too large to represent.
    #[error("Amount overflow while pricing product {0}")]
    AmountOverflow(ProductId),

    /// The rendered cart is already over the price ceiling.
    #[error("Cart total {total} exceeds ceiling {ceiling}")]
    CeilingExceeded { total: Decimal, ceiling: Decimal },
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
