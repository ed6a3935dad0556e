//! Core types for Glyke.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod price;
pub mod quantity;

pub use id::*;
pub use money::{extended_price, round_cents};
pub use price::{CurrencyCode, CurrencyCodeError, Price};
pub use quantity::parse_quantity;
