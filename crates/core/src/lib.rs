//! Glyke Core - Shared types library.
//!
//! This crate provides common types used across all Glyke components:
//! - `storefront` - Cart line editor and page panels for the public shop
//! - `admin` - Staff panel helpers (image staging, data grids)
//! - `cli` - Command-line tools for replaying cart edits
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no logging
//! sinks, no presentation. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
