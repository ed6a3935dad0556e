//! Glyke Storefront library.
//!
//! Headless core of the storefront pages: the cart line editor and the
//! collapsible layout panels. Presentation code calls the command functions
//! here and renders what they return; nothing in this crate touches markup.
//!
//! # Modules
//!
//! - [`cart`] - Cart model, render payload, line editor, and totals views
//! - [`panels`] - Sidebar/profile panel state and navigation highlighting
//! - [`config`] - Environment configuration
//! - [`error`] - Cart loading and lookup errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod panels;

pub use cart::{
    Cart, CartEditor, CartLine, CartPayload, CartPolicy, CartState, Notifier, Outcome, Rejection,
    Step, TotalsView, TracingNotifier, UpdateResult,
};
pub use config::{ConfigError, StorefrontConfig};
pub use error::CartError;
pub use panels::{PanelId, PanelSet};
