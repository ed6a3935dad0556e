//! Cart line editing.
//!
//! The cart arrives from the server render as a [`CartPayload`], is validated
//! into a [`Cart`], and is then changed only through a [`CartEditor`]. Each
//! editor command returns an [`UpdateResult`] which the page turns into a
//! [`TotalsView`].

pub mod editor;
pub mod model;
pub mod notify;
pub mod payload;
pub mod policy;
pub mod view;

pub use editor::{CartEditor, CartState, Outcome, Step, UpdateResult};
pub use model::{Cart, CartLine, CartTotals};
pub use notify::{Notifier, Rejection, TracingNotifier};
pub use payload::{CartPayload, LinePayload};
pub use policy::{CartPolicy, DEFAULT_PRICE_CEILING};
pub use view::{CartSummaryView, TotalsView};
