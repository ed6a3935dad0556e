//! Display-ready totals for the cart page.

use glyke_core::{CurrencyCode, Price};
use serde::Serialize;

use super::editor::UpdateResult;
use super::model::Cart;

/// Formatted values written back to the page after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsView {
    pub quantity: String,
    pub line_total: String,
    pub cart_total: String,
    pub item_count: String,
    pub selling_total: Option<String>,
    /// Text for the modal when the change was rejected.
    pub notice: Option<String>,
    pub show_empty_placeholder: bool,
}

impl TotalsView {
    /// Format an editor result in the cart's currency.
    #[must_use]
    pub fn new(result: &UpdateResult, currency: CurrencyCode) -> Self {
        let money = |amount| Price::new(amount, currency).display();
        Self {
            quantity: result.quantity.to_string(),
            line_total: money(result.line_total),
            cart_total: money(result.cart_total),
            item_count: result.item_count.to_string(),
            selling_total: result.selling_total.map(money),
            notice: result.error.map(|rejection| rejection.to_string()),
            show_empty_placeholder: result.is_cart_empty(),
        }
    }
}

/// Cart summary shown before any edit, e.g. on first render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummaryView {
    pub cart_total: String,
    pub item_count: String,
    pub selling_total: Option<String>,
}

impl From<&Cart> for CartSummaryView {
    fn from(cart: &Cart) -> Self {
        let currency = cart.currency();
        let totals = cart.totals();
        Self {
            cart_total: Price::new(totals.cart_total, currency).display(),
            item_count: totals.item_count.to_string(),
            selling_total: totals
                .selling_total
                .map(|amount| Price::new(amount, currency).display()),
        }
    }
}
