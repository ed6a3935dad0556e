//! Cart aggregate and its lines.
//!
//! A [`Cart`] is built once from the server-rendered payload and afterwards
//! changed only through [`super::CartEditor`]. Totals are cached on the cart
//! and recomputed from the lines after every committed change.

use glyke_core::{CurrencyCode, ProductId, extended_price};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{CartError, Result};

/// One row of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub(crate) product_id: ProductId,
    pub(crate) unit_end_user_price: Decimal,
    pub(crate) unit_selling_price: Option<Decimal>,
    pub(crate) quantity: u32,
    pub(crate) stock_available: u32,
    pub(crate) max_allowed_quantity: u32,
    pub(crate) extended_end_user_price: Decimal,
}

impl CartLine {
    /// Create a line and compute its extended price.
    ///
    /// # Errors
    ///
    /// Returns `CartError::AmountOverflow` if the extended price cannot be represented.
    pub fn new(
        product_id: ProductId,
        unit_end_user_price: Decimal,
        unit_selling_price: Option<Decimal>,
        quantity: u32,
        stock_available: u32,
        max_allowed_quantity: u32,
    ) -> Result<Self> {
        let extended_end_user_price = extended_price(unit_end_user_price, quantity)
            .ok_or(CartError::AmountOverflow(product_id))?;
        Ok(Self {
            product_id,
            unit_end_user_price,
            unit_selling_price,
            quantity,
            stock_available,
            max_allowed_quantity,
            extended_end_user_price,
        })
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub const fn unit_end_user_price(&self) -> Decimal {
        self.unit_end_user_price
    }

    /// Selling price, falling back to the end-user price when not discounted.
    #[must_use]
    pub fn unit_selling_price(&self) -> Decimal {
        self.unit_selling_price.unwrap_or(self.unit_end_user_price)
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub const fn stock_available(&self) -> u32 {
        self.stock_available
    }

    #[must_use]
    pub const fn max_allowed_quantity(&self) -> u32 {
        self.max_allowed_quantity
    }

    /// Line total at the end-user price.
    #[must_use]
    pub const fn extended_end_user_price(&self) -> Decimal {
        self.extended_end_user_price
    }

    /// Whether this line shows a selling price different from what the customer pays.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.unit_selling_price
            .is_some_and(|selling| selling != self.unit_end_user_price)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32, extended: Decimal) {
        self.quantity = quantity;
        self.extended_end_user_price = extended;
    }
}

/// Totals of the whole cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Sum of line totals at the end-user price.
    pub cart_total: Decimal,
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line totals at the selling price, present when any line is discounted.
    pub selling_total: Option<Decimal>,
}

/// Ordered cart lines keyed by product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    pub(crate) currency: CurrencyCode,
    pub(crate) lines: Vec<CartLine>,
    pub(crate) totals: CartTotals,
}

impl Cart {
    /// Build a cart from lines in display order.
    ///
    /// This does not validate stock or ceiling invariants; use
    /// [`Cart::from_payload`] for data coming from the page.
    ///
    /// # Errors
    ///
    /// Returns `CartError::AmountOverflow` if a total cannot be represented.
    pub fn from_lines(currency: CurrencyCode, lines: Vec<CartLine>) -> Result<Self> {
        let totals = compute_totals(lines.iter().map(|line| (line, line.quantity)))?;
        Ok(Self {
            currency,
            lines,
            totals,
        })
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current cached totals.
    #[must_use]
    pub const fn totals(&self) -> CartTotals {
        self.totals
    }

    #[must_use]
    pub const fn total_end_user_price(&self) -> Decimal {
        self.totals.cart_total
    }

    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.totals.item_count
    }

    #[must_use]
    pub const fn total_selling_price(&self) -> Option<Decimal> {
        self.totals.selling_total
    }

    /// Totals the cart would have with `product_id` at `quantity`.
    pub(crate) fn totals_with(&self, product_id: ProductId, quantity: u32) -> Result<CartTotals> {
        compute_totals(self.lines.iter().map(|line| {
            if line.product_id == product_id {
                (line, quantity)
            } else {
                (line, line.quantity)
            }
        }))
    }

    /// Commit a quantity together with the totals computed for it.
    pub(crate) fn commit(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        line_total: Decimal,
        totals: CartTotals,
    ) {
        if let Some(line) = self.line_mut(product_id) {
            line.set_quantity(quantity, line_total);
            self.totals = totals;
        }
    }

    pub(crate) fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self
            .lines
            .iter()
            .position(|line| line.product_id == product_id)?;
        let removed = self.lines.remove(index);
        // Dropping a line only shrinks the sums, so this cannot overflow.
        if let Ok(totals) = compute_totals(self.lines.iter().map(|line| (line, line.quantity))) {
            self.totals = totals;
        }
        Some(removed)
    }
}

/// Sum line totals with each line at the paired quantity.
fn compute_totals<'a, I>(rows: I) -> Result<CartTotals>
where
    I: IntoIterator<Item = (&'a CartLine, u32)>,
{
    let mut cart_total = Decimal::ZERO;
    let mut selling_total = Decimal::ZERO;
    let mut item_count: u64 = 0;
    let mut discounted = false;

    for (line, quantity) in rows {
        let overflow = || CartError::AmountOverflow(line.product_id);
        let end_user = extended_price(line.unit_end_user_price, quantity).ok_or_else(overflow)?;
        let selling = extended_price(line.unit_selling_price(), quantity).ok_or_else(overflow)?;
        cart_total = cart_total.checked_add(end_user).ok_or_else(overflow)?;
        selling_total = selling_total.checked_add(selling).ok_or_else(overflow)?;
        item_count += u64::from(quantity);
        discounted |= line.is_discounted();
    }

    Ok(CartTotals {
        cart_total,
        item_count,
        selling_total: discounted.then_some(selling_total),
    })
}
