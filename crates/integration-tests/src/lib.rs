//! Integration tests for Glyke.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p glyke-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_editor` - Cart line editor behavior across payload, editor, and views
//! - `admin_staging` - Product image staging and grid options
//! - `storefront_panels` - Panel toggling and configuration
//!
//! This library holds the shared fixtures.

use std::cell::RefCell;
use std::rc::Rc;

use glyke_core::ProductId;
use glyke_storefront::cart::{Cart, CartEditor, CartPayload, CartPolicy, Notifier, Rejection};

/// Notifier that keeps every rejection for later assertions.
///
/// Clones share the same log, so a test can keep one clone and hand the
/// other to the editor.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<(ProductId, Rejection)>>>,
}

impl RecordingNotifier {
    /// Rejections seen so far.
    #[must_use]
    pub fn notices(&self) -> Vec<(ProductId, Rejection)> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, product_id: ProductId, rejection: &Rejection) {
        self.notices.borrow_mut().push((product_id, *rejection));
    }
}

/// Cart used throughout the docs: line 1 at 10.00 (qty 2, stock 5, max 10)
/// and line 2 at 5.00 (qty 1, stock 20, max 30). Both lines allow more than
/// they have in stock.
pub const SAMPLE_PAYLOAD: &str = r#"{
    "currency": "USD",
    "lines": [
        {"product_id": 1, "end_user_price": "10.00", "quantity": 2, "stock": 5, "max_quantity": 10},
        {"product_id": 2, "end_user_price": "5.00", "quantity": 1, "stock": 20, "max_quantity": 30}
    ]
}"#;

/// Load a payload into an editor with the default policy.
///
/// # Panics
///
/// Panics if the payload is invalid; fixtures are expected to be valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn editor_from(json: &str) -> (CartEditor<RecordingNotifier>, RecordingNotifier) {
    let payload = CartPayload::from_json(json).unwrap();
    let policy = CartPolicy::default();
    let cart = Cart::from_payload(payload, &policy).unwrap();
    let notifier = RecordingNotifier::default();
    (CartEditor::new(cart, policy, notifier.clone()), notifier)
}
