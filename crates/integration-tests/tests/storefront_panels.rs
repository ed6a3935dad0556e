//! Integration tests for page panels and storefront configuration.

#![allow(clippy::unwrap_used)]

use glyke_storefront::cart::{Cart, CartPayload, CartPolicy};
use glyke_storefront::panels::{FOCUS_OUT_DELAY, active_nav_href};
use glyke_storefront::{CartError, PanelId, PanelSet, StorefrontConfig};
use rust_decimal_macros::dec;

#[test]
fn test_panels_toggle_independently() {
    let mut panels = PanelSet::new();
    for id in ["sidebar", "profile_panel"] {
        let panel: PanelId = id.parse().unwrap();
        assert!(panels.toggle_panel(panel));
    }
    assert_eq!(panels.active_panels(), PanelId::ALL.to_vec());

    panels.focus_out(PanelId::Sidebar);
    assert_eq!(panels.active_panels(), vec![PanelId::ProfilePanel]);
    assert_eq!(FOCUS_OUT_DELAY.as_millis(), 130);
}

#[test]
fn test_nav_highlight() {
    assert_eq!(active_nav_href("/staff/products/3"), "/staff");
}

#[test]
fn test_configured_ceiling_applies_to_payload() {
    let config = StorefrontConfig::from_lookup(|key| {
        (key == "GLYKE_PRICE_CEILING").then(|| "30.00".to_string())
    })
    .unwrap();
    let policy = CartPolicy::from(&config);
    assert_eq!(policy.price_ceiling, dec!(30.00));

    let payload = CartPayload::from_json(glyke_integration_tests::SAMPLE_PAYLOAD).unwrap();
    assert!(Cart::from_payload(payload.clone(), &policy).is_ok());

    let strict = CartPolicy::new(dec!(20.00));
    assert!(matches!(
        Cart::from_payload(payload, &strict),
        Err(CartError::CeilingExceeded { .. })
    ));
}
