//! Tests for offer records and their display accessors.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use subpanel::types::{DisplayValue, OfferRecord};

/// Tests the basic scenario: title, price, period and rating only.
#[test]
fn test_basic_offer_accessors() {
    let offer = OfferRecord::default()
        .with_title("Basic")
        .with_sum(199)
        .with_per("/mo")
        .with_rating(4.8);

    assert_eq!(offer.title_text(), "Basic");
    assert_eq!(offer.price_line(), "From 199₽/mo");
    assert_eq!(offer.rating_text(), "4.8");
    assert_eq!(offer.cashback_text(), "");
    assert_eq!(offer.subtitle_text(), "");
    assert!(offer.image().is_none());
}

/// Tests that malformed but type-compatible values are shown as-is.
#[test]
fn test_values_are_not_validated() {
    let offer = OfferRecord::default()
        .with_title("")
        .with_sum(-5)
        .with_cashback("lots");

    assert_eq!(offer.title_text(), "");
    assert_eq!(offer.price_line(), "From -5₽");
    assert_eq!(offer.cashback_text(), "lots");
}

/// Tests JSON where numeric fields arrive as strings and numbers.
#[test]
fn test_deserialize_mixed_value_types() {
    let json = r#"{
        "title": "Premium",
        "sum": "1 490",
        "per": "/year",
        "rating": 5,
        "cashback": 15
    }"#;
    let offer: OfferRecord = serde_json::from_str(json).expect("valid offer json");

    assert_eq!(offer.sum, Some(DisplayValue::Text("1 490".to_string())));
    assert_eq!(offer.rating, Some(DisplayValue::Integer(5)));
    assert_eq!(offer.price_line(), "From 1 490₽/year");
    assert_eq!(offer.cashback_text(), "15");
}

/// Tests that a price above `i64::MAX` is shown digit for digit.
#[test]
fn test_deserialize_sum_above_i64_range() {
    let offer: OfferRecord =
        serde_json::from_str(r#"{"sum": 18446744073709551615}"#).expect("valid offer json");

    assert_eq!(offer.sum, Some(DisplayValue::Unsigned(u64::MAX)));
    assert_eq!(offer.price_line(), "From 18446744073709551615₽");
}

/// Tests that an empty JSON object is a valid, blank offer.
#[test]
fn test_deserialize_empty_object() {
    let offer: OfferRecord = serde_json::from_str("{}").expect("valid offer json");
    assert_eq!(offer, OfferRecord::default());
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9 /%]{0,24}")
}

proptest! {
    /// Absent fields always read as empty, present ones verbatim.
    #[test]
    fn prop_accessors_mirror_fields(
        title in optional_text(),
        subtitle in optional_text(),
        per in optional_text(),
        cashback in optional_text(),
    ) {
        let offer = OfferRecord {
            title: title.clone(),
            subtitle: subtitle.clone(),
            per: per.clone(),
            cashback: cashback.clone().map(DisplayValue::Text),
            ..OfferRecord::default()
        };

        prop_assert_eq!(offer.title_text(), title.unwrap_or_default());
        prop_assert_eq!(offer.subtitle_text(), subtitle.unwrap_or_default());
        prop_assert_eq!(offer.cashback_text(), cashback.unwrap_or_default());
        prop_assert_eq!(offer.price_line(), format!("From ₽{}", per.unwrap_or_default()));
    }
}
