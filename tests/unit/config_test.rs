//! Tests for catalog loading.

use std::fs;

use pretty_assertions::assert_eq;
use subpanel::app::load_catalog;
use subpanel::error::PanelError;
use subpanel::types::{Catalog, DisplayValue};
use tempfile::TempDir;

#[test]
fn test_load_toml_catalog() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[[offers]]
title = "Basic"
sum = 199
per = "/mo"
rating = 4.8

[[offers]]
title = "Plus"
cashback = "7%"

[[services]]
name = "Okko"

[[history]]
service = "Okko"
amount = 399
date = "2024-02-01"
"#,
    )
    .expect("write catalog");

    let catalog = Catalog::load(&path).expect("load catalog");

    assert_eq!(catalog.offers.len(), 2);
    assert_eq!(catalog.offers[0].price_line(), "From 199₽/mo");
    assert_eq!(catalog.offers[0].rating, Some(DisplayValue::Float(4.8)));
    assert_eq!(catalog.offers[1].cashback_text(), "7%");
    assert_eq!(catalog.services[0].name_text(), "Okko");
    assert_eq!(catalog.history[0].summary(), "2024-02-01  Okko  399₽");
}

#[test]
fn test_load_json_catalog() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"offers": [{"title": "Basic", "raiting": "4.9"}], "services": []}"#,
    )
    .expect("write catalog");

    let catalog = Catalog::load(&path).expect("load catalog");

    assert_eq!(catalog.offers[0].rating_text(), "4.9");
    assert!(catalog.services.is_empty());
    assert!(catalog.history.is_empty());
}

#[test]
fn test_load_missing_file_is_not_found() {
    let dir = TempDir::new().expect("temp dir");
    let err = Catalog::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_load_malformed_file_is_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{ not json").expect("write catalog");

    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, PanelError::Parse { .. }));
    assert!(err.to_string().contains("catalog.json"));
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let result = load_catalog(Some(dir.path().join("absent.json").as_path()));
    assert!(result.is_err());
}
