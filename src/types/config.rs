//! Configuration types for subpanel.
//!
//! This module contains the runtime [`Config`] handed to the application
//! and the [`Catalog`] data file it loads.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::offer::{DisplayValue, OfferRecord};
use super::service::{HistoryEntry, ServiceIcon};
use crate::error::{PanelError, PanelResult};

/// Controls how the application presents the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Interactive terminal UI (default).
    #[default]
    Interactive,

    /// Print the card and panel projections to stdout and exit.
    Print,
}

/// Runtime configuration for the application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog file to load. `None` means the default location, falling
    /// back to the built-in demo catalog.
    pub catalog_path: Option<PathBuf>,

    /// Presentation mode.
    pub output_mode: OutputMode,
}

/// The data shown on screen: offers, subscribed services and history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Offers rendered as catalog cards.
    pub offers: Vec<OfferRecord>,
    /// Services the user is subscribed to.
    pub services: Vec<ServiceIcon>,
    /// Payment history rows owned by the history list.
    pub history: Vec<HistoryEntry>,
}

impl Catalog {
    /// Loads a catalog from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed, or
    /// has an unsupported extension.
    pub fn load(path: &Path) -> PanelResult<Self> {
        let format = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => CatalogFormat::Toml,
            _ => return Err(PanelError::unsupported_format(path)),
        };

        let contents = fs::read_to_string(path).map_err(|e| PanelError::io(path, e))?;
        let catalog = Self::parse(&contents, format).map_err(|m| PanelError::parse(path, m))?;

        debug!(
            path = %path.display(),
            offers = catalog.offers.len(),
            services = catalog.services.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    fn parse(contents: &str, format: CatalogFormat) -> Result<Self, String> {
        match format {
            CatalogFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            CatalogFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Built-in catalog used when no catalog file is available.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            offers: vec![
                OfferRecord::default()
                    .with_title("Kinopoisk")
                    .with_alt("Kinopoisk logo")
                    .with_image("services/images/kinopoisk.png")
                    .with_rating(4.8)
                    .with_cashback("10%")
                    .with_subtitle("Films, series and live sport in one subscription")
                    .with_sum(299)
                    .with_per("/month"),
                OfferRecord::default()
                    .with_title("Yandex Music")
                    .with_alt("Yandex Music logo")
                    .with_image("services/images/music.png")
                    .with_rating(4.6)
                    .with_cashback("5%")
                    .with_subtitle("Ad-free music, podcasts and audiobooks offline")
                    .with_sum(199)
                    .with_per("/month"),
                OfferRecord::default()
                    .with_title("Basic")
                    .with_sum(199)
                    .with_per("/mo")
                    .with_rating(4.8),
            ],
            services: vec![ServiceIcon::named("Okko"), ServiceIcon::named("Litres")],
            history: vec![
                HistoryEntry {
                    service: Some("Okko".to_string()),
                    amount: Some(DisplayValue::from(399)),
                    date: Some("2024-02-01".to_string()),
                },
                HistoryEntry {
                    service: Some("Litres".to_string()),
                    amount: Some(DisplayValue::from(149)),
                    date: Some("2024-01-15".to_string()),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CatalogFormat {
    Json,
    Toml,
}
