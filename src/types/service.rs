//! Subscribed-service icons and payment history rows.
//!
//! Both types are opaque to the subscription panel: icons are forwarded
//! to the card list untouched, and history rows belong to the history
//! list alone.

use serde::Deserialize;

use super::offer::DisplayValue;

/// A service the user is subscribed to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceIcon {
    /// Display name of the service.
    pub name: Option<String>,
    /// Image source reference.
    pub image: Option<String>,
}

impl ServiceIcon {
    /// Creates an icon with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            image: None,
        }
    }

    /// Returns the name, empty when absent.
    #[must_use]
    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// One row of the subscription payment history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    /// Service that was paid for.
    pub service: Option<String>,
    /// Amount charged.
    pub amount: Option<DisplayValue>,
    /// Date of the charge, as delivered.
    pub date: Option<String>,
}

impl HistoryEntry {
    /// Formats the row as `date  service  amount₽`, skipping absent parts.
    #[must_use]
    pub fn summary(&self) -> String {
        let amount = self
            .amount
            .as_ref()
            .map(|a| format!("{}{}", a, super::offer::CURRENCY_GLYPH));

        [self.date.clone(), self.service.clone(), amount]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("  ")
    }
}
