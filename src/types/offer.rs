//! Offer records shown as catalog cards.
//!
//! An [`OfferRecord`] is a display-only projection of a subscription offer.
//! Every field is optional and nothing is validated: prices, ratings and
//! cashback values are shown exactly as they arrive, whether the source
//! delivered them as strings or numbers.
//!
//! All reads go through the `*_text` accessors, which resolve an absent
//! field to an empty string.
//!
//! # Examples
//!
//! ```
//! use subpanel::types::offer::OfferRecord;
//!
//! let offer = OfferRecord::default()
//!     .with_title("Basic")
//!     .with_sum(199)
//!     .with_per("/mo");
//!
//! assert_eq!(offer.title_text(), "Basic");
//! assert_eq!(offer.price_line(), "From 199₽/mo");
//! assert_eq!(offer.cashback_text(), "");
//! ```

use serde::Deserialize;
use std::fmt;

/// Currency glyph placed between the price and the billing period.
pub const CURRENCY_GLYPH: &str = "₽";

/// Prefix of the price line.
pub const PRICE_PREFIX: &str = "From ";

/// A value that is shown verbatim: a number or a piece of text.
///
/// Deserializes from either JSON/TOML numbers or strings without any
/// parsing of the string form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    /// Whole number, e.g. `199`.
    Integer(i64),
    /// Whole number above `i64::MAX`.
    Unsigned(u64),
    /// Fractional number, e.g. `4.8`.
    Float(f64),
    /// Arbitrary text, e.g. `"5%"`.
    Text(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Unsigned(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for DisplayValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for DisplayValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for DisplayValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<f64> for DisplayValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Renders an optional display value, empty when absent.
fn value_text(value: Option<&DisplayValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// One subscription offer as presented on a catalog card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OfferRecord {
    /// Image source reference.
    pub image: Option<String>,
    /// Accessible text for the image.
    pub alt: Option<String>,
    /// Score shown next to the rating glyph.
    #[serde(alias = "raiting")]
    pub rating: Option<DisplayValue>,
    /// Short name of the offer.
    pub title: Option<String>,
    /// Cashback shown next to the badge glyph.
    pub cashback: Option<DisplayValue>,
    /// Descriptive line, truncated on the card.
    pub subtitle: Option<String>,
    /// Price value.
    pub sum: Option<DisplayValue>,
    /// Billing period suffix, e.g. `"/month"`.
    pub per: Option<String>,
}

impl OfferRecord {
    /// Sets the image source.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the image alt text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Sets the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<DisplayValue>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the cashback value.
    #[must_use]
    pub fn with_cashback(mut self, cashback: impl Into<DisplayValue>) -> Self {
        self.cashback = Some(cashback.into());
        self
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the price value.
    #[must_use]
    pub fn with_sum(mut self, sum: impl Into<DisplayValue>) -> Self {
        self.sum = Some(sum.into());
        self
    }

    /// Sets the billing period suffix.
    #[must_use]
    pub fn with_per(mut self, per: impl Into<String>) -> Self {
        self.per = Some(per.into());
        self
    }

    /// Returns the image source, if any.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the image alt text, empty when absent.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or_default()
    }

    /// Returns the rating, empty when absent.
    #[must_use]
    pub fn rating_text(&self) -> String {
        value_text(self.rating.as_ref())
    }

    /// Returns the title, empty when absent.
    #[must_use]
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Returns the cashback value, empty when absent.
    #[must_use]
    pub fn cashback_text(&self) -> String {
        value_text(self.cashback.as_ref())
    }

    /// Returns the subtitle, empty when absent.
    #[must_use]
    pub fn subtitle_text(&self) -> &str {
        self.subtitle.as_deref().unwrap_or_default()
    }

    /// Returns the price value, empty when absent.
    #[must_use]
    pub fn sum_text(&self) -> String {
        value_text(self.sum.as_ref())
    }

    /// Returns the billing period suffix, empty when absent.
    #[must_use]
    pub fn per_text(&self) -> &str {
        self.per.as_deref().unwrap_or_default()
    }

    /// Returns the composed price line: `From {sum}₽{per}`.
    #[must_use]
    pub fn price_line(&self) -> String {
        format!(
            "{}{}{}{}",
            PRICE_PREFIX,
            self.sum_text(),
            CURRENCY_GLYPH,
            self.per_text()
        )
    }
}
