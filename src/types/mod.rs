//! Core type definitions for subpanel.
//!
//! - [`config`] - Runtime configuration and the catalog data file
//! - [`offer`] - Offer records rendered as catalog cards
//! - [`service`] - Subscribed-service icons and history rows
//!
//! ```
//! use subpanel::types::{OfferRecord, ServiceIcon};
//! ```

pub mod config;
pub mod offer;
pub mod service;

pub use config::{Catalog, Config, OutputMode};
pub use offer::{DisplayValue, OfferRecord};
pub use service::{HistoryEntry, ServiceIcon};
