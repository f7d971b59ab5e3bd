//! Subpanel - terminal catalog of subscription offers
//!
//! Renders offers as catalog cards next to a subscription panel made of
//! the subscribed services, the payment history and a dismissible info
//! banner.
//!
//! This library exposes the widgets and types for testing and embedding.

pub mod app;
pub mod error;
pub mod tui;
pub mod types;
pub mod util;

pub use error::{PanelError, PanelResult};
pub use types::{Catalog, Config, OfferRecord, ServiceIcon};
