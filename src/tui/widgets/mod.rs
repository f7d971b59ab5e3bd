//! TUI widgets for subpanel.
//!
//! This module contains custom ratatui widgets for the catalog screen.

pub mod catalog_card;
pub mod collaborators;
pub mod subscription_panel;

pub use catalog_card::{CardView, CatalogCard};
pub use collaborators::{HistoryList, InfoNotice, ServiceIconStrip};
pub use subscription_panel::{
    BannerState, HistoryView, InfoBanner, ServiceCardList, SubscriptionPanel,
    SubscriptionPanelState,
};
