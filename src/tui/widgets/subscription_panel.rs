//! Subscription panel: service card list, history and a dismissible info banner.
//!
//! The panel composes three collaborators it does not implement itself:
//!
//! - a [`ServiceCardList`], which receives the subscribed services unchanged
//! - a [`HistoryView`], which receives nothing from the panel
//! - an [`InfoBanner`], which receives only a close callback
//!
//! The banner lifecycle lives in [`SubscriptionPanelState`]. It starts
//! [`BannerState::Visible`] and can only move to [`BannerState::Dismissed`];
//! there is no way back for the same state instance.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut state = SubscriptionPanelState::new();
//! let panel = SubscriptionPanel::new(&state, &services, &cards, &history, &banner);
//! frame.render_widget(panel, area);
//!
//! // later, on a key press
//! state.handle_banner_key(key, &mut banner);
//! ```

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    widgets::Widget,
};
use tracing::{debug, info};

use crate::types::ServiceIcon;

/// Rows always left to the history: two borders and one line.
pub const HISTORY_MIN_HEIGHT: u16 = 3;

/// Renders the list of services the user is subscribed to.
pub trait ServiceCardList {
    /// Renders `services` into `area`. The slice is the one given to the panel.
    fn render_services(&self, services: &[ServiceIcon], area: Rect, buf: &mut Buffer);

    /// Rows this list wants for `services`.
    fn desired_height(&self, services: &[ServiceIcon]) -> u16 {
        (services.len() as u16).saturating_add(2)
    }
}

/// Renders the subscription history from its own data source.
pub trait HistoryView {
    /// Renders the history into `area`.
    fn render_history(&self, area: Rect, buf: &mut Buffer);
}

/// Informational banner that decides for itself when the user wants it closed.
pub trait InfoBanner {
    /// Renders the banner into `area`.
    fn render_banner(&self, area: Rect, buf: &mut Buffer);

    /// Rows the banner wants.
    fn desired_height(&self) -> u16 {
        4
    }

    /// Handles a key press; calls `on_close` when the user closes the banner.
    fn handle_key(&mut self, key: KeyEvent, on_close: &mut dyn FnMut());

    /// Handles a click at `position` inside the banner rendered at `area`.
    fn handle_click(&mut self, _area: Rect, _position: Position, _on_close: &mut dyn FnMut()) {}
}

/// Lifecycle of the info banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerState {
    /// Banner is shown (initial state).
    #[default]
    Visible,
    /// Banner was closed; terminal state.
    Dismissed,
}

impl BannerState {
    /// Returns true while the banner is shown.
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// State owned by one subscription panel instance.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionPanelState {
    banner: BannerState,
}

impl SubscriptionPanelState {
    /// Creates a panel state with the banner visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the banner lifecycle state.
    #[must_use]
    pub fn banner(&self) -> BannerState {
        self.banner
    }

    /// Returns true while the banner is shown.
    #[must_use]
    pub fn is_banner_visible(&self) -> bool {
        self.banner.is_visible()
    }

    /// Hides the banner for the rest of this state's lifetime.
    ///
    /// Repeated calls are no-ops.
    pub fn dismiss_banner(&mut self) {
        match self.banner {
            BannerState::Visible => {
                self.banner = BannerState::Dismissed;
                info!("Info banner dismissed");
            }
            BannerState::Dismissed => debug!("Info banner already dismissed"),
        }
    }

    /// Routes a key press to the banner while it is visible.
    ///
    /// Returns true if the banner received the key.
    pub fn handle_banner_key(&mut self, key: KeyEvent, banner: &mut dyn InfoBanner) -> bool {
        if !self.is_banner_visible() {
            return false;
        }
        banner.handle_key(key, &mut || self.dismiss_banner());
        true
    }

    /// Routes a click to the banner while it is visible and the click lands on it.
    ///
    /// `banner_area` is the area the banner was last rendered into.
    /// Returns true if the banner received the click.
    pub fn handle_banner_click(
        &mut self,
        banner_area: Rect,
        position: Position,
        banner: &mut dyn InfoBanner,
    ) -> bool {
        if !self.is_banner_visible() || !banner_area.contains(position) {
            return false;
        }
        banner.handle_click(banner_area, position, &mut || self.dismiss_banner());
        true
    }
}

/// Areas assigned to the panel's collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelAreas {
    /// Service card list.
    pub cards: Rect,
    /// History list.
    pub history: Rect,
    /// Info banner, when visible.
    pub banner: Option<Rect>,
}

/// Widget composing the subscription panel.
pub struct SubscriptionPanel<'a> {
    state: &'a SubscriptionPanelState,
    services: &'a [ServiceIcon],
    cards: &'a dyn ServiceCardList,
    history: &'a dyn HistoryView,
    banner: &'a dyn InfoBanner,
}

impl<'a> SubscriptionPanel<'a> {
    /// Creates the panel widget.
    #[must_use]
    pub fn new(
        state: &'a SubscriptionPanelState,
        services: &'a [ServiceIcon],
        cards: &'a dyn ServiceCardList,
        history: &'a dyn HistoryView,
        banner: &'a dyn InfoBanner,
    ) -> Self {
        Self {
            state,
            services,
            cards,
            history,
            banner,
        }
    }

    /// Splits `area` between the collaborators.
    ///
    /// The card list is capped so the history keeps at least
    /// [`HISTORY_MIN_HEIGHT`] rows whenever the area has room for them.
    #[must_use]
    pub fn layout(&self, area: Rect) -> PanelAreas {
        let banner_height = if self.state.is_banner_visible() {
            self.banner.desired_height()
        } else {
            0
        };
        let cards_height = self
            .cards
            .desired_height(self.services)
            .min(area.height.saturating_sub(banner_height.saturating_add(HISTORY_MIN_HEIGHT)));

        if self.state.is_banner_visible() {
            let [cards, history, banner] = Layout::vertical([
                Constraint::Length(cards_height),
                Constraint::Min(0),
                Constraint::Length(banner_height),
            ])
            .areas(area);
            PanelAreas {
                cards,
                history,
                banner: Some(banner),
            }
        } else {
            let [cards, history] =
                Layout::vertical([Constraint::Length(cards_height), Constraint::Min(0)])
                    .areas(area);
            PanelAreas {
                cards,
                history,
                banner: None,
            }
        }
    }
}

impl Widget for SubscriptionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = self.layout(area);

        self.cards.render_services(self.services, areas.cards, buf);
        self.history.render_history(areas.history, buf);
        if let Some(banner_area) = areas.banner {
            self.banner.render_banner(banner_area, buf);
        }
    }
}
