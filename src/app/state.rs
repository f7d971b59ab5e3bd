//! Application state management

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Position, Rect};
use tracing::info;

use crate::tui::screen_layout;
use crate::tui::widgets::catalog_card::CatalogCard;
use crate::tui::widgets::collaborators::{HistoryList, InfoNotice, ServiceIconStrip};
use crate::tui::widgets::subscription_panel::SubscriptionPanelState;
use crate::types::{Catalog, OfferRecord, ServiceIcon};

pub struct AppState {
    offers: Vec<OfferRecord>,
    services: Vec<ServiceIcon>,

    service_list: ServiceIconStrip,
    history: HistoryList,
    notice: InfoNotice,
    panel: SubscriptionPanelState,

    focused: usize,
    selected: Option<usize>,

    dirty: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            offers: catalog.offers,
            services: catalog.services,
            service_list: ServiceIconStrip,
            history: HistoryList::new(catalog.history),
            notice: InfoNotice::default(),
            panel: SubscriptionPanelState::new(),
            focused: 0,
            selected: None,
            dirty: true,
        }
    }

    #[must_use]
    pub fn offers(&self) -> &[OfferRecord] {
        &self.offers
    }

    #[must_use]
    pub fn services(&self) -> &[ServiceIcon] {
        &self.services
    }

    /// Replaces the subscribed services. The panel state is kept.
    pub fn set_services(&mut self, services: Vec<ServiceIcon>) {
        self.services = services;
        self.dirty = true;
    }

    #[must_use]
    pub fn service_list(&self) -> &ServiceIconStrip {
        &self.service_list
    }

    #[must_use]
    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    #[must_use]
    pub fn notice(&self) -> &InfoNotice {
        &self.notice
    }

    #[must_use]
    pub fn panel(&self) -> &SubscriptionPanelState {
        &self.panel
    }

    /// Index of the card with keyboard focus.
    #[must_use]
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// The offer chosen by the last card activation.
    #[must_use]
    pub fn selected_offer(&self) -> Option<&OfferRecord> {
        self.selected.and_then(|i| self.offers.get(i))
    }

    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.offers.len() {
            self.focused += 1;
            self.dirty = true;
        }
    }

    pub fn focus_previous(&mut self) {
        if self.focused > 0 {
            self.focused -= 1;
            self.dirty = true;
        }
    }

    /// Activates the card at `index`, selecting its offer.
    ///
    /// Out-of-range indices are ignored.
    pub fn activate_card(&mut self, index: usize) {
        let Some(offer) = self.offers.get(index) else {
            return;
        };

        let title = offer.title_text();
        CatalogCard::new(Some(offer))
            .on_click(|| {
                info!(index, title, "Offer selected");
                self.focused = index;
                self.selected = Some(index);
                self.dirty = true;
            })
            .click();
    }

    /// Handles a key press that is not a quit key.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let banner_was_visible = self.panel.is_banner_visible();
        self.panel.handle_banner_key(key, &mut self.notice);
        if banner_was_visible != self.panel.is_banner_visible() {
            self.dirty = true;
        }

        match key.code {
            KeyCode::Up => self.focus_previous(),
            KeyCode::Down => self.focus_next(),
            KeyCode::Enter => self.activate_card(self.focused),
            _ => {}
        }
    }

    /// Handles a left click at `position` on a screen of size `area`.
    pub fn handle_click(&mut self, area: Rect, position: Position) {
        let layout = screen_layout(area, self);

        if let Some(banner_area) = layout.panel_areas.banner {
            if self
                .panel
                .handle_banner_click(banner_area, position, &mut self.notice)
            {
                self.dirty = true;
                return;
            }
        }

        if let Some(slot) = layout.cards.iter().position(|r| r.contains(position)) {
            self.activate_card(layout.first_card + slot);
        }
    }

    pub fn needs_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_rendered(&mut self) {
        self.dirty = false;
    }

    pub fn mark_full_redraw(&mut self) {
        self.dirty = true;
    }
}
