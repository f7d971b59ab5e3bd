//! Terminal UI rendering

pub mod theme;
pub mod widgets;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::app::state::AppState;
use theme::PanelTheme;
use widgets::catalog_card::{CatalogCard, CARD_HEIGHT};
use widgets::subscription_panel::{PanelAreas, SubscriptionPanel};

/// Where each part of the screen goes for a given terminal size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Catalog column.
    pub catalog: Rect,
    /// Index of the offer drawn in the first card area.
    pub first_card: usize,
    /// One area per visible catalog card, in offer order from `first_card`.
    pub cards: Vec<Rect>,
    /// Subscription panel column.
    pub panel: Rect,
    /// Areas inside the panel column.
    pub panel_areas: PanelAreas,
    /// One-line status bar.
    pub status: Rect,
}

/// Computes the screen layout for `state` on a terminal of `area`.
///
/// The catalog scrolls so the focused card is always laid out; cards that
/// do not fit below it are left out.
#[must_use]
pub fn screen_layout(area: Rect, state: &AppState) -> ScreenLayout {
    let [body, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let [catalog, panel] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);

    let inner = catalog_block().inner(catalog);
    let capacity = usize::from(inner.height / CARD_HEIGHT);
    let first_card = (state.focused() + 1).saturating_sub(capacity);
    let cards = (0..state.offers().len().saturating_sub(first_card))
        .map_while(|i| {
            let y = inner.y.checked_add(u16::try_from(i).ok()?.checked_mul(CARD_HEIGHT)?)?;
            (y.saturating_add(CARD_HEIGHT) <= inner.bottom()).then_some(Rect {
                y,
                height: CARD_HEIGHT,
                ..inner
            })
        })
        .collect();

    let panel_areas = subscription_panel(state).layout(panel);

    ScreenLayout {
        catalog,
        first_card,
        cards,
        panel,
        panel_areas,
        status,
    }
}

/// Renders the whole screen into a frame.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    render_screen(state, area, frame.buffer_mut());
}

/// Renders the whole screen into `buf`.
pub fn render_screen(state: &AppState, area: Rect, buf: &mut Buffer) {
    let layout = screen_layout(area, state);

    catalog_block().render(layout.catalog, buf);

    let visible = state.offers().iter().enumerate().skip(layout.first_card);
    for ((i, offer), rect) in visible.zip(&layout.cards) {
        let card = CatalogCard::new(Some(offer)).focused(i == state.focused());
        (&card).render(*rect, buf);
    }

    subscription_panel(state).render(layout.panel, buf);
    render_status_bar(state, layout.status, buf);
}

/// Collects the rendered buffer into text lines with trailing spaces removed.
#[must_use]
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            let line: String = (0..buf.area.width)
                .map(|x| buf[(buf.area.x + x, buf.area.y + y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

fn catalog_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(PanelTheme::panel_border())
        .title(" Catalog ")
}

fn subscription_panel(state: &AppState) -> SubscriptionPanel<'_> {
    SubscriptionPanel::new(
        state.panel(),
        state.services(),
        state.service_list(),
        state.history(),
        state.notice(),
    )
}

fn render_status_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    let selected = state
        .selected_offer()
        .map(|offer| offer.title_text().to_string())
        .unwrap_or_default();

    let mut spans = Vec::new();
    if !selected.is_empty() {
        spans.push(Span::styled(
            format!(" Selected: {} │", selected),
            PanelTheme::title(),
        ));
    }
    spans.push(Span::raw(" ↑/↓ move · Enter select · Esc close info · q quit"));

    Paragraph::new(Line::from(spans))
        .style(PanelTheme::status_bar())
        .render(area, buf);
}
