//! Bundled panel sections: subscribed services, payment history and the info notice.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::subscription_panel::{HistoryView, InfoBanner, ServiceCardList};
use crate::tui::theme::PanelTheme;
use crate::types::{HistoryEntry, ServiceIcon};

/// Close marker drawn in the banner's top border.
pub const CLOSE_MARKER: &str = "[x]";

/// Bordered list of subscribed services.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceIconStrip;

impl ServiceCardList for ServiceIconStrip {
    fn render_services(&self, services: &[ServiceIcon], area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = services
            .iter()
            .map(|service| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(PanelTheme::INFO)),
                    Span::raw(service.name_text().to_string()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(PanelTheme::panel_border())
                    .title(" My subscriptions "),
            )
            .render(area, buf);
    }
}

/// Bordered list of past payments. Owns its entries.
#[derive(Debug, Clone, Default)]
pub struct HistoryList {
    entries: Vec<HistoryEntry>,
}

impl HistoryList {
    /// Creates a history list owning `entries`.
    #[must_use]
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl HistoryView for HistoryList {
    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = if self.entries.is_empty() {
            vec![Line::from(Span::styled("No payments yet", PanelTheme::subtitle()))]
        } else {
            self.entries
                .iter()
                .map(|entry| Line::from(entry.summary()))
                .collect()
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(PanelTheme::panel_border())
                    .title(" History "),
            )
            .render(area, buf);
    }
}

/// Informational banner closed with `Esc`, `x`, or a click on [`CLOSE_MARKER`].
#[derive(Debug, Clone)]
pub struct InfoNotice {
    message: String,
}

impl Default for InfoNotice {
    fn default() -> Self {
        Self::new("Manage all your subscriptions in one place and get cashback on every payment.")
    }
}

impl InfoNotice {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Cells covered by the close marker for a banner rendered at `area`.
    #[must_use]
    pub fn close_marker_area(area: Rect) -> Rect {
        let width = CLOSE_MARKER.len() as u16;
        Rect {
            x: area.right().saturating_sub(width + 1).max(area.x),
            y: area.y,
            width: width.min(area.width),
            height: area.height.min(1),
        }
    }
}

impl InfoBanner for InfoNotice {
    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.message.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(PanelTheme::INFO))
                    .title(" Info "),
            )
            .render(area, buf);

        if area.is_empty() {
            return;
        }
        let marker = Self::close_marker_area(area);
        buf.set_stringn(
            marker.x,
            marker.y,
            CLOSE_MARKER,
            marker.width as usize,
            Style::default().fg(PanelTheme::INFO),
        );
    }

    fn handle_key(&mut self, key: KeyEvent, on_close: &mut dyn FnMut()) {
        if matches!(
            (key.code, key.modifiers),
            (KeyCode::Esc, _) | (KeyCode::Char('x'), KeyModifiers::NONE)
        ) {
            on_close();
        }
    }

    fn handle_click(&mut self, area: Rect, position: Position, on_close: &mut dyn FnMut()) {
        if Self::close_marker_area(area).contains(position) {
            on_close();
        }
    }
}
