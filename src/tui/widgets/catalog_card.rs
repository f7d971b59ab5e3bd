//! Catalog card widget for a single subscription offer.
//!
//! The card is a stateless projection of an [`OfferRecord`]:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │┌─────┐ Kinopoisk                  ◈ 10%  │
//! ││     │ Films, series and live sport i…   │
//! │└─────┘ From 299₽/month                   │
//! │4.8 ★                                     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The offer itself may be absent, as may any of its fields; every read
//! goes through [`CardView`], which resolves missing data to empty text.
//!
//! # Example
//!
//! ```
//! use subpanel::tui::widgets::catalog_card::CatalogCard;
//! use subpanel::types::OfferRecord;
//!
//! let offer = OfferRecord::default().with_title("Basic").with_sum(199).with_per("/mo");
//! let mut clicks = 0;
//! {
//!     let mut card = CatalogCard::new(Some(&offer)).on_click(|| clicks += 1);
//!     assert_eq!(card.view().price, "From 199₽/mo");
//!     card.click();
//! }
//! assert_eq!(clicks, 1);
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::theme::PanelTheme;
use crate::types::OfferRecord;
use crate::util::text::truncate_to_width;

/// Decorative glyph shown after the rating.
pub const RATING_GLYPH: &str = "★";

/// Decorative badge shown before the cashback value.
pub const CASHBACK_GLYPH: &str = "◈";

/// Maximum display width of the subtitle, in columns.
pub const SUBTITLE_WIDTH: u16 = 30;

/// Total card height including borders.
pub const CARD_HEIGHT: u16 = 6;

/// Image placeholder size.
const IMAGE_WIDTH: u16 = 7;
const IMAGE_HEIGHT: u16 = 3;

/// Handler invoked when the card is activated.
pub type ClickHandler<'a> = Box<dyn FnMut() + 'a>;

/// Display strings derived from an offer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardView {
    /// Image source; `None` renders an empty image area.
    pub image: Option<String>,
    /// Image alt text.
    pub alt: String,
    /// Rating text.
    pub rating: String,
    /// Title text.
    pub title: String,
    /// Cashback text.
    pub cashback: String,
    /// Full subtitle; truncated only when rendered.
    pub subtitle: String,
    /// Composed price line.
    pub price: String,
}

impl CardView {
    /// Projects an optional offer into display strings.
    #[must_use]
    pub fn from_offer(offer: Option<&OfferRecord>) -> Self {
        let Some(offer) = offer else {
            return Self {
                price: OfferRecord::default().price_line(),
                ..Self::default()
            };
        };

        Self {
            image: offer.image().map(str::to_string),
            alt: offer.alt_text().to_string(),
            rating: offer.rating_text(),
            title: offer.title_text().to_string(),
            cashback: offer.cashback_text(),
            subtitle: offer.subtitle_text().to_string(),
            price: offer.price_line(),
        }
    }

    /// Returns the subtitle as it appears on a card of the given width.
    #[must_use]
    pub fn subtitle_line(&self, available: u16) -> String {
        truncate_to_width(&self.subtitle, SUBTITLE_WIDTH.min(available) as usize)
    }
}

/// A catalog card for one offer, with an optional click handler.
pub struct CatalogCard<'a> {
    view: CardView,
    focused: bool,
    on_click: Option<ClickHandler<'a>>,
}

impl<'a> CatalogCard<'a> {
    /// Creates a card for `offer`. `None` renders an empty card.
    #[must_use]
    pub fn new(offer: Option<&OfferRecord>) -> Self {
        Self {
            view: CardView::from_offer(offer),
            focused: false,
            on_click: None,
        }
    }

    /// Sets the handler called on each activation.
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Highlights the card border.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Returns the display projection.
    #[must_use]
    pub fn view(&self) -> &CardView {
        &self.view
    }

    /// Activates the card: calls the click handler once, if there is one.
    pub fn click(&mut self) {
        if let Some(handler) = self.on_click.as_deref_mut() {
            handler();
        }
    }

    fn render_image(&self, area: Rect, buf: &mut Buffer) {
        if self.view.image.is_none() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(PanelTheme::card_border(false))
            .style(Style::default().bg(PanelTheme::IMAGE_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        let alt = truncate_to_width(&self.view.alt, inner.width as usize);
        Paragraph::new(alt)
            .style(PanelTheme::subtitle())
            .render(inner, buf);
    }

    fn rating_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(3);
        if !self.view.rating.is_empty() {
            spans.push(Span::raw(self.view.rating.clone()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            RATING_GLYPH,
            Style::default().fg(PanelTheme::RATING),
        ));
        Line::from(spans)
    }

    fn cashback_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(CASHBACK_GLYPH, PanelTheme::cashback())];
        if !self.view.cashback.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                self.view.cashback.clone(),
                PanelTheme::cashback(),
            ));
        }
        Line::from(spans)
    }

    fn render_title_row(&self, area: Rect, buf: &mut Buffer) {
        let cashback = self.cashback_line();
        let cashback_width = (cashback.width() as u16).min(area.width);

        let [title_area, cashback_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(cashback_width)])
                .areas(area);

        let title = truncate_to_width(&self.view.title, title_area.width.saturating_sub(1) as usize);
        Paragraph::new(Span::styled(title, PanelTheme::title())).render(title_area, buf);
        Paragraph::new(cashback)
            .alignment(Alignment::Right)
            .render(cashback_area, buf);
    }
}

impl Widget for &CatalogCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(PanelTheme::card_border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] = Layout::horizontal([
            Constraint::Length(IMAGE_WIDTH + 1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let [image_area, rating_area] =
            Layout::vertical([Constraint::Length(IMAGE_HEIGHT), Constraint::Length(1)])
                .areas(left);
        let image_area = Rect {
            width: image_area.width.min(IMAGE_WIDTH),
            ..image_area
        };
        self.render_image(image_area, buf);
        Paragraph::new(self.rating_line()).render(rating_area, buf);

        let [title_row, subtitle_row, price_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(right);

        self.render_title_row(title_row, buf);

        let subtitle = self.view.subtitle_line(subtitle_row.width);
        Paragraph::new(Span::styled(subtitle, PanelTheme::subtitle())).render(subtitle_row, buf);

        Paragraph::new(Span::styled(self.view.price.clone(), PanelTheme::price()))
            .render(price_row, buf);
    }
}
