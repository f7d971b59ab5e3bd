//! Subpanel color theme
//!
//! Light card surfaces on a neutral terminal background, with the muted
//! slate used for secondary text and a warm accent for prices and badges.
//!
//! # Usage
//!
//! ```rust,ignore
//! use subpanel::tui::theme::PanelTheme;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(PanelTheme::SUBTITLE);
//! ```

use ratatui::style::{Color, Modifier, Style};

/// Subpanel color constants and pre-built styles.
pub struct PanelTheme;

impl PanelTheme {
    // =========================================================================
    // Surfaces
    // =========================================================================

    /// Card border.
    /// Hex: `#e2e2e2`
    pub const CARD_BORDER: Color = Color::Rgb(226, 226, 226);

    /// Card border when focused.
    /// Hex: `#7ec8b8`
    pub const CARD_BORDER_FOCUSED: Color = Color::Rgb(126, 200, 184);

    /// Panel section border.
    /// Hex: `#2d645a`
    pub const PANEL_BORDER: Color = Color::Rgb(45, 100, 90);

    /// Image placeholder background.
    /// Hex: `#193237`
    pub const IMAGE_BG: Color = Color::Rgb(25, 50, 55);

    // =========================================================================
    // Text
    // =========================================================================

    /// Primary text.
    pub const TEXT: Color = Color::White;

    /// Secondary text (subtitle).
    /// Hex: `#676879`
    pub const SUBTITLE: Color = Color::Rgb(103, 104, 121);

    /// Rating glyph.
    /// Hex: `#e6b464`
    pub const RATING: Color = Color::Rgb(230, 180, 100);

    /// Cashback badge.
    /// Hex: `#d4a574`
    pub const CASHBACK: Color = Color::Rgb(212, 165, 116);

    /// Info banner accent.
    /// Hex: `#5fb3a1`
    pub const INFO: Color = Color::Rgb(95, 179, 161);

    /// Status bar background.
    /// Hex: `#142d32`
    pub const STATUS_BG: Color = Color::Rgb(20, 45, 50);

    // =========================================================================
    // Pre-built Styles
    // =========================================================================

    /// Style for card borders.
    #[must_use]
    pub fn card_border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Self::CARD_BORDER_FOCUSED)
        } else {
            Style::default().fg(Self::CARD_BORDER)
        }
    }

    /// Style for the offer title.
    #[must_use]
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Style for the subtitle.
    #[must_use]
    pub fn subtitle() -> Style {
        Style::default().fg(Self::SUBTITLE)
    }

    /// Style for the price line.
    #[must_use]
    pub fn price() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Style for the cashback value.
    #[must_use]
    pub fn cashback() -> Style {
        Style::default()
            .fg(Self::CASHBACK)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel section borders.
    #[must_use]
    pub fn panel_border() -> Style {
        Style::default().fg(Self::PANEL_BORDER)
    }

    /// Style for the status bar.
    #[must_use]
    pub fn status_bar() -> Style {
        Style::default().fg(Self::SUBTITLE).bg(Self::STATUS_BG)
    }
}
