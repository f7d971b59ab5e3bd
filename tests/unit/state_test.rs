//! Tests for application state: focus, card activation and banner routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};
use subpanel::app::{print_lines, state::AppState};
use subpanel::tui::{buffer_lines, render_screen, screen_layout};
use subpanel::tui::widgets::collaborators::InfoNotice;
use subpanel::types::{Catalog, OfferRecord, ServiceIcon};

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn print_screen(area: Rect, state: &AppState) -> String {
    let mut buf = Buffer::empty(area);
    render_screen(state, area, &mut buf);
    buffer_lines(&buf).join("\n")
}

fn center(rect: Rect) -> Position {
    Position::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

#[test]
fn test_click_on_card_selects_offer() {
    let mut state = AppState::new(Catalog::demo());
    let layout = screen_layout(SCREEN, &state);

    state.handle_click(SCREEN, center(layout.cards[2]));

    assert_eq!(state.focused(), 2);
    assert_eq!(
        state.selected_offer().map(OfferRecord::title_text),
        Some("Basic")
    );
}

#[test]
fn test_catalog_scrolls_to_keep_focused_card_visible() {
    let short = Rect::new(0, 0, 100, 20);
    let mut state = AppState::new(Catalog::demo());
    assert_eq!(screen_layout(short, &state).cards.len(), 2);

    state.handle_key(key(KeyCode::Down));
    state.handle_key(key(KeyCode::Down));
    state.handle_key(key(KeyCode::Enter));

    let layout = screen_layout(short, &state);
    assert_eq!(layout.first_card, 1);
    assert!((layout.first_card..layout.first_card + layout.cards.len()).contains(&2));
    let output = print_screen(short, &state);
    assert!(output.contains("Basic"));
    assert!(!output.contains("Kinopoisk"));

    let mut state = AppState::new(Catalog::demo());
    state.focus_next();
    state.focus_next();
    let last = *screen_layout(short, &state).cards.last().expect("a card is laid out");
    state.handle_click(short, center(last));
    assert_eq!(
        state.selected_offer().map(OfferRecord::title_text),
        Some("Basic")
    );
}

#[test]
fn test_click_outside_cards_selects_nothing() {
    let mut state = AppState::new(Catalog::demo());
    state.handle_click(SCREEN, Position::new(0, SCREEN.height - 1));
    assert!(state.selected_offer().is_none());
}

#[test]
fn test_click_on_close_marker_dismisses_banner() {
    let mut state = AppState::new(Catalog::demo());
    let banner_area = screen_layout(SCREEN, &state)
        .panel_areas
        .banner
        .expect("banner visible on start");
    let marker = InfoNotice::close_marker_area(banner_area);

    state.handle_click(SCREEN, Position::new(marker.x, marker.y));

    assert!(!state.panel().is_banner_visible());
    assert!(screen_layout(SCREEN, &state).panel_areas.banner.is_none());
}

#[test]
fn test_banner_stays_dismissed_when_services_change() {
    let mut state = AppState::new(Catalog::demo());
    state.handle_key(key(KeyCode::Esc));
    state.set_services(Vec::new());
    state.set_services(vec![ServiceIcon::named("Start")]);

    assert!(!state.panel().is_banner_visible());
    let output = print_lines(&state).join("\n");
    assert!(output.contains("● Start"));
    assert!(!output.contains("[x]"));
}

#[test]
fn test_print_lines_show_cards_and_panel() {
    let state = AppState::new(Catalog::demo());
    let output = print_lines(&state).join("\n");

    assert!(output.contains("Catalog"));
    assert!(output.contains("From 299₽/month"));
    assert!(output.contains("From 199₽/mo"));
    assert!(output.contains("My subscriptions"));
    assert!(output.contains("History"));
    assert!(output.contains("[x]"));
    assert!(!output.contains("undefined"));
}

#[test]
fn test_render_marks_clean() {
    let mut state = AppState::new(Catalog::default());
    assert!(state.needs_render());
    state.mark_rendered();
    assert!(!state.needs_render());
    state.handle_key(key(KeyCode::Down));
    assert!(!state.needs_render());
    state.mark_full_redraw();
    assert!(state.needs_render());
}
