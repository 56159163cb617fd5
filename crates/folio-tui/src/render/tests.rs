use super::*;
use crate::test_utils::{test_app_state, TestTerminal};
use crate::theme::palette::{DARK, LIGHT};
use folio_core::ContentKind;

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| render_at(frame, state, 2024));
}

#[test]
fn test_home_renders_hero_and_chrome() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();

    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Jawad Rahimi"));
    assert!(term.buffer_contains("/ Home"));
    assert!(term.buffer_contains("● Home"));
}

#[test]
fn test_view_reports_scroll_sizes() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();

    draw(&mut term, &mut state);

    // 24 rows - header 3 - status 2 - body borders 2
    assert_eq!(state.scroll.visible_lines, 17);
    assert!(state.scroll.total_lines > state.scroll.visible_lines);
}

#[test]
fn test_article_detail_renders_title() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    state.navigate(ContentKind::Article, "flutter-cross-platform");

    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Why I Chose Flutter for Cross-Platform Development"));
    assert!(term.buffer_contains("Blog / Why I Chose Flutter"));
}

#[test]
fn test_renavigation_renders_new_article() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    state.navigate(ContentKind::Article, "flutter-cross-platform");
    draw(&mut term, &mut state);

    state.navigate(ContentKind::Article, "django-ai-integration");
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("How I Built a Smart App with Django & AI"));
    assert!(term.buffer_contains("Blog / How I Built"));
}

#[test]
fn test_renavigation_scrolls_to_top() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    state.navigate(ContentKind::Article, "flutter-cross-platform");
    draw(&mut term, &mut state);
    state.scroll.scroll_down(10);
    draw(&mut term, &mut state);
    assert!(!term.buffer_contains("Back to Blog"));

    state.navigate(ContentKind::Article, "flutter-cross-platform");
    draw(&mut term, &mut state);

    assert_eq!(state.scroll.offset, 0);
    assert!(term.buffer_contains("← Back to Blog"));
}

#[test]
fn test_not_found_fallback_renders() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    state.navigate(ContentKind::Article, "nonexistent");

    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Article not found"));
    assert!(term.buffer_contains("Go back"));
    assert!(term.buffer_contains("Blog / nonexistent"));
}

#[test]
fn test_focused_card_is_revealed() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    draw(&mut term, &mut state);

    // Wraps to the last blog card, far down the page
    state.focus_prev_card();
    draw(&mut term, &mut state);

    assert!(state.scroll.offset > 0);
    assert!(!state.scroll.reveal_pending);
    assert!(term.buffer_contains("The Future of Afghan Tech Community"));
}

#[test]
fn test_theme_toggle_switches_palette() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    state.theme = folio_app::ThemePreference::new(true);
    draw(&mut term, &mut state);
    assert_eq!(term.buffer()[(0, 0)].bg, DARK.surface);

    state.toggle_theme();
    draw(&mut term, &mut state);
    assert_eq!(term.buffer()[(0, 0)].bg, LIGHT.surface);
}

#[test]
fn test_contact_overlay_renders() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    state.open_contact_form();

    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Send Me a Message"));
    assert!(term.buffer_contains("✎ Contact"));
}

#[test]
fn test_compact_terminal_renders() {
    let mut term = TestTerminal::compact();
    let mut state = test_app_state();
    draw(&mut term, &mut state);
    state.navigate(ContentKind::Project, "afghansport-app");
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("AfghanSport"));
}

#[test]
fn test_breadcrumb() {
    let mut state = test_app_state();
    assert_eq!(breadcrumb(&state), "Home");
    state.navigate(ContentKind::Service, "web-development");
    assert_eq!(breadcrumb(&state), "Services / Web Development");
}

#[test]
fn test_section_jump_scrolls_heading_into_view() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    draw(&mut term, &mut state);
    assert!(!term.buffer_contains("Latest Articles"));

    state.jump_to_section(folio_app::Section::Blog);
    draw(&mut term, &mut state);

    assert!(state.scroll.offset > 0);
    assert_eq!(state.scroll.pending_jump, None);
    assert!(term.buffer_contains("Latest Articles"));
}

#[test]
fn test_section_jump_from_detail_lands_on_home_section() {
    let mut term = TestTerminal::new();
    let mut state = test_app_state();
    state.navigate(ContentKind::Project, "dukandar");
    draw(&mut term, &mut state);

    state.jump_to_section(folio_app::Section::Contact);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("/ Home"));
    assert!(term.buffer_contains("Get In Touch"));
}
