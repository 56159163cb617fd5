//! Application state (Model in TEA pattern)

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::contact::ContactForm;
use crate::message::{ProjectLink, Section};
use crate::page_scroll::PageScrollState;
use crate::theme::ThemePreference;
use folio_core::prelude::*;
use folio_core::partition_featured;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Reading the home page or a detail page
    #[default]
    Browse,

    /// Contact form overlay has keyboard focus
    ContactForm,
}

/// Which page is on screen.
///
/// Replaced wholesale on every navigation. The `id` of a detail view is not
/// checked against the content tables; an unknown id renders the not-found
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Detail { kind: ContentKind, id: String },
}

impl ViewState {
    pub fn is_home(&self) -> bool {
        matches!(self, ViewState::Home)
    }

    /// `(kind, id)` of a detail view
    pub fn detail(&self) -> Option<(ContentKind, &str)> {
        match self {
            ViewState::Home => None,
            ViewState::Detail { kind, id } => Some((*kind, id.as_str())),
        }
    }
}

/// A focusable element inside a home page card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardControl {
    /// The card itself; activating it navigates to the detail view
    #[default]
    Open,
    /// A nested project link
    Link(ProjectLink),
}

const PLAIN_CONTROLS: &[CardControl] = &[CardControl::Open];
const PROJECT_CONTROLS: &[CardControl] = &[
    CardControl::Open,
    CardControl::Link(ProjectLink::LiveDemo),
    CardControl::Link(ProjectLink::Code),
];

/// A selectable card on the home page, in rendered order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeCard {
    pub kind: ContentKind,
    pub id: String,
    pub featured: bool,
}

impl HomeCard {
    /// Focusable controls of this card, card-level control first
    pub fn controls(&self) -> &'static [CardControl] {
        match self.kind {
            ContentKind::Project => PROJECT_CONTROLS,
            ContentKind::Service | ContentKind::Article => PLAIN_CONTROLS,
        }
    }
}

/// Keyboard focus on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeFocus {
    /// Index into [`AppState::home_cards`]; `None` until the first Tab
    pub card: Option<usize>,
    pub control: CardControl,
}

/// Cards in the order the home page renders them: services, projects, blog,
/// each with its featured entries first.
pub fn home_cards(catalog: &Catalog) -> Vec<HomeCard> {
    let mut cards = Vec::new();

    let (featured, other) = partition_featured(&catalog.services);
    for (service, is_featured) in tag(featured, true).chain(tag(other, false)) {
        cards.push(HomeCard {
            kind: ContentKind::Service,
            id: service.id.clone(),
            featured: is_featured,
        });
    }

    let (featured, other) = partition_featured(&catalog.projects);
    for (project, is_featured) in tag(featured, true).chain(tag(other, false)) {
        cards.push(HomeCard {
            kind: ContentKind::Project,
            id: project.id.clone(),
            featured: is_featured,
        });
    }

    let (featured, recent) = partition_featured(&catalog.articles);
    for (article, is_featured) in tag(featured, true).chain(tag(recent, false)) {
        cards.push(HomeCard {
            kind: ContentKind::Article,
            id: article.id.clone(),
            featured: is_featured,
        });
    }

    cards
}

fn tag<T>(items: Vec<&T>, featured: bool) -> impl Iterator<Item = (&T, bool)> {
    items.into_iter().map(move |item| (item, featured))
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Static content, shared with the renderer
    pub catalog: Arc<Catalog>,

    /// Settings from `config.toml`
    pub settings: Settings,

    /// Directory holding `config.toml` and `preferences.toml`
    pub config_dir: PathBuf,

    pub phase: AppPhase,

    pub ui_mode: UiMode,

    /// Current page
    pub view: ViewState,

    /// Light/dark palette choice
    pub theme: ThemePreference,

    /// Scroll position of the current page
    pub scroll: PageScrollState,

    /// Selectable home page cards
    pub home_cards: Vec<HomeCard>,

    pub home_focus: HomeFocus,

    /// Focused related-article link on an article page
    pub related_focus: Option<usize>,

    pub contact: ContactForm,

    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        settings: Settings,
        config_dir: PathBuf,
        theme: ThemePreference,
    ) -> Self {
        let home_cards = home_cards(&catalog);
        Self {
            catalog,
            settings,
            config_dir,
            phase: AppPhase::Running,
            ui_mode: UiMode::Browse,
            view: ViewState::Home,
            theme,
            scroll: PageScrollState::new(),
            home_cards,
            home_focus: HomeFocus::default(),
            related_focus: None,
            contact: ContactForm::new(),
            status_message: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Show a detail view. Always starts at the top of the page, even when
    /// the same detail view is already showing.
    pub fn navigate(&mut self, kind: ContentKind, id: impl Into<String>) {
        let id = id.into();
        debug!("Navigate to {} '{}'", kind, id);
        self.view = ViewState::Detail { kind, id };
        self.scroll.reset();
        self.related_focus = None;
        self.status_message = None;
    }

    /// Back to the home page, top of page, no card focused
    pub fn navigate_home(&mut self) {
        debug!("Navigate home");
        self.view = ViewState::Home;
        self.scroll.reset();
        self.home_focus = HomeFocus::default();
        self.related_focus = None;
        self.status_message = None;
    }

    /// Scroll the home page to `section`. From a detail view this goes home
    /// first; card focus is dropped so the jump is not undone by a reveal.
    pub fn jump_to_section(&mut self, section: Section) {
        if !self.view.is_home() {
            self.navigate_home();
        }
        debug!("Jump to section {}", section.label());
        self.home_focus = HomeFocus::default();
        self.scroll.request_jump(section);
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.theme
    }

    // ─────────────────────────────────────────────────────────
    // Home Focus
    // ─────────────────────────────────────────────────────────

    pub fn focused_card(&self) -> Option<&HomeCard> {
        self.home_focus
            .card
            .and_then(|index| self.home_cards.get(index))
    }

    pub fn focus_next_card(&mut self) {
        if self.home_cards.is_empty() {
            return;
        }
        let next = match self.home_focus.card {
            Some(index) => (index + 1) % self.home_cards.len(),
            None => 0,
        };
        self.focus_card(next);
    }

    pub fn focus_prev_card(&mut self) {
        if self.home_cards.is_empty() {
            return;
        }
        let len = self.home_cards.len();
        let prev = match self.home_focus.card {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.focus_card(prev);
    }

    fn focus_card(&mut self, index: usize) {
        self.home_focus = HomeFocus {
            card: Some(index),
            control: CardControl::Open,
        };
        self.scroll.request_reveal();
    }

    /// Move between the focused card's controls. No-op for cards without
    /// nested controls.
    pub fn focus_next_control(&mut self) {
        self.step_control(1);
    }

    pub fn focus_prev_control(&mut self) {
        self.step_control(-1);
    }

    fn step_control(&mut self, step: isize) {
        let Some(card) = self.focused_card() else {
            return;
        };
        let controls = card.controls();
        let current = controls
            .iter()
            .position(|control| *control == self.home_focus.control)
            .unwrap_or(0);
        let len = controls.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.home_focus.control = controls[next];
    }

    // ─────────────────────────────────────────────────────────
    // Related Articles
    // ─────────────────────────────────────────────────────────

    /// Ids of the related articles listed on the current article page
    pub fn related_ids(&self) -> Vec<String> {
        let Some((ContentKind::Article, id)) = self.view.detail() else {
            return Vec::new();
        };
        match self.catalog.article(id) {
            Ok(record) => self
                .catalog
                .related_articles(record)
                .into_iter()
                .map(|(id, _)| id.to_string())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn focus_next_related(&mut self) {
        let len = self.related_ids().len();
        if len == 0 {
            return;
        }
        self.related_focus = Some(match self.related_focus {
            Some(index) => (index + 1) % len,
            None => 0,
        });
        self.scroll.request_reveal();
    }

    pub fn focus_prev_related(&mut self) {
        let len = self.related_ids().len();
        if len == 0 {
            return;
        }
        self.related_focus = Some(match self.related_focus {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        });
        self.scroll.request_reveal();
    }

    pub fn focused_related(&self) -> Option<String> {
        let index = self.related_focus?;
        self.related_ids().into_iter().nth(index)
    }

    // ─────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────

    pub fn is_contact_open(&self) -> bool {
        self.ui_mode == UiMode::ContactForm
    }

    pub fn open_contact_form(&mut self) {
        self.ui_mode = UiMode::ContactForm;
    }

    pub fn close_contact_form(&mut self) {
        self.ui_mode = UiMode::Browse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        AppState::new(
            catalog,
            Settings::default(),
            PathBuf::from("/tmp/folio-test"),
            ThemePreference::new(false),
        )
    }

    #[test]
    fn test_initial_state_is_home() {
        let state = state();
        assert!(state.view.is_home());
        assert_eq!(state.scroll.offset, 0);
        assert_eq!(state.home_focus.card, None);
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_jump_to_section_clears_card_focus() {
        let mut state = state();
        state.focus_next_card();
        state.jump_to_section(Section::Blog);
        assert_eq!(state.home_focus.card, None);
        assert_eq!(state.scroll.pending_jump, Some(Section::Blog));
        assert!(!state.scroll.reveal_pending);
    }

    #[test]
    fn test_jump_from_detail_goes_home() {
        let mut state = state();
        state.navigate(ContentKind::Article, "flutter-cross-platform");
        state.jump_to_section(Section::Contact);
        assert!(state.view.is_home());
        assert_eq!(state.scroll.pending_jump, Some(Section::Contact));
    }

    #[test]
    fn test_home_cards_in_rendered_order() {
        let state = state();
        assert_eq!(state.home_cards.len(), 18);

        let kinds: Vec<ContentKind> = state.home_cards.iter().map(|c| c.kind).collect();
        assert!(kinds[..6].iter().all(|k| *k == ContentKind::Service));
        assert!(kinds[6..12].iter().all(|k| *k == ContentKind::Project));
        assert!(kinds[12..].iter().all(|k| *k == ContentKind::Article));

        assert_eq!(state.home_cards[12].id, "flutter-cross-platform");
        assert!(state.home_cards[12].featured);
        assert_eq!(state.home_cards[14].id, "sam-altman-inspiration");
        assert!(!state.home_cards[14].featured);
    }

    #[test]
    fn test_featured_projects_come_first() {
        let state = state();
        let projects: Vec<&HomeCard> = state
            .home_cards
            .iter()
            .filter(|c| c.kind == ContentKind::Project)
            .collect();
        let first_other = projects.iter().position(|c| !c.featured);
        if let Some(first_other) = first_other {
            assert!(projects[first_other..].iter().all(|c| !c.featured));
        }
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut state = state();
        state.focus_prev_card();
        assert_eq!(state.home_focus.card, Some(17));
        state.focus_next_card();
        assert_eq!(state.home_focus.card, Some(0));
        assert!(state.scroll.reveal_pending);
    }

    #[test]
    fn test_project_controls_cycle() {
        let mut state = state();
        state.home_focus.card = Some(6);
        state.focus_next_control();
        assert_eq!(
            state.home_focus.control,
            CardControl::Link(ProjectLink::LiveDemo)
        );
        state.focus_next_control();
        state.focus_next_control();
        assert_eq!(state.home_focus.control, CardControl::Open);
        state.focus_prev_control();
        assert_eq!(state.home_focus.control, CardControl::Link(ProjectLink::Code));
    }

    #[test]
    fn test_service_card_has_no_nested_controls() {
        let mut state = state();
        state.home_focus.card = Some(0);
        state.focus_next_control();
        assert_eq!(state.home_focus.control, CardControl::Open);
    }

    #[test]
    fn test_changing_card_resets_control() {
        let mut state = state();
        state.home_focus.card = Some(6);
        state.focus_next_control();
        state.focus_next_card();
        assert_eq!(state.home_focus.control, CardControl::Open);
    }

    #[test]
    fn test_related_ids_for_article() {
        let mut state = state();
        assert!(state.related_ids().is_empty());

        state.navigate(ContentKind::Article, "flutter-cross-platform");
        assert_eq!(
            state.related_ids(),
            vec!["django-ai-integration", "sam-altman-inspiration"]
        );

        state.focus_prev_related();
        assert_eq!(
            state.focused_related().as_deref(),
            Some("sam-altman-inspiration")
        );
    }

    #[test]
    fn test_related_focus_on_unknown_article_is_noop() {
        let mut state = state();
        state.navigate(ContentKind::Article, "nonexistent");
        state.focus_next_related();
        assert_eq!(state.related_focus, None);
    }
}
