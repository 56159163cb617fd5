//! Home page section cards: services, projects and blog
//!
//! Cards are laid out in the order of [`AppState::home_cards`], so the card
//! index used for keyboard focus always matches what is on screen.

use ratatui::text::{Line, Span};

use folio_app::state::HomeCard;
use folio_app::{AppState, CardControl, ProjectLink, Section};
use folio_core::{format_long_date, ArticleSummary, ContentKind, ProjectSummary, ServiceSummary};

use super::page::PageBuilder;
use crate::theme::{styles, Palette};

pub const SERVICES_INTRO: &str = "I offer comprehensive development services to help bring your ideas to life with cutting-edge technology and thoughtful design.";
pub const PROJECTS_INTRO: &str = "A showcase of my recent work, demonstrating expertise in mobile and web development with modern technologies.";
pub const BLOG_INTRO: &str = "Sharing insights about technology, development practices, and the future of software engineering.";

fn section_of(kind: ContentKind) -> Section {
    match kind {
        ContentKind::Service => Section::Services,
        ContentKind::Project => Section::Projects,
        ContentKind::Article => Section::Blog,
    }
}

fn section_heading(kind: ContentKind) -> (&'static str, &'static str) {
    match kind {
        ContentKind::Service => ("My Services", SERVICES_INTRO),
        ContentKind::Project => ("Featured Projects", PROJECTS_INTRO),
        ContentKind::Article => ("Latest Articles", BLOG_INTRO),
    }
}

/// `(featured, other)` group headings
fn group_titles(kind: ContentKind) -> (&'static str, &'static str) {
    match kind {
        ContentKind::Service => ("Featured Services", "Other Services"),
        ContentKind::Project => ("Featured Work", "Other Projects"),
        ContentKind::Article => ("Featured Articles", "Recent Articles"),
    }
}

/// Label of a card's own control
fn open_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Service => "Learn More →",
        ContentKind::Project => "View Details →",
        ContentKind::Article => "Read More →",
    }
}

/// Append the three card sections to the home page
pub fn push_sections(b: &mut PageBuilder, state: &AppState, p: &Palette) {
    let cards = &state.home_cards;
    let mut current: Option<(ContentKind, bool)> = None;

    for (index, card) in cards.iter().enumerate() {
        let previous = current.map(|(kind, _)| kind);
        let kind_changed = previous != Some(card.kind);
        if kind_changed {
            if let Some(kind) = previous {
                section_outro(b, kind, p);
            }
            b.anchor(section_of(card.kind));
            let (title, intro) = section_heading(card.kind);
            b.section_title(title, styles::page_title(p));
            b.text(intro, styles::text_secondary(p));
        }

        if kind_changed || current.map(|(_, featured)| featured) != Some(card.featured) {
            // A group heading only means something when both groups exist
            let has_featured = cards.iter().any(|c| c.kind == card.kind && c.featured);
            let has_other = cards.iter().any(|c| c.kind == card.kind && !c.featured);
            if has_featured && has_other {
                let (featured, other) = group_titles(card.kind);
                b.heading(
                    if card.featured { featured } else { other },
                    styles::subheading(p),
                );
            }
        }
        current = Some((card.kind, card.featured));

        b.blank();
        push_card(b, state, index, card, p);
    }

    if let Some((kind, _)) = current {
        section_outro(b, kind, p);
    }
}

/// Closing call to action; only the services section has one
fn section_outro(b: &mut PageBuilder, kind: ContentKind, p: &Palette) {
    if kind != ContentKind::Service {
        return;
    }
    b.heading("Ready to Start Your Project?", styles::subheading(p));
    b.text(
        "Let's collaborate to bring your ideas to life with innovative technology solutions.",
        styles::text_secondary(p),
    );
    b.line(Line::from(vec![
        Span::styled("Press ", styles::text_muted(p)),
        Span::styled(format!("[{}]", Section::Contact.key()), styles::keybinding(p)),
        Span::styled(" to get in touch", styles::text_muted(p)),
    ]));
}

fn push_card(b: &mut PageBuilder, state: &AppState, index: usize, card: &HomeCard, p: &Palette) {
    let focused = state.home_focus.card == Some(index);
    let control = focused.then_some(state.home_focus.control);
    let catalog = &state.catalog;

    b.focusable(focused, |b| match card.kind {
        ContentKind::Service => {
            if let Some(summary) = catalog.services.iter().find(|s| s.id == card.id) {
                service_card(b, summary, focused, control, p);
            }
        }
        ContentKind::Project => {
            if let Some(summary) = catalog.projects.iter().find(|s| s.id == card.id) {
                project_card(b, summary, focused, control, p);
            }
        }
        ContentKind::Article => {
            if let Some(summary) = catalog.articles.iter().find(|s| s.id == card.id) {
                article_card(b, summary, focused, control, p);
            }
        }
    });
}

fn title_line(title: &str, badge: Option<&str>, focused: bool, p: &Palette) -> Line<'static> {
    let (marker, style) = if focused {
        (Span::styled("▶ ", styles::accent_bold(p)), styles::focused_selected(p))
    } else {
        (Span::raw("  "), styles::text_bold(p))
    };
    let mut spans = vec![marker, Span::styled(format!(" {title} "), style)];
    if let Some(badge) = badge {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(badge.to_string(), styles::tag(p)));
    }
    Line::from(spans)
}

fn control_span(
    label: &str,
    this: CardControl,
    focus: Option<CardControl>,
    available: bool,
    p: &Palette,
) -> Span<'static> {
    let style = if focus == Some(this) {
        styles::focused_selected(p)
    } else if available {
        styles::control(p)
    } else {
        styles::text_muted(p)
    };
    Span::styled(format!("[ {label} ]"), style)
}

fn service_card(
    b: &mut PageBuilder,
    service: &ServiceSummary,
    focused: bool,
    control: Option<CardControl>,
    p: &Palette,
) {
    b.line(title_line(&service.title, None, focused, p));
    b.indented(3, &service.description, styles::text_secondary(p));
    for feature in &service.features {
        b.bullet(3, "✓", feature, styles::status_success(p), styles::text_primary(p));
    }
    b.line(Line::from(vec![
        Span::raw("   "),
        control_span(open_label(ContentKind::Service), CardControl::Open, control, true, p),
    ]));
}

fn project_card(
    b: &mut PageBuilder,
    project: &ProjectSummary,
    focused: bool,
    control: Option<CardControl>,
    p: &Palette,
) {
    b.line(title_line(&project.title, Some(&project.category), focused, p));
    b.indented(3, &project.description, styles::text_secondary(p));
    b.indented(3, &project.tech.join(" · "), styles::tag(p));
    b.line(Line::from(vec![
        Span::raw("   "),
        control_span(open_label(ContentKind::Project), CardControl::Open, control, true, p),
        Span::raw("  "),
        control_span(
            ProjectLink::LiveDemo.label(),
            CardControl::Link(ProjectLink::LiveDemo),
            control,
            project.demo_url.is_some(),
            p,
        ),
        Span::raw("  "),
        control_span(
            ProjectLink::Code.label(),
            CardControl::Link(ProjectLink::Code),
            control,
            project.code_url.is_some(),
            p,
        ),
    ]));
}

fn article_card(
    b: &mut PageBuilder,
    article: &ArticleSummary,
    focused: bool,
    control: Option<CardControl>,
    p: &Palette,
) {
    b.line(title_line(&article.title, Some(&article.category), focused, p));
    b.indented(
        3,
        &format!("{} · {}", format_long_date(&article.date), article.read_time),
        styles::text_muted(p),
    );
    b.indented(3, &article.excerpt, styles::text_secondary(p));
    b.line(Line::from(vec![
        Span::raw("   "),
        control_span(open_label(ContentKind::Article), CardControl::Open, control, true, p),
    ]));
}
