//! Home page: hero, about, the three card sections, contact info and footer

use ratatui::text::{Line, Span};

use folio_app::{AppState, Section};
use folio_core::content::{About, ContactInfo, Footer, Hero};

use super::cards;
use super::page::{Page, PageBuilder};
use crate::theme::{styles, Palette};

const SKILL_BAR_WIDTH: usize = 20;

/// Lay out the whole home page for the given width
pub fn home_page(state: &AppState, p: &Palette, width: u16, year: i32) -> Page {
    let profile = &state.catalog.profile;
    let mut b = PageBuilder::new(width);

    b.anchor(Section::Home);
    hero(&mut b, &profile.hero, p);
    b.anchor(Section::About);
    about(&mut b, &profile.about, p);
    cards::push_sections(&mut b, state, p);
    b.anchor(Section::Contact);
    contact(&mut b, &profile.contact, p);
    footer(&mut b, &profile.footer, &profile.hero.name, year, p);

    b.finish()
}

fn key_hint(key: &str, label: &str, p: &Palette) -> Vec<Span<'static>> {
    vec![
        Span::styled("[", styles::text_muted(p)),
        Span::styled(key.to_string(), styles::keybinding(p)),
        Span::styled(format!("] {label}   "), styles::text_muted(p)),
    ]
}

fn hero(b: &mut PageBuilder, hero: &Hero, p: &Palette) {
    b.blank();
    b.line(Line::from(vec![
        Span::styled(format!(" {} ", hero.initials), styles::focused_selected(p)),
        Span::raw("  "),
        Span::styled(hero.name.clone(), styles::page_title(p)),
    ]));
    b.blank();
    b.text(&hero.headline, styles::subheading(p));
    b.text(&hero.tagline, styles::text_secondary(p));
    b.blank();

    let mut hints = key_hint("w", "See My Work", p);
    hints.extend(key_hint("d", "Download Resume", p));
    hints.extend(key_hint("c", "Contact Me", p));
    b.line(Line::from(hints));
    b.blank();

    let mut more = vec![Span::styled("  ↓ ", styles::accent(p))];
    more.extend(key_hint(&Section::About.key().to_string(), "More about me", p));
    b.line(Line::from(more));
}

/// `████████░░ 90%`
pub fn skill_bar(level: u8, width: usize) -> String {
    let level = usize::from(level.min(100));
    let filled = level * width / 100;
    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        level
    )
}

fn about(b: &mut PageBuilder, about: &About, p: &Palette) {
    b.section_title("About Me", styles::page_title(p));
    b.text(&about.intro, styles::text_secondary(p));

    if !about.story.is_empty() {
        b.heading("My Journey", styles::subheading(p));
        for paragraph in &about.story {
            b.text(paragraph, styles::text_primary(p));
            b.blank();
        }
    }

    if !about.skills.is_empty() {
        b.heading("Technical Expertise", styles::subheading(p));
        let name_width = about
            .skills
            .iter()
            .map(|skill| skill.name.chars().count())
            .max()
            .unwrap_or(0);
        for skill in &about.skills {
            b.line(Line::from(vec![
                Span::styled(
                    format!("  {:<name_width$}  ", skill.name),
                    styles::text_primary(p),
                ),
                Span::styled(skill_bar(skill.level, SKILL_BAR_WIDTH), styles::accent(p)),
            ]));
        }
    }

    if !about.achievements.is_empty() {
        b.heading("Key Achievements", styles::subheading(p));
        for achievement in &about.achievements {
            b.bullet(2, "★", &achievement.title, styles::keybinding(p), styles::text_bold(p));
            b.indented(4, &achievement.description, styles::text_secondary(p));
        }
    }

    if !about.timeline.is_empty() {
        b.heading("Milestones", styles::subheading(p));
        for milestone in &about.timeline {
            b.line(Line::from(vec![
                Span::styled(format!("  {}  ", milestone.year), styles::accent_bold(p)),
                Span::styled(milestone.title.clone(), styles::text_bold(p)),
            ]));
            b.indented(8, &milestone.description, styles::text_secondary(p));
        }
    }
}

fn contact(b: &mut PageBuilder, contact: &ContactInfo, p: &Palette) {
    b.section_title("Get In Touch", styles::page_title(p));
    b.text(&contact.intro, styles::text_secondary(p));

    b.heading("Let's Connect", styles::subheading(p));
    for channel in &contact.channels {
        b.line(Line::from(vec![
            Span::styled(format!("  {:<10}", channel.label), styles::text_muted(p)),
            Span::styled(channel.value.clone(), styles::text_primary(p)),
        ]));
    }
    if !contact.socials.is_empty() {
        b.blank();
        let mut spans = vec![Span::raw("  ")];
        for (i, social) in contact.socials.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted(p)));
            }
            spans.push(Span::styled(social.label.clone(), styles::control(p)));
        }
        b.line(Line::from(spans));
    }

    b.blank();
    b.text(&contact.pitch, styles::text_secondary(p));
    b.blank();
    let mut hint = vec![Span::styled("Press ", styles::text_muted(p))];
    hint.extend(key_hint("c", "to send me a message", p));
    b.line(Line::from(hint));
}

fn footer(b: &mut PageBuilder, footer: &Footer, owner: &str, year: i32, p: &Palette) {
    b.blank();
    b.rule(styles::border_inactive(p));
    b.text(owner, styles::accent_bold(p));
    b.text(&footer.blurb, styles::text_secondary(p));

    if !footer.quick_links.is_empty() {
        b.heading("Quick Links", styles::text_bold(p));
        let mut spans = Vec::new();
        for (i, link) in footer.quick_links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted(p)));
            }
            // Links naming a section double as jump targets
            if let Some(section) = Section::from_label(link) {
                spans.push(Span::styled(format!("[{}] ", section.key()), styles::keybinding(p)));
            }
            spans.push(Span::styled(link.clone(), styles::text_muted(p)));
        }
        b.line(Line::from(spans));
    }
    if !footer.services.is_empty() {
        b.heading("Services", styles::text_bold(p));
        b.text(&footer.services.join(" · "), styles::text_muted(p));
    }

    b.blank();
    b.bullet(0, "●", &footer.availability, styles::status_success(p), styles::text_secondary(p));
    b.blank();
    b.text(&Footer::copyright(owner, year), styles::text_muted(p));
}
