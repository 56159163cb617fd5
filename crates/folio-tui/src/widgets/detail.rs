//! Detail pages for services, projects and articles
//!
//! Each page resolves its record through the catalog. A miss renders only the
//! not-found message and a back control.

use ratatui::text::{Line, Span};

use folio_app::AppState;
use folio_core::prelude::*;
use folio_core::{format_long_date, ArticleRecord, ContentBlock, ProjectRecord, ServiceRecord};

use super::page::{Page, PageBuilder};
use crate::theme::{styles, Palette};

/// Lay out the detail page for `(kind, id)`
pub fn detail_page(state: &AppState, kind: ContentKind, id: &str, p: &Palette, width: u16) -> Page {
    let mut b = PageBuilder::new(width);

    match state.catalog.resolve(kind, id) {
        Ok(record) => {
            back_control(&mut b, kind.back_label(), p);
            match record {
                ContentRecord::Service(service) => service_page(&mut b, service, p),
                ContentRecord::Project(project) => project_page(&mut b, project, p),
                ContentRecord::Article(article) => article_page(&mut b, state, article, p),
            }
        }
        Err(miss) => {
            trace!("Rendering fallback: {}", miss);
            not_found_page(&mut b, kind, p);
        }
    }

    b.finish()
}

fn back_control(b: &mut PageBuilder, label: &str, p: &Palette) {
    b.line(Line::from(vec![
        Span::styled(format!("← {label}"), styles::control(p)),
        Span::styled("  [Esc]", styles::text_muted(p)),
    ]));
    b.blank();
}

fn not_found_page(b: &mut PageBuilder, kind: ContentKind, p: &Palette) {
    b.blank();
    b.text(kind.not_found_title(), styles::page_title(p));
    b.blank();
    back_control(b, "Go back", p);
}

fn title_block(b: &mut PageBuilder, title: &str, subtitle: &str, p: &Palette) {
    b.text(title, styles::page_title(p));
    b.text(subtitle, styles::subheading(p));
}

fn tags(b: &mut PageBuilder, items: &[String], prefix: &str, p: &Palette) {
    let joined = items
        .iter()
        .map(|item| format!("{prefix}{item}"))
        .collect::<Vec<_>>()
        .join("  ");
    b.text(&joined, styles::tag(p));
}

// ─────────────────────────────────────────────────────────────────────────────
// Service
// ─────────────────────────────────────────────────────────────────────────────

fn service_page(b: &mut PageBuilder, service: &ServiceRecord, p: &Palette) {
    title_block(b, &service.title, &service.subtitle, p);
    b.blank();
    b.text(&service.description, styles::text_primary(p));

    if !service.stats.is_empty() {
        b.blank();
        let mut spans = Vec::new();
        for stat in &service.stats {
            spans.push(Span::styled(stat.value.clone(), styles::accent_bold(p)));
            spans.push(Span::styled(format!(" {}   ", stat.label), styles::text_muted(p)));
        }
        b.line(Line::from(spans));
    }

    b.section_title("What's Included", styles::section_title(p));
    for feature in &service.features {
        b.bullet(2, "✓", feature, styles::status_success(p), styles::text_primary(p));
    }

    b.section_title("Technologies", styles::section_title(p));
    tags(b, &service.technologies, "", p);

    b.section_title("My Process", styles::section_title(p));
    for (i, step) in service.process.iter().enumerate() {
        b.line(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), styles::accent_bold(p)),
            Span::styled(step.step.clone(), styles::text_bold(p)),
        ]));
        b.indented(5, &step.description, styles::text_secondary(p));
    }

    if !service.testimonials.is_empty() {
        b.section_title("Client Testimonials", styles::section_title(p));
        for testimonial in &service.testimonials {
            b.indented(2, &format!("“{}”", testimonial.content), styles::text_secondary(p));
            b.indented(
                4,
                &format!("- {}, {}", testimonial.name, testimonial.role),
                styles::text_muted(p),
            );
            b.blank();
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Project
// ─────────────────────────────────────────────────────────────────────────────

fn project_page(b: &mut PageBuilder, project: &ProjectRecord, p: &Palette) {
    title_block(b, &project.title, &project.subtitle, p);
    b.blank();
    b.line(Line::from(vec![
        Span::styled("Timeline ", styles::text_muted(p)),
        Span::styled(project.timeline.clone(), styles::text_primary(p)),
        Span::styled("   Team ", styles::text_muted(p)),
        Span::styled(project.team.clone(), styles::text_primary(p)),
        Span::styled("   Client ", styles::text_muted(p)),
        Span::styled(project.client.clone(), styles::text_primary(p)),
    ]));
    b.blank();
    b.text(&project.description, styles::text_primary(p));

    b.section_title("The Challenge", styles::section_title(p));
    b.text(&project.challenge, styles::text_primary(p));

    b.section_title("The Solution", styles::section_title(p));
    b.text(&project.solution, styles::text_primary(p));

    b.section_title("Key Features", styles::section_title(p));
    for feature in &project.features {
        b.bullet(2, "•", feature, styles::accent(p), styles::text_primary(p));
    }

    b.section_title("Technologies Used", styles::section_title(p));
    tags(b, &project.technologies, "", p);

    if !project.metrics.is_empty() {
        b.section_title("Project Impact", styles::section_title(p));
        for metric in &project.metrics {
            b.line(Line::from(vec![
                Span::styled(format!("  {:>8}  ", metric.value), styles::accent_bold(p)),
                Span::styled(metric.label(), styles::text_secondary(p)),
            ]));
        }
    }

    if !project.challenges.is_empty() {
        b.section_title("Challenges Overcome", styles::section_title(p));
        for challenge in &project.challenges {
            b.bullet(2, "◆", &challenge.title, styles::accent_bold(p), styles::text_bold(p));
            b.indented(4, &challenge.description, styles::text_secondary(p));
        }
    }

    if !project.results.is_empty() {
        b.section_title("Results", styles::section_title(p));
        for result in &project.results {
            b.bullet(2, "✓", result, styles::status_success(p), styles::text_primary(p));
        }
    }

    b.section_title("Client Testimonial", styles::section_title(p));
    b.indented(2, &format!("“{}”", project.testimonial.content), styles::text_secondary(p));
    b.indented(
        4,
        &format!("- {}, {}", project.testimonial.author, project.testimonial.role),
        styles::text_muted(p),
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Article
// ─────────────────────────────────────────────────────────────────────────────

fn article_page(b: &mut PageBuilder, state: &AppState, article: &ArticleRecord, p: &Palette) {
    b.text(&article.category, styles::tag(p));
    title_block(b, &article.title, &article.subtitle, p);
    b.blank();
    b.line(Line::from(vec![
        Span::styled(format!("By {}", article.author), styles::text_primary(p)),
        Span::styled(
            format!(" · {} · {}", format_long_date(&article.date), article.read_time),
            styles::text_muted(p),
        ),
    ]));

    let toc = article.table_of_contents();
    if !toc.is_empty() {
        b.section_title("Table of Contents", styles::section_title(p));
        for (i, heading) in toc.iter().enumerate() {
            b.bullet(2, &format!("{}.", i + 1), heading, styles::accent(p), styles::text_secondary(p));
        }
    }

    b.blank();
    b.rule(styles::border_inactive(p));
    for block in &article.content {
        match block {
            ContentBlock::Heading(text) => b.heading(text, styles::subheading(p)),
            ContentBlock::Paragraph(text) => {
                b.blank();
                b.text(text, styles::text_primary(p));
            }
        }
    }
    b.blank();
    b.rule(styles::border_inactive(p));

    if !article.tags.is_empty() {
        b.blank();
        tags(b, &article.tags, "#", p);
    }

    let related = state.catalog.related_articles(article);
    if !related.is_empty() {
        b.section_title("Related Articles", styles::section_title(p));
        for (i, (_, record)) in related.iter().enumerate() {
            let focused = state.related_focus == Some(i);
            b.focusable(focused, |b| {
                let style = if focused {
                    styles::focused_selected(p)
                } else {
                    styles::control(p)
                };
                b.line(Line::from(vec![
                    Span::styled(if focused { "▶ " } else { "  " }, styles::accent_bold(p)),
                    Span::styled(format!("→ {}", record.title), style),
                ]));
                b.indented(
                    4,
                    &format!("{} · {}", format_long_date(&record.date), record.read_time),
                    styles::text_muted(p),
                );
            });
        }
    }
}
