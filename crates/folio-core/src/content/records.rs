//! Summary and detail records for services, projects and articles

use serde::Deserialize;

use super::format::humanize_key;

/// Anything a section view can split into featured and other entries.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

// ─────────────────────────────────────────────────────────────────
// Summaries (home page cards)
// ─────────────────────────────────────────────────────────────────

/// A service card on the home page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A project card on the home page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    /// Live demo link, when the project has one
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Source code link, when the project has one
    #[serde(default)]
    pub code_url: Option<String>,
}

/// A blog post card on the home page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub read_time: String,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

impl Featured for ServiceSummary {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Featured for ProjectSummary {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Featured for ArticleSummary {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

// ─────────────────────────────────────────────────────────────────
// Service detail
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessStep {
    pub step: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
}

/// Full record behind the service detail view
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceRecord {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub process: Vec<ProcessStep>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

// ─────────────────────────────────────────────────────────────────
// Project detail
// ─────────────────────────────────────────────────────────────────

/// One headline number of a project. Metrics keep their declared order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metric {
    pub key: String,
    pub value: String,
}

impl Metric {
    /// Display label derived from the key (`"activeUsers"` -> `"Active Users"`)
    pub fn label(&self) -> String {
        humanize_key(&self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientQuote {
    pub content: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
}

/// Full record behind the project detail view
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub timeline: String,
    pub team: String,
    pub client: String,
    pub testimonial: ClientQuote,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub results: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────
// Article detail
// ─────────────────────────────────────────────────────────────────

/// A block of article body text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading(String),
    Paragraph(String),
}

impl ContentBlock {
    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Heading(text) | ContentBlock::Paragraph(text) => text,
        }
    }
}

/// Full record behind the article detail view
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub read_time: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ids into the article table. Not checked at load time.
    #[serde(default, rename = "related")]
    pub related_articles: Vec<String>,
}

impl ArticleRecord {
    /// Heading blocks in body order
    pub fn table_of_contents(&self) -> Vec<&str> {
        self.content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Heading(text) => Some(text.as_str()),
                ContentBlock::Paragraph(_) => None,
            })
            .collect()
    }
}
