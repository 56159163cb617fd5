//! Static portfolio content
//!
//! Content is embedded in the binary as TOML, parsed once into a [`Catalog`]
//! and never mutated afterwards. Each [`ContentKind`] owns an independent id
//! namespace; detail views look records up with [`resolve`] and fall back to
//! a not-found view on a [`LookupMiss`].

mod catalog;
mod format;
mod profile;
mod records;

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, LookupMiss, Result};

pub use catalog::Catalog;
pub use format::{format_long_date, humanize_key, partition_featured, INVALID_DATE};
pub use profile::{
    About, Achievement, Channel, ContactInfo, Footer, Hero, Milestone, Profile, Skill, SocialLink,
};
pub use records::{
    ArticleRecord, ArticleSummary, Challenge, ClientQuote, ContentBlock, Featured, Metric,
    ProcessStep, ProjectRecord, ProjectSummary, ServiceRecord, ServiceSummary, Stat, Testimonial,
};

/// The three kinds of navigable content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Service,
    Project,
    Article,
}

impl ContentKind {
    /// Section name as shown on the home page
    pub fn section_title(&self) -> &'static str {
        match self {
            ContentKind::Service => "Services",
            ContentKind::Project => "Projects",
            ContentKind::Article => "Blog",
        }
    }

    /// Label of the back control on a detail page
    pub fn back_label(&self) -> &'static str {
        match self {
            ContentKind::Service => "Back to Services",
            ContentKind::Project => "Back to Projects",
            ContentKind::Article => "Back to Blog",
        }
    }

    /// Heading of the not-found fallback
    pub fn not_found_title(&self) -> &'static str {
        match self {
            ContentKind::Service => "Service not found",
            ContentKind::Project => "Project not found",
            ContentKind::Article => "Article not found",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Service => "service",
            ContentKind::Project => "project",
            ContentKind::Article => "article",
        };
        f.write_str(name)
    }
}

/// Read-only `id -> record` map that remembers the source order of its ids
#[derive(Debug, Clone)]
pub struct ContentTable<T> {
    entries: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> ContentTable<T> {
    /// Build a table from `(id, record)` pairs in source order.
    ///
    /// Fails on an empty or duplicated id; `name` identifies the table in the
    /// error.
    pub fn from_entries(
        name: &str,
        entries: impl IntoIterator<Item = (String, T)>,
    ) -> Result<Self> {
        let mut map = HashMap::new();
        let mut order = Vec::new();

        for (id, record) in entries {
            if id.is_empty() {
                return Err(Error::content(name, "entry with an empty id"));
            }
            if map.contains_key(&id) {
                return Err(Error::content(name, format!("duplicate id '{id}'")));
            }
            order.push(id.clone());
            map.insert(id, record);
        }

        Ok(Self {
            entries: map,
            order,
        })
    }

    /// Exact-match lookup
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids in source order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(id, record)` pairs in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|record| (id.as_str(), record)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Look `id` up in `table`.
///
/// Matching is exact: no case folding and no trimming.
pub fn resolve<'a, T>(
    table: &'a ContentTable<T>,
    kind: ContentKind,
    id: &str,
) -> std::result::Result<&'a T, LookupMiss> {
    table.get(id).ok_or_else(|| LookupMiss::new(kind, id))
}

/// A resolved detail record of any kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRecord<'a> {
    Service(&'a ServiceRecord),
    Project(&'a ProjectRecord),
    Article(&'a ArticleRecord),
}

impl ContentRecord<'_> {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentRecord::Service(_) => ContentKind::Service,
            ContentRecord::Project(_) => ContentKind::Project,
            ContentRecord::Article(_) => ContentKind::Article,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentRecord::Service(record) => &record.title,
            ContentRecord::Project(record) => &record.title,
            ContentRecord::Article(record) => &record.title,
        }
    }
}
