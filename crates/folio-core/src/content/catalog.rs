//! The built-in content catalog

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::profile::Profile;
use super::records::{
    ArticleRecord, ArticleSummary, ProjectRecord, ProjectSummary, ServiceRecord, ServiceSummary,
};
use super::{resolve, ContentKind, ContentRecord, ContentTable};
use crate::error::{Error, LookupMiss, Result};

const SERVICES_TOML: &str = include_str!("../../content/services.toml");
const PROJECTS_TOML: &str = include_str!("../../content/projects.toml");
const ARTICLES_TOML: &str = include_str!("../../content/articles.toml");
const PROFILE_TOML: &str = include_str!("../../content/profile.toml");

/// A detail record as written in a content file, with its id alongside
#[derive(Debug, Deserialize)]
struct Keyed<T> {
    id: String,
    #[serde(flatten)]
    record: T,
}

/// Layout of one content file: ordered summaries plus detail records
#[derive(Debug, Deserialize)]
struct ContentFile<S, D> {
    #[serde(default = "Vec::new")]
    summary: Vec<S>,
    #[serde(default = "Vec::new")]
    detail: Vec<Keyed<D>>,
}

/// Everything the portfolio displays.
///
/// Summary lists feed the home page sections in source order. Detail tables
/// back the detail views and are keyed independently per kind; a summary id
/// without a detail record resolves to a [`LookupMiss`].
#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: Profile,
    pub services: Vec<ServiceSummary>,
    pub projects: Vec<ProjectSummary>,
    pub articles: Vec<ArticleSummary>,
    service_details: ContentTable<ServiceRecord>,
    project_details: ContentTable<ProjectRecord>,
    article_details: ContentTable<ArticleRecord>,
}

impl Catalog {
    /// Parse the content embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_sources(SERVICES_TOML, PROJECTS_TOML, ARTICLES_TOML, PROFILE_TOML)
    }

    /// Parse a catalog from the four TOML documents
    pub fn from_sources(
        services: &str,
        projects: &str,
        articles: &str,
        profile: &str,
    ) -> Result<Self> {
        let (services, service_details) =
            parse_content_file::<ServiceSummary, ServiceRecord>("services", services)?;
        let (projects, project_details) =
            parse_content_file::<ProjectSummary, ProjectRecord>("projects", projects)?;
        let (articles, article_details) =
            parse_content_file::<ArticleSummary, ArticleRecord>("articles", articles)?;
        let profile: Profile =
            toml::from_str(profile).map_err(|e| Error::content("profile", e.to_string()))?;

        tracing::debug!(
            "Loaded catalog: {} services ({} detailed), {} projects ({} detailed), {} articles ({} detailed)",
            services.len(),
            service_details.len(),
            projects.len(),
            project_details.len(),
            articles.len(),
            article_details.len()
        );

        Ok(Self {
            profile,
            services,
            projects,
            articles,
            service_details,
            project_details,
            article_details,
        })
    }

    /// Resolve a detail record of the given kind
    pub fn resolve(
        &self,
        kind: ContentKind,
        id: &str,
    ) -> std::result::Result<ContentRecord<'_>, LookupMiss> {
        match kind {
            ContentKind::Service => self.service(id).map(ContentRecord::Service),
            ContentKind::Project => self.project(id).map(ContentRecord::Project),
            ContentKind::Article => self.article(id).map(ContentRecord::Article),
        }
    }

    pub fn service(&self, id: &str) -> std::result::Result<&ServiceRecord, LookupMiss> {
        resolve(&self.service_details, ContentKind::Service, id)
    }

    pub fn project(&self, id: &str) -> std::result::Result<&ProjectRecord, LookupMiss> {
        resolve(&self.project_details, ContentKind::Project, id)
    }

    pub fn article(&self, id: &str) -> std::result::Result<&ArticleRecord, LookupMiss> {
        resolve(&self.article_details, ContentKind::Article, id)
    }

    pub fn service_details(&self) -> &ContentTable<ServiceRecord> {
        &self.service_details
    }

    pub fn project_details(&self) -> &ContentTable<ProjectRecord> {
        &self.project_details
    }

    pub fn article_details(&self) -> &ContentTable<ArticleRecord> {
        &self.article_details
    }

    /// Related articles that exist, in declared order.
    ///
    /// Dangling ids are skipped and logged.
    pub fn related_articles<'a>(
        &'a self,
        record: &'a ArticleRecord,
    ) -> Vec<(&'a str, &'a ArticleRecord)> {
        record
            .related_articles
            .iter()
            .filter_map(|id| match self.article(id) {
                Ok(related) => Some((id.as_str(), related)),
                Err(miss) => {
                    tracing::warn!("Skipping related article of '{}': {}", record.title, miss);
                    None
                }
            })
            .collect()
    }
}

fn parse_content_file<S, D>(name: &str, source: &str) -> Result<(Vec<S>, ContentTable<D>)>
where
    S: DeserializeOwned,
    D: DeserializeOwned,
{
    let file: ContentFile<S, D> =
        toml::from_str(source).map_err(|e| Error::content(name, e.to_string()))?;
    let details = ContentTable::from_entries(
        name,
        file.detail.into_iter().map(|keyed| (keyed.id, keyed.record)),
    )?;
    Ok((file.summary, details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{partition_featured, ContentBlock};

    fn catalog() -> Catalog {
        Catalog::builtin().expect("built-in content parses")
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = catalog();
        assert_eq!(catalog.services.len(), 6);
        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.articles.len(), 6);
        assert_eq!(catalog.service_details().len(), 3);
        assert_eq!(catalog.project_details().len(), 2);
        assert_eq!(catalog.article_details().len(), 6);
    }

    #[test]
    fn test_every_detail_id_resolves_to_itself() {
        let catalog = catalog();
        for (id, record) in catalog.service_details().iter() {
            assert_eq!(catalog.service(id), Ok(record));
        }
        for (id, record) in catalog.project_details().iter() {
            assert_eq!(catalog.project(id), Ok(record));
        }
        for (id, record) in catalog.article_details().iter() {
            assert_eq!(catalog.article(id), Ok(record));
        }
    }

    #[test]
    fn test_resolve_known_article() {
        let catalog = catalog();
        let record = catalog
            .resolve(ContentKind::Article, "flutter-cross-platform")
            .unwrap();
        assert_eq!(
            record.title(),
            "Why I Chose Flutter for Cross-Platform Development"
        );
        assert_eq!(record.kind(), ContentKind::Article);
    }

    #[test]
    fn test_resolve_misses() {
        let catalog = catalog();
        let miss = catalog
            .resolve(ContentKind::Article, "nonexistent")
            .unwrap_err();
        assert_eq!(miss, LookupMiss::new(ContentKind::Article, "nonexistent"));
        assert!(catalog
            .resolve(ContentKind::Article, "Flutter-Cross-Platform")
            .is_err());
        assert!(catalog.resolve(ContentKind::Service, "flutter-cross-platform").is_err());
    }

    #[test]
    fn test_summaries_without_detail_miss() {
        let catalog = catalog();
        assert!(catalog.service("mentorship").is_err());
        assert!(catalog.project("baksack").is_err());
        assert!(catalog.project("dukandar").is_ok());
    }

    #[test]
    fn test_blog_partition() {
        let catalog = catalog();
        let (featured, recent) = partition_featured(&catalog.articles);
        assert_eq!(featured.len(), 2);
        assert_eq!(recent.len(), 4);
        assert_eq!(featured[0].id, "flutter-cross-platform");
        assert_eq!(featured[1].id, "django-ai-integration");
        assert_eq!(recent[0].id, "sam-altman-inspiration");
    }

    #[test]
    fn test_builtin_related_articles_all_resolve() {
        let catalog = catalog();
        for (id, record) in catalog.article_details().iter() {
            for related in &record.related_articles {
                assert!(
                    catalog.article(related).is_ok(),
                    "article '{id}' links to missing '{related}'"
                );
            }
            assert_eq!(
                catalog.related_articles(record).len(),
                record.related_articles.len()
            );
        }
    }

    #[test]
    fn test_related_articles_skip_dangling_ids() {
        let catalog = catalog();
        let mut record = catalog.article("flutter-cross-platform").unwrap().clone();
        record.related_articles.push("gone".into());

        let related = catalog.related_articles(&record);
        let ids: Vec<&str> = related.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["django-ai-integration", "sam-altman-inspiration"]);
    }

    #[test]
    fn test_project_metrics_keep_order() {
        let catalog = catalog();
        let project = catalog.project("afghansport-app").unwrap();
        let labels: Vec<String> = project.metrics.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Downloads", "Rating", "Retention", "Performance"]);
    }

    #[test]
    fn test_article_body_blocks() {
        let catalog = catalog();
        let article = catalog.article("flutter-cross-platform").unwrap();
        assert!(matches!(article.content[0], ContentBlock::Paragraph(_)));
        assert_eq!(
            article.table_of_contents(),
            vec!["The Cross-Platform Dilemma", "Why Flutter?", "Real-World Impact"]
        );
    }

    #[test]
    fn test_duplicate_detail_id_is_content_error() {
        let services = r#"
            [[detail]]
            id = "a"
            title = "A"
            subtitle = "s"
            description = "d"

            [[detail]]
            id = "a"
            title = "B"
            subtitle = "s"
            description = "d"
        "#;
        let result = Catalog::from_sources(services, "", "", PROFILE_TOML);
        assert!(matches!(result, Err(Error::Content { .. })));
    }

    #[test]
    fn test_invalid_toml_is_content_error() {
        let result = Catalog::from_sources("[[summary]\n", "", "", PROFILE_TOML);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("services"));
    }
}
