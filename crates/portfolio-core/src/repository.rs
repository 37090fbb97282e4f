//! Content Repository
//!
//! Fetches the project manifest once and resolves project sections on
//! demand. Only the manifest is cached; section bodies are fetched fresh
//! every time a project is resolved.
//!
//! ## Usage
//!
//! ```ignore
//! let mut repo = ContentRepository::new(fetcher, &SiteConfig::default());
//! repo.load_manifest().await;
//!
//! let project = repo.resolve_project("alpha").await;
//! for section in project.sections() {
//!     println!("{}: {} bytes", section.title, section.content.len());
//! }
//! ```

use futures::future::join_all;

use crate::config::SiteConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{ProjectManifest, ResolvedProject, ResolvedSection, SectionRef};

/// Source of manifest and section text.
///
/// The web app fetches over HTTP, the CLI reads the filesystem, tests use an
/// in-memory map. Implementations report any failure, including non-success
/// HTTP statuses, as [`PortfolioError::Fetch`].
#[allow(async_fn_in_trait)]
pub trait ContentFetcher {
    async fn fetch_text(&self, locator: &str) -> PortfolioResult<String>;
}

/// Outcome of the most recent manifest load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ManifestStatus {
    #[default]
    NotLoaded,
    Loaded { projects: usize },
    Failed(String),
}

pub struct ContentRepository<F> {
    fetcher: F,
    manifest_url: String,
    manifest: ProjectManifest,
    status: ManifestStatus,
}

impl<F: ContentFetcher> ContentRepository<F> {
    pub fn new(fetcher: F, config: &SiteConfig) -> Self {
        Self {
            fetcher,
            manifest_url: config.manifest_url.clone(),
            manifest: ProjectManifest::new(),
            status: ManifestStatus::NotLoaded,
        }
    }

    /// Fetch and parse the manifest.
    ///
    /// Never fails: on error the manifest is left empty, so every later
    /// lookup falls through to the default project.
    pub async fn load_manifest(&mut self) {
        match self.fetch_manifest().await {
            Ok(manifest) => {
                tracing::info!(
                    url = %self.manifest_url,
                    projects = manifest.len(),
                    "Projects loaded successfully"
                );
                self.status = ManifestStatus::Loaded {
                    projects: manifest.len(),
                };
                self.manifest = manifest;
            }
            Err(e) => {
                let err = PortfolioError::ManifestLoad(e.to_string());
                tracing::error!(url = %self.manifest_url, "{}", err);
                self.status = ManifestStatus::Failed(e.to_string());
                self.manifest = ProjectManifest::new();
            }
        }
    }

    async fn fetch_manifest(&self) -> PortfolioResult<ProjectManifest> {
        let body = self.fetcher.fetch_text(&self.manifest_url).await?;
        ProjectManifest::from_json(&body)
    }

    /// Resolve a project, fetching every section body concurrently.
    ///
    /// Unknown identifiers yield [`ResolvedProject::default_project`]. A
    /// section whose fetch fails keeps its slot with a placeholder body.
    pub async fn resolve_project(&self, project_id: &str) -> ResolvedProject {
        let Some(descriptor) = self.manifest.get(project_id) else {
            tracing::error!("{}", PortfolioError::ProjectNotFound(project_id.to_string()));
            return ResolvedProject::default_project();
        };

        let fetches = descriptor
            .sections
            .iter()
            .map(|(section_id, section)| self.resolve_section(section_id, section));
        let sections = join_all(fetches).await;

        tracing::debug!(
            project = project_id,
            sections = sections.len(),
            failed = sections.iter().filter(|s| !s.is_loaded()).count(),
            "Resolved project"
        );

        ResolvedProject::new(sections, descriptor.screenshots.clone())
    }

    async fn resolve_section(&self, section_id: &str, section: &SectionRef) -> ResolvedSection {
        match self.fetcher.fetch_text(&section.content_file).await {
            Ok(content) => ResolvedSection::loaded(section_id, &section.title, content),
            Err(e) => {
                let err = PortfolioError::SectionLoad {
                    section: section_id.to_string(),
                    reason: e.to_string(),
                };
                tracing::warn!("{}", err);
                ResolvedSection::failed(section_id, &section.title, e.to_string())
            }
        }
    }

    /// Swap in a new manifest wholesale
    pub fn replace_manifest(&mut self, manifest: ProjectManifest) {
        self.status = ManifestStatus::Loaded {
            projects: manifest.len(),
        };
        self.manifest = manifest;
    }

    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    pub fn manifest_status(&self) -> &ManifestStatus {
        &self.status
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapFetcher(HashMap<&'static str, &'static str>);

    impl ContentFetcher for MapFetcher {
        async fn fetch_text(&self, locator: &str) -> PortfolioResult<String> {
            self.0
                .get(locator)
                .map(|s| s.to_string())
                .ok_or_else(|| PortfolioError::Fetch {
                    locator: locator.to_string(),
                    reason: "404 Not Found".to_string(),
                })
        }
    }

    fn repo(files: &[(&'static str, &'static str)]) -> ContentRepository<MapFetcher> {
        ContentRepository::new(
            MapFetcher(files.iter().copied().collect()),
            &SiteConfig::default(),
        )
    }

    #[tokio::test]
    async fn manifest_starts_unloaded() {
        let repo = repo(&[]);
        assert_eq!(repo.manifest_status(), &ManifestStatus::NotLoaded);
        assert!(repo.manifest().is_empty());
    }

    #[tokio::test]
    async fn malformed_manifest_leaves_mapping_empty() {
        let mut repo = repo(&[("data/projects.json", "{ not json")]);
        repo.load_manifest().await;

        assert!(repo.manifest().is_empty());
        assert!(matches!(repo.manifest_status(), ManifestStatus::Failed(_)));
    }

    #[tokio::test]
    async fn empty_project_gets_placeholder_section() {
        let mut repo = repo(&[(
            "data/projects.json",
            r#"{ "projects": { "bare": { "screenshots": ["a.png"] } } }"#,
        )]);
        repo.load_manifest().await;

        let project = repo.resolve_project("bare").await;
        assert_eq!(project.sections().len(), 1);
        assert_eq!(project.sections()[0].id, "default");
        assert_eq!(project.screenshots().len(), 1);
    }

    #[tokio::test]
    async fn replace_manifest_swaps_wholesale() {
        let mut repo = repo(&[]);
        let mut manifest = ProjectManifest::new();
        manifest.insert("beta", Default::default());
        repo.replace_manifest(manifest);

        assert_eq!(repo.manifest().ids().collect::<Vec<_>>(), vec!["beta"]);
        assert_eq!(repo.manifest_status(), &ManifestStatus::Loaded { projects: 1 });
    }
}
