//! Core data model for the portfolio showcase
//!
//! The manifest is deserialized straight from `data/projects.json`. Section
//! order is significant (it decides tab order), so every mapping here is an
//! [`IndexMap`] that keeps document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioResult;

/// Section id used by the fallback project
pub const DEFAULT_SECTION_ID: &str = "default";

/// Section title used by the fallback project
pub const DEFAULT_SECTION_TITLE: &str = "Description";

/// Body shown when a project has no description yet
pub const DEFAULT_SECTION_CONTENT: &str = "Detailed description coming soon...";

/// Mapping from project identifier to its descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    #[serde(default)]
    projects: IndexMap<String, ProjectDescriptor>,
}

impl ProjectManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a manifest document shaped `{ "projects": { id: descriptor } }`
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a project by identifier
    pub fn get(&self, project_id: &str) -> Option<&ProjectDescriptor> {
        self.projects.get(project_id)
    }

    /// Project identifiers in manifest order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Iterate over `(id, descriptor)` pairs in manifest order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectDescriptor)> {
        self.projects.iter().map(|(id, p)| (id.as_str(), p))
    }

    /// Insert or replace a project
    pub fn insert(&mut self, project_id: impl Into<String>, descriptor: ProjectDescriptor) {
        self.projects.insert(project_id.into(), descriptor);
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// One project's sections and screenshots, as declared in the manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    #[serde(default)]
    pub sections: IndexMap<String, SectionRef>,
    #[serde(default)]
    pub screenshots: Vec<ScreenshotRef>,
}

/// Reference to a section body stored in its own file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRef {
    pub title: String,
    #[serde(rename = "contentFile")]
    pub content_file: String,
}

impl SectionRef {
    pub fn new(title: impl Into<String>, content_file: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content_file: content_file.into(),
        }
    }
}

/// A screenshot, either a bare locator or a locator with caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreenshotRef {
    Locator(String),
    Captioned {
        src: String,
        #[serde(default)]
        caption: String,
    },
}

impl ScreenshotRef {
    pub fn src(&self) -> &str {
        match self {
            ScreenshotRef::Locator(src) => src.as_str(),
            ScreenshotRef::Captioned { src, .. } => src.as_str(),
        }
    }

    /// Caption, if one was given and is non-empty
    pub fn caption(&self) -> Option<&str> {
        match self {
            ScreenshotRef::Captioned { caption, .. } if !caption.is_empty() => {
                Some(caption.as_str())
            }
            _ => None,
        }
    }
}

/// A section whose body text has been fetched (or replaced by a placeholder)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSection {
    pub id: String,
    pub title: String,
    /// Raw markup, embedded verbatim
    pub content: String,
    /// Why the body could not be fetched, when `content` is a placeholder
    pub load_error: Option<String>,
}

impl ResolvedSection {
    pub fn loaded(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            load_error: None,
        }
    }

    /// Section whose fetch failed; the body names the section's title
    pub fn failed(
        id: impl Into<String>,
        title: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            content: format!("<p>Error loading content for {}</p>", title),
            title,
            load_error: Some(reason.into()),
        }
    }

    /// The "coming soon" section used when nothing else is available
    pub fn placeholder() -> Self {
        Self::loaded(DEFAULT_SECTION_ID, DEFAULT_SECTION_TITLE, DEFAULT_SECTION_CONTENT)
    }

    pub fn is_loaded(&self) -> bool {
        self.load_error.is_none()
    }
}

/// Runtime materialization of a [`ProjectDescriptor`]
///
/// Always holds at least one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    sections: Vec<ResolvedSection>,
    screenshots: Vec<ScreenshotRef>,
}

impl ResolvedProject {
    /// Build from resolved sections; an empty list gets the placeholder section
    pub fn new(sections: Vec<ResolvedSection>, screenshots: Vec<ScreenshotRef>) -> Self {
        let sections = if sections.is_empty() {
            vec![ResolvedSection::placeholder()]
        } else {
            sections
        };
        Self {
            sections,
            screenshots,
        }
    }

    /// Substitute used for unknown projects
    pub fn default_project() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn sections(&self) -> &[ResolvedSection] {
        &self.sections
    }

    pub fn screenshots(&self) -> &[ScreenshotRef] {
        &self.screenshots
    }

    /// Sections whose body could not be fetched
    pub fn failed_sections(&self) -> impl Iterator<Item = &ResolvedSection> {
        self.sections.iter().filter(|s| !s.is_loaded())
    }
}

/// One image in the lightbox sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub caption: String,
}

impl LightboxImage {
    pub fn new(src: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: caption.into(),
        }
    }
}
