//! Error types for the portfolio showcase

use thiserror::Error;

/// Main error type for showcase operations
///
/// Every variant is absorbed at the boundary where it occurs and reported
/// through `tracing`; none of these reach the page as an uncaught fault.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Manifest could not be fetched or parsed
    #[error("Manifest load failed: {0}")]
    ManifestLoad(String),

    /// Project identifier is not present in the manifest
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// A single section's body could not be fetched
    #[error("Failed to load section '{section}': {reason}")]
    SectionLoad { section: String, reason: String },

    /// Project card carries no project identifier
    #[error("Project card missing project identifier")]
    MissingIdentifier,

    /// Fetching a locator failed (network, filesystem, non-success status)
    #[error("Fetch failed for {locator}: {reason}")]
    Fetch { locator: String, reason: String },

    /// Payload could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Operation not valid from the current state
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Lightbox was asked to show an empty image sequence
    #[error("Lightbox image sequence is empty")]
    EmptyGallery,

    /// Required DOM element or browser API was unavailable
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioError::Parse(err.to_string())
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
