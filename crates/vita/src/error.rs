//! Error types for the Vita library.

use std::path::PathBuf;
use thiserror::Error;

/// Data-integrity failures detected while validating or filtering a document.
///
/// These are never transient: the current render is aborted and nothing is
/// written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two or more experiences share an id. `ids` is sorted and deduplicated.
    #[error("Duplicate experience id(s): {}", .ids.join(", "))]
    DuplicateExperienceId { ids: Vec<String> },

    /// Two or more bullets anywhere in the document share an id.
    #[error("Duplicate bullet id(s): {}", .ids.join(", "))]
    DuplicateBulletId { ids: Vec<String> },

    /// A bullet's text is longer than the configured maximum.
    #[error("Bullet '{id}' exceeds max length ({length} > {max})")]
    BulletTooLong { id: String, length: usize, max: usize },

    /// The requested profile is not defined in the document.
    #[error("Missing profile: {0}")]
    MissingProfile(String),
}

/// Main error type for Vita operations.
#[derive(Debug, Error)]
pub enum VitaError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The résumé data file could not be parsed.
    #[error("Parse error in '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// The document failed validation or profile lookup.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The output format needs a profile and none was given.
    #[error("Format '{format}' requires a profile (use --profile)")]
    ProfileRequired { format: String },

    /// A field required by a template is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Template lookup, syntax or rendering error.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The project manifest exists but could not be read as TOML.
    #[error("Manifest error in '{path}': {message}")]
    Manifest { path: PathBuf, message: String },
}

/// Result type alias for Vita operations.
pub type Result<T> = std::result::Result<T, VitaError>;
