//! YAML loader for résumé data files.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::SourceMetadata;
use crate::document::ResumeDocument;
use crate::error::{Result, VitaError};

/// Loads résumé documents from YAML.
#[derive(Debug, Clone, Default)]
pub struct Loader;

impl Loader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Load a file and return the document and its metadata.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(ResumeDocument, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| VitaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let document: ResumeDocument =
            serde_yaml::from_slice(&contents).map_err(|e| VitaError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            document.experiences.len(),
            document.bullet_count(),
            document.profiles.keys().cloned().collect(),
        );

        debug!(
            file = %metadata.file,
            experiences = metadata.experience_count,
            bullets = metadata.bullet_count,
            "loaded résumé data"
        );

        Ok((document, metadata))
    }

    /// Parse a document from an in-memory YAML string.
    pub fn parse_str(&self, yaml: &str) -> Result<ResumeDocument> {
        serde_yaml::from_str(yaml).map_err(|e| VitaError::Parse {
            path: "<string>".into(),
            message: e.to_string(),
        })
    }
}
