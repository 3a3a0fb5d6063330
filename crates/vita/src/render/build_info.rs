//! Build metadata for the landing page.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, VitaError};

/// Tag used when neither the manifest nor the environment provides one.
pub const FALLBACK_TAG: &str = "v0.0.0";

/// Placeholder for an unknown commit.
pub const UNKNOWN_COMMIT: &str = "unknown";

/// Build-related environment values, captured once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnv {
    /// `RELEASE_TAG`
    pub release_tag: Option<String>,
    /// `GITHUB_SHA`
    pub commit: Option<String>,
    /// `GITHUB_REPOSITORY`, as `owner/name`.
    pub repository: Option<String>,
}

impl BuildEnv {
    /// Capture the values from the process environment.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        Self {
            release_tag: var("RELEASE_TAG"),
            commit: var("GITHUB_SHA"),
            repository: var("GITHUB_REPOSITORY"),
        }
    }

    pub fn with_release_tag(mut self, tag: impl Into<String>) -> Self {
        self.release_tag = Some(tag.into());
        self
    }

    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }
}

/// Metadata rendered on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub tag: String,
    pub date: String,
    pub commit_short: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

impl BuildInfo {
    /// Resolve build metadata.
    ///
    /// The tag comes from the manifest version, then `RELEASE_TAG`, then
    /// [`FALLBACK_TAG`]. URLs are only produced when a repository is known.
    pub fn resolve(manifest_version: Option<&str>, env: &BuildEnv, now: DateTime<Utc>) -> Self {
        let tag = manifest_version
            .map(|v| format!("v{}", v.trim_start_matches('v')))
            .or_else(|| env.release_tag.clone())
            .unwrap_or_else(|| FALLBACK_TAG.to_string());

        let commit = env.commit.as_deref().unwrap_or(UNKNOWN_COMMIT);
        let commit_short = if commit == UNKNOWN_COMMIT {
            UNKNOWN_COMMIT.to_string()
        } else {
            commit.chars().take(7).collect()
        };

        let repository = env.repository.clone();
        let commit_url = repository
            .as_ref()
            .map(|repo| format!("https://github.com/{}/commit/{}", repo, commit));
        let release_url = repository.as_ref().map(|repo| {
            if tag == "dev" {
                format!("https://github.com/{}", repo)
            } else {
                format!("https://github.com/{}/releases/tag/{}", repo, tag)
            }
        });

        Self {
            tag,
            date: now.format("%Y-%m-%d %H:%M UTC").to_string(),
            commit_short,
            commit_url,
            release_url,
            repository,
        }
    }
}

/// Read the version from a TOML manifest.
///
/// Looks at `[project].version` and then `[package].version`. A missing file
/// or missing key yields `None`; a file that is not valid TOML is an error.
pub fn manifest_version(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "manifest not found, version unknown");
            return Ok(None);
        }
        Err(e) => {
            return Err(VitaError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let manifest: toml::Table = contents.parse().map_err(|e: toml::de::Error| VitaError::Manifest {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let version = ["project", "package"].iter().find_map(|section| {
        manifest
            .get(*section)
            .and_then(|s| s.get("version"))
            .and_then(|v| v.as_str())
            .map(String::from)
    });

    Ok(version)
}
