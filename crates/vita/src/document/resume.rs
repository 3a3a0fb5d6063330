//! Résumé document, experiences and bullets.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;
use super::profile::ProfileSpec;

/// Bullet length limit used when the document does not set one.
pub const DEFAULT_MAX_BULLET_LENGTH: usize = 1000;

/// Document-level settings read from the `config` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Maximum bullet length in characters.
    #[serde(default = "default_max_bullet_length")]
    pub max_bullet_length: usize,
}

fn default_max_bullet_length() -> usize {
    DEFAULT_MAX_BULLET_LENGTH
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_bullet_length: DEFAULT_MAX_BULLET_LENGTH,
        }
    }
}

impl DocumentConfig {
    /// Override the bullet length limit.
    pub fn with_max_bullet_length(mut self, max: usize) -> Self {
        self.max_bullet_length = max;
        self
    }
}

/// A single accomplishment line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Identifier, unique across the whole document.
    pub id: String,
    /// Display text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Ranking priority; higher sorts first under a profile.
    #[serde(default, deserialize_with = "null_as_default")]
    pub importance: i64,
    /// Tags used by profile inclusion/exclusion.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: IndexSet<String>,
    /// Any other attributes, passed through to templates.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Bullet {
    /// Create a bullet with importance 0 and no tags.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            importance: 0,
            tags: IndexSet::new(),
            extra: IndexMap::new(),
        }
    }

    /// Set the importance.
    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Text length in characters.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}

/// One work or role entry.
///
/// Bullets and the pass-through attributes sit behind `Arc` so a filtered
/// copy can share them with the source document instead of cloning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Identifier, unique among experiences.
    pub id: String,
    /// Accomplishment lines in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullets: Vec<Arc<Bullet>>,
    /// Company, role, dates and anything else the templates use.
    #[serde(flatten)]
    pub details: Arc<IndexMap<String, Value>>,
}

impl Experience {
    /// Create an experience with no bullets and no details.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bullets: Vec::new(),
            details: Arc::new(IndexMap::new()),
        }
    }

    /// Append a bullet.
    pub fn with_bullet(mut self, bullet: Bullet) -> Self {
        self.bullets.push(Arc::new(bullet));
        self
    }

    /// Set a pass-through attribute.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.details).insert(key.into(), value.into());
        self
    }

    /// A new experience with the same id and details but different bullets.
    pub fn with_bullets(&self, bullets: Vec<Arc<Bullet>>) -> Self {
        Self {
            id: self.id.clone(),
            bullets,
            details: Arc::clone(&self.details),
        }
    }

    /// Look up a pass-through attribute as a string.
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }
}

/// Root of a résumé data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    /// Contact attributes (`name`, `email`, ...).
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal: IndexMap<String, Value>,
    /// Headline shown on the landing page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experiences: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publications: Vec<Value>,
    /// Named filter configurations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub profiles: IndexMap<String, ProfileSpec>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: DocumentConfig,
}

impl ResumeDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a personal attribute.
    pub fn with_personal(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.personal.insert(key.into(), value.into());
        self
    }

    /// Append an experience.
    pub fn with_experience(mut self, experience: Experience) -> Self {
        self.experiences.push(experience);
        self
    }

    /// Add or replace a profile.
    pub fn with_profile(mut self, name: impl Into<String>, profile: ProfileSpec) -> Self {
        self.profiles.insert(name.into(), profile);
        self
    }

    /// Replace the document config.
    pub fn with_config(mut self, config: DocumentConfig) -> Self {
        self.config = config;
        self
    }

    /// The person's name, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.personal.get("name").and_then(Value::as_str)
    }

    /// Iterate over every bullet in document order.
    pub fn bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.experiences
            .iter()
            .flat_map(|e| e.bullets.iter().map(|b| b.as_ref()))
    }

    /// Total number of bullets across all experiences.
    pub fn bullet_count(&self) -> usize {
        self.experiences.iter().map(|e| e.bullets.len()).sum()
    }
}
