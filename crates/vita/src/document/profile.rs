//! Profile specifications.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::resume::Bullet;

/// A named filter configuration selecting which bullets appear in an output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    /// When non-empty, a bullet must carry at least one of these tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub include_tags: IndexSet<String>,
    /// A bullet carrying any of these tags is dropped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub exclude_tags: IndexSet<String>,
    /// Bullets below this importance are dropped.
    #[serde(default = "default_min_importance")]
    pub min_importance: i64,
    /// Upper bound on bullets kept per experience.
    #[serde(default = "default_max_bullets")]
    pub max_bullets_per_experience: usize,
}

fn default_min_importance() -> i64 {
    1
}

fn default_max_bullets() -> usize {
    5
}

impl Default for ProfileSpec {
    fn default() -> Self {
        Self {
            include_tags: IndexSet::new(),
            exclude_tags: IndexSet::new(),
            min_importance: default_min_importance(),
            max_bullets_per_experience: default_max_bullets(),
        }
    }
}

impl ProfileSpec {
    /// Create a profile with default thresholds and no tag filters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclude_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_min_importance(mut self, min: i64) -> Self {
        self.min_importance = min;
        self
    }

    pub fn with_max_bullets(mut self, max: usize) -> Self {
        self.max_bullets_per_experience = max;
        self
    }

    /// Whether the bullet passes the tag filters.
    ///
    /// An untagged bullet can never satisfy a non-empty `include_tags`.
    pub fn tag_pass(&self, bullet: &Bullet) -> bool {
        if !self.include_tags.is_empty() && bullet.tags.is_disjoint(&self.include_tags) {
            return false;
        }
        self.exclude_tags.is_disjoint(&bullet.tags)
    }

    /// Whether the bullet passes both the importance threshold and the tag filters.
    pub fn admits(&self, bullet: &Bullet) -> bool {
        bullet.importance >= self.min_importance && self.tag_pass(bullet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let profile: ProfileSpec = serde_yaml::from_str("include_tags:\n").unwrap();

        assert!(profile.include_tags.is_empty());
        assert!(profile.exclude_tags.is_empty());
        assert_eq!(profile.min_importance, 1);
        assert_eq!(profile.max_bullets_per_experience, 5);
    }

    #[test]
    fn test_tag_pass_include() {
        let profile = ProfileSpec::new().with_include_tags(["rust"]);

        assert!(profile.tag_pass(&Bullet::new("a", "").with_tags(["rust", "infra"])));
        assert!(!profile.tag_pass(&Bullet::new("b", "").with_tags(["python"])));
        assert!(!profile.tag_pass(&Bullet::new("c", "")));
    }

    #[test]
    fn test_tag_pass_exclude_wins() {
        let profile = ProfileSpec::new()
            .with_include_tags(["rust"])
            .with_exclude_tags(["legacy"]);

        assert!(!profile.tag_pass(&Bullet::new("a", "").with_tags(["rust", "legacy"])));
    }

    #[test]
    fn test_untagged_passes_without_include() {
        let profile = ProfileSpec::new().with_exclude_tags(["legacy"]);
        assert!(profile.tag_pass(&Bullet::new("a", "")));
    }

    #[test]
    fn test_admits_checks_importance() {
        let profile = ProfileSpec::new().with_min_importance(3);

        assert!(profile.admits(&Bullet::new("a", "").with_importance(3)));
        assert!(!profile.admits(&Bullet::new("b", "").with_importance(2)));
    }
}
