//! Profile filter that prunes experience bullets.

use std::cmp::Reverse;
use std::sync::Arc;

use tracing::debug;

use crate::document::{Bullet, ProfileSpec, ResumeDocument};
use crate::error::ValidationError;

use super::filtered::FilteredDocument;

/// Applies named profiles to documents without modifying them.
#[derive(Debug, Clone, Default)]
pub struct ProfileFilter;

impl ProfileFilter {
    /// Create a new profile filter.
    pub fn new() -> Self {
        Self
    }

    /// Apply the named profile.
    ///
    /// Every experience is kept, possibly with zero bullets. Fails with
    /// [`ValidationError::MissingProfile`] if the document does not define
    /// `profile_name`.
    pub fn apply<'a>(
        &self,
        document: &'a ResumeDocument,
        profile_name: &str,
    ) -> Result<FilteredDocument<'a>, ValidationError> {
        let profile = document
            .profiles
            .get(profile_name)
            .ok_or_else(|| ValidationError::MissingProfile(profile_name.to_string()))?;

        let experiences = document
            .experiences
            .iter()
            .map(|experience| {
                let kept = self.select_bullets(profile, &experience.bullets);
                debug!(
                    experience = %experience.id,
                    kept = kept.len(),
                    total = experience.bullets.len(),
                    "filtered bullets"
                );
                experience.with_bullets(kept)
            })
            .collect();

        Ok(FilteredDocument::new(document, profile_name, profile, experiences))
    }

    /// Select, rank and truncate one experience's bullets.
    ///
    /// The sort is stable, so bullets of equal importance keep their
    /// original relative order.
    pub fn select_bullets(&self, profile: &ProfileSpec, bullets: &[Arc<Bullet>]) -> Vec<Arc<Bullet>> {
        let mut kept: Vec<Arc<Bullet>> = bullets
            .iter()
            .filter(|b| profile.admits(b))
            .cloned()
            .collect();

        kept.sort_by_key(|b| Reverse(b.importance));
        kept.truncate(profile.max_bullets_per_experience);
        kept
    }
}
