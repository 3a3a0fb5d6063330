//! The result of applying a profile.

use serde::Serialize;

use crate::document::{Experience, ProfileSpec, ResumeDocument};

/// A document with its experiences pruned by a profile.
///
/// Borrows the source document; only the experience list is new, and its
/// bullets are shared with the source.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredDocument<'a> {
    #[serde(skip)]
    source: &'a ResumeDocument,
    profile_name: String,
    #[serde(skip)]
    profile: &'a ProfileSpec,
    experiences: Vec<Experience>,
}

impl<'a> FilteredDocument<'a> {
    pub(crate) fn new(
        source: &'a ResumeDocument,
        profile_name: impl Into<String>,
        profile: &'a ProfileSpec,
        experiences: Vec<Experience>,
    ) -> Self {
        Self {
            source,
            profile_name: profile_name.into(),
            profile,
            experiences,
        }
    }

    /// The unfiltered document this was derived from.
    pub fn source(&self) -> &'a ResumeDocument {
        self.source
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn profile(&self) -> &'a ProfileSpec {
        self.profile
    }

    /// Filtered experiences, one per source experience, in source order.
    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    /// Number of bullets kept across all experiences.
    pub fn kept_bullets(&self) -> usize {
        self.experiences.iter().map(|e| e.bullets.len()).sum()
    }

    /// Number of source bullets the profile dropped.
    pub fn dropped_bullets(&self) -> usize {
        self.source.bullet_count() - self.kept_bullets()
    }

    /// A standalone document: the source with its experiences replaced.
    ///
    /// Only the non-experience sections are cloned; bullets stay shared.
    pub fn into_document(self) -> ResumeDocument {
        let source = self.source;
        ResumeDocument {
            personal: source.personal.clone(),
            title: source.title.clone(),
            experiences: self.experiences,
            projects: source.projects.clone(),
            education: source.education.clone(),
            skills: source.skills.clone(),
            publications: source.publications.clone(),
            profiles: source.profiles.clone(),
            config: source.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::document::{Bullet, Experience, ProfileSpec};
    use crate::profile::ProfileFilter;

    use super::*;

    fn sample() -> ResumeDocument {
        ResumeDocument::new()
            .with_personal("name", "Ada Lovelace")
            .with_experience(
                Experience::new("engine")
                    .with_detail("company", "Analytical Engine")
                    .with_bullet(Bullet::new("keep", "major").with_importance(5))
                    .with_bullet(Bullet::new("drop", "minor").with_importance(0)),
            )
            .with_profile("short", ProfileSpec::new().with_min_importance(3))
    }

    #[test]
    fn test_counts_and_profile() {
        let doc = sample();
        let filtered = ProfileFilter::new().apply(&doc, "short").unwrap();

        assert_eq!(filtered.profile_name(), "short");
        assert_eq!(filtered.profile().min_importance, 3);
        assert_eq!(filtered.kept_bullets(), 1);
        assert_eq!(filtered.dropped_bullets(), 1);
    }

    #[test]
    fn test_into_document_shares_bullets_and_keeps_sections() {
        let doc = sample();
        let standalone = ProfileFilter::new()
            .apply(&doc, "short")
            .unwrap()
            .into_document();

        assert_eq!(standalone.personal, doc.personal);
        assert_eq!(standalone.profiles, doc.profiles);
        assert_eq!(standalone.config, doc.config);

        let source_exp = &doc.experiences[0];
        let exp = &standalone.experiences[0];
        assert_eq!(exp.id, "engine");
        assert!(Arc::ptr_eq(&exp.details, &source_exp.details));
        assert_eq!(exp.bullets.len(), 1);
        assert!(Arc::ptr_eq(&exp.bullets[0], &source_exp.bullets[0]));

        assert_eq!(doc.experiences[0].bullets.len(), 2);
    }
}
