//! Property-based tests for validation and profile filtering.
//!
//! These tests use proptest to generate random documents and profiles and
//! verify that the filter and validators maintain their invariants.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p vita --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p vita --test property_tests
//! ```

use std::sync::Arc;

use proptest::prelude::*;

use vita::{
    Bullet, Experience, ProfileFilter, ProfileSpec, ResumeDocument, ValidationEngine,
    ValidationError,
};

// =============================================================================
// Test Strategies
// =============================================================================

const TAGS: &[&str] = &["a", "b", "c", "x"];

fn tag_set() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(TAGS, 0..=TAGS.len())
}

/// Bullets as (importance, tags); ids are assigned later so they stay unique.
fn bullet_specs() -> impl Strategy<Value = Vec<(i64, Vec<&'static str>)>> {
    prop::collection::vec((0i64..6, tag_set()), 0..8)
}

fn document() -> impl Strategy<Value = ResumeDocument> {
    prop::collection::vec(bullet_specs(), 0..5).prop_map(|experiences| {
        experiences
            .into_iter()
            .enumerate()
            .fold(ResumeDocument::new(), |doc, (e, bullets)| {
                let experience = bullets.into_iter().enumerate().fold(
                    Experience::new(format!("exp{}", e)),
                    |exp, (b, (importance, tags))| {
                        exp.with_bullet(
                            Bullet::new(format!("exp{}-b{}", e, b), "text")
                                .with_importance(importance)
                                .with_tags(tags),
                        )
                    },
                );
                doc.with_experience(experience)
            })
    })
}

fn profile() -> impl Strategy<Value = ProfileSpec> {
    (tag_set(), tag_set(), 0i64..6, 0usize..6).prop_map(|(include, exclude, min, max)| {
        ProfileSpec::new()
            .with_include_tags(include)
            .with_exclude_tags(exclude)
            .with_min_importance(min)
            .with_max_bullets(max)
    })
}

fn document_with_profile() -> impl Strategy<Value = ResumeDocument> {
    (document(), profile()).prop_map(|(doc, profile)| doc.with_profile("p", profile))
}

// =============================================================================
// Profile Filter Properties
// =============================================================================

mod filter_tests {
    use super::*;

    proptest! {
        /// Every experience survives filtering, in order.
        #[test]
        fn experiences_never_dropped(doc in document_with_profile()) {
            let filtered = ProfileFilter::new().apply(&doc, "p").unwrap();

            let source: Vec<_> = doc.experiences.iter().map(|e| &e.id).collect();
            let kept: Vec<_> = filtered.experiences().iter().map(|e| &e.id).collect();
            prop_assert_eq!(source, kept);
        }

        /// Kept bullets respect the profile's thresholds, limit and ordering.
        #[test]
        fn kept_bullets_satisfy_profile(doc in document_with_profile()) {
            let profile = doc.profiles["p"].clone();
            let filtered = ProfileFilter::new().apply(&doc, "p").unwrap();

            for experience in filtered.experiences() {
                prop_assert!(experience.bullets.len() <= profile.max_bullets_per_experience);
                for bullet in &experience.bullets {
                    prop_assert!(profile.admits(bullet));
                }
                for pair in experience.bullets.windows(2) {
                    prop_assert!(pair[0].importance >= pair[1].importance);
                }
            }
        }

        /// Equal-importance bullets keep their source order.
        #[test]
        fn sort_is_stable(doc in document_with_profile()) {
            let filtered = ProfileFilter::new().apply(&doc, "p").unwrap();

            for (source, kept) in doc.experiences.iter().zip(filtered.experiences()) {
                let position = |b: &Arc<Bullet>| {
                    source.bullets.iter().position(|s| Arc::ptr_eq(s, b)).unwrap()
                };
                for pair in kept.bullets.windows(2) {
                    if pair[0].importance == pair[1].importance {
                        prop_assert!(position(&pair[0]) < position(&pair[1]));
                    }
                }
            }
        }

        /// Kept bullets are the highest-ranked admitted ones: anything admitted
        /// but cut must not outrank a kept bullet.
        #[test]
        fn truncation_keeps_top_ranked(doc in document_with_profile()) {
            let profile = doc.profiles["p"].clone();
            let filtered = ProfileFilter::new().apply(&doc, "p").unwrap();

            for (source, kept) in doc.experiences.iter().zip(filtered.experiences()) {
                let admitted = source.bullets.iter().filter(|b| profile.admits(b)).count();
                prop_assert_eq!(kept.bullets.len(), admitted.min(profile.max_bullets_per_experience));

                if let Some(lowest) = kept.bullets.last() {
                    for bullet in source.bullets.iter().filter(|b| profile.admits(b)) {
                        if !kept.bullets.iter().any(|k| Arc::ptr_eq(k, bullet)) {
                            prop_assert!(bullet.importance <= lowest.importance);
                        }
                    }
                }
            }
        }

        /// Reapplying a profile to its own output changes nothing.
        #[test]
        fn filtering_is_idempotent(doc in document_with_profile()) {
            let filter = ProfileFilter::new();
            let once = filter.apply(&doc, "p").unwrap().into_document();
            let twice = filter.apply(&once, "p").unwrap().into_document();
            prop_assert_eq!(once, twice);
        }

        /// The source document is never modified.
        #[test]
        fn source_untouched(doc in document_with_profile()) {
            let before = doc.clone();
            let _ = ProfileFilter::new().apply(&doc, "p").unwrap();
            let _ = ProfileFilter::new().apply(&doc, "missing");
            prop_assert_eq!(doc, before);
        }
    }
}

// =============================================================================
// Validation Properties
// =============================================================================

mod validation_tests {
    use super::*;

    proptest! {
        /// Generated documents have unique ids and short text, so they validate.
        #[test]
        fn generated_documents_validate(doc in document()) {
            prop_assert!(ValidationEngine::new().validate(&doc).is_ok());
        }

        /// Copying any bullet into another experience is a duplicate id.
        #[test]
        fn copied_bullet_is_duplicate(doc in document(), target in 0usize..5) {
            let source = doc.experiences.iter().find(|e| !e.bullets.is_empty()).cloned();
            prop_assume!(source.is_some());
            let bullet = source.unwrap().bullets[0].clone();

            let mut doc = doc;
            let index = target % doc.experiences.len();
            doc.experiences[index].bullets.push(bullet.clone());

            let err = ValidationEngine::new().validate(&doc).unwrap_err();
            prop_assert_eq!(err, ValidationError::DuplicateBulletId { ids: vec![bullet.id.clone()] });
        }

        /// Length checks are exact at the boundary.
        #[test]
        fn length_boundary(len in 0usize..200, max in 0usize..200) {
            let doc = ResumeDocument::new().with_experience(
                Experience::new("e").with_bullet(Bullet::new("b", "é".repeat(len))),
            );
            let config = doc.config.clone().with_max_bullet_length(max);
            let result = ValidationEngine::new().validate_with(&doc, &config);
            prop_assert_eq!(result.is_ok(), len <= max);
        }
    }
}
