//! Validators for checking document consistency and constraints.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::document::{DocumentConfig, ResumeDocument};
use crate::error::ValidationError;

/// Trait for validators.
pub trait Validator {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Check the document, returning the first failure found.
    fn validate(
        &self,
        document: &ResumeDocument,
        config: &DocumentConfig,
    ) -> Result<(), ValidationError>;
}

/// Ids seen more than once, sorted and deduplicated.
fn duplicate_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();

    for id in ids {
        if !seen.insert(id) {
            duplicates.insert(id);
        }
    }

    duplicates.into_iter().map(String::from).collect()
}

/// Experience ids must be unique.
pub struct ExperienceIdValidator;

impl Validator for ExperienceIdValidator {
    fn name(&self) -> &'static str {
        "experience_ids"
    }

    fn validate(&self, document: &ResumeDocument, _config: &DocumentConfig) -> Result<(), ValidationError> {
        let ids = duplicate_ids(document.experiences.iter().map(|e| e.id.as_str()));
        if ids.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::DuplicateExperienceId { ids })
        }
    }
}

/// Bullet ids must be unique across the whole document, not only per experience.
pub struct BulletIdValidator;

impl Validator for BulletIdValidator {
    fn name(&self) -> &'static str {
        "bullet_ids"
    }

    fn validate(&self, document: &ResumeDocument, _config: &DocumentConfig) -> Result<(), ValidationError> {
        let ids = duplicate_ids(document.bullets().map(|b| b.id.as_str()));
        if ids.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::DuplicateBulletId { ids })
        }
    }
}

/// Bullet text must not exceed `max_bullet_length` characters.
pub struct BulletLengthValidator;

impl Validator for BulletLengthValidator {
    fn name(&self) -> &'static str {
        "bullet_length"
    }

    fn validate(&self, document: &ResumeDocument, config: &DocumentConfig) -> Result<(), ValidationError> {
        let max = config.max_bullet_length;

        match document
            .bullets()
            .map(|b| (b, b.text_length()))
            .find(|(_, length)| *length > max)
        {
            Some((bullet, length)) => Err(ValidationError::BulletTooLong {
                id: bullet.id.clone(),
                length,
                max,
            }),
            None => Ok(()),
        }
    }
}

/// Runs validators in order and stops at the first failure.
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationEngine {
    /// Create a new validation engine with the default validators.
    ///
    /// Order matters: duplicate experience ids are reported before duplicate
    /// bullet ids, which are reported before length violations.
    pub fn new() -> Self {
        Self {
            validators: vec![
                Box::new(ExperienceIdValidator),
                Box::new(BulletIdValidator),
                Box::new(BulletLengthValidator),
            ],
        }
    }

    /// Validate against the document's own `config` section.
    pub fn validate(&self, document: &ResumeDocument) -> Result<(), ValidationError> {
        self.validate_with(document, &document.config)
    }

    /// Validate against an explicit config.
    pub fn validate_with(
        &self,
        document: &ResumeDocument,
        config: &DocumentConfig,
    ) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(document, config)?;
            debug!(validator = validator.name(), "check passed");
        }
        Ok(())
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
