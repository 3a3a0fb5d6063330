//! Validation engine for document consistency checks.

mod validators;

pub use validators::{
    BulletIdValidator, BulletLengthValidator, ExperienceIdValidator, ValidationEngine, Validator,
};
