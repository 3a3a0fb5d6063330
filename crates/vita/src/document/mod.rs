//! Résumé document model.

mod profile;
mod resume;

pub use profile::ProfileSpec;
pub use resume::{Bullet, DocumentConfig, Experience, ResumeDocument, DEFAULT_MAX_BULLET_LENGTH};

use serde::{Deserialize, Deserializer};

/// Deserialize a field where an explicit `null` means the type's default.
///
/// YAML authors write `tags:` with nothing after it; that should read the
/// same as leaving the key out.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
