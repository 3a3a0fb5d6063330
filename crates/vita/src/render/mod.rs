//! Rendering documents through templates.

mod build_info;
mod context;
mod format;
mod templates;

pub use build_info::{BuildEnv, BuildInfo, FALLBACK_TAG, UNKNOWN_COMMIT, manifest_version};
pub use context::{landing_context, resume_context, typeset_context};
pub use format::OutputFormat;
pub use templates::{TemplateSet, auto_escape_for, builtin_template};
