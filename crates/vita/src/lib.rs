//! Vita: résumé validation, profile filtering and rendering.
//!
//! Vita loads a single YAML file describing a résumé, validates it, optionally
//! filters its experience bullets through a named profile, and renders it to
//! Markdown, HTML, Typst source or a landing page through minijinja templates.
//!
//! # Core Principles
//!
//! - **Fail before writing**: validation errors abort the render and no output is written
//! - **Non-destructive**: profiles produce a filtered view; the loaded document is never modified
//! - **Shared, not copied**: filtered experiences point at the original bullets
//!
//! # Example
//!
//! ```no_run
//! use vita::{OutputFormat, Vita, VitaConfig};
//!
//! let vita = Vita::with_config(VitaConfig::default().with_data_file("data/data.yaml"));
//! let loaded = vita.load_validated().unwrap();
//!
//! let typst = vita
//!     .render(&loaded.document, OutputFormat::Typst, Some("short"))
//!     .unwrap();
//! println!("{}", typst);
//! ```

pub mod document;
pub mod error;
pub mod input;
pub mod profile;
pub mod render;
pub mod validation;

mod vita;

pub use crate::vita::{
    DEFAULT_DATA_FILE, DEFAULT_MANIFEST_FILE, LoadedDocument, RenderReport, Vita, VitaConfig,
};
pub use document::{Bullet, DocumentConfig, Experience, ProfileSpec, ResumeDocument};
pub use error::{Result, ValidationError, VitaError};
pub use input::{Loader, SourceMetadata};
pub use profile::{FilteredDocument, ProfileFilter};
pub use render::{BuildEnv, BuildInfo, OutputFormat, TemplateSet};
pub use validation::{ValidationEngine, Validator};
