//! Input loading and data source handling.

mod loader;
mod source;

pub use loader::Loader;
pub use source::SourceMetadata;
