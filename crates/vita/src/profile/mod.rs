//! Profile-based filtering of experience bullets.

mod filter;
mod filtered;

pub use filter::ProfileFilter;
pub use filtered::FilteredDocument;
