//! CLI command implementations.

pub mod preview;
pub mod profiles;
pub mod render;
pub mod validate;
