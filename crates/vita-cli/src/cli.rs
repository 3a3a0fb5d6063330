//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vita::OutputFormat;

/// Default directory searched for template overrides.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Vita: render a résumé from structured data
#[derive(Parser)]
#[command(name = "vita")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the résumé data file
    #[arg(long, global = true, default_value = vita::DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Directory with template overrides (default: ./templates when present)
    #[arg(long, global = true)]
    pub templates: Option<PathBuf>,

    /// TOML manifest holding the version shown on the landing page
    #[arg(long, global = true, default_value = vita::DEFAULT_MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Repository (owner/name) used for commit and release links
    #[arg(long, global = true)]
    pub repository: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the data and render one output document
    Render {
        /// Output format (md, typst, html, index)
        #[arg(short, long)]
        format: OutputFormat,

        /// Output path; parent directories are created
        #[arg(short, long)]
        output: PathBuf,

        /// Profile used to filter experiences (required for typst)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Validate the data file without rendering
    Validate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the profiles defined in the data file
    Profiles {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which bullets a profile keeps
    Preview {
        /// Profile name
        #[arg(value_name = "PROFILE")]
        profile: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
