//! Output formats.

use serde::{Deserialize, Serialize};

/// The document kinds Vita can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown with every section, unfiltered.
    #[serde(rename = "md")]
    Markdown,
    /// HTML with every section, unfiltered.
    Html,
    /// Typst source; experiences filtered through a profile.
    Typst,
    /// Landing page with contact details and build metadata.
    Index,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Markdown,
        OutputFormat::Html,
        OutputFormat::Typst,
        OutputFormat::Index,
    ];

    /// Template used to render this format.
    pub fn template_name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "resume.md.j2",
            OutputFormat::Html => "resume.html.j2",
            OutputFormat::Typst => "resume.typ.j2",
            OutputFormat::Index => "index.html.j2",
        }
    }

    /// Whether rendering needs a profile name.
    pub fn requires_profile(&self) -> bool {
        matches!(self, OutputFormat::Typst)
    }

    /// Conventional file extension for the output.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Html | OutputFormat::Index => "html",
            OutputFormat::Typst => "typ",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            "typst" | "typ" => Ok(OutputFormat::Typst),
            "index" => Ok(OutputFormat::Index),
            _ => Err(format!(
                "Unknown format: {}. Use md, typst, html, or index.",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "md"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Typst => write!(f, "typst"),
            OutputFormat::Index => write!(f, "index"),
        }
    }
}
