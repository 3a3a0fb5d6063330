//! Render command - validate the data and write one output document.

use std::path::PathBuf;

use colored::Colorize;
use tracing::{debug, warn};
use vita::{OutputFormat, Vita};

pub fn run(
    vita: &Vita,
    format: OutputFormat,
    output: PathBuf,
    profile: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected = format.extension();
    if output.extension().and_then(|e| e.to_str()) != Some(expected) {
        warn!(
            output = %output.display(),
            expected,
            "output extension does not match format"
        );
    }

    debug!(%format, profile = profile.as_deref(), "rendering");
    let report = vita.render_to_file(format, profile.as_deref(), &output)?;

    match &report.profile {
        Some(profile) => println!(
            "{} {} ({}, profile {})",
            "Rendered".green().bold(),
            report.output.display().to_string().white(),
            report.format,
            profile.cyan()
        ),
        None => println!(
            "{} {} ({})",
            "Rendered".green().bold(),
            report.output.display().to_string().white(),
            report.format
        ),
    }

    if verbose {
        println!(
            "  {} bullets, {} bytes from {} ({})",
            report.bullets,
            report.bytes,
            report.source.file,
            report.source.hash.dimmed()
        );
    }

    Ok(())
}
