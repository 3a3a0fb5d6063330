//! Validate command - check the data file without rendering.

use colored::Colorize;
use vita::Vita;

pub fn run(vita: &Vita, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = vita.load()?;
    let result = vita.validate(&loaded.document);

    if json_output {
        let status = serde_json::json!({
            "file": loaded.source.file,
            "valid": result.is_ok(),
            "error": result.as_ref().err().map(|e| e.to_string()),
            "experiences": loaded.source.experience_count,
            "bullets": loaded.source.bullet_count,
            "profiles": loaded.source.profiles,
            "hash": loaded.source.hash,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        result?;
        return Ok(());
    }

    result?;

    println!(
        "{} {}",
        "Valid:".green().bold(),
        loaded.source.path.display().to_string().white()
    );
    println!(
        "  {} experiences, {} bullets, {} profiles",
        loaded.source.experience_count,
        loaded.source.bullet_count,
        loaded.source.profiles.len()
    );

    if verbose {
        println!("  max bullet length: {}", loaded.document.config.max_bullet_length);
        println!("  sha256: {}", loaded.source.hash.dimmed());
    }

    Ok(())
}
