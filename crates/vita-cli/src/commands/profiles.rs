//! Profiles command - list the profiles defined in the data file.

use colored::Colorize;
use vita::Vita;

pub fn run(vita: &Vita, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = vita.load_validated()?;
    let document = &loaded.document;
    let total = document.bullet_count();

    if json_output {
        let mut profiles = serde_json::Map::new();
        for (name, spec) in &document.profiles {
            let mut entry = serde_json::to_value(spec)?;
            if let Some(fields) = entry.as_object_mut() {
                fields.insert("kept".into(), vita.filter(document, name)?.kept_bullets().into());
            }
            profiles.insert(name.clone(), entry);
        }
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    if document.profiles.is_empty() {
        println!("{}", "No profiles defined.".yellow());
        return Ok(());
    }

    println!("{}", "Profiles:".cyan().bold());
    for (name, spec) in &document.profiles {
        let kept = vita.filter(document, name)?.kept_bullets();
        println!(
            "  {} keeps {}/{} bullets (min importance {}, max {} per experience)",
            name.white().bold(),
            kept.to_string().green(),
            total,
            spec.min_importance,
            spec.max_bullets_per_experience
        );
        if !spec.include_tags.is_empty() {
            let tags: Vec<&str> = spec.include_tags.iter().map(String::as_str).collect();
            println!("    include: {}", tags.join(", ").green());
        }
        if !spec.exclude_tags.is_empty() {
            let tags: Vec<&str> = spec.exclude_tags.iter().map(String::as_str).collect();
            println!("    exclude: {}", tags.join(", ").red());
        }
    }

    Ok(())
}
