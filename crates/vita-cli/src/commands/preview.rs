//! Preview command - show which bullets a profile keeps.

use colored::Colorize;
use vita::Vita;

pub fn run(vita: &Vita, profile: &str, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = vita.load_validated()?;
    let filtered = vita.filter(&loaded.document, profile)?;
    let spec = filtered.profile();

    if json_output {
        let experiences: Vec<_> = filtered
            .experiences()
            .iter()
            .map(|exp| {
                serde_json::json!({
                    "id": exp.id,
                    "bullets": exp.bullets.iter().map(|b| &b.id).collect::<Vec<_>>(),
                })
            })
            .collect();
        let preview = serde_json::json!({
            "profile": filtered.profile_name(),
            "min_importance": spec.min_importance,
            "max_bullets_per_experience": spec.max_bullets_per_experience,
            "kept": filtered.kept_bullets(),
            "dropped": filtered.dropped_bullets(),
            "experiences": experiences,
        });
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    println!(
        "{} {} ({} kept, {} dropped)",
        "Profile".cyan().bold(),
        filtered.profile_name().white().bold(),
        filtered.kept_bullets().to_string().green(),
        filtered.dropped_bullets().to_string().red()
    );
    println!(
        "  min importance {}, max {} per experience",
        spec.min_importance, spec.max_bullets_per_experience
    );

    for exp in filtered.experiences() {
        println!();
        println!("{}", exp.id.yellow().bold());
        if exp.bullets.is_empty() {
            println!("  {}", "(no bullets)".dimmed());
        }
        for bullet in &exp.bullets {
            println!("  [{}] {} {}", bullet.importance, bullet.id.dimmed(), bullet.text);
        }
    }

    Ok(())
}
