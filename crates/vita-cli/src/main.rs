//! Vita CLI - résumé validation and rendering.

mod cli;
mod commands;

use std::path::Path;

use clap::Parser;
use cli::{Cli, Commands, DEFAULT_TEMPLATES_DIR};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vita::{BuildEnv, Vita, VitaConfig};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let vita = Vita::with_config(build_config(&cli));

    let result = match cli.command {
        Commands::Render {
            format,
            output,
            profile,
        } => commands::render::run(&vita, format, output, profile, cli.verbose),

        Commands::Validate { json } => commands::validate::run(&vita, json, cli.verbose),

        Commands::Profiles { json } => commands::profiles::run(&vita, json),

        Commands::Preview { profile, json } => commands::preview::run(&vita, &profile, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> VitaConfig {
    let mut config = VitaConfig::default()
        .with_data_file(&cli.data)
        .with_manifest_file(&cli.manifest)
        .with_build_env(BuildEnv::from_env());

    let templates = cli.templates.clone().or_else(|| {
        let default = Path::new(DEFAULT_TEMPLATES_DIR);
        default.is_dir().then(|| default.to_path_buf())
    });
    if let Some(dir) = templates {
        config = config.with_templates_dir(dir);
    }

    if let Some(repository) = &cli.repository {
        config = config.with_repository(repository);
    }

    config
}

/// Log to stderr; `VITA_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,vita=debug,vita_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("VITA_LOG").unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
