//! Configuration view, validation and setup for `quality-iq config`.

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use qiq_common::Sector;
use quality_iq::config::{CONFIG_FILE, CliOverrides, QualityConfig, QualityToml, project_config_path};
use quality_iq::errors::ConfigError;
use quality_iq::ui::icons::{CHECK, WARNING};

use super::super::{Cli, ConfigCommands};
use super::{OutputFormat, emit};

#[derive(Serialize)]
struct EffectiveConfig<'a> {
    source: Option<String>,
    sector: Sector,
    user_id: &'a str,
    color: bool,
    file: &'a QualityToml,
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    source: Option<String>,
    valid: bool,
    warnings: &'a [String],
}

pub fn cmd_config(cli: &Cli, project_dir: &Path, command: Option<ConfigCommands>) -> Result<()> {
    let overrides = CliOverrides {
        config_path: cli.config.clone(),
        sector: cli.sector,
        no_color: cli.no_color,
    };

    match command {
        None | Some(ConfigCommands::Show) => {
            let config = QualityConfig::resolve(project_dir.to_path_buf(), &overrides)
                .context("Failed to load configuration")?;
            show(&config, cli.format)
        }
        Some(ConfigCommands::Validate) => {
            let config = QualityConfig::resolve(project_dir.to_path_buf(), &overrides)
                .context("Failed to load configuration")?;
            validate(&config, cli.format)
        }
        Some(ConfigCommands::Init { force }) => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => project_config_path(project_dir),
            };
            if path.exists() && !force {
                return Err(ConfigError::AlreadyExists(path).into());
            }
            QualityToml::default().save(&path)?;
            tracing::info!(path = %path.display(), "config written");

            println!("{}Created {} at {}", CHECK, CONFIG_FILE, path.display());
            println!();
            println!("You can now customize:");
            println!("  - [session] user_id");
            println!("  - [display] default_sector, description_width, leaderboard_limit");
            println!("  - [display] date_format, color");
            Ok(())
        }
    }
}

fn show(config: &QualityConfig, format: OutputFormat) -> Result<()> {
    let source = config.source.as_ref().map(|p| p.display().to_string());
    let effective = EffectiveConfig {
        source: source.clone(),
        sector: config.sector,
        user_id: &config.user_id,
        color: config.color,
        file: &config.toml,
    };

    emit(format, &effective, || {
        let display = &config.toml.display;
        let mut out = String::new();
        out.push('\n');
        out.push_str("quality-iq Configuration\n");
        out.push_str("========================\n\n");
        match &source {
            Some(path) => out.push_str(&format!("Config file: {path}\n\n")),
            None => out.push_str(&format!(
                "No {CONFIG_FILE} found. Using defaults. Run 'quality-iq config init' to create one.\n\n"
            )),
        }

        out.push_str("[session]\n");
        out.push_str(&format!("  user_id = \"{}\"\n\n", config.toml.session.user_id));

        out.push_str("[display]\n");
        out.push_str(&format!("  default_sector = \"{}\"\n", display.default_sector));
        out.push_str(&format!("  description_width = {}\n", display.description_width));
        out.push_str(&format!("  leaderboard_limit = {}\n", display.leaderboard_limit));
        out.push_str(&format!("  date_format = \"{}\"\n", display.date_format));
        out.push_str(&format!("  color = {}\n\n", display.color));

        out.push_str("Effective values (with env/CLI overrides):\n");
        out.push_str(&format!("  sector = \"{}\"\n", config.sector));
        out.push_str(&format!("  user_id = \"{}\"\n", config.user_id));
        out.push_str(&format!("  color = {}\n", config.color));
        out.push_str(&format!("  date_format = \"{}\"\n", config.date_format()));
        out
    })
}

fn validate(config: &QualityConfig, format: OutputFormat) -> Result<()> {
    let warnings = config.validate();
    let report = ValidationReport {
        source: config.source.as_ref().map(|p| p.display().to_string()),
        valid: warnings.is_empty(),
        warnings: &warnings,
    };

    emit(format, &report, || {
        let mut out = String::new();
        if report.source.is_none() {
            out.push_str(&format!("No {CONFIG_FILE} found. Using defaults (valid).\n"));
            return out;
        }
        if warnings.is_empty() {
            out.push_str(&format!("{CHECK}Configuration is valid.\n"));
        } else {
            out.push_str(&format!("{WARNING}Configuration warnings:\n"));
            for warning in &warnings {
                out.push_str(&format!("  - {warning}\n"));
            }
        }
        out
    })
}
