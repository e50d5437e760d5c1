//! CLI command implementations.
//!
//! Each submodule owns one `Commands` variant:
//!
//! | Module           | Commands handled   |
//! |------------------|--------------------|
//! | `dashboard`      | `Dashboard`        |
//! | `checklists`     | `Checklists`       |
//! | `failures`       | `Failures`         |
//! | `certifications` | `Certifications`   |
//! | `leaderboard`    | `Leaderboard`      |
//! | `show`           | `Show`             |
//! | `browse`         | `Browse`           |
//! | `config`         | `Config`           |

pub mod browse;
pub mod certifications;
pub mod checklists;
pub mod config;
pub mod dashboard;
pub mod failures;
pub mod leaderboard;
pub mod show;

pub use browse::{BrowseTarget, cmd_browse};
pub use certifications::cmd_certifications;
pub use checklists::cmd_checklists;
pub use config::cmd_config;
pub use dashboard::cmd_dashboard;
pub use failures::{FailureTab, cmd_failures};
pub use leaderboard::cmd_leaderboard;
pub use quality_iq::details::RecordKind;
pub use show::cmd_show;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context as _, Result};
use chrono::Utc;
use serde::Serialize;

use quality_iq::config::{CliOverrides, QualityConfig};
use quality_iq::fixtures::Fixtures;
use quality_iq::grid::{Column, DataGrid, Record, RenderOptions};
use quality_iq::records::KEY_FIELD;
use quality_iq::session::Session;

use crate::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!("Invalid format '{}'. Valid values: text, json, yaml", s),
        }
    }
}

/// Everything a data command needs: settings, the data set and who is looking.
pub struct Context {
    pub config: QualityConfig,
    pub data: Fixtures,
    pub session: Session,
    pub format: OutputFormat,
    pub render: RenderOptions,
}

impl Context {
    pub fn load(cli: &Cli, project_dir: PathBuf) -> Result<Self> {
        let overrides = CliOverrides {
            config_path: cli.config.clone(),
            sector: cli.sector,
            no_color: cli.no_color,
        };
        let config =
            QualityConfig::resolve(project_dir, &overrides).context("Failed to load configuration")?;
        if !config.color {
            console::set_colors_enabled(false);
        }
        for warning in config.validate() {
            tracing::warn!("config: {warning}");
        }

        let data = Fixtures::load(Utc::now());
        let session = Session::resolve(&data, &config.user_id, config.sector)?;

        Ok(Self {
            config,
            data,
            session,
            format: cli.format,
            render: RenderOptions::for_terminal(),
        })
    }

    /// A grid keyed by record id, using the configured date format.
    pub fn grid<'a, T: Record>(&self, columns: Vec<Column<T>>) -> DataGrid<'a, T> {
        DataGrid::new(columns, KEY_FIELD).with_date_format(self.config.date_format())
    }
}

/// Click each header label in order.
pub fn apply_sorts<T: Record>(grid: &mut DataGrid<'_, T>, sorts: &[String]) -> Result<()> {
    for label in sorts {
        grid.click_header_label(label)?;
    }
    Ok(())
}

/// Print `value` as JSON or YAML, or the text produced by `text`.
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(value).context("Failed to serialize JSON")?
        ),
        OutputFormat::Yaml => print!(
            "{}",
            serde_yaml::to_string(value).context("Failed to serialize YAML")?
        ),
    }
    Ok(())
}
