//! Configuration for quality-iq, read from `.quality-iq/quality.toml`.
//!
//! Settings are layered: file, then environment (`QIQ_SECTOR`, `QIQ_USER`),
//! then command-line flags. When the project directory has no config file
//! the per-user one under the platform config dir is used instead.
//!
//! ```toml
//! [session]
//! user_id = "1"
//!
//! [display]
//! default_sector = "food"
//! description_width = 48
//! leaderboard_limit = 5
//! date_format = "%Y-%m-%d"
//! color = true
//! ```

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use qiq_common::Sector;
use serde::{Deserialize, Serialize};

use crate::columns::ColumnOptions;
use crate::errors::ConfigError;
use crate::grid::DEFAULT_DATE_FORMAT;

pub const CONFIG_DIR: &str = ".quality-iq";
pub const CONFIG_FILE: &str = "quality.toml";
pub const APP_DIR: &str = "quality-iq";

pub const SECTOR_ENV: &str = "QIQ_SECTOR";
pub const USER_ENV: &str = "QIQ_USER";

const MIN_DESCRIPTION_WIDTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSection {
    /// Id of the signed-in user.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "1".to_string()
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    #[serde(default)]
    pub default_sector: Sector,
    /// Width long text columns are clipped to.
    #[serde(default = "default_description_width")]
    pub description_width: usize,
    #[serde(default = "default_leaderboard_limit")]
    pub leaderboard_limit: usize,
    /// `strftime` pattern for timestamps.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_description_width() -> usize {
    48
}

fn default_leaderboard_limit() -> usize {
    5
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            default_sector: Sector::default(),
            description_width: default_description_width(),
            leaderboard_limit: default_leaderboard_limit(),
            date_format: default_date_format(),
            color: default_color(),
        }
    }
}

/// Contents of `quality.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityToml {
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub display: DisplaySection,
}

impl QualityToml {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the settings and return any warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let display = &self.display;

        if display.description_width < MIN_DESCRIPTION_WIDTH {
            warnings.push(format!(
                "description_width {} is too narrow: use at least {}",
                display.description_width, MIN_DESCRIPTION_WIDTH
            ));
        }

        if display.leaderboard_limit == 0 {
            warnings.push("leaderboard_limit is 0: the leaderboard will be empty".to_string());
        }

        if display.date_format.trim().is_empty() {
            warnings.push("date_format is empty: dates will render blank".to_string());
        } else if !is_valid_date_format(&display.date_format) {
            warnings.push(format!(
                "Invalid date_format '{}': not a strftime pattern, using {}",
                display.date_format, DEFAULT_DATE_FORMAT
            ));
        }

        if self.session.user_id.trim().is_empty() {
            warnings.push("session.user_id is empty".to_string());
        }

        warnings
    }
}

pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// `.quality-iq/quality.toml` under `project_dir`; where `config init` writes.
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Where to look for the config file: the project's `.quality-iq/`, then the
/// user config dir. Returns the first that exists.
pub fn locate(project_dir: &Path) -> Option<PathBuf> {
    let project = project_config_path(project_dir);
    if project.exists() {
        return Some(project);
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Command-line overrides, the last layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub sector: Option<Sector>,
    pub no_color: bool,
}

/// Effective settings after every layer is applied.
#[derive(Debug, Clone)]
pub struct QualityConfig {
    pub project_dir: PathBuf,
    /// File the settings came from, `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub toml: QualityToml,
    pub sector: Sector,
    pub user_id: String,
    pub color: bool,
    /// `display.date_format` when it parses, otherwise the default.
    pub date_format: String,
}

impl QualityConfig {
    /// Resolve from the real process environment.
    pub fn resolve(project_dir: PathBuf, cli: &CliOverrides) -> anyhow::Result<Self> {
        Self::resolve_with(project_dir, cli, |key| std::env::var(key).ok())
    }

    /// Resolve with `env` standing in for the environment.
    pub fn resolve_with(
        project_dir: PathBuf,
        cli: &CliOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let source = match &cli.config_path {
            Some(path) => Some(path.clone()),
            None => locate(&project_dir),
        };
        let toml = match &source {
            Some(path) => QualityToml::load(path)?,
            None => QualityToml::default(),
        };
        tracing::debug!(source = ?source, "configuration loaded");

        let env_sector = env(SECTOR_ENV).and_then(|raw| match raw.parse::<Sector>() {
            Ok(sector) => Some(sector),
            Err(e) => {
                tracing::warn!("ignoring {SECTOR_ENV}: {e}");
                None
            }
        });
        let sector = cli
            .sector
            .or(env_sector)
            .unwrap_or(toml.display.default_sector);

        let user_id = env(USER_ENV)
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| toml.session.user_id.clone());

        let color = toml.display.color && !cli.no_color;

        // chrono fails at display time on a bad pattern.
        let date_format = if is_valid_date_format(&toml.display.date_format) {
            toml.display.date_format.clone()
        } else {
            tracing::debug!(
                pattern = %toml.display.date_format,
                "falling back to default date format"
            );
            DEFAULT_DATE_FORMAT.to_string()
        };

        Ok(Self {
            project_dir,
            source,
            toml,
            sector,
            user_id,
            color,
            date_format,
        })
    }

    pub fn column_options(&self) -> ColumnOptions {
        ColumnOptions {
            date_format: self.date_format.clone(),
            description_width: self.toml.display.description_width,
        }
    }

    pub fn leaderboard_limit(&self) -> usize {
        self.toml.display.leaderboard_limit
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn validate(&self) -> Vec<String> {
        self.toml.validate()
    }
}
