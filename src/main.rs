use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qiq_common::{CertificationStatus, ChecklistStatus, Sector};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cmd;

use cmd::{BrowseTarget, FailureTab, OutputFormat, RecordKind};

#[derive(Parser)]
#[command(name = "quality-iq")]
#[command(version, about = "Quality inspection dashboard for food and textile production")]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Path to a quality.toml. Defaults to .quality-iq/quality.toml in the project dir.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sector to show (food or textile). Overrides QIQ_SECTOR and the config file.
    #[arg(long, global = true)]
    pub sector: Option<Sector>,

    /// Output format: text, json or yaml
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stat cards, failure trend, pending work, certifications and leaderboard
    Dashboard,
    /// List checklists for the sector
    Checklists {
        /// Case-insensitive match on title or description
        #[arg(short, long)]
        search: Option<String>,
        /// pending, in-progress, completed or failed
        #[arg(long)]
        status: Option<ChecklistStatus>,
        /// Click a column header; repeat to flip the direction
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<String>,
    },
    /// Failure records, hotspots or the failure heatmap
    Failures {
        #[arg(short, long)]
        search: Option<String>,
        /// records, hotspots or analysis
        #[arg(long, default_value = "records")]
        tab: FailureTab,
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<String>,
    },
    /// Compliance summary and certification list
    Certifications {
        /// compliant, at-risk or non-compliant
        #[arg(long)]
        status: Option<CertificationStatus>,
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<String>,
    },
    /// Quality leaderboard
    Leaderboard {
        /// Number of entries (defaults to display.leaderboard_limit)
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<String>,
    },
    /// Show one record in full
    Show {
        /// checklist, item, failure, hotspot, certification or user
        kind: RecordKind,
        id: String,
    },
    /// Interactively sort a grid and open rows
    Browse {
        /// checklists, failures, hotspots or certifications
        target: BrowseTarget,
    },
    /// View, validate or create configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
    /// Write a default .quality-iq/quality.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let project_dir = match cli.project_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    // Config commands must work even when the file is broken.
    if let Commands::Config { command } = &cli.command {
        return cmd::cmd_config(&cli, &project_dir, command.clone());
    }

    let ctx = cmd::Context::load(&cli, project_dir)?;

    match &cli.command {
        Commands::Dashboard => cmd::cmd_dashboard(&ctx)?,
        Commands::Checklists {
            search,
            status,
            sort,
        } => cmd::cmd_checklists(&ctx, search.as_deref(), *status, sort)?,
        Commands::Failures { search, tab, sort } => {
            cmd::cmd_failures(&ctx, search.as_deref(), *tab, sort)?
        }
        Commands::Certifications { status, sort } => {
            cmd::cmd_certifications(&ctx, *status, sort)?
        }
        Commands::Leaderboard { limit, sort } => cmd::cmd_leaderboard(&ctx, *limit, sort)?,
        Commands::Show { kind, id } => cmd::cmd_show(&ctx, *kind, id)?,
        Commands::Browse { target } => cmd::cmd_browse(&ctx, *target)?,
        Commands::Config { .. } => {}
    }

    Ok(())
}
