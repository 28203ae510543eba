//! Event list browser - Entry Point

use clap::Parser;
use evlist::config::CliOverrides;
use evlist::fetch::HttpResultsFetcher;
use evlist::model::AppError;
use evlist::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// Event list browser - TUI for paginated, filterable event records
#[derive(Parser, Debug)]
#[command(name = "evlist")]
#[command(version)]
#[command(about = "TUI application for browsing event records from an HTTP API")]
pub struct Args {
    /// Base URL of the events endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Results per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Title shown above the filters
    #[arg(long)]
    pub title: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            page_size: self.page_size,
            title: self.title.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = evlist::config::load_config_with_precedence(args.config.clone())?;
        let merged = evlist::config::merge_config(config_file);
        let with_env = evlist::config::apply_env_overrides(merged)?;
        evlist::config::apply_cli_overrides(with_env, args.overrides())
    };

    evlist::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let api_url = config.api_url()?;
    let fetcher = HttpResultsFetcher::new(api_url, config.request_timeout)?;

    evlist::view::run_with_fetcher(
        fetcher,
        &config,
        ColorConfig::from_env_and_args(args.no_color),
    )?;

    Ok(())
}
