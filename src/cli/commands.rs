//! CLI command definitions and handlers.
//!
//! Each subcommand is implemented as a function that takes the parsed arguments
//! and returns an `anyhow::Result<()>`.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::cover::{CoverResolver, CoverTier};
use crate::error::{self, ResultExt};
use crate::transport::HttpTransport;

/// Cover Fetch CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "COVER_FETCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the best cover URL for the requested quality
    Resolve {
        /// Cover URL (any tier)
        url: String,
        /// Try the max-resolution tier
        #[arg(long)]
        max: bool,
    },
    /// Download a cover into memory and optionally save it
    Download {
        /// Cover URL (any tier)
        url: String,
        /// Try the max-resolution tier
        #[arg(long)]
        max: bool,
        /// Write the image to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load config from an explicit path, or the default location.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(config::load_from(path)?),
        None => Ok(config::load()),
    }
}

fn resolver(config: &Config) -> CoverResolver<HttpTransport> {
    CoverResolver::with_transport(HttpTransport::from_config(&config.http))
}

/// Run the parsed command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Resolve { url, max } => cmd_resolve(&rt, &config, url, *max),
        Commands::Download { url, max, output } => {
            cmd_download(&rt, &config, url, *max, output.as_deref())
        }
    }
}

/// Print the resolved URL
pub fn cmd_resolve(rt: &Runtime, config: &Config, url: &str, max: bool) -> anyhow::Result<()> {
    let want_max = max || config.cover.max_quality;
    let resolved = rt.block_on(resolver(config).resolve(url, want_max));

    match CoverTier::detect(&resolved) {
        Some(tier) => tracing::debug!("Resolved tier: {}", tier),
        None => tracing::debug!("No known tier code in {}", resolved),
    }
    println!("{}", resolved);
    Ok(())
}

/// Download a cover and report or save it
pub fn cmd_download(
    rt: &Runtime,
    config: &Config,
    url: &str,
    max: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let want_max = max || config.cover.max_quality;
    let cover = rt
        .block_on(resolver(config).fetch(url, want_max))
        .with_context(format!("downloading {}", url))?;

    println!("✓ Downloaded {} bytes ({})", cover.data.len(), cover.mime_type);
    println!("  URL:  {}", cover.url);
    if let Some(tier) = cover.tier {
        println!("  Tier: {}", tier);
    }

    if let Some(path) = output {
        save_cover(path, &cover.data)?;
        println!("  Saved to {}", path.display());
    }
    Ok(())
}

fn save_cover(path: &Path, data: &[u8]) -> error::Result<()> {
    std::fs::write(path, data).with_context(format!("writing {}", path.display()))
}
