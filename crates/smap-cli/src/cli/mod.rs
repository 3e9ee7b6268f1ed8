//! CLI for the smap source-map reconstruction tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smap_core::config;
use std::collections::HashMap;
use std::path::PathBuf;

use commands::{run_inspect, run_reconstruct};

/// Top-level CLI for the smap source-map tool.
#[derive(Debug, Parser)]
#[command(name = "smap")]
#[command(about = "smap: discover exposed source maps and reconstruct original sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Probe a page for source maps without writing anything.
    Inspect {
        /// Page URL to inspect.
        url: String,

        /// Extra request header as NAME:VALUE (repeatable, forwarded verbatim).
        #[arg(long = "header", short = 'H', value_name = "NAME:VALUE")]
        headers: Vec<String>,
    },

    /// Discover source maps and write the reconstructed source tree to disk.
    Reconstruct {
        /// Page URL to reconstruct from.
        url: String,

        /// Output directory for the reconstructed tree (defaults to the
        /// configured output root).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Extra request header as NAME:VALUE (repeatable, forwarded verbatim).
        #[arg(long = "header", short = 'H', value_name = "NAME:VALUE")]
        headers: Vec<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Inspect { url, headers } => run_inspect(&cfg, &url, &headers).await?,
            CliCommand::Reconstruct {
                url,
                output_dir,
                headers,
            } => run_reconstruct(&cfg, &url, output_dir, &headers).await?,
        }

        Ok(())
    }
}

/// Parses repeated `NAME:VALUE` header flags into a map. The values are
/// opaque passthrough; only the separator is validated.
pub(crate) fn parse_headers(raw: &[String]) -> Result<HashMap<String, String>> {
    let mut headers = HashMap::new();
    for h in raw {
        let Some((name, value)) = h.split_once(':') else {
            anyhow::bail!("invalid header {h:?}: expected NAME:VALUE");
        };
        headers.insert(name.trim().to_string(), value.trim().to_string());
    }
    Ok(headers)
}

#[cfg(test)]
mod tests;
