//! `smap reconstruct <url>` – discover maps and write the source tree.

use anyhow::Result;
use smap_core::config::SmapConfig;
use smap_core::pipeline::{self, RunConfig};
use std::path::PathBuf;

pub async fn run_reconstruct(
    cfg: &SmapConfig,
    url: &str,
    output_dir: Option<PathBuf>,
    raw_headers: &[String],
) -> Result<()> {
    let headers = crate::cli::parse_headers(raw_headers)?;
    let output_root = output_dir.unwrap_or_else(|| PathBuf::from(&cfg.output_root));
    let run = RunConfig {
        entry_url: url.to_string(),
        output_root: output_root.clone(),
        headers,
    };

    let report = pipeline::run(&run, cfg).await?;

    if report.assets_found == 0 {
        println!("No script or stylesheet assets found at {url}");
        return Ok(());
    }
    if report.maps_found == 0 {
        println!(
            "No source maps found across {} assets at {url}",
            report.assets_found
        );
        return Ok(());
    }
    println!(
        "Reconstructed {} files from {} source maps into {}",
        report.files_written,
        report.maps_found,
        output_root.display()
    );
    Ok(())
}
