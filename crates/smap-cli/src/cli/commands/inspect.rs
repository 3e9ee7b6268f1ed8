//! `smap inspect <url>` – probe a page for source maps without writing.

use anyhow::Result;
use smap_core::config::SmapConfig;
use smap_core::pipeline::{self, RunConfig};
use std::path::PathBuf;

pub async fn run_inspect(cfg: &SmapConfig, url: &str, raw_headers: &[String]) -> Result<()> {
    let headers = crate::cli::parse_headers(raw_headers)?;
    let run = RunConfig {
        entry_url: url.to_string(),
        // Inspection writes nothing; the root is carried only for config shape.
        output_root: PathBuf::from(&cfg.output_root),
        headers,
    };

    let report = pipeline::inspect(&run, cfg).await?;

    if report.scripts.is_empty() && report.stylesheets.is_empty() {
        println!("No script or stylesheet assets found at {url}");
        return Ok(());
    }

    println!(
        "Assets ({} scripts, {} stylesheets):",
        report.scripts.len(),
        report.stylesheets.len()
    );
    for s in &report.scripts {
        println!("  js   {s}");
    }
    for s in &report.stylesheets {
        println!("  css  {s}");
    }

    if report.maps.is_empty() {
        println!("No source maps found.");
    } else {
        println!("Source maps:");
        for m in &report.maps {
            println!("  {}", m.map_url);
        }
    }
    Ok(())
}
