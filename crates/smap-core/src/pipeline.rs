//! Staged pipeline driver: page fetch, asset extraction, map discovery,
//! map fetch/decode, tree reconstruction.
//!
//! Stages run strictly in order; items within a stage fan out. Any fetch,
//! decode, or filesystem failure terminates the run (fail-fast, one-shot
//! tool). Zero assets or zero maps is a reportable outcome, not an error.

use std::collections::HashMap;
use std::path::PathBuf;

use url::Url;

use crate::config::SmapConfig;
use crate::error::{Error, Result};
use crate::extract::{self, ExtractedAssets};
use crate::http::{self, FetchOptions};
use crate::locate::{self, MapRef};
use crate::map::{self, SourceMap};
use crate::reconstruct;

/// Everything one run needs, built once by the caller and passed down.
/// No component reads process-wide input on its own.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Entry page URL.
    pub entry_url: String,
    /// Root directory the reconstructed tree is written under.
    pub output_root: PathBuf,
    /// Passthrough request headers, forwarded verbatim to every fetch.
    pub headers: HashMap<String, String>,
}

/// Outcome of a full reconstruction run.
#[derive(Debug)]
pub struct RunReport {
    pub assets_found: usize,
    pub maps_found: usize,
    pub files_written: usize,
}

/// Outcome of an inspection run (no filesystem writes).
#[derive(Debug)]
pub struct InspectReport {
    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
    pub maps: Vec<MapRef>,
}

fn parse_entry_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| Error::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// Stages 1-3: fetch the page, extract assets, probe them for maps.
async fn discover(entry: &Url, opts: &FetchOptions) -> Result<(ExtractedAssets, Vec<MapRef>)> {
    let url = entry.clone();
    let fetch_opts = opts.clone();
    let html =
        tokio::task::spawn_blocking(move || http::fetch_text(url.as_str(), &fetch_opts)).await??;

    let assets = extract::extract_assets(&html);
    tracing::info!(
        scripts = assets.scripts.len(),
        stylesheets = assets.stylesheets.len(),
        "extracted asset references"
    );

    let maps = locate::probe_assets(entry, &assets, opts).await?;
    tracing::info!(maps = maps.len(), "source maps discovered");
    Ok((assets, maps))
}

/// Discovery only: resolves and probes every asset, fetches nothing to disk.
pub async fn inspect(config: &RunConfig, cfg: &SmapConfig) -> Result<InspectReport> {
    let entry = parse_entry_url(&config.entry_url)?;
    let opts = FetchOptions::new(cfg, config.headers.clone());
    let (assets, maps) = discover(&entry, &opts).await?;
    Ok(InspectReport {
        scripts: assets.scripts,
        stylesheets: assets.stylesheets,
        maps,
    })
}

/// The full pipeline: discovery, then map fetch/decode, then reconstruction
/// of every decoded map under `config.output_root`.
pub async fn run(config: &RunConfig, cfg: &SmapConfig) -> Result<RunReport> {
    let entry = parse_entry_url(&config.entry_url)?;
    let opts = FetchOptions::new(cfg, config.headers.clone());

    let (assets, refs) = discover(&entry, &opts).await?;
    let maps: Vec<SourceMap> = map::fetch_maps(&refs, &opts).await?;

    let mut files_written = 0;
    for decoded in &maps {
        files_written += reconstruct::reconstruct(decoded, &config.output_root)?;
    }

    Ok(RunReport {
        assets_found: assets.len(),
        maps_found: maps.len(),
        files_written,
    })
}
