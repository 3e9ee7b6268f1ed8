//! Source-map discovery: resolve each asset, probe its body for the marker.
//!
//! Every extracted asset (scripts and stylesheets in one pass) is resolved
//! against the page URL, fetched, and tested for the literal marker
//! substring. Probes fan out one blocking task per asset; results come back
//! in extraction order.

use url::Url;

use crate::error::{Error, Result};
use crate::extract::{AssetRef, ExtractedAssets};
use crate::http::{self, FetchOptions};

/// The inline comment convention announcing a source map.
pub const SOURCE_MAP_MARKER: &str = "sourceMappingURL=";

/// An asset confirmed to carry the marker, with its derived map location.
#[derive(Debug, Clone)]
pub struct MapRef {
    pub asset_url: Url,
    /// Always the asset URL with `.map` appended. The marker's own argument
    /// is not parsed; a map served from a different path is not discovered.
    pub map_url: Url,
}

/// Resolves a raw asset reference against the page URL. Handles absolute,
/// protocol-relative, and relative forms.
pub fn resolve_asset_url(base: &Url, raw_path: &str) -> Result<Url> {
    base.join(raw_path).map_err(|source| Error::UrlResolve {
        base: base.to_string(),
        raw: raw_path.to_string(),
        source,
    })
}

/// Derived map location for an asset: its own URL plus `.map`.
pub fn derive_map_url(asset_url: &Url) -> Result<Url> {
    let raw = format!("{}.map", asset_url);
    Url::parse(&raw).map_err(|source| Error::InvalidUrl { url: raw, source })
}

/// Probes a single asset. `Ok(None)` means the asset carries no marker,
/// which is the common case, not a failure. A non-2xx asset response is
/// fatal for the run.
pub fn probe_blocking(base: &Url, asset: &AssetRef, opts: &FetchOptions) -> Result<Option<MapRef>> {
    let asset_url = resolve_asset_url(base, &asset.raw_path)?;
    let body = http::fetch_text(asset_url.as_str(), opts)?;

    if !body.contains(SOURCE_MAP_MARKER) {
        tracing::debug!(kind = ?asset.kind, asset = %asset_url, "no source map marker");
        return Ok(None);
    }

    let map_url = derive_map_url(&asset_url)?;
    tracing::info!(kind = ?asset.kind, asset = %asset_url, map = %map_url, "source map announced");
    Ok(Some(MapRef { asset_url, map_url }))
}

/// Probes all assets concurrently and returns the discovered map references
/// in extraction order.
pub async fn probe_assets(
    base: &Url,
    assets: &ExtractedAssets,
    opts: &FetchOptions,
) -> Result<Vec<MapRef>> {
    let mut handles = Vec::with_capacity(assets.len());
    for asset in assets.asset_refs() {
        let base = base.clone();
        let opts = opts.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            probe_blocking(&base, &asset, &opts)
        }));
    }

    let mut refs = Vec::new();
    for handle in handles {
        if let Some(map_ref) = handle.await?? {
            refs.push(map_ref);
        }
    }
    Ok(refs)
}
