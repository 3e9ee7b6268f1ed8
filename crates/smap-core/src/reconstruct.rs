//! Tree reconstruction: write a decoded map's sources under the output root.
//!
//! The only state-mutating stage. Each entry's declared path goes through
//! `safe_join`, missing ancestor directories are created, and the file is
//! written, overwriting silently. Writes are not transactional; re-running
//! overwrites prior output, so the run is idempotent at the file level.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::map::SourceMap;
use crate::sanitize;

/// Written verbatim when a map lists a source without recorded content.
pub const MISSING_CONTENT_PLACEHOLDER: &str = "null";

/// Writes every source listed by `map` under `output_root`. Returns the
/// number of files written.
pub fn reconstruct(map: &SourceMap, output_root: &Path) -> Result<usize> {
    let mut written = 0;
    for entry in map.entries() {
        let dest = sanitize::safe_join(output_root, &entry.path)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Filesystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = entry.content.as_deref().unwrap_or(MISSING_CONTENT_PLACEHOLDER);
        fs::write(&dest, content).map_err(|source| Error::Filesystem {
            path: dest.clone(),
            source,
        })?;
        written += 1;
    }
    tracing::info!(map = %map.map_url, files = written, "reconstructed sources");
    Ok(written)
}
