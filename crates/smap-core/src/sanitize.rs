//! Source-path sanitization and containment under the output root.
//!
//! Source maps list their original file paths verbatim, so the path list is
//! attacker/server-supplied input. `sanitize_source_path` does the textual
//! `../` strip; `safe_join` builds the destination component-wise so the
//! result cannot leave the output root.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Removes every literal `../` occurring anywhere in a declared source path.
///
/// Textual strip only: `./`, repeated separators, and absolute prefixes are
/// left alone (those are `safe_join`'s job). Repeats until no occurrence
/// remains because a removal can expose a new one (`....//` becomes `../`).
/// Idempotent.
pub fn sanitize_source_path(raw: &str) -> String {
    let mut path = raw.to_string();
    while path.contains("../") {
        path = path.replace("../", "");
    }
    path
}

/// Joins a declared source path under `root` so the result stays inside it.
///
/// After the `../` strip, the path is rebuilt one component at a time:
/// empty and `.` components are dropped, `..` leftovers (no trailing slash)
/// are dropped, and prefix components such as `C:` or `webpack:` are
/// dropped, which re-roots absolute and scheme-prefixed paths under `root`.
/// A path with no usable component left is an `UnsafeSourcePath` error.
pub fn safe_join(root: &Path, raw: &str) -> Result<PathBuf> {
    let cleaned = sanitize_source_path(raw).replace('\\', "/");

    let mut rel = PathBuf::new();
    for part in cleaned.split('/') {
        let part = part.trim();
        if part.is_empty() || part == "." || part == ".." || part.ends_with(':') {
            continue;
        }
        rel.push(part);
    }

    if rel.as_os_str().is_empty() {
        return Err(Error::UnsafeSourcePath {
            path: raw.to_string(),
        });
    }

    let joined = root.join(&rel);
    if !joined.starts_with(root) {
        return Err(Error::UnsafeSourcePath {
            path: raw.to_string(),
        });
    }
    Ok(joined)
}
