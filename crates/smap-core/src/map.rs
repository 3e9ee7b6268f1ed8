//! Source-map document fetch and decode.
//!
//! Maps are fetched one request per reference, fanned out, and decoded with
//! serde. The parallel `sources`/`sourcesContent` arrays are paired into
//! `SourceEntry` values once here, so nothing downstream indexes into two
//! arrays that can drift.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::http::{self, FetchOptions};
use crate::locate::MapRef;

/// Raw JSON shape of a source map. Only `sources` and `sourcesContent`
/// drive reconstruction; the other standard fields are accepted so
/// real-world maps decode, but nothing interprets them.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceMapDocument {
    pub version: Option<u32>,
    pub file: Option<String>,
    pub source_root: Option<String>,
    pub sources: Vec<String>,
    pub sources_content: Vec<Option<String>>,
    pub names: Vec<String>,
    pub mappings: String,
    #[serde(rename = "debug_id")]
    pub debug_id: Option<String>,
}

/// One original file listed by a map: declared path (untrusted) and its
/// recorded text, `None` when the map carries no content for it.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    pub path: String,
    pub content: Option<String>,
}

/// A decoded map, reduced to what reconstruction needs.
#[derive(Debug)]
pub struct SourceMap {
    pub map_url: Url,
    entries: Vec<SourceEntry>,
}

impl SourceMap {
    /// Pairs `sources[i]` with `sourcesContent[i]`. A content array shorter
    /// than the path array yields `None` for the tail, never an error.
    pub fn from_document(map_url: Url, doc: SourceMapDocument) -> Self {
        let mut content = doc.sources_content.into_iter();
        let entries = doc
            .sources
            .into_iter()
            .map(|path| SourceEntry {
                path,
                content: content.next().flatten(),
            })
            .collect();
        SourceMap { map_url, entries }
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decodes a fetched map body. A body that is not JSON is a `MapDecode`
/// error naming the map URL; a JSON body missing `sources` decodes as an
/// empty map.
pub fn decode(map_url: &Url, body: &str) -> Result<SourceMap> {
    let doc: SourceMapDocument =
        serde_json::from_str(body).map_err(|source| Error::MapDecode {
            url: map_url.to_string(),
            source,
        })?;
    Ok(SourceMap::from_document(map_url.clone(), doc))
}

/// Fetches and decodes a single referenced map.
pub fn fetch_map_blocking(map_ref: &MapRef, opts: &FetchOptions) -> Result<SourceMap> {
    let body = http::fetch_text(map_ref.map_url.as_str(), opts)?;
    decode(&map_ref.map_url, &body)
}

/// Fetches all referenced maps concurrently; output order matches the
/// input reference order.
pub async fn fetch_maps(refs: &[MapRef], opts: &FetchOptions) -> Result<Vec<SourceMap>> {
    let mut handles = Vec::with_capacity(refs.len());
    for map_ref in refs {
        let map_ref = map_ref.clone();
        let opts = opts.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            fetch_map_blocking(&map_ref, &opts)
        }));
    }

    let mut maps = Vec::with_capacity(handles.len());
    for handle in handles {
        maps.push(handle.await??);
    }
    Ok(maps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_url() -> Url {
        Url::parse("https://example.com/static/app.js.map").unwrap()
    }

    #[test]
    fn decodes_paired_entries() {
        let body = r#"{
            "version": 3,
            "file": "app.js",
            "sources": ["src/index.js", "src/lib.js"],
            "sourcesContent": ["let a = 1;", null],
            "names": [],
            "mappings": "AAAA"
        }"#;
        let map = decode(&map_url(), body).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.entries()[0].path, "src/index.js");
        assert_eq!(map.entries()[0].content.as_deref(), Some("let a = 1;"));
        assert_eq!(map.entries()[1].path, "src/lib.js");
        assert!(map.entries()[1].content.is_none());
    }

    #[test]
    fn short_content_array_yields_none_tail() {
        let body = r#"{"sources": ["a.js", "b.js", "c.js"], "sourcesContent": ["x"]}"#;
        let map = decode(&map_url(), body).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.entries()[0].content.as_deref(), Some("x"));
        assert!(map.entries()[1].content.is_none());
        assert!(map.entries()[2].content.is_none());
    }

    #[test]
    fn missing_sources_decodes_as_empty_map() {
        let map = decode(&map_url(), r#"{"version": 3, "mappings": ""}"#).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn html_body_is_a_decode_error_naming_the_url() {
        let err = decode(&map_url(), "<html><body>Please sign in</body></html>").unwrap_err();
        match err {
            Error::MapDecode { url, .. } => {
                assert_eq!(url, "https://example.com/static/app.js.map");
            }
            other => panic!("expected MapDecode, got {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_accepted() {
        let body = r#"{
            "version": 3,
            "sources": ["a.js"],
            "sourcesContent": ["1"],
            "sourceRoot": "",
            "debug_id": "0b1c2d",
            "x_google_ignoreList": [0]
        }"#;
        let map = decode(&map_url(), body).unwrap();
        assert_eq!(map.len(), 1);
    }
}
