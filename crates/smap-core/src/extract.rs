//! Static-asset extraction from page markup.
//!
//! Parses the fetched HTML with `tl` (best-effort recovery, so malformed
//! markup yields whatever assets are still recognizable instead of an
//! error) and collects script/stylesheet references in document order.

/// What kind of asset a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Script,
    Stylesheet,
}

/// One extracted asset reference, exactly as written in the markup.
#[derive(Debug, Clone)]
pub struct AssetRef {
    pub kind: AssetKind,
    pub raw_path: String,
}

/// Script and stylesheet references found on a page, each in document order.
#[derive(Debug, Default)]
pub struct ExtractedAssets {
    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
}

impl ExtractedAssets {
    /// Everything the locator probes: scripts first, then stylesheets,
    /// each kind in the order it appeared in the markup.
    pub fn asset_refs(&self) -> impl Iterator<Item = AssetRef> + '_ {
        let scripts = self.scripts.iter().map(|p| AssetRef {
            kind: AssetKind::Script,
            raw_path: p.clone(),
        });
        let stylesheets = self.stylesheets.iter().map(|p| AssetRef {
            kind: AssetKind::Stylesheet,
            raw_path: p.clone(),
        });
        scripts.chain(stylesheets)
    }

    pub fn len(&self) -> usize {
        self.scripts.len() + self.stylesheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.stylesheets.is_empty()
    }
}

/// Collects `<script src>` values ending in `.js` and `<link href>` values
/// ending in `.css`. Anything else (inline scripts, data URIs, other
/// extensions, empty attributes) is silently excluded. Zero matches is a
/// valid outcome, not an error.
pub fn extract_assets(html: &str) -> ExtractedAssets {
    let mut out = ExtractedAssets::default();

    let dom = match tl::parse(html, tl::ParserOptions::default()) {
        Ok(dom) => dom,
        Err(err) => {
            tracing::warn!(%err, "markup did not parse, treating page as asset-free");
            return out;
        }
    };

    for node in dom.nodes() {
        let Some(tag) = node.as_tag() else { continue };
        let name = tag.name().as_utf8_str();

        if name.eq_ignore_ascii_case("script") {
            if let Some(src) = attr_value(tag, "src") {
                if src.ends_with(".js") {
                    out.scripts.push(src);
                }
            }
        } else if name.eq_ignore_ascii_case("link") {
            if let Some(href) = attr_value(tag, "href") {
                if href.ends_with(".css") {
                    out.stylesheets.push(href);
                }
            }
        }
    }

    out
}

fn attr_value(tag: &tl::HTMLTag, name: &str) -> Option<String> {
    let value = tag.attributes().get(name).flatten()?;
    let value = value.as_utf8_str();
    if value.is_empty() {
        None
    } else {
        Some(value.into_owned())
    }
}
