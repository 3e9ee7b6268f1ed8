//! HTTP GET transport over libcurl.
//!
//! One blocking GET per call: follows redirects, applies the run's timeouts
//! and passthrough headers, collects the body, and maps non-2xx statuses to
//! `Error::Fetch`. Runs on the current thread; async callers wrap it in
//! `spawn_blocking`.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::SmapConfig;
use crate::error::{Error, Result};

/// Options applied to every request in a run. Cheap to clone into fan-out
/// workers.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    /// Extra request headers, forwarded verbatim (e.g. Cookie, Authorization).
    pub headers: HashMap<String, String>,
}

impl FetchOptions {
    pub fn new(cfg: &SmapConfig, headers: HashMap<String, String>) -> Self {
        FetchOptions {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.request_timeout_secs),
            headers,
        }
    }
}

/// Performs a GET and returns the response body as text.
///
/// Bodies are decoded lossily as UTF-8: pages and maps are text, and a
/// stray invalid byte must not kill the marker probe.
pub fn fetch_text(url: &str, opts: &FetchOptions) -> Result<String> {
    let curl_err = |source: curl::Error| Error::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(curl_err)?;
    easy.follow_location(true).map_err(curl_err)?;
    easy.connect_timeout(opts.connect_timeout).map_err(curl_err)?;
    easy.timeout(opts.timeout).map_err(curl_err)?;

    // Build curl list for custom headers (e.g. "Name: value").
    let mut list = curl::easy::List::new();
    for (k, v) in &opts.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))
            .map_err(curl_err)?;
    }
    if !opts.headers.is_empty() {
        easy.http_headers(list).map_err(curl_err)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(curl_err)?;
        transfer.perform().map_err(curl_err)?;
    }

    let status = easy.response_code().map_err(curl_err)?;
    if !(200..300).contains(&status) {
        return Err(Error::Fetch {
            url: url.to_string(),
            status,
        });
    }

    tracing::debug!(url, status, bytes = body.len(), "fetched");
    Ok(String::from_utf8_lossy(&body).into_owned())
}
