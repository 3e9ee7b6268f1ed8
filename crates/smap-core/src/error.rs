//! Pipeline error kinds.
//!
//! Every variant names the URL or path that failed so auth-gated resources
//! can be diagnosed from the message alone. All variants are fatal for a
//! run; the CLI layer turns them into a non-zero exit code.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The entry URL itself does not parse.
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An asset reference could not be resolved against the page URL.
    #[error("cannot resolve {raw:?} against {base}")]
    UrlResolve {
        base: String,
        raw: String,
        #[source]
        source: url::ParseError,
    },

    /// The server answered with a non-success status.
    #[error("GET {url} returned HTTP {status}")]
    Fetch { url: String, status: u32 },

    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The map body is not JSON. Usually an auth wall or error page served
    /// where the map should be, so this is reported separately from
    /// transport failures.
    #[error("source map at {url} is not valid JSON (auth wall or error page?)")]
    MapDecode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Directory creation or file write under the output root failed.
    #[error("filesystem operation failed at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declared source path has no safe location under the output root
    /// (it reduced to nothing after sanitization).
    #[error("source path {path:?} has no safe location under the output root")]
    UnsafeSourcePath { path: String },

    /// A fan-out worker task died before reporting a result.
    #[error("background fetch task failed")]
    TaskJoin(#[from] tokio::task::JoinError),
}
