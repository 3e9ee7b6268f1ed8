pub mod config;
pub mod logging;

// Pipeline stages, leaf-first.
pub mod error;
pub mod extract;
pub mod http;
pub mod locate;
pub mod map;
pub mod pipeline;
pub mod reconstruct;
pub mod sanitize;
