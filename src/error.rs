//! Errors for each stage of a crawl.
//!
//! Messages name the stage and the url or path involved; the underlying
//! cause is reachable through `source()`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("could not build HTTP client")]
    Client { source: reqwest::Error },

    #[error("request to {url} failed")]
    Network { url: String, source: reqwest::Error },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("listing from {url} is not valid JSON")]
    Parse { url: String, source: serde_json::Error },

    #[error("listing from {url} is missing expected keys")]
    Shape { url: String, source: serde_json::Error },

    #[error("download of {url} failed")]
    Download {
        url: String,
        source: Box<CrawlError>,
    },

    #[error("I/O error at {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CrawlError>;
