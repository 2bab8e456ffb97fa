use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a whole run before any track is processed.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// A single provider call that did not produce a usable answer for reasons
/// other than "no lyrics".
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("cannot build request URL from {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug)]
pub enum SidecarError {
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("could not read tags from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },
}
