//! Error types for Folio

use std::path::PathBuf;

use thiserror::Error;

/// Folio error type
#[derive(Debug, Error)]
pub enum FolioError {
    /// A section registry needs at least one section to fall back to
    #[error("section registry is empty")]
    EmptyRegistry,

    /// Section id not present in the registry
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// Config file could not be parsed
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Content file could not be parsed
    #[error("invalid content {path}: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
