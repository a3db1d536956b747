use std::io;
use std::path::PathBuf;

/// All errors that can occur while loading content or writing the site.
///
/// The content pipeline itself never fails: malformed headers, unknown
/// sections and wrong-typed fields all degrade to defaults. Only filesystem
/// access and configuration are fallible.
#[derive(thiserror::Error, Debug)]
pub enum TrackerError {
    /// The content location exists but could not be listed.
    #[error("failed to read content directory {path}: {source}")]
    ContentDir { path: PathBuf, source: io::Error },

    /// A single candidate source unit could not be read.
    #[error("failed to read {path}: {source}")]
    ReadUnit { path: PathBuf, source: io::Error },

    /// A rendered artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// Failed to serialize the candidate roster.
    #[error("failed to serialize roster: {0}")]
    Json(#[from] serde_json::Error),

    /// An environment setting had a value we cannot use.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
