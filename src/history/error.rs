//! Error types for history discovery and scanning.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the locator and the query views.
///
/// Malformed lines never show up here; the decoder skips them.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("determine home directory: no home directory available")]
    HomeDirectoryUnavailable,

    #[error("no known history file found")]
    NoHistoryFileFound,

    #[error("open history file {}: {source}", path.display())]
    FileOpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scan history file {}: {source}", path.display())]
    FileScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HistoryError>;
