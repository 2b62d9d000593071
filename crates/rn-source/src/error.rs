use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while acquiring raw records.  All are fatal for a run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open {path}: {source}")]
    Open {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file} row {row}: {message}")]
    Parse {
        file:    &'static str,
        row:     u64,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
