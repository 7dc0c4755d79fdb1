// ── Core error types ──
//
// The pipeline surfaces exactly one failure mode to callers: the data
// source could not produce a catalog. Command codes that match nothing
// and commands issued against an empty list are NOT errors -- both are
// silently ignored so free-form host input never aborts the pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog file could not be read.
    #[error("Cannot read catalog at {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog bytes were not a valid region list.
    #[error("Malformed region catalog: {0}")]
    CatalogDecode(#[from] serde_json::Error),

    /// Generic data-source failure for host-supplied loaders.
    #[error("Region data load failed: {message}")]
    Load { message: String },
}
