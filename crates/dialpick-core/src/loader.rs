// ── Region data source capability ──
//
// The manager is agnostic to where the catalog comes from (bundled
// resource, file, network). A loader makes one asynchronous attempt per
// call and completes with the full catalog or a failure; retry and
// timeout policy belong to the host, not this layer.

use std::future::Future;
use std::path::PathBuf;

use tracing::debug;

use crate::error::CoreError;
use crate::model::RegionRecord;

/// The dialling-code catalog compiled into the crate.
const BUNDLED_CATALOG: &str = include_str!("../data/diallingcode.json");

/// Asynchronous source of the full region catalog.
///
/// One `load` call yields one completion. Implementations must return
/// the complete catalog in display order; the manager snapshots it
/// wholesale and never merges.
pub trait RegionDataLoader {
    fn load(&self) -> impl Future<Output = Result<Vec<RegionRecord>, CoreError>> + Send;
}

// ── Bundled catalog ─────────────────────────────────────────────────

/// Loads the dialling-code catalog shipped with the crate.
///
/// Decoding happens on every call; the catalog is a few kilobytes and
/// a picker loads it once per session.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledRegionDataLoader;

impl RegionDataLoader for BundledRegionDataLoader {
    async fn load(&self) -> Result<Vec<RegionRecord>, CoreError> {
        let regions: Vec<RegionRecord> = serde_json::from_str(BUNDLED_CATALOG)?;
        debug!(count = regions.len(), "decoded bundled region catalog");
        Ok(regions)
    }
}

// ── File-backed catalog ─────────────────────────────────────────────

/// Loads a region catalog from a host-supplied JSON file.
///
/// The file must contain a JSON array of `{"name", "code", "dial_code"}`
/// objects, the same shape as the bundled catalog.
#[derive(Debug, Clone)]
pub struct JsonFileRegionDataLoader {
    path: PathBuf,
}

impl JsonFileRegionDataLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegionDataLoader for JsonFileRegionDataLoader {
    async fn load(&self) -> Result<Vec<RegionRecord>, CoreError> {
        let bytes =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| CoreError::CatalogRead {
                    path: self.path.clone(),
                    source,
                })?;
        let regions: Vec<RegionRecord> = serde_json::from_str(&bytes)?;
        debug!(path = %self.path.display(), count = regions.len(), "decoded region catalog file");
        Ok(regions)
    }
}
