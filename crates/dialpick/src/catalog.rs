// ── Catalog source selection ──
//
// The manager is generic over its loader, so the CLI wraps the two
// shipped loaders in one enum and picks at runtime based on --catalog.

use std::path::PathBuf;

use dialpick_core::{
    BundledRegionDataLoader, CoreError, JsonFileRegionDataLoader, RegionDataLoader, RegionRecord,
};

/// Where the CLI reads its region catalog from.
pub enum CatalogSource {
    Bundled(BundledRegionDataLoader),
    File(JsonFileRegionDataLoader),
}

impl CatalogSource {
    /// Bundled catalog unless the user supplied a file path.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(JsonFileRegionDataLoader::new(path)),
            None => Self::Bundled(BundledRegionDataLoader),
        }
    }
}

impl RegionDataLoader for CatalogSource {
    async fn load(&self) -> Result<Vec<RegionRecord>, CoreError> {
        match self {
            Self::Bundled(loader) => loader.load().await,
            Self::File(loader) => loader.load().await,
        }
    }
}
