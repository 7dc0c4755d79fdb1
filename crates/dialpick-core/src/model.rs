// ── Region domain type ──

use serde::{Deserialize, Serialize};

/// One entry in the picker catalog.
///
/// `code` is the unique key within a catalog (uniqueness is assumed from
/// the data source, not enforced here). The serde shape matches the
/// bundled catalog JSON: `{"name": ..., "code": ..., "dial_code": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Human-friendly display name (e.g., "Taiwan").
    pub name: String,
    /// ISO 3166-1 alpha-2 country code (e.g., "TW").
    pub code: String,
    /// International dialling prefix as typed (e.g., "+886").
    pub dial_code: String,
}

impl RegionRecord {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        dial_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            dial_code: dial_code.into(),
        }
    }
}
