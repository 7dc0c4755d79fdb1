// ── List manipulation commands ──
//
// All working-list mutations flow through a closed `Command` enum.
// The command set is fixed and small, so exhaustive-match dispatch is
// used instead of trait objects. Every variant is a pure transformation:
// output depends only on the command parameters and the input list.

use crate::model::RegionRecord;

/// A replayable list transformation recorded by the [`SelectorManager`].
///
/// Commands are immutable once constructed and are re-executed in recorded
/// order against every freshly sorted list.
///
/// [`SelectorManager`]: crate::selector::SelectorManager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the referenced regions to the front of the list, in the
    /// order given. Codes that match nothing are skipped.
    Pin(Vec<String>),
    /// Keep only regions whose code appears in the set, preserving the
    /// relative order of survivors. Codes that match nothing are ignored.
    Restrict(Vec<String>),
}

impl Command {
    /// Apply this command to a list, producing the transformed list.
    pub fn apply(&self, list: Vec<RegionRecord>) -> Vec<RegionRecord> {
        match self {
            Command::Pin(codes) => pin(codes, list),
            Command::Restrict(codes) => restrict(codes, list),
        }
    }
}

/// Codes are visited in reverse so that each front-insertion stacks the
/// earlier codes on top: after the loop the pinned regions sit at the
/// front in the forward order of `codes`. A code with no match is
/// skipped; the remaining codes still apply.
fn pin(codes: &[String], mut list: Vec<RegionRecord>) -> Vec<RegionRecord> {
    for code in codes.iter().rev() {
        if let Some(idx) = list.iter().position(|r| r.code == *code) {
            let region = list.remove(idx);
            list.insert(0, region);
        }
    }
    list
}

fn restrict(codes: &[String], list: Vec<RegionRecord>) -> Vec<RegionRecord> {
    list.into_iter()
        .filter(|r| codes.contains(&r.code))
        .collect()
}
