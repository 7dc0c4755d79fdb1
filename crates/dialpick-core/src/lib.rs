//! Data layer for region/country picker UIs.
//!
//! This crate owns the picker pipeline: it loads a fixed catalog of
//! regions through an abstract data source, exposes sort operations,
//! and records an ordered history of list commands (pin-to-front,
//! restrict-to-subset) that is replayed against every re-sort.
//!
//! - **[`SelectorManager`]** — Central facade.
//!   [`load_data()`](SelectorManager::load_data) fetches the catalog and
//!   snapshots it as both the canonical and working lists; `sort()`
//!   rebuilds the working list from the canonical one and replays the
//!   full command history; `execute()` applies a command immediately and
//!   records it.
//!
//! - **[`Command`]** — Closed enum of replayable list transformations
//!   (`Pin`, `Restrict`). Each is a pure function of its parameters and
//!   the input list.
//!
//! - **[`RegionDataLoader`]** — Asynchronous catalog source capability.
//!   [`BundledRegionDataLoader`] decodes the dialling-code catalog
//!   compiled into the crate; [`JsonFileRegionDataLoader`] reads a
//!   host-supplied file. Hosts may implement their own.
//!
//! - **[`RegionRecord`]** — One catalog entry (name, code, dial code).
//!
//! The manager exposes the working list both as a borrowed view and as
//! a `watch`-channel snapshot stream for reactive rendering.

pub mod command;
pub mod error;
pub mod loader;
pub mod model;
pub mod selector;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::Command;
pub use error::CoreError;
pub use loader::{BundledRegionDataLoader, JsonFileRegionDataLoader, RegionDataLoader};
pub use model::RegionRecord;
pub use selector::{SelectorManager, SortKey};
