// ── Subcommand handlers ──

pub mod list;
pub mod show;
