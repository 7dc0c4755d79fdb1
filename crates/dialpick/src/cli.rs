//! Clap derive structures for the `dialpick` CLI.
//!
//! Defines the command tree, global flags, and shared value enums.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dialpick_core::SortKey;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dialpick -- region and dialling-code lookup from the command line
#[derive(Debug, Parser)]
#[command(
    name = "dialpick",
    version,
    about = "Browse the region/dialling-code catalog from the command line",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long, env = "DIALPICK_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "DIALPICK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one region code per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog regions, optionally sorted, pinned, and restricted
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one region by its country code
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort field
    #[arg(long, short = 's', value_enum)]
    pub sort: Option<SortField>,

    /// Pin these codes to the front, in the order given (comma-separated;
    /// applied after --restrict regardless of flag order)
    #[arg(long, value_delimiter = ',')]
    pub pin: Vec<String>,

    /// Restrict the list to these codes (comma-separated; always applied
    /// before --pin)
    #[arg(long, value_delimiter = ',')]
    pub restrict: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Country code to look up (e.g. TW)
    pub code: String,
}

/// CLI-facing mirror of [`SortKey`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortField {
    Name,
    Code,
    DialCode,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Name => SortKey::Name,
            SortField::Code => SortKey::Code,
            SortField::DialCode => SortKey::DialCode,
        }
    }
}
