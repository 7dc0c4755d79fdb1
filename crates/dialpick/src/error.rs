// ── CLI error type ──

use thiserror::Error;

use dialpick_core::CoreError;

/// Errors surfaced to the terminal user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Unknown region code: {0}")]
    UnknownCode(String),
}
