//! Probe failure modes.

use std::io;

/// Errors that can occur while running the input probe.
///
/// Every variant is fatal. The raw-mode guard restores the terminal before
/// any of these propagate, so a crash never leaves the shell in raw mode.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Standard input is not an interactive terminal. Run this directly in a terminal, not behind a pipe.")]
    NotATerminal,

    #[error("Failed to switch terminal mode: {0}")]
    RawMode(#[source] io::Error),

    #[error("Failed to read from standard input: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to write report: {0}")]
    Report(#[source] io::Error),
}
