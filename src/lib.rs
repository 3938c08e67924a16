//! Terminal Probe (termprobe) Library
//!
//! Diagnostic routines for checking how a terminal emulator renders ANSI
//! control sequences, plus a raw keyboard probe that reports the exact byte
//! sequences keys produce.

pub mod cli;
pub mod config;
pub mod probe;
pub mod sweep;
pub mod utils;

pub use config::Config;
pub use probe::{ProbeError, ProbeOptions, ProbeOutcome};
