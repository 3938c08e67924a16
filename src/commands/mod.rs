//! Command handlers for the termprobe CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod colors;
pub mod completions;
pub mod config;
pub mod escapes;
pub mod keys;
pub mod simple;
