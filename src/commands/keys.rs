//! Keys command handler - the raw input probe.

use anyhow::Result;
use std::time::Duration;

use termprobe::probe::{self, ProbeOptions};
use termprobe::Config;

/// Run the raw input probe.
///
/// The idle timeout resolves flag > config > default. The probe itself
/// fails fast when stdin is not an interactive terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(idle_timeout_ms: Option<u64>) -> Result<()> {
    let config = Config::load()?;
    let timeout_ms = idle_timeout_ms.unwrap_or(config.probe.idle_timeout_ms);
    let options = ProbeOptions {
        idle_timeout: Duration::from_millis(timeout_ms),
    };

    let outcome = probe::run(&options)?;
    println!("{}", outcome.message());
    Ok(())
}
