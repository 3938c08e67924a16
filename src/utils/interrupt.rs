//! Signal-driven interruption for terminal-owning loops.
//!
//! While raw mode is active Ctrl+C arrives as the 0x03 byte (ISIG is off),
//! but SIGINT can still be delivered during cooked reporting windows, and
//! SIGHUP/SIGTERM can arrive at any time. All three set the same flag, which
//! the probe checks between bounded waits so its raw-mode guard can restore
//! the terminal before the process exits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag set by signal handlers.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    flag: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register SIGINT, SIGHUP, and SIGTERM handlers.
    ///
    /// Safe to call multiple times — duplicate registrations are ignored.
    pub fn register(&self) {
        let flag = self.flag.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
        .ok(); // Ignore if handler already set

        #[cfg(unix)]
        {
            use signal_hook::flag::register;
            let _ = register(libc::SIGHUP, self.flag.clone());
            let _ = register(libc::SIGTERM, self.flag.clone());
        }
    }

    /// Whether any registered signal has fired.
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
