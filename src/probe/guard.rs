//! Scoped ownership of the terminal's raw mode.

use crossterm::terminal;

use super::ProbeError;

/// RAII guard around the terminal's raw mode.
///
/// `acquire` snapshots the current line discipline (crossterm keeps the
/// original termios) and switches to raw mode; dropping the guard restores
/// cooked mode, so restoration cannot be skipped on any exit path - normal
/// return, `?` propagation, or panic unwind. `suspend`/`resume` bracket the
/// cooked reporting window between captured sequences.
#[derive(Debug)]
pub struct RawModeGuard {
    raw: bool,
}

impl RawModeGuard {
    /// Switch the terminal to raw mode.
    pub fn acquire() -> Result<Self, ProbeError> {
        terminal::enable_raw_mode().map_err(ProbeError::RawMode)?;
        Ok(Self { raw: true })
    }

    /// Temporarily restore cooked mode for reporting.
    pub fn suspend(&mut self) -> Result<(), ProbeError> {
        if self.raw {
            terminal::disable_raw_mode().map_err(ProbeError::RawMode)?;
            self.raw = false;
        }
        Ok(())
    }

    /// Re-enter raw mode after reporting.
    pub fn resume(&mut self) -> Result<(), ProbeError> {
        if !self.raw {
            terminal::enable_raw_mode().map_err(ProbeError::RawMode)?;
            self.raw = true;
        }
        Ok(())
    }

    /// Restore cooked mode and surface any restoration error.
    ///
    /// `Drop` also restores but swallows errors; the happy path calls this
    /// so a failed restoration is reported instead of silently ignored.
    pub fn release(mut self) -> Result<(), ProbeError> {
        if self.raw {
            self.raw = false;
            terminal::disable_raw_mode().map_err(ProbeError::RawMode)?;
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
