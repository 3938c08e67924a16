//! Simple command handler

use anyhow::Result;
use std::io;

use termprobe::sweep;

/// Print the minimal sweep without cursor movement.
pub fn handle() -> Result<()> {
    let mut stdout = io::stdout();
    sweep::simple::write(&mut stdout)?;
    Ok(())
}
