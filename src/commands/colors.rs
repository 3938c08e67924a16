//! Colors command handler

use anyhow::Result;
use std::io::{self, Write};

use termprobe::sweep;

/// Print the basic color and attribute sweep.
pub fn handle() -> Result<()> {
    let mut stdout = io::stdout();
    sweep::terminal_info(&mut stdout)?;
    writeln!(stdout)?;
    sweep::colors::write(&mut stdout)?;
    Ok(())
}
