//! Escapes command handler - the comprehensive sweep.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use termprobe::sweep::{self, escapes};
use termprobe::Config;

/// Run the comprehensive sweep, optionally pausing between sections.
///
/// Pausing resolves flag OR config; the sections themselves are pure
/// rendering, so only this handler ever touches stdin.
#[cfg(not(tarpaulin_include))]
pub fn handle(pause: bool) -> Result<()> {
    let config = Config::load()?;
    let pause = pause || config.sweep.pause;

    let mut stdout = io::stdout();
    sweep::terminal_info(&mut stdout)?;

    let sections = escapes::sections();
    let last = sections.len().saturating_sub(1);
    for (i, section) in sections.iter().enumerate() {
        sweep::section_heading(&mut stdout, section.title)?;
        (section.render)(&mut stdout)?;
        stdout.flush()?;

        if pause && i < last {
            print!("\n  [Press Enter for next section]");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
        }
    }

    Ok(())
}
