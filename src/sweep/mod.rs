//! Diagnostic sweeps that print literal control sequences.
//!
//! Each sweep writes raw SGR/CSI/OSC bytes to its output so the terminal
//! under test renders them directly. Nothing here parses or interprets
//! escape sequences; rendering functions are pure over any `Write` so the
//! command layer owns stdout and the pause behavior.

pub mod colors;
pub mod escapes;
pub mod simple;

use std::io::{self, Write};

/// SGR reset, appended after every styled probe cell.
pub const RESET: &str = "\x1b[0m";

const BANNER_WIDTH: usize = 50;
const SECTION_WIDTH: usize = 60;

/// Write a full-width banner around a title.
pub fn banner<W: Write + ?Sized>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(w, "{}", title)?;
    writeln!(w, "{}", "=".repeat(BANNER_WIDTH))
}

/// Write a section heading in the escapes-sweep style.
pub fn section_heading<W: Write + ?Sized>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "=".repeat(SECTION_WIDTH))?;
    writeln!(w, "  {}", title)?;
    writeln!(w, "{}", "=".repeat(SECTION_WIDTH))?;
    writeln!(w)
}

/// One labelled probe line: the sequence, the word TEST, then a reset.
pub fn styled_probe<W: Write + ?Sized>(w: &mut W, name: &str, sequence: &str) -> io::Result<()> {
    writeln!(
        w,
        "  {}: {}TEST{}  (should reset after)",
        name, sequence, RESET
    )
}

/// Report terminal geometry and TERM when they can be determined.
///
/// Size mismatches are a common source of the rendering bugs these sweeps
/// exist to expose, so the sweep output records what it ran against.
pub fn terminal_info<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    if let Some((terminal_size::Width(cols), terminal_size::Height(rows))) =
        terminal_size::terminal_size()
    {
        writeln!(w, "Terminal: {}x{}", cols, rows)?;
    }
    if let Ok(term) = std::env::var("TERM") {
        writeln!(w, "TERM: {}", term)?;
    }
    Ok(())
}
