//! Minimal rendering check without cursor movement.

use std::io::{self, Write};

use super::{banner, RESET};

/// Number of plain lines printed for the scrollback check.
const SCROLLBACK_LINES: usize = 20;

/// Write the minimal sweep.
pub fn write<W: Write>(w: &mut W) -> io::Result<()> {
    banner(w, "SIMPLE COLORS TEST - NO CURSOR MOVEMENT")?;

    writeln!(w, "\n--- Foreground Colors ---")?;
    for idx in 0..8 {
        write!(w, "\x1b[3{}m Color {} {}", idx, idx, RESET)?;
    }
    writeln!(w)?;

    writeln!(w, "\n--- 256 Colors ---")?;
    for idx in 0..16 {
        write!(w, "\x1b[38;5;{}m#{:02}{} ", idx, idx, RESET)?;
    }
    writeln!(w)?;

    writeln!(w, "\n--- RGB Colors ---")?;
    write!(w, "\x1b[38;2;255;0;0mRED{} ", RESET)?;
    write!(w, "\x1b[38;2;0;255;0mGREEN{} ", RESET)?;
    writeln!(w, "\x1b[38;2;0;0;255mBLUE{}", RESET)?;

    writeln!(w, "\n--- Styles ---")?;
    write!(w, "\x1b[1mBold{} ", RESET)?;
    write!(w, "\x1b[3mItalic{} ", RESET)?;
    writeln!(w, "\x1b[4mUnderline{}", RESET)?;

    writeln!(w, "\n--- Multi-line ---")?;
    for line in 1..=SCROLLBACK_LINES {
        writeln!(
            w,
            "Line {}: The quick brown fox jumps over the lazy dog",
            line
        )?;
    }

    writeln!(w)?;
    banner(w, "TEST COMPLETE - scroll up to see earlier output")
}
