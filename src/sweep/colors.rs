//! Basic color and attribute sweep - no cursor movement.

use std::io::{self, Write};

use super::{banner, RESET};

/// Write the basic color sweep.
pub fn write<W: Write>(w: &mut W) -> io::Result<()> {
    banner(w, "BASIC COLORS TEST")?;

    writeln!(w, "\n--- Basic Foreground (30-37) ---")?;
    for code in 30..38 {
        write!(w, "\x1b[{}m Color {} {} ", code, code, RESET)?;
    }
    writeln!(w)?;

    writeln!(w, "\n--- Basic Background (40-47) ---")?;
    for code in 40..48 {
        write!(w, "\x1b[{}m Color {} {} ", code, code, RESET)?;
    }
    writeln!(w)?;

    writeln!(w, "\n--- 256 Foreground (38;5;N) ---")?;
    for idx in 0..16 {
        write!(w, "\x1b[38;5;{}m#{:02}{} ", idx, idx, RESET)?;
    }
    writeln!(w)?;

    writeln!(w, "\n--- 256 Background (48;5;N) ---")?;
    for idx in 0..16 {
        write!(w, "\x1b[48;5;{}m {:02} {} ", idx, idx, RESET)?;
    }
    writeln!(w)?;

    writeln!(w, "\n--- RGB Foreground (38;2;R;G;B) ---")?;
    write!(w, "\x1b[38;2;255;0;0mRED{} ", RESET)?;
    write!(w, "\x1b[38;2;0;255;0mGREEN{} ", RESET)?;
    writeln!(w, "\x1b[38;2;0;0;255mBLUE{}", RESET)?;

    writeln!(w, "\n--- RGB Background (48;2;R;G;B) ---")?;
    write!(w, "\x1b[48;2;255;0;0m RED {} ", RESET)?;
    write!(w, "\x1b[48;2;0;255;0m GRN {} ", RESET)?;
    writeln!(w, "\x1b[48;2;0;0;255m BLU {}", RESET)?;

    writeln!(w, "\n--- Text Attributes ---")?;
    write!(w, "\x1b[1mBold{} ", RESET)?;
    write!(w, "\x1b[3mItalic{} ", RESET)?;
    write!(w, "\x1b[4mUnderline{} ", RESET)?;
    write!(w, "\x1b[7mInverse{} ", RESET)?;
    writeln!(w, "\x1b[9mStrike{}", RESET)?;

    writeln!(w, "\n--- Combined ---")?;
    write!(w, "\x1b[1;31mBold Red{} ", RESET)?;
    write!(w, "\x1b[1;38;5;208mBold Orange 256{} ", RESET)?;
    writeln!(w, "\x1b[1;38;2;255;0;255mBold Magenta RGB{}", RESET)?;

    writeln!(w)?;
    banner(w, "TEST DONE - Check above for garbled text")
}
