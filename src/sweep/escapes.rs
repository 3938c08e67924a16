//! Comprehensive escape-sequence sweep.
//!
//! Organized as independently renderable sections so the command layer can
//! pause between them. Render functions only write bytes; anything
//! interactive stays in the command.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::{styled_probe, RESET};

/// A titled, independently renderable portion of the sweep.
pub struct Section {
    pub title: &'static str,
    pub render: fn(&mut dyn Write) -> io::Result<()>,
}

/// All sections, in display order.
pub fn sections() -> Vec<Section> {
    vec![
        Section {
            title: "BASIC FOREGROUND COLORS (30-37)",
            render: basic_foreground,
        },
        Section {
            title: "BASIC BACKGROUND COLORS (40-47)",
            render: basic_background,
        },
        Section {
            title: "BRIGHT FOREGROUND COLORS (90-97)",
            render: bright_foreground,
        },
        Section {
            title: "BRIGHT BACKGROUND COLORS (100-107)",
            render: bright_background,
        },
        Section {
            title: "256-COLOR FOREGROUND (38;5;N)",
            render: indexed_foreground,
        },
        Section {
            title: "256-COLOR BACKGROUND (48;5;N)",
            render: indexed_background,
        },
        Section {
            title: "RGB FOREGROUND (38;2;R;G;B)",
            render: rgb_foreground,
        },
        Section {
            title: "RGB BACKGROUND (48;2;R;G;B)",
            render: rgb_background,
        },
        Section {
            title: "TEXT ATTRIBUTES",
            render: text_attributes,
        },
        Section {
            title: "COMBINED ATTRIBUTES",
            render: combined_attributes,
        },
        Section {
            title: "COMPLEX COMBINATIONS",
            render: complex_combinations,
        },
        Section {
            title: "CURSOR MOVEMENT (watch for glitches)",
            render: cursor_movement,
        },
        Section {
            title: "ERASE SEQUENCES",
            render: erase_sequences,
        },
        Section {
            title: "OSC SEQUENCES (may not be visible)",
            render: osc_sequences,
        },
        Section {
            title: "LINE DRAWING CHARACTERS",
            render: line_drawing,
        },
        Section {
            title: "RAPID OUTPUT TEST",
            render: rapid_output,
        },
        Section {
            title: "UNICODE CHARACTERS",
            render: unicode_samples,
        },
        Section {
            title: "WIDE CHARACTERS (CJK)",
            render: wide_characters,
        },
        Section {
            title: "STRESS TEST - MANY STYLE CHANGES",
            render: stress_grid,
        },
        Section {
            title: "SGR EDGE CASES",
            render: sgr_edge_cases,
        },
        Section {
            title: "CSI EDGE CASES",
            render: csi_edge_cases,
        },
        Section {
            title: "TEST COMPLETE",
            render: summary,
        },
    ]
}

fn basic_foreground(w: &mut dyn Write) -> io::Result<()> {
    for code in 30..38 {
        styled_probe(w, &format!("Color {}", code), &format!("\x1b[{}m", code))?;
    }
    Ok(())
}

fn basic_background(w: &mut dyn Write) -> io::Result<()> {
    for code in 40..48 {
        styled_probe(w, &format!("Color {}", code), &format!("\x1b[{}m", code))?;
    }
    Ok(())
}

fn bright_foreground(w: &mut dyn Write) -> io::Result<()> {
    for code in 90..98 {
        styled_probe(w, &format!("Color {}", code), &format!("\x1b[{}m", code))?;
    }
    Ok(())
}

fn bright_background(w: &mut dyn Write) -> io::Result<()> {
    for code in 100..108 {
        styled_probe(w, &format!("Color {}", code), &format!("\x1b[{}m", code))?;
    }
    Ok(())
}

fn indexed_foreground(w: &mut dyn Write) -> io::Result<()> {
    for idx in 0..16 {
        styled_probe(w, &format!("FG 38;5;{}", idx), &format!("\x1b[38;5;{}m", idx))?;
    }
    writeln!(w)?;
    // Cube corners, greys, and a few saturated picks from the 6x6x6 cube
    for idx in [16, 21, 51, 87, 196, 208, 226, 231, 232, 255] {
        styled_probe(w, &format!("FG 38;5;{}", idx), &format!("\x1b[38;5;{}m", idx))?;
    }
    Ok(())
}

fn indexed_background(w: &mut dyn Write) -> io::Result<()> {
    for idx in [0, 1, 2, 3, 4, 5, 6, 7, 14, 21, 196, 226] {
        styled_probe(w, &format!("BG 48;5;{}", idx), &format!("\x1b[48;5;{}m", idx))?;
    }
    Ok(())
}

fn rgb_foreground(w: &mut dyn Write) -> io::Result<()> {
    let samples = [
        ("Red", (255, 0, 0)),
        ("Green", (0, 255, 0)),
        ("Blue", (0, 0, 255)),
        ("Yellow", (255, 255, 0)),
        ("Cyan", (0, 255, 255)),
        ("Magenta", (255, 0, 255)),
        ("White", (255, 255, 255)),
        ("Gray", (128, 128, 128)),
    ];
    for (name, (r, g, b)) in samples {
        styled_probe(w, name, &format!("\x1b[38;2;{};{};{}m", r, g, b))?;
    }
    Ok(())
}

fn rgb_background(w: &mut dyn Write) -> io::Result<()> {
    let samples = [
        ("Red BG", (255, 0, 0)),
        ("Green BG", (0, 255, 0)),
        ("Blue BG", (0, 0, 255)),
    ];
    for (name, (r, g, b)) in samples {
        styled_probe(w, name, &format!("\x1b[48;2;{};{};{}m", r, g, b))?;
    }
    Ok(())
}

fn text_attributes(w: &mut dyn Write) -> io::Result<()> {
    let attrs = [
        ("Bold", 1),
        ("Dim/Faint", 2),
        ("Italic", 3),
        ("Underline", 4),
        ("Blink", 5),
        ("Inverse", 7),
        ("Hidden", 8),
        ("Strikethrough", 9),
    ];
    for (name, code) in attrs {
        styled_probe(w, name, &format!("\x1b[{}m", code))?;
    }
    Ok(())
}

fn combined_attributes(w: &mut dyn Write) -> io::Result<()> {
    styled_probe(w, "Bold+Red", "\x1b[1;31m")?;
    styled_probe(w, "Bold+Italic+Blue", "\x1b[1;3;34m")?;
    styled_probe(w, "Underline+Green", "\x1b[4;32m")?;
    styled_probe(w, "Bold+Underline+Yellow", "\x1b[1;4;33m")?;
    styled_probe(w, "Inverse+Cyan", "\x1b[7;36m")
}

fn complex_combinations(w: &mut dyn Write) -> io::Result<()> {
    styled_probe(w, "Bold+FG256+BG256", "\x1b[1;38;5;196;48;5;21m")?;
    styled_probe(w, "Italic+RGB FG", "\x1b[3;38;2;255;128;0m")?;
    styled_probe(w, "Underline+RGB BG", "\x1b[4;48;2;0;64;128m")
}

fn cursor_movement(w: &mut dyn Write) -> io::Result<()> {
    write!(w, "  Testing cursor save/restore...")?;
    write!(w, "\x1b[s")?; // Save cursor
    write!(w, "\x1b[5;10H")?; // Move to row 5, col 10
    write!(w, "X")?;
    write!(w, "\x1b[u")?; // Restore cursor
    writeln!(w, " done")
}

fn erase_sequences(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "  Line with text: AAAA\x1b[KBBBB (K erases to end)")?;
    writeln!(w, "  Line with text: CCCC\x1b[1KDDDD (1K erases to start)")?;
    writeln!(w, "  Line with text: EEEE\x1b[2KFFFF (2K erases whole line)")
}

fn osc_sequences(w: &mut dyn Write) -> io::Result<()> {
    write!(w, "  Setting window title...")?;
    write!(w, "\x1b]0;TERMPROBE TEST\x07")?;
    writeln!(w, " done (check title bar)")?;

    write!(w, "  Setting icon name...")?;
    write!(w, "\x1b]1;TERMPROBE-ICON\x07")?;
    writeln!(w, " done")
}

fn line_drawing(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "  \x1b(0lqqqqqqqqqqqqqqqqqqqk\x1b(B")?;
    writeln!(w, "  \x1b(0x                   x\x1b(B")?;
    writeln!(w, "  \x1b(0x   Box Drawing     x\x1b(B")?;
    writeln!(w, "  \x1b(0x                   x\x1b(B")?;
    writeln!(w, "  \x1b(0mqqqqqqqqqqqqqqqqqqqj\x1b(B")
}

fn rapid_output(w: &mut dyn Write) -> io::Result<()> {
    write!(w, "  Rapid color switching: ")?;
    for i in 0..20 {
        write!(w, "\x1b[3{}m\u{2588}{}", i % 8, RESET)?;
    }
    writeln!(w)?;

    write!(w, "  Rapid text: ")?;
    for c in 'A'..='Z' {
        write!(w, "\x1b[1;3{}m{}{}", (c as u32) % 8, c, RESET)?;
    }
    writeln!(w)
}

fn unicode_samples(w: &mut dyn Write) -> io::Result<()> {
    let samples = [
        ("Basic Latin", "ABCDEFGabcdefg"),
        ("Accented", "àéîõü ñ ç"),
        ("Symbols", "© ® ™ € £ ¥"),
        ("Arrows", "← → ↑ ↓ ↔ ↕"),
        ("Box drawing", "┌─┐│└┘├┤┬┴┼"),
        ("Blocks", "░▒▓█▀▄▌▐"),
        ("Math", "∑ ∏ √ ∞ ≠ ≤ ≥"),
        ("Greek", "αβγδεζηθ"),
        ("Emoji", "😀 🎉 🚀 ⭐"),
    ];
    for (label, sample) in samples {
        writeln!(w, "  {}: {} (width {})", label, sample, sample.width())?;
    }
    writeln!(w, "  (cursor should land right after each sample)")
}

fn wide_characters(w: &mut dyn Write) -> io::Result<()> {
    let samples = [
        ("Chinese", "你好世界"),
        ("Japanese", "こんにちは"),
        ("Korean", "안녕하세요"),
    ];
    for (label, sample) in samples {
        writeln!(
            w,
            "  {}: {} (width {}, each cell double)",
            label,
            sample,
            sample.width()
        )?;
    }
    Ok(())
}

fn stress_grid(w: &mut dyn Write) -> io::Result<()> {
    for row in 0..5 {
        write!(w, "  ")?;
        for col in 0..40 {
            let fg = 31 + (row + col) % 7;
            let attr = if (row + col) % 3 == 0 { 1 } else { 0 };
            write!(w, "\x1b[{};{}m#{}", attr, fg, RESET)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

fn sgr_edge_cases(w: &mut dyn Write) -> io::Result<()> {
    styled_probe(w, "Empty SGR", "\x1b[m")?;
    styled_probe(w, "Just 0", "\x1b[0m")?;
    styled_probe(w, "Multiple resets", "\x1b[0;0;0m")?;
    styled_probe(w, "Unknown attr 99", "\x1b[99m")?;
    styled_probe(w, "Very long", "\x1b[1;2;3;4;5;7;31;42m")
}

fn csi_edge_cases(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "  CSI with no params: \x1b[H(moved to home?)")?;
    writeln!(w, "  CSI 6n (DSR): \x1b[6n (may see a response)")?;
    writeln!(w, "  Hide cursor then show: \x1b[?25l\x1b[?25h done")
}

fn summary(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "  If you saw garbled text or escape codes appearing as")?;
    writeln!(w, "  literal characters like '38;5;14m', note which section")?;
    writeln!(w, "  had the problem.")?;
    writeln!(w)?;
    writeln!(w, "\x1b[1;32m  All tests finished!{}", RESET)
}
