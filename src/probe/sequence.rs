//! Captured input sequences and their diagnostic renderings.

use std::io::{self, Write};

/// The byte that ends the probe loop (Ctrl+C in raw mode).
pub const INTERRUPT_BYTE: u8 = 0x03;

/// Separator printed after each report.
const REPORT_SEPARATOR_WIDTH: usize = 30;

/// An ordered run of raw input bytes collected between two idle gaps.
///
/// A sequence starts with the first byte read after the previous one was
/// flushed and ends when the idle timeout elapses with no new byte, which
/// keeps multi-byte escape sequences (arrow keys, function keys) together
/// in one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    bytes: Vec<u8>,
}

impl Sequence {
    /// Start a new sequence with its first byte.
    pub fn new(first: u8) -> Self {
        Self { bytes: vec![first] }
    }

    /// Append a byte that arrived within the idle window.
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether this sequence is exactly the single interrupt byte.
    pub fn is_interrupt(&self) -> bool {
        self.bytes == [INTERRUPT_BYTE]
    }

    /// Space-separated two-digit hex groups, one per byte.
    pub fn hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Literal text form: printable ASCII as-is, ESC as the token `ESC`,
    /// other control and non-ASCII bytes escaped as `\xNN`.
    pub fn literal(&self) -> String {
        let mut out = String::new();
        for &byte in &self.bytes {
            match byte {
                0x1b => out.push_str("ESC"),
                b'\t' => out.push_str("\\t"),
                b'\r' => out.push_str("\\r"),
                b'\n' => out.push_str("\\n"),
                0x20..=0x7e => out.push(byte as char),
                _ => out.push_str(&format!("\\x{:02x}", byte)),
            }
        }
        out
    }

    /// Visual form: control characters replaced by Unicode control pictures
    /// (ESC becomes `\u{241b}`), everything else rendered as text.
    ///
    /// The bytes are decoded as UTF-8 first so multi-byte characters typed
    /// with a compose key or IME stay readable.
    pub fn visual(&self) -> String {
        String::from_utf8_lossy(&self.bytes)
            .chars()
            .map(visual_char)
            .collect()
    }

    /// Write the three-line diagnostic report plus separator.
    pub fn write_report<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "Bytes:  {}", self.hex())?;
        writeln!(w, "Text:   {}", self.literal())?;
        writeln!(w, "Visual: {}", self.visual())?;
        writeln!(w, "{}", "-".repeat(REPORT_SEPARATOR_WIDTH))
    }
}

/// Map a control character to its Unicode control picture.
fn visual_char(c: char) -> char {
    match c {
        '\x00'..='\x1f' => char::from_u32(0x2400 + c as u32).unwrap_or(c),
        '\x7f' => '\u{2421}',
        c => c,
    }
}
