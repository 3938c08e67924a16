//! Raw keyboard input probe.
//!
//! Switches the terminal to raw mode, groups incoming bytes into sequences
//! separated by idle gaps, and reports each sequence in hex, literal, and
//! visual form. The original terminal mode is restored on every exit path,
//! including errors and signals.

mod error;
mod guard;
mod sequence;
mod tty;

pub use error::ProbeError;
pub use guard::RawModeGuard;
pub use sequence::{Sequence, INTERRUPT_BYTE};

use std::io::{self, Write};
use std::time::Duration;

use tracing::trace;

use crate::utils::InterruptFlag;

/// Default idle gap that ends a captured sequence.
///
/// Multi-byte escape sequences arrive as one burst, so a short window keeps
/// them together while still separating distinct keystrokes. Slow links may
/// need a wider gap; the value is tunable via `--idle-timeout-ms` and the
/// config file.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(10);

/// How often the listen loop wakes to check the signal flag while waiting
/// for the first byte of a sequence.
const WAKE_INTERVAL: Duration = Duration::from_millis(100);

/// Options for a probe run.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Idle gap that separates two reported sequences.
    pub idle_timeout: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

/// How a probe run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The interrupt byte (or end of input) ended the loop normally.
    Finished { sequences: usize },
    /// A signal (SIGINT/SIGHUP/SIGTERM) ended the loop.
    SignalInterrupted,
}

impl ProbeOutcome {
    /// Get a human-readable completion message for this outcome.
    pub fn message(&self) -> String {
        match self {
            ProbeOutcome::Finished { sequences: 0 } => "Done.".to_string(),
            ProbeOutcome::Finished { sequences: 1 } => "Done. Captured 1 sequence.".to_string(),
            ProbeOutcome::Finished { sequences } => {
                format!("Done. Captured {} sequences.", sequences)
            }
            ProbeOutcome::SignalInterrupted => "Interrupted. Terminal restored.".to_string(),
        }
    }
}

/// Byte-level input for the capture loop.
///
/// The real source reads the stdin file descriptor; tests script byte
/// arrivals with explicit gaps to exercise the idle-timeout boundary.
trait ByteSource {
    /// Wait up to `timeout` for the next byte to become readable.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    /// Read the next byte. `None` means end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

struct StdinSource;

impl ByteSource for StdinSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        tty::poll_stdin(timeout)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        tty::read_stdin_byte()
    }
}

/// Accumulate one sequence starting from its first byte.
///
/// Bytes keep getting appended as long as the next one becomes readable
/// within the idle timeout; the sequence ends on the first idle gap or on
/// end of input.
fn collect_sequence<S: ByteSource>(
    source: &mut S,
    first: u8,
    idle_timeout: Duration,
) -> io::Result<Sequence> {
    let mut sequence = Sequence::new(first);
    while source.poll(idle_timeout)? {
        match source.read_byte()? {
            Some(byte) => sequence.push(byte),
            None => break,
        }
    }
    Ok(sequence)
}

/// Run the probe until the interrupt byte, end of input, or a signal.
///
/// Fails fast when stdin is not an interactive terminal. While active the
/// loop alternates between raw mode (listening) and cooked mode (reporting);
/// the raw-mode guard restores the original mode on every exit path.
#[cfg(not(tarpaulin_include))]
pub fn run(options: &ProbeOptions) -> Result<ProbeOutcome, ProbeError> {
    if !atty::is(atty::Stream::Stdin) {
        return Err(ProbeError::NotATerminal);
    }

    let interrupt = InterruptFlag::new();
    interrupt.register();

    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "Press keys to see the bytes your terminal sends. Ctrl+C to exit."
    )
    .map_err(ProbeError::Report)?;
    writeln!(stdout, "{}", "-".repeat(50)).map_err(ProbeError::Report)?;

    let mut guard = RawModeGuard::acquire()?;
    let mut source = StdinSource;
    let mut reported = 0usize;

    let outcome = 'listen: loop {
        // Wait (in bounded slices, so signals stay observable) for the first
        // byte of the next sequence.
        let first = 'wait: loop {
            if interrupt.is_set() {
                break 'listen ProbeOutcome::SignalInterrupted;
            }
            if source.poll(WAKE_INTERVAL).map_err(ProbeError::Read)? {
                match source.read_byte().map_err(ProbeError::Read)? {
                    Some(byte) => break 'wait byte,
                    None => {
                        break 'listen ProbeOutcome::Finished {
                            sequences: reported,
                        }
                    }
                }
            }
        };

        let sequence =
            collect_sequence(&mut source, first, options.idle_timeout).map_err(ProbeError::Read)?;

        trace!(len = sequence.len(), hex = %sequence.hex(), "captured sequence");

        if sequence.is_interrupt() {
            break 'listen ProbeOutcome::Finished {
                sequences: reported,
            };
        }

        // Report in cooked mode, then go back to listening.
        guard.suspend()?;
        sequence
            .write_report(&mut stdout)
            .map_err(ProbeError::Report)?;
        stdout.flush().map_err(ProbeError::Report)?;
        guard.resume()?;
        reported += 1;
    };

    guard.release()?;
    Ok(outcome)
}
