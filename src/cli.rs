//! CLI definitions for termprobe
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Version string shown by `--version`.
///
/// Dev builds carry the short git SHA emitted by build.rs; builds with the
/// `release` feature use the clean crate version.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("VERGEN_GIT_SHA"));
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles using our theme colors.
///
/// Maps theme colors to clap's styling system for consistent CLI appearance.
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default()) // Light gray for descriptions
        .valid(AnsiColor::White.on_default()) // Light gray for valid values
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "termprobe")]
#[command(about = "[ Terminal Probe ] - see exactly what your terminal sends and how it renders!")]
#[command(
    long_about = "Terminal Probe (termprobe) - Diagnostic tool for terminal emulators.

termprobe prints raw ANSI control sequences (SGR colors, cursor movement,
OSC title-setting, line-drawing charsets) so you can check how a terminal
or multiplexer renders them, and captures the raw byte sequences your
keyboard sends so you can see them byte by byte.

QUICK START:
    termprobe keys                 Show the bytes each keypress sends
    termprobe colors               Basic color and attribute sweep
    termprobe escapes              Full escape-sequence sweep
    termprobe escapes --pause      Same, pausing between sections
    termprobe simple               Minimal sweep without cursor movement

For more information, see: https://github.com/thiscantbeserious/termprobe"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the raw byte sequences your keyboard sends
    #[command(long_about = "Capture raw keyboard input and report it byte by byte.

The terminal is switched to raw mode, and bytes arriving within a short
idle window are grouped into one sequence, so multi-byte escape sequences
(arrow keys, function keys) are reported as a single unit. Each sequence
is printed three ways: hex bytes, a literal form with control bytes
escaped, and a visual form using Unicode control pictures.

Press Ctrl+C to exit; the terminal mode is always restored, even if the
probe is killed by a signal.

EXAMPLES:
    termprobe keys                       Report keypresses until Ctrl+C
    termprobe keys --idle-timeout-ms 50  Wider gap for slow links

OUTPUT (after pressing the up-arrow key):
    Bytes:  1b 5b 41
    Text:   ESC[A
    Visual: \u{241b}[A")]
    Keys {
        /// Idle gap (ms) that separates two reported sequences
        #[arg(long, help = "Idle gap in milliseconds that ends a sequence (default: 10)")]
        idle_timeout_ms: Option<u64>,
    },

    /// Basic color and attribute sweep
    #[command(long_about = "Print the basic color and attribute sweep.

Covers the 8 basic foreground and background colors, the first 16 indexed
colors (38;5;N / 48;5;N), RGB truecolor (38;2;R;G;B), and the common text
attributes. No cursor movement is used, so the output is safe to pipe or
scroll back through.

EXAMPLE:
    termprobe colors")]
    Colors,

    /// Minimal sweep without cursor movement
    #[command(long_about = "Print a minimal rendering check without cursor movement.

A reduced version of the colors sweep followed by 20 plain numbered lines,
useful for checking scrollback behavior in multiplexers.

EXAMPLE:
    termprobe simple")]
    Simple,

    /// Comprehensive escape-sequence sweep
    #[command(long_about = "Run the comprehensive escape-sequence sweep, section by section.

Covers basic/bright/indexed/RGB colors, text attributes, combined and
edge-case SGR parameters, cursor save/restore, erase sequences, OSC
title-setting, the DEC line-drawing charset, rapid style switching,
Unicode and wide (CJK) characters, and CSI edge cases.

If you see garbled text or literal fragments like '38;5;14m' in the
output, note which section they appeared in.

EXAMPLES:
    termprobe escapes            Run all sections back to back
    termprobe escapes --pause    Wait for Enter between sections")]
    Escapes {
        /// Pause for Enter between sections
        #[arg(long, help = "Wait for Enter between sections")]
        pause: bool,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the termprobe configuration file.

Configuration is stored in ~/.config/termprobe/config.toml and covers the
probe's idle timeout and the sweep pause behavior.

EXAMPLES:
    termprobe config show        Display current configuration
    termprobe config edit        Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Generate shell completions (internal use)
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Option<CompletionShell>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the current configuration in TOML format.

Shows all settings, including defaults for keys that are not present in
the config file.

EXAMPLE:
    termprobe config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/termprobe/config.toml

EXAMPLE:
    termprobe config edit
    EDITOR=nano termprobe config edit")]
    Edit,
}
