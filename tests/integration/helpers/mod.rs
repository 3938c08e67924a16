//! Shared helpers for integration tests

use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the termprobe binary and capture (stdout, stderr, exit code).
///
/// Stdin is closed, so commands that require an interactive terminal see a
/// non-tty stream and commands that wait for Enter see end of input.
pub fn run_termprobe(args: &[&str]) -> (String, String, i32) {
    let output = termprobe_command(args)
        .output()
        .expect("Failed to execute termprobe");
    split_output(output)
}

/// Run the termprobe binary with HOME pointed at a test directory.
///
/// Keeps config reads and writes inside the test's temp directory instead of
/// the real ~/.config/termprobe.
pub fn run_termprobe_with_home(args: &[&str], home: &Path) -> (String, String, i32) {
    let output = termprobe_command(args)
        .env("HOME", home)
        .output()
        .expect("Failed to execute termprobe");
    split_output(output)
}

fn termprobe_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_termprobe"));
    cmd.args(args)
        .env("NO_COLOR", "1") // Disable colors for consistent output
        .stdin(Stdio::null());
    cmd
}

fn split_output(output: Output) -> (String, String, i32) {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}
