//! Output checks for the minimal sweep

use crate::helpers::run_termprobe;

#[test]
fn simple_exits_cleanly_without_a_terminal() {
    let (_stdout, stderr, exit_code) = run_termprobe(&["simple"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
}

#[test]
fn simple_prints_the_scrollback_block() {
    let (stdout, _stderr, _exit_code) = run_termprobe(&["simple"]);
    assert!(stdout.contains("Line 1:"));
    assert!(stdout.contains("Line 20:"));
    assert!(!stdout.contains("Line 21:"));
}

#[test]
fn simple_covers_indexed_and_rgb_colors() {
    let (stdout, _stderr, _exit_code) = run_termprobe(&["simple"]);
    assert!(stdout.contains("\x1b[38;5;0m"));
    assert!(stdout.contains("\x1b[38;2;0;255;0mGREEN"));
}

#[test]
fn simple_never_moves_the_cursor() {
    let (stdout, _stderr, _exit_code) = run_termprobe(&["simple"]);
    // Every escape in this sweep must be an SGR sequence (final byte 'm')
    for chunk in stdout.split('\x1b').skip(1) {
        let terminator = chunk.chars().find(|c| c.is_ascii_alphabetic());
        assert_eq!(terminator, Some('m'), "non-SGR escape: {:?}", chunk);
    }
}
