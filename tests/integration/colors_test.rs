//! Output checks for the basic color sweep

use crate::helpers::run_termprobe;

#[test]
fn colors_exits_cleanly_without_a_terminal() {
    let (_stdout, stderr, exit_code) = run_termprobe(&["colors"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
}

#[test]
fn colors_emits_every_basic_foreground_and_background_code() {
    let (stdout, _stderr, _exit_code) = run_termprobe(&["colors"]);
    for code in (30..38).chain(40..48) {
        assert!(
            stdout.contains(&format!("\x1b[{}m", code)),
            "missing SGR code {}",
            code
        );
    }
}

#[test]
fn colors_emits_indexed_and_truecolor_sequences() {
    let (stdout, _stderr, _exit_code) = run_termprobe(&["colors"]);
    assert!(stdout.contains("\x1b[38;5;0m"));
    assert!(stdout.contains("\x1b[48;5;15m"));
    assert!(stdout.contains("\x1b[38;2;255;0;0m"));
    assert!(stdout.contains("\x1b[48;2;0;0;255m"));
}

#[test]
fn colors_output_is_framed_by_banners() {
    let (stdout, _stderr, _exit_code) = run_termprobe(&["colors"]);
    assert!(stdout.contains("BASIC COLORS TEST"));
    assert!(stdout.contains("TEST DONE"));
}
