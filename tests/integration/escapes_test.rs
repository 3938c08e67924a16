//! Output checks for the comprehensive escape-sequence sweep

use tempfile::TempDir;

use crate::helpers::run_termprobe_with_home;

fn run_escapes(args: &[&str]) -> (String, String, i32) {
    let home = TempDir::new().unwrap();
    run_termprobe_with_home(args, home.path())
}

#[test]
fn escapes_exits_cleanly_without_a_terminal() {
    let (_stdout, stderr, exit_code) = run_escapes(&["escapes"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
}

#[test]
fn escapes_renders_every_section_heading() {
    let (stdout, _stderr, _exit_code) = run_escapes(&["escapes"]);
    for title in [
        "BASIC FOREGROUND COLORS (30-37)",
        "BRIGHT BACKGROUND COLORS (100-107)",
        "256-COLOR FOREGROUND (38;5;N)",
        "RGB FOREGROUND (38;2;R;G;B)",
        "CURSOR MOVEMENT",
        "ERASE SEQUENCES",
        "OSC SEQUENCES",
        "LINE DRAWING CHARACTERS",
        "UNICODE CHARACTERS",
        "WIDE CHARACTERS (CJK)",
        "SGR EDGE CASES",
        "CSI EDGE CASES",
        "TEST COMPLETE",
    ] {
        assert!(stdout.contains(title), "missing section: {}", title);
    }
}

#[test]
fn escapes_emits_osc_and_charset_sequences() {
    let (stdout, _stderr, _exit_code) = run_escapes(&["escapes"]);
    assert!(stdout.contains("\x1b]0;TERMPROBE TEST\x07"));
    assert!(stdout.contains("\x1b]1;TERMPROBE-ICON\x07"));
    assert!(stdout.contains("\x1b(0"));
    assert!(stdout.contains("\x1b(B"));
}

#[test]
fn escapes_leaves_the_cursor_visible() {
    let (stdout, _stderr, _exit_code) = run_escapes(&["escapes"]);
    let hides = stdout.matches("\x1b[?25l").count();
    let shows = stdout.matches("\x1b[?25h").count();
    assert_eq!(hides, shows);
}

#[test]
fn escapes_finishes_with_the_summary() {
    let (stdout, _stderr, _exit_code) = run_escapes(&["escapes"]);
    assert!(stdout.contains("All tests finished!"));
}

#[test]
fn escapes_with_pause_completes_on_end_of_input() {
    // Stdin is closed, so every pause prompt reads EOF and moves on.
    let (stdout, stderr, exit_code) = run_escapes(&["escapes", "--pause"]);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("[Press Enter for next section]"));
    assert!(stdout.contains("All tests finished!"));
}

#[test]
fn escapes_pause_can_come_from_the_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("termprobe");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[sweep]\npause = true\n").unwrap();

    let (stdout, _stderr, exit_code) = run_termprobe_with_home(&["escapes"], home.path());
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[Press Enter for next section]"));
}
