//! Failure-path tests for the raw input probe
//!
//! The happy path needs a real pty, so these tests pin down the non-tty
//! contract: fail fast, exit nonzero, never print the raw-mode preamble.

use tempfile::TempDir;

use crate::helpers::run_termprobe_with_home;

#[test]
fn keys_fails_fast_without_a_terminal() {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) = run_termprobe_with_home(&["keys"], home.path());

    assert_ne!(exit_code, 0);
    assert!(
        stderr.contains("not an interactive terminal"),
        "stderr: {}",
        stderr
    );
    // The probe must not have reached the listening loop
    assert!(!stdout.contains("Press keys"));
}

#[test]
fn keys_with_idle_timeout_flag_still_fails_cleanly() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_termprobe_with_home(&["keys", "--idle-timeout-ms", "50"], home.path());

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("not an interactive terminal"));
}
