//! CLI surface tests driven through the real binary

use crate::helpers::run_termprobe;

#[test]
fn help_lists_all_visible_subcommands() {
    let (stdout, _stderr, exit_code) = run_termprobe(&["--help"]);
    assert_eq!(exit_code, 0);
    for name in ["keys", "colors", "simple", "escapes", "config"] {
        assert!(stdout.contains(name), "help is missing `{}`:\n{}", name, stdout);
    }
}

#[test]
fn help_hides_the_completions_command() {
    let (stdout, _stderr, exit_code) = run_termprobe(&["--help"]);
    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("completions"));
}

#[test]
fn version_prints_name_and_crate_version() {
    let (stdout, _stderr, exit_code) = run_termprobe(&["--version"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("termprobe"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn keys_help_documents_the_idle_timeout_flag() {
    let (stdout, _stderr, exit_code) = run_termprobe(&["keys", "--help"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--idle-timeout-ms"));
    assert!(stdout.contains("Ctrl+C"));
}

#[test]
fn escapes_help_documents_the_pause_flag() {
    let (stdout, _stderr, exit_code) = run_termprobe(&["escapes", "--help"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--pause"));
}

#[test]
fn config_help_lists_show_and_edit() {
    let (stdout, _stderr, exit_code) = run_termprobe(&["config", "--help"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("show"));
    assert!(stdout.contains("edit"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_termprobe(&["frobnicate"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("frobnicate"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_termprobe(&[]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}
