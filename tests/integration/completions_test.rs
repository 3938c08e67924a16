//! Shell completion generation tests

use crate::helpers::run_termprobe;

#[test]
fn zsh_completions_name_the_binary() {
    let (stdout, _stderr, exit_code) = run_termprobe(&["completions", "--shell", "zsh"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("#compdef termprobe"));
    assert!(stdout.contains("keys"));
}

#[test]
fn bash_completions_name_the_binary() {
    let (stdout, _stderr, exit_code) = run_termprobe(&["completions", "--shell", "bash"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("termprobe"));
}

#[test]
fn missing_shell_flag_prints_usage_and_fails() {
    let (_stdout, stderr, exit_code) = run_termprobe(&["completions"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("--shell"));
}
