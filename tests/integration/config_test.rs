//! Config command tests against a temp HOME

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::helpers::run_termprobe_with_home;

fn write_config(home: &Path, contents: &str) {
    let config_dir = home.join(".config").join("termprobe");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), contents).unwrap();
}

#[test]
fn show_prints_defaults_when_no_file_exists() {
    let home = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) = run_termprobe_with_home(&["config", "show"], home.path());

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("[probe]"));
    assert!(stdout.contains("idle_timeout_ms = 10"));
    assert!(stdout.contains("[sweep]"));
    assert!(stdout.contains("pause = false"));
}

#[test]
fn show_reflects_values_from_the_config_file() {
    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        "[probe]\nidle_timeout_ms = 42\n\n[sweep]\npause = true\n",
    );

    let (stdout, _stderr, exit_code) = run_termprobe_with_home(&["config", "show"], home.path());
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("idle_timeout_ms = 42"));
    assert!(stdout.contains("pause = true"));
}

#[test]
fn show_fills_in_defaults_for_missing_keys() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "[sweep]\npause = true\n");

    let (stdout, _stderr, exit_code) = run_termprobe_with_home(&["config", "show"], home.path());
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("idle_timeout_ms = 10"));
    assert!(stdout.contains("pause = true"));
}

#[test]
fn show_fails_on_an_unparseable_config_file() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "not valid = = toml");

    let (_stdout, stderr, exit_code) = run_termprobe_with_home(&["config", "show"], home.path());
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("parse"), "stderr: {}", stderr);
}
