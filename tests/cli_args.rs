//! Tests for the binary's command-line surface.

mod common;

use common::temp_config;
use std::process::Command;

fn countercraft_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_countercraft"));
    // Keep the user's config out of the way.
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("countercraft-tests"));
    cmd.env("HOME", std::env::temp_dir().join("countercraft-tests"));
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help_lists_options() {
    let output = countercraft_cmd().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--initial"));
    assert!(stdout.contains("--step"));
    assert!(stdout.contains("press"));
}

#[test]
fn test_press_prints_every_section() {
    let output = countercraft_cmd()
        .args(["press", "local:+", "reducer:-", "store:+", "store:+", "atom:-", "external:+"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Local Cell: 1",
            "Reducer Cell: -1",
            "Global Action Store: 2",
            "Atom Cell: -1",
            "External Store: 1",
        ]
    );
}

#[test]
fn test_press_without_presses_prints_initial_values() {
    let output = countercraft_cmd()
        .args(["--initial", "-2", "press"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout_lines(&output).iter().all(|line| line.ends_with(": -2")));
}

#[test]
fn test_step_override_applies_to_reducer_only() {
    let output = countercraft_cmd()
        .args(["--step", "5", "press", "reducer:+", "local:+"])
        .output()
        .unwrap();
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"Reducer Cell: 5".to_string()));
    assert!(lines.contains(&"Local Cell: 1".to_string()));
}

#[test]
fn test_invalid_press_exits_with_error() {
    let output = countercraft_cmd()
        .args(["press", "redux:+"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown section 'redux'"));
}

#[test]
fn test_config_file_is_used() {
    let (_dir, path) = temp_config("[counters]\ninitial_value = 7\nreducer_step = 3\n");
    let output = countercraft_cmd()
        .arg("--config")
        .arg(&path)
        .args(["press", "reducer:-"])
        .output()
        .unwrap();
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Local Cell: 7");
    assert_eq!(lines[1], "Reducer Cell: 4");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let output = countercraft_cmd()
        .arg("--config")
        .arg(&path)
        .arg("press")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
}
