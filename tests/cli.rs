use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

fn passgen(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("passgen").unwrap();
    cmd.args(args);
    cmd
}

fn stdout_lines(args: &[&str]) -> Vec<String> {
    let output = passgen(args).output().unwrap();
    assert!(output.status.success(), "passgen {args:?} failed");
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn default_run_prints_one_password_of_twelve() {
    let lines = stdout_lines(&["-q"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 12);
}

#[test]
fn length_flag_controls_output_length() {
    let lines = stdout_lines(&["-l", "20", "-q"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 20);
}

#[test]
fn number_flag_controls_line_count() {
    let lines = stdout_lines(&["-n", "3", "-l", "10", "-q"]);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.len() == 10));
}

#[test]
fn class_flags_restrict_the_alphabet() {
    let lines = stdout_lines(&["-l", "50", "--no-upper", "--no-lower", "-q"]);
    assert!(lines[0].bytes().all(|b| b.is_ascii_digit()));

    let lines = stdout_lines(&["-l", "50", "--no-digits", "-q"]);
    assert!(lines[0].bytes().all(|b| b.is_ascii_alphabetic()));
}

#[test]
fn special_flag_widens_the_alphabet() {
    let union = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+[]{}|;:,.<>?";
    let lines = stdout_lines(&["-l", "50", "--special", "-n", "5", "-q"]);
    for line in lines {
        assert!(line.bytes().all(|b| union.contains(&b)));
    }
}

#[test]
fn no_classes_selected_is_a_blocking_error() {
    passgen(&["--no-upper", "--no-lower", "--no-digits"])
        .assert()
        .failure()
        .stderr(contains("select at least one character type"));
}

#[test]
fn length_out_of_range_is_rejected() {
    passgen(&["-l", "0"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
    passgen(&["-l", "51"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn unknown_flag_points_to_help() {
    passgen(&["--wat"])
        .assert()
        .failure()
        .stderr(contains("Unknown argument: --wat"))
        .stderr(contains("--help"));
}

#[test]
fn help_lists_the_options() {
    passgen(&["--help"])
        .assert()
        .success()
        .stdout(contains("passgen [OPTIONS]"))
        .stdout(contains("-l, --length <N>"))
        .stdout(contains("--no-digits"))
        .stdout(contains("-b, --board"));
}

#[test]
fn version_prints_the_crate_version() {
    passgen(&["--version"])
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
