//! End-to-end checks of the `dirlist` binary against real directories.

use assert_cmd::Command;
use predicates::prelude::*;
use test_support::{name_set, output_lines, populated_dir, real_names, subdir};

fn dirlist() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirlist"))
}

#[test]
fn lists_current_directory_without_operands() {
    let temp = populated_dir(&["a.txt", "b.txt"]);
    let output = dirlist()
        .current_dir(temp.path())
        .output()
        .expect("run dirlist");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    let lines = output_lines(&output.stdout);
    assert_eq!(real_names(&lines), name_set(&["a.txt", "b.txt"]));
    for name in ["a.txt", "b.txt"] {
        assert_eq!(lines.iter().filter(|line| *line == name).count(), 1);
    }
}

#[test]
fn every_line_is_newline_terminated() {
    let temp = populated_dir(&["x"]);
    let output = dirlist()
        .current_dir(temp.path())
        .output()
        .expect("run dirlist");

    assert!(output.stdout.ends_with(b"\n"));
    assert!(!output.stdout.windows(2).any(|pair| pair == b"\n\n"));
}

#[test]
fn empty_directory_prints_no_real_entries_and_succeeds() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = dirlist()
        .current_dir(temp.path())
        .output()
        .expect("run dirlist");

    assert!(output.status.success());
    assert!(real_names(&output_lines(&output.stdout)).is_empty());
}

#[test]
fn repeated_runs_list_the_same_names() {
    let temp = populated_dir(&["one", "two"]);
    subdir(temp.path(), "three");

    let first = dirlist().current_dir(temp.path()).output().expect("first run");
    let second = dirlist().current_dir(temp.path()).output().expect("second run");

    assert_eq!(
        real_names(&output_lines(&first.stdout)),
        real_names(&output_lines(&second.stdout))
    );
}

#[test]
fn missing_directory_fails_with_diagnostic() {
    let temp = tempfile::tempdir().expect("tempdir");
    dirlist()
        .arg(temp.path().join("gone"))
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("dirlist: failed to open directory"))
        .stderr(predicate::str::contains("gone"));
}

#[test]
fn long_listing_shows_directory_type_for_pseudo_entries() {
    let temp = populated_dir(&["file"]);
    let output = dirlist()
        .arg("--long")
        .current_dir(temp.path())
        .output()
        .expect("run dirlist");

    assert!(output.status.success());
    for line in output_lines(&output.stdout) {
        let fields: Vec<_> = line.split_whitespace().collect();
        if fields.get(2) == Some(&".") || fields.get(2) == Some(&"..") {
            assert!(fields[1] == "<dir>" || fields[1] == "<unknown>");
        }
    }
}

#[test]
fn help_lists_usage() {
    dirlist()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Usage: dirlist"));
}

#[test]
fn unknown_flag_is_rejected() {
    dirlist()
        .arg("--definitely-not-a-flag")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty().not());
}
