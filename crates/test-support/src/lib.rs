//! Shared fixtures for the dirlist test suites.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary directory containing one regular file per name.
///
/// # Panics
///
/// Panics when the directory or any file cannot be created.
#[must_use]
pub fn populated_dir(names: &[&str]) -> TempDir {
    let temp = tempfile::tempdir().expect("tempdir");
    for name in names {
        fs::write(temp.path().join(name), name.as_bytes()).expect("write fixture file");
    }
    temp
}

/// Creates an empty subdirectory named `name` under `parent`.
///
/// # Panics
///
/// Panics when the directory cannot be created.
pub fn subdir(parent: &Path, name: &str) -> std::path::PathBuf {
    let path = parent.join(name);
    fs::create_dir(&path).expect("create subdirectory");
    path
}

/// Splits listing output into lines.
///
/// # Panics
///
/// Panics when the output is not valid UTF-8.
#[must_use]
pub fn output_lines(output: &[u8]) -> Vec<String> {
    std::str::from_utf8(output)
        .expect("listing output is UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Returns the listed names with the `.` and `..` pseudo-entries removed.
#[must_use]
pub fn real_names(lines: &[String]) -> BTreeSet<String> {
    lines
        .iter()
        .filter(|name| name.as_str() != "." && name.as_str() != "..")
        .cloned()
        .collect()
}

/// Builds the expected name set from string literals.
#[must_use]
pub fn name_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}
