#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `listing` enumerates the entries of a single directory and writes their
//! names to an output stream. It is the engine behind the `dirlist` binary:
//! open the directory, pull entries until the stream is exhausted, emit one
//! line per entry, and release the directory stream on every exit path.
//!
//! # Design
//!
//! - [`DirectoryHandle`] owns an open POSIX directory stream and implements
//!   [`Iterator`], yielding [`DirectoryEntry`] values lazily and forward-only.
//!   Dropping the handle closes the stream.
//! - [`DirectorySource`] is the seam through which streams are opened.
//!   [`SystemDirectories`] is the production implementation; tests substitute
//!   instrumented sources to account for every release.
//! - [`DirectoryLister`] ties the two together and renders each entry using an
//!   [`EntryFormat`].
//!
//! # Invariants
//!
//! - A stream is released exactly once per listing, including when iteration
//!   or output fails midway.
//! - Entries are written in the order the filesystem yields them. No sorting
//!   or filtering is applied, so `.` and `..` appear when the platform reports
//!   them.
//! - An empty stream is a success that writes nothing.
//!
//! # Errors
//!
//! [`ListError`] reports failures together with the directory path. A
//! [`ListErrorKind::DirectoryOpen`] failure happens before anything is written;
//! read and write failures stop the listing after the entries already emitted.
//!
//! # Examples
//!
//! ```
//! use listing::DirectoryLister;
//! use std::collections::BTreeSet;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join("a.txt"), b"a")?;
//! fs::write(temp.path().join("b.txt"), b"b")?;
//!
//! let mut out = Vec::new();
//! DirectoryLister::new(temp.path()).list(&mut out)?;
//!
//! let names: BTreeSet<_> = String::from_utf8(out)?
//!     .lines()
//!     .filter(|name| *name != "." && *name != "..")
//!     .map(str::to_owned)
//!     .collect();
//! assert_eq!(names, BTreeSet::from(["a.txt".to_owned(), "b.txt".to_owned()]));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

#[cfg(not(unix))]
compile_error!("the listing crate requires POSIX directory streams");

mod entry;
mod error;
mod format;
mod handle;
mod lister;
mod source;


use std::io::Write;
use std::path::{Path, PathBuf};

pub use entry::{DirectoryEntry, EntryType};
pub use error::{ListError, ListErrorKind};
pub use format::EntryFormat;
pub use handle::DirectoryHandle;
pub use lister::{DirectoryLister, ListSummary};
pub use source::{DirectorySource, SystemDirectories};

/// Writes the name of every entry in `path` to `out`, one per line.
///
/// Shorthand for `DirectoryLister::new(path).list(out)`.
pub fn list<P, W>(path: P, out: &mut W) -> Result<ListSummary, ListError>
where
    P: Into<PathBuf>,
    W: Write + ?Sized,
{
    DirectoryLister::new(path).list(out)
}

/// Opens `path` and returns its entries as a lazy stream.
pub fn entries<P: AsRef<Path>>(path: P) -> Result<DirectoryHandle, ListError> {
    let path = path.as_ref();
    DirectoryHandle::open(path)
        .map_err(|error| ListError::directory_open(path.to_path_buf(), error))
}
