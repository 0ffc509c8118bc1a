use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ListError;
use crate::format::EntryFormat;
use crate::source::{DirectorySource, SystemDirectories};

/// Configures and runs a single-pass listing of one directory.
#[derive(Clone, Debug)]
pub struct DirectoryLister<S = SystemDirectories> {
    path: PathBuf,
    format: EntryFormat,
    source: S,
}

impl DirectoryLister {
    /// Creates a lister for `path` using the operating system's directory
    /// streams and the [`EntryFormat::Names`] layout.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            format: EntryFormat::default(),
            source: SystemDirectories,
        }
    }
}

impl<S: DirectorySource> DirectoryLister<S> {
    /// Replaces the source used to open directory streams.
    #[must_use]
    pub fn with_source<T: DirectorySource>(self, source: T) -> DirectoryLister<T> {
        DirectoryLister {
            path: self.path,
            format: self.format,
            source,
        }
    }

    /// Selects the line layout used by [`list`](Self::list).
    #[must_use]
    pub fn format(mut self, format: EntryFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the directory this lister reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the directory and returns its lazy entry stream.
    pub fn open(&self) -> Result<S::Stream, ListError> {
        self.source.open(&self.path).map_err(|error| {
            tracing::debug!(path = %self.path.display(), %error, "cannot open directory");
            ListError::directory_open(self.path.clone(), error)
        })
    }

    /// Writes every entry of the directory to `out`, one per line.
    ///
    /// Entries appear in stream order. The stream is released before this
    /// returns, whether listing finished or stopped on an error. Nothing is
    /// written when the directory cannot be opened.
    pub fn list<W: Write + ?Sized>(&self, out: &mut W) -> Result<ListSummary, ListError> {
        let stream = self.open()?;
        let mut entries = 0;

        for entry in stream {
            let entry = entry.map_err(|error| {
                tracing::debug!(path = %self.path.display(), %error, "directory read failed");
                ListError::read_entry(self.path.clone(), error)
            })?;
            tracing::trace!(name = ?entry.name(), "entry");
            self.format
                .write_entry(out, &entry)
                .map_err(|error| ListError::write(self.path.clone(), error))?;
            entries += 1;
        }

        out.flush()
            .map_err(|error| ListError::write(self.path.clone(), error))?;
        tracing::info!(path = %self.path.display(), entries, "listing complete");
        Ok(ListSummary { entries })
    }
}

/// Outcome of a successful [`DirectoryLister::list`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListSummary {
    entries: usize,
}

impl ListSummary {
    /// Number of entries written, pseudo-entries included.
    #[must_use]
    pub const fn entries(&self) -> usize {
        self.entries
    }
}
