use std::io;
use std::path::{Path, PathBuf};

/// Error returned when listing a directory fails.
///
/// The error always carries the directory path so callers can render
/// diagnostics without pattern matching on [`ListErrorKind`].
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ListError {
    kind: ListErrorKind,
}

impl ListError {
    pub(crate) fn new(kind: ListErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn directory_open(path: PathBuf, source: io::Error) -> Self {
        Self::new(ListErrorKind::DirectoryOpen { path, source })
    }

    pub(crate) fn read_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(ListErrorKind::ReadEntry { path, source })
    }

    pub(crate) fn write(path: PathBuf, source: io::Error) -> Self {
        Self::new(ListErrorKind::Write { path, source })
    }

    /// Returns the specific failure that terminated the listing.
    #[must_use]
    pub fn kind(&self) -> &ListErrorKind {
        &self.kind
    }

    /// Returns the directory path associated with the error.
    ///
    /// ```
    /// use listing::DirectoryLister;
    ///
    /// let error = DirectoryLister::new("./definitely_missing_directory")
    ///     .list(&mut Vec::<u8>::new())
    ///     .expect_err("missing directory cannot be opened");
    /// assert!(error.path().ends_with("definitely_missing_directory"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Reports whether the directory could not be opened at all.
    ///
    /// When this returns `true` no entry has been written to the output.
    #[must_use]
    pub const fn is_open_failure(&self) -> bool {
        matches!(self.kind, ListErrorKind::DirectoryOpen { .. })
    }
}

/// Classification of listing failures.
#[derive(Debug, thiserror::Error)]
pub enum ListErrorKind {
    /// The directory stream could not be opened.
    ///
    /// Raised when the path does not exist, is not a directory, or is not
    /// accessible. Iteration is never attempted after this failure.
    #[error("failed to open directory '{}': {source}", .path.display())]
    DirectoryOpen {
        /// Directory that could not be opened.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Reading the next entry from an open stream failed.
    #[error("failed to read entry in '{}': {source}", .path.display())]
    ReadEntry {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Writing an entry to the output failed.
    #[error("failed to write entry of '{}': {source}", .path.display())]
    Write {
        /// Directory being listed.
        path: PathBuf,
        /// Error reported by the output writer.
        #[source]
        source: io::Error,
    },
}

impl ListErrorKind {
    /// Returns the directory path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryOpen { path, .. }
            | Self::ReadEntry { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn list_error_path_matches_variant_path() {
        let open = ListError::directory_open(PathBuf::from("open"), io_error("open"));
        assert_eq!(Path::new("open"), open.path());

        let read = ListError::read_entry(PathBuf::from("read"), io_error("read"));
        assert_eq!(Path::new("read"), read.path());

        let write = ListError::write(PathBuf::from("write"), io_error("write"));
        assert_eq!(Path::new("write"), write.path());
    }

    #[test]
    fn list_error_display_is_specific_per_variant() {
        let open = ListError::directory_open(PathBuf::from("dir"), io_error("boom"));
        assert_eq!("failed to open directory 'dir': boom", open.to_string());

        let read = ListError::read_entry(PathBuf::from("dir"), io_error("boom"));
        assert_eq!("failed to read entry in 'dir': boom", read.to_string());

        let write = ListError::write(PathBuf::from("dir"), io_error("boom"));
        assert_eq!("failed to write entry of 'dir': boom", write.to_string());
    }

    #[test]
    fn only_open_failures_report_as_such() {
        assert!(ListError::directory_open(PathBuf::from("d"), io_error("x")).is_open_failure());
        assert!(!ListError::read_entry(PathBuf::from("d"), io_error("x")).is_open_failure());
        assert!(!ListError::write(PathBuf::from("d"), io_error("x")).is_open_failure());
    }

    #[test]
    fn list_error_source_refers_to_underlying_io_error() {
        let error = ListError::directory_open(PathBuf::from("dir"), io_error("source"));
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("list error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "source");
    }
}
