use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use nix::dir::{Dir, OwningIter};
use nix::fcntl::OFlag;
use nix::sys::stat::Mode;

use crate::entry::DirectoryEntry;

/// Open directory stream that yields entries in the order the filesystem
/// reports them.
///
/// The handle owns the underlying `DIR*`. Dropping it (or calling
/// [`close`](Self::close)) releases the stream exactly once; ownership makes
/// use after release impossible. Iteration is forward-only and never rewinds,
/// so every entry is produced at most once. Exhaustion is signalled by
/// `None`; `Some(Err(_))` reports a failed `readdir` call.
///
/// The `.` and `..` pseudo-entries are passed through untouched.
pub struct DirectoryHandle {
    path: PathBuf,
    stream: OwningIter,
    produced: usize,
}

impl DirectoryHandle {
    /// Opens `path` as a directory stream.
    ///
    /// Fails when the path does not exist, is not a directory, or cannot be
    /// read by the current process. The path is not validated beforehand.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let flags = OFlag::O_RDONLY | OFlag::O_DIRECTORY | OFlag::O_CLOEXEC;
        let dir = Dir::open(path, flags, Mode::empty()).map_err(io::Error::from)?;
        tracing::debug!(path = %path.display(), "opened directory handle");

        Ok(Self {
            path: path.to_path_buf(),
            stream: dir.into_iter(),
            produced: 0,
        })
    }

    /// Returns the path the handle was opened with.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries produced so far.
    #[must_use]
    pub const fn produced(&self) -> usize {
        self.produced
    }

    /// Releases the directory stream.
    ///
    /// Equivalent to dropping the handle; provided so call sites can make the
    /// release point explicit.
    pub fn close(self) {
        drop(self);
    }
}

impl Iterator for DirectoryHandle {
    type Item = io::Result<DirectoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = match self.stream.next()? {
            Ok(raw) => raw,
            Err(errno) => return Some(Err(io::Error::from(errno))),
        };
        self.produced += 1;

        let name = OsStr::from_bytes(raw.file_name().to_bytes());
        Some(Ok(DirectoryEntry::new(
            name,
            raw.ino(),
            raw.file_type().into(),
        )))
    }
}

impl Drop for DirectoryHandle {
    fn drop(&mut self) {
        tracing::debug!(
            path = %self.path.display(),
            entries = self.produced,
            "released directory handle"
        );
    }
}

impl fmt::Debug for DirectoryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryHandle")
            .field("path", &self.path)
            .field("produced", &self.produced)
            .finish_non_exhaustive()
    }
}
