use std::io;
use std::path::Path;

use crate::entry::DirectoryEntry;
use crate::handle::DirectoryHandle;

/// Provider of directory streams.
///
/// [`DirectoryLister`](crate::DirectoryLister) opens every stream through this
/// trait. Releasing a stream is tied to dropping it, so an implementation can
/// observe exactly when and how often its streams are released.
pub trait DirectorySource {
    /// Stream type produced for an opened directory.
    type Stream: Iterator<Item = io::Result<DirectoryEntry>>;

    /// Opens `path` for single-pass iteration.
    fn open(&self, path: &Path) -> io::Result<Self::Stream>;
}

/// Directory source backed by the operating system's directory streams.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDirectories;

impl DirectorySource for SystemDirectories {
    type Stream = DirectoryHandle;

    fn open(&self, path: &Path) -> io::Result<Self::Stream> {
        DirectoryHandle::open(path)
    }
}

impl<S: DirectorySource + ?Sized> DirectorySource for &S {
    type Stream = S::Stream;

    fn open(&self, path: &Path) -> io::Result<Self::Stream> {
        (**self).open(path)
    }
}
