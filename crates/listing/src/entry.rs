use std::ffi::{OsStr, OsString};
use std::fmt;

/// Kind of filesystem object reported by the directory stream.
///
/// The value comes straight from the stream's `d_type` field. Filesystems that
/// do not fill it in report [`EntryType::Unknown`]; the lister never issues an
/// extra `stat` to resolve it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// The stream did not report a type.
    #[default]
    Unknown,
    /// Named pipe.
    Fifo,
    /// Character device.
    CharDevice,
    /// Directory, including the `.` and `..` pseudo-entries.
    Directory,
    /// Block device.
    BlockDevice,
    /// Regular file.
    Regular,
    /// Symbolic link (never followed).
    Symlink,
    /// Unix domain socket.
    Socket,
}

impl EntryType {
    /// Returns the bracketed label used by the long output format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "<unknown>",
            Self::Fifo => "<fifo>",
            Self::CharDevice => "<char>",
            Self::Directory => "<dir>",
            Self::BlockDevice => "<block>",
            Self::Regular => "<regular>",
            Self::Symlink => "<link>",
            Self::Socket => "<socket>",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(unix)]
impl From<Option<nix::dir::Type>> for EntryType {
    fn from(value: Option<nix::dir::Type>) -> Self {
        use nix::dir::Type;

        match value {
            None => Self::Unknown,
            Some(Type::Fifo) => Self::Fifo,
            Some(Type::CharacterDevice) => Self::CharDevice,
            Some(Type::Directory) => Self::Directory,
            Some(Type::BlockDevice) => Self::BlockDevice,
            Some(Type::File) => Self::Regular,
            Some(Type::Symlink) => Self::Symlink,
            Some(Type::Socket) => Self::Socket,
        }
    }
}

/// One item produced by a directory stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: OsString,
    inode: u64,
    file_type: EntryType,
}

impl DirectoryEntry {
    /// Creates an entry from its raw components.
    #[must_use]
    pub fn new<N: Into<OsString>>(name: N, inode: u64, file_type: EntryType) -> Self {
        Self {
            name: name.into(),
            inode,
            file_type,
        }
    }

    /// Returns the entry name exactly as the stream reported it.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Returns the inode number reported by the stream.
    #[must_use]
    pub const fn inode(&self) -> u64 {
        self.inode
    }

    /// Returns the type reported by the stream.
    #[must_use]
    pub const fn file_type(&self) -> EntryType {
        self.file_type
    }

    /// Reports whether this is the `.` or `..` pseudo-entry.
    #[must_use]
    pub fn is_pseudo(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    /// Consumes the entry and returns its name.
    #[must_use]
    pub fn into_name(self) -> OsString {
        self.name
    }
}
