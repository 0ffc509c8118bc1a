//! Exit codes reported by the `dirlist` binary.
//!
//! The numbering follows the rsync convention used across this workspace's
//! lineage: `1` for usage errors, `3` when the requested directory cannot be
//! selected, and `11` for I/O failures after the directory was opened.

use std::fmt;

use listing::{ListError, ListErrorKind};

/// Process exit status of a `dirlist` invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion, including listing an empty directory.
    Ok = 0,

    /// Syntax or usage error.
    Syntax = 1,

    /// The directory could not be opened.
    FileSelect = 3,

    /// Reading an entry or writing the listing failed.
    FileIo = 11,
}

impl ExitCode {
    /// Returns the numeric exit code value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a human-readable description of this exit code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Syntax => "syntax or usage error",
            Self::FileSelect => "errors selecting input/output files, dirs",
            Self::FileIo => "error in file IO",
        }
    }

    /// Returns `true` if this represents a successful exit.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Maps a raw status back to its variant.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Ok),
            1 => Some(Self::Syntax),
            3 => Some(Self::FileSelect),
            11 => Some(Self::FileIo),
            _ => None,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.as_i32().clamp(0, 255) as u8)
    }
}

/// Types that know which exit code they should terminate the process with.
pub trait HasExitCode {
    /// Returns the exit code associated with this value.
    fn exit_code(&self) -> ExitCode;
}

impl HasExitCode for ListError {
    fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ListErrorKind::DirectoryOpen { .. } => ExitCode::FileSelect,
            ListErrorKind::ReadEntry { .. } | ListErrorKind::Write { .. } => ExitCode::FileIo,
        }
    }
}
