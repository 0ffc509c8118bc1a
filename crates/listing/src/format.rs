use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use crate::entry::DirectoryEntry;

/// Line layout used when writing entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryFormat {
    /// One bare name per line.
    #[default]
    Names,
    /// Inode, type label and name: `{inode:>8} {type:<10} {name}`.
    Long,
}

impl EntryFormat {
    /// Writes `entry` as a single newline-terminated line.
    ///
    /// Names are emitted as raw bytes so entries that are not valid UTF-8
    /// reach the output unchanged.
    pub fn write_entry<W: Write + ?Sized>(
        self,
        out: &mut W,
        entry: &DirectoryEntry,
    ) -> io::Result<()> {
        if self == Self::Long {
            write!(out, "{:>8} {:<10} ", entry.inode(), entry.file_type())?;
        }
        out.write_all(entry.name().as_bytes())?;
        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryType;

    fn render(format: EntryFormat, entry: &DirectoryEntry) -> String {
        let mut out: Vec<u8> = Vec::new();
        format.write_entry(&mut out, entry).expect("write to vec");
        String::from_utf8(out).expect("utf-8")
    }

    #[test]
    fn names_format_prints_bare_name() {
        let entry = DirectoryEntry::new("a.txt", 12, EntryType::Regular);
        assert_eq!(render(EntryFormat::Names, &entry), "a.txt\n");
    }

    #[test]
    fn long_format_pads_inode_and_type_columns() {
        let entry = DirectoryEntry::new("a.txt", 12, EntryType::Regular);
        assert_eq!(render(EntryFormat::Long, &entry), "      12 <regular>  a.txt\n");

        let dir = DirectoryEntry::new("..", 2, EntryType::Directory);
        assert_eq!(render(EntryFormat::Long, &dir), "       2 <dir>      ..\n");
    }

    #[test]
    fn long_format_does_not_truncate_wide_inodes() {
        let entry = DirectoryEntry::new("big", 1_234_567_890, EntryType::Unknown);
        assert_eq!(
            render(EntryFormat::Long, &entry),
            "1234567890 <unknown>  big\n"
        );
    }

    #[test]
    fn non_utf8_names_are_written_verbatim() {
        use std::ffi::OsStr;

        let raw = OsStr::from_bytes(b"caf\xe9");
        let entry = DirectoryEntry::new(raw, 1, EntryType::Regular);
        let mut out: Vec<u8> = Vec::new();
        EntryFormat::Names
            .write_entry(&mut out, &entry)
            .expect("write to vec");
        assert_eq!(out, b"caf\xe9\n");
    }
}
