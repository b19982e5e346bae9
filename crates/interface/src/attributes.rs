use bitflags::bitflags;

bitflags! {
    /// Attribute bitset of a file or directory.
    ///
    /// Bit values are the ones the Windows API uses, so on Windows the raw
    /// attribute word maps over unchanged. Other platforms derive the subset
    /// they can express (see `syswrap-fs`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FileAttributes: u32 {
        const READ_ONLY           = 0x0000_0001;
        /// Dot-files on Unix.
        const HIDDEN              = 0x0000_0002;
        const SYSTEM              = 0x0000_0004;
        const DIRECTORY           = 0x0000_0010;
        const ARCHIVE             = 0x0000_0020;
        const DEVICE              = 0x0000_0040;
        /// Set only when no other flag applies.
        const NORMAL              = 0x0000_0080;
        const TEMPORARY           = 0x0000_0100;
        const SPARSE_FILE         = 0x0000_0200;
        /// Symlinks and junctions.
        const REPARSE_POINT       = 0x0000_0400;
        const COMPRESSED          = 0x0000_0800;
        const OFFLINE             = 0x0000_1000;
        const NOT_CONTENT_INDEXED = 0x0000_2000;
        const ENCRYPTED           = 0x0000_4000;
    }
}

impl FileAttributes {
    #[inline]
    pub fn is_directory(self) -> bool {
        self.contains(Self::DIRECTORY)
    }

    #[inline]
    pub fn is_read_only(self) -> bool {
        self.contains(Self::READ_ONLY)
    }

    /// Flag names joined with `|`, e.g. `DIRECTORY | HIDDEN`.
    pub fn describe(self) -> String {
        if self.is_empty() {
            return String::from("(none)");
        }
        self.iter_names()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Replace `READ_ONLY` with `read_only` and normalise `NORMAL` so it is
    /// present exactly when nothing else is.
    pub fn with_read_only(self, read_only: bool) -> Self {
        let mut attrs = self - Self::NORMAL;
        attrs.set(Self::READ_ONLY, read_only);
        if attrs.is_empty() {
            attrs = Self::NORMAL;
        }
        attrs
    }
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
