use std::fmt;

use crate::{DirectoryInfo, FileInfo, FileSystemInfo};

/// One result of a mixed enumeration: either a file or a directory.
pub enum FileSystemEntry {
    File(Box<dyn FileInfo>),
    Directory(Box<dyn DirectoryInfo>),
}

impl FileSystemEntry {
    /// The metadata accessor shared by both variants.
    pub fn info(&self) -> &dyn FileSystemInfo {
        match self {
            Self::File(file) => file.as_ref(),
            Self::Directory(dir) => dir.as_ref(),
        }
    }

    pub fn name(&self) -> String {
        self.info().name()
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn as_file(&self) -> Option<&dyn FileInfo> {
        match self {
            Self::File(file) => Some(file.as_ref()),
            Self::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&dyn DirectoryInfo> {
        match self {
            Self::Directory(dir) => Some(dir.as_ref()),
            Self::File(_) => None,
        }
    }

    pub fn into_file(self) -> Option<Box<dyn FileInfo>> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }

    pub fn into_directory(self) -> Option<Box<dyn DirectoryInfo>> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }
}

impl From<Box<dyn FileInfo>> for FileSystemEntry {
    fn from(file: Box<dyn FileInfo>) -> Self {
        Self::File(file)
    }
}

impl From<Box<dyn DirectoryInfo>> for FileSystemEntry {
    fn from(dir: Box<dyn DirectoryInfo>) -> Self {
        Self::Directory(dir)
    }
}

impl fmt::Debug for FileSystemEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_file() { "File" } else { "Directory" };
        f.debug_tuple(kind).field(&self.info().original_path()).finish()
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
