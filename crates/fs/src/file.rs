use std::{
    fs::{self, Metadata},
    path::PathBuf,
};

use syswrap_interface::{DirectoryInfo, FileInfo, FileSystemInfo, FsResult};

use crate::{
    DirectoryInfoWrap,
    info::{EntryCore, impl_file_system_info},
};

/// [`FileInfo`] over a real file.
#[derive(Debug)]
pub struct FileInfoWrap {
    core: EntryCore,
}

impl FileInfoWrap {
    /// Bind to `path`. Nothing is read until a cached field is requested.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            core: EntryCore::new(path),
        }
    }

    /// Anything that is not a directory counts as a file.
    fn is_kind(meta: &Metadata) -> bool {
        !meta.is_dir()
    }

    /// Removing a file that is not there is an error, not a no-op.
    fn remove_entry(&self) -> FsResult<()> {
        self.core.remove("delete", |p| fs::remove_file(p))
    }
}

impl_file_system_info!(FileInfoWrap);

impl FileInfo for FileInfoWrap {
    fn length(&self) -> FsResult<u64> {
        self.core.read("length", |s| s.length)
    }

    fn directory_name(&self) -> Option<PathBuf> {
        self.core.full().parent().map(|p| p.to_path_buf())
    }

    fn directory(&self) -> Option<Box<dyn DirectoryInfo>> {
        self.directory_name()
            .map(|p| Box::new(DirectoryInfoWrap::new(p)) as Box<dyn DirectoryInfo>)
    }

    fn is_read_only(&self) -> FsResult<bool> {
        self.attributes().map(|a| a.is_read_only())
    }

    fn set_is_read_only(&self, read_only: bool) -> FsResult<()> {
        let current = self.attributes()?;
        self.set_attributes(current.with_read_only(read_only))
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
