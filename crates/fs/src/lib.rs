//! `std::fs` adapter for the `syswrap-interface` traits.
//!
//! Every accessor method is a single call to the matching OS primitive;
//! failures come back as [`syswrap_interface::FsError`] without retries.

mod directory;
mod file;
mod info;
mod native;
mod pattern;
mod snapshot;
mod walker;

pub use directory::DirectoryInfoWrap;
pub use file::FileInfoWrap;
pub use pattern::NamePattern;

use std::path::PathBuf;

use syswrap_interface::{FileSystemEntry, FsError, FsResult};

/// Bind `path` to the accessor matching what is there now.
///
/// Fails with `NotFound` when nothing exists at `path`. Symlinks are bound
/// as whatever they point at.
pub fn open_entry(path: impl Into<PathBuf>) -> FsResult<FileSystemEntry> {
    let path = path.into();
    let meta = path
        .metadata()
        .or_else(|_| path.symlink_metadata())
        .map_err(|e| FsError::from_io("open", &path, e))?;

    Ok(if meta.is_dir() {
        FileSystemEntry::Directory(Box::new(DirectoryInfoWrap::new(path)))
    } else {
        FileSystemEntry::File(Box::new(FileInfoWrap::new(path)))
    })
}
