use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};

use crate::{FileAttributes, FileSystemEntry, FsResult, SearchOption};

/// Lazy, finite sequence produced by the `enumerate_*` methods.
///
/// Each call to an `enumerate_*` method starts a fresh walk, so a sequence can
/// be restarted by calling the method again.
pub type EntryIter<T> = Box<dyn Iterator<Item = FsResult<T>>>;

/// Metadata accessor for a file or directory bound to a path.
///
/// Binding performs no I/O. Attributes and timestamps are served from a
/// snapshot taken on first read or by [`FileSystemInfo::refresh`]; setters
/// write straight through to the OS and drop the snapshot. [`exists`] is the
/// one live query.
///
/// [`exists`]: FileSystemInfo::exists
pub trait FileSystemInfo {
    fn attributes(&self) -> FsResult<FileAttributes>;

    /// Fails with [`FsError::Access`](crate::FsError::Access) when the entry
    /// is missing or the caller may not change it.
    fn set_attributes(&self, attributes: FileAttributes) -> FsResult<()>;

    fn creation_time_utc(&self) -> FsResult<DateTime<Utc>>;

    fn set_creation_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;

    fn last_access_time_utc(&self) -> FsResult<DateTime<Utc>>;

    fn set_last_access_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;

    fn last_write_time_utc(&self) -> FsResult<DateTime<Utc>>;

    fn set_last_write_time_utc(&self, time: DateTime<Utc>) -> FsResult<()>;

    /// Live check, never cached.
    fn exists(&self) -> bool;

    /// Extension including the leading dot, or an empty string.
    fn extension(&self) -> String;

    /// Absolute path of the entry.
    fn full_name(&self) -> PathBuf;

    fn name(&self) -> String;

    fn delete(&self) -> FsResult<()>;

    /// Replace the cached snapshot with the current OS state.
    fn refresh(&self) -> FsResult<()>;

    /// The path exactly as it was given when the accessor was bound.
    fn original_path(&self) -> String;

    fn creation_time(&self) -> FsResult<DateTime<Local>> {
        self.creation_time_utc().map(|t| t.with_timezone(&Local))
    }

    fn set_creation_time(&self, time: DateTime<Local>) -> FsResult<()> {
        self.set_creation_time_utc(time.with_timezone(&Utc))
    }

    fn last_access_time(&self) -> FsResult<DateTime<Local>> {
        self.last_access_time_utc().map(|t| t.with_timezone(&Local))
    }

    fn set_last_access_time(&self, time: DateTime<Local>) -> FsResult<()> {
        self.set_last_access_time_utc(time.with_timezone(&Utc))
    }

    fn last_write_time(&self) -> FsResult<DateTime<Local>> {
        self.last_write_time_utc().map(|t| t.with_timezone(&Local))
    }

    fn set_last_write_time(&self, time: DateTime<Local>) -> FsResult<()> {
        self.set_last_write_time_utc(time.with_timezone(&Utc))
    }
}

/// Accessor for a regular file.
pub trait FileInfo: FileSystemInfo {
    /// Size in bytes, from the snapshot.
    fn length(&self) -> FsResult<u64>;

    /// Containing directory, `None` when the file sits at a root.
    fn directory_name(&self) -> Option<PathBuf>;

    fn directory(&self) -> Option<Box<dyn DirectoryInfo>>;

    fn is_read_only(&self) -> FsResult<bool>;

    fn set_is_read_only(&self, read_only: bool) -> FsResult<()>;
}

/// Accessor for a directory and its contents.
///
/// No enumeration promises an order; callers that need one must sort.
pub trait DirectoryInfo: FileSystemInfo {
    /// `None` at the filesystem root.
    fn parent(&self) -> Option<Box<dyn DirectoryInfo>>;

    fn root(&self) -> Box<dyn DirectoryInfo>;

    /// Create this directory and any missing ancestors.
    fn create(&self) -> FsResult<()>;

    /// Create `name` below this directory, making this directory and any
    /// intermediate components first. `name` must stay below the directory:
    /// rooted names and `..` are rejected.
    ///
    /// Fails with [`FsError::AlreadyExists`](crate::FsError::AlreadyExists)
    /// if anything already exists at the child path.
    fn create_subdirectory(&self, name: &str) -> FsResult<Box<dyn DirectoryInfo>>;

    /// [`FileSystemInfo::delete`], optionally removing the contents as well.
    fn delete_recursive(&self, recursive: bool) -> FsResult<()>;

    fn get_directories(&self) -> FsResult<Vec<Box<dyn DirectoryInfo>>>;

    fn get_files(&self) -> FsResult<Vec<Box<dyn FileInfo>>>;

    fn get_file_system_infos(&self) -> FsResult<Vec<FileSystemEntry>>;

    /// `pattern` supports `*` and `?` and is matched against names only.
    fn enumerate_directories(
        &self,
        pattern: &str,
        option: SearchOption,
    ) -> FsResult<EntryIter<Box<dyn DirectoryInfo>>>;

    fn enumerate_files(
        &self,
        pattern: &str,
        option: SearchOption,
    ) -> FsResult<EntryIter<Box<dyn FileInfo>>>;

    fn enumerate_file_system_infos(
        &self,
        pattern: &str,
        option: SearchOption,
    ) -> FsResult<EntryIter<FileSystemEntry>>;
}
