//! Interfaces mirroring the operating system's filesystem API.
//!
//! Code that touches files or directories takes these traits instead of
//! calling `std::fs` directly, so it can run against the real adapter in
//! `syswrap-fs` or against the mocks exported under the `mock` feature.

mod attributes;
mod entry;
mod error;
mod info;
mod search;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use attributes::FileAttributes;
pub use entry::FileSystemEntry;
pub use error::{FsError, FsResult};
pub use info::{DirectoryInfo, EntryIter, FileInfo, FileSystemInfo};
pub use search::{DEFAULT_SEARCH_PATTERN, SearchOption};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockDirectoryInfo, MockFileInfo, MockFileSystemInfo};
