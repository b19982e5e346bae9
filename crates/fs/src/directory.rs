use std::{
    fs::{self, Metadata},
    io,
    path::{Component, Path, PathBuf},
};

use log::debug;
use syswrap_interface::{
    DEFAULT_SEARCH_PATTERN, DirectoryInfo, EntryIter, FileInfo, FileSystemEntry, FsError,
    FsResult, SearchOption,
};

use crate::{
    FileInfoWrap,
    info::{EntryCore, impl_file_system_info},
    pattern::NamePattern,
    walker::{EntryWalker, Found, Wanted},
};

/// [`DirectoryInfo`] over a real directory.
#[derive(Debug)]
pub struct DirectoryInfoWrap {
    core: EntryCore,
}

impl DirectoryInfoWrap {
    /// Bind to `path`. Nothing is read until a cached field is requested.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            core: EntryCore::new(path),
        }
    }

    fn is_kind(meta: &Metadata) -> bool {
        meta.is_dir()
    }

    /// Non-recursive; a directory with contents fails with the OS error.
    fn remove_entry(&self) -> FsResult<()> {
        self.core.remove("delete", |p| fs::remove_dir(p))
    }

    fn walk(&self, pattern: &str, wanted: Wanted, option: SearchOption) -> FsResult<EntryWalker> {
        EntryWalker::open(self.core.full(), NamePattern::new(pattern)?, wanted, option)
    }
}

impl_file_system_info!(DirectoryInfoWrap);

fn bind_directory(path: PathBuf) -> Box<dyn DirectoryInfo> {
    Box::new(DirectoryInfoWrap::new(path))
}

fn bind_file(path: PathBuf) -> Box<dyn FileInfo> {
    Box::new(FileInfoWrap::new(path))
}

fn bind_entry(found: Found) -> FileSystemEntry {
    if found.is_dir {
        FileSystemEntry::Directory(bind_directory(found.path))
    } else {
        FileSystemEntry::File(bind_file(found.path))
    }
}

impl DirectoryInfo for DirectoryInfoWrap {
    fn parent(&self) -> Option<Box<dyn DirectoryInfo>> {
        self.core.full().parent().map(|p| bind_directory(p.to_path_buf()))
    }

    fn root(&self) -> Box<dyn DirectoryInfo> {
        let root = self
            .core
            .full()
            .ancestors()
            .last()
            .unwrap_or_else(|| self.core.full());
        bind_directory(root.to_path_buf())
    }

    fn create(&self) -> FsResult<()> {
        debug!("[fs] create {:?}", self.core.full());
        let result = fs::create_dir_all(self.core.full());
        self.core.invalidate();
        result.map_err(|e| self.core.error("create", e))
    }

    fn create_subdirectory(&self, name: &str) -> FsResult<Box<dyn DirectoryInfo>> {
        let relative = Path::new(name);
        let path = self.core.full().join(relative);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || escapes {
            return Err(FsError::from_io(
                "create_subdirectory",
                path,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "subdirectory name must be a relative path below the directory",
                ),
            ));
        }

        debug!("[fs] create_subdirectory {:?}", path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| FsError::from_io("create_subdirectory", parent, e))?;
        }
        fs::create_dir(&path).map_err(|e| FsError::from_io("create_subdirectory", &path, e))?;

        Ok(bind_directory(path))
    }

    fn delete_recursive(&self, recursive: bool) -> FsResult<()> {
        if recursive {
            self.core.remove("delete_recursive", |p| fs::remove_dir_all(p))
        } else {
            self.remove_entry()
        }
    }

    fn get_directories(&self) -> FsResult<Vec<Box<dyn DirectoryInfo>>> {
        self.enumerate_directories(DEFAULT_SEARCH_PATTERN, SearchOption::TopDirectoryOnly)?
            .collect()
    }

    fn get_files(&self) -> FsResult<Vec<Box<dyn FileInfo>>> {
        self.enumerate_files(DEFAULT_SEARCH_PATTERN, SearchOption::TopDirectoryOnly)?
            .collect()
    }

    fn get_file_system_infos(&self) -> FsResult<Vec<FileSystemEntry>> {
        self.enumerate_file_system_infos(DEFAULT_SEARCH_PATTERN, SearchOption::TopDirectoryOnly)?
            .collect()
    }

    fn enumerate_directories(
        &self,
        pattern: &str,
        option: SearchOption,
    ) -> FsResult<EntryIter<Box<dyn DirectoryInfo>>> {
        let walker = self.walk(pattern, Wanted::Directories, option)?;
        Ok(Box::new(walker.map(|r| r.map(|f| bind_directory(f.path)))))
    }

    fn enumerate_files(
        &self,
        pattern: &str,
        option: SearchOption,
    ) -> FsResult<EntryIter<Box<dyn FileInfo>>> {
        let walker = self.walk(pattern, Wanted::Files, option)?;
        Ok(Box::new(walker.map(|r| r.map(|f| bind_file(f.path)))))
    }

    fn enumerate_file_system_infos(
        &self,
        pattern: &str,
        option: SearchOption,
    ) -> FsResult<EntryIter<FileSystemEntry>> {
        let walker = self.walk(pattern, Wanted::Both, option)?;
        Ok(Box::new(walker.map(|r| r.map(bind_entry))))
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
